use crate::cli::{A000081Args, TowerArgs};
use crate::core::trees::{prime_tower, rooted_trees_count};
use crate::utils::OutputStyle;
use crate::utils::error::positive;
use anyhow::Result;

pub fn handle_tower_command(args: &TowerArgs) -> Result<()> {
    let seed = positive(args.seed, "seed")?;
    let tower = prime_tower(seed, args.depth)?;

    OutputStyle::print_header(&format!("Prime Tower from seed {} (depth {})", seed, args.depth));
    println!();
    for (i, value) in tower.iter().enumerate() {
        if i == 0 {
            println!("  {:>8}  {}", value, OutputStyle::muted("[seed]"));
        } else {
            println!(
                "  {:>8}  {}",
                OutputStyle::prime(&value.to_string()),
                OutputStyle::muted(&format!("[p_{}]", tower[i - 1]))
            );
        }
        if i + 1 < tower.len() {
            println!("     ↓");
        }
    }
    println!();
    println!("Tower: {:?}", tower);
    Ok(())
}

pub fn handle_a000081_command(args: &A000081Args) -> Result<()> {
    let count = positive(args.count, "count")?;

    OutputStyle::print_header("A000081: Rooted Unlabeled Trees");
    println!();
    println!("{:>3} | {}", OutputStyle::header("n"), OutputStyle::header("A000081(n)"));
    println!("{}", "-".repeat(20));
    for n in 1..=count {
        println!("{:>3} | {:>8}", n, rooted_trees_count(n)?);
    }
    Ok(())
}
