pub mod analyze;
pub mod configure;
pub mod daemon;
pub mod eigenvalue;
pub mod grammar;
pub mod matula;
pub mod persona;
pub mod sequence;
pub mod trees;

use crate::config::Config;
use crate::utils::error::{AppError, AppResult, positive};

/// Use the command-line limit when given, otherwise the configured default.
pub(crate) fn resolve_limit(limit: Option<i64>, config: &Config) -> AppResult<u64> {
    match limit {
        Some(value) => positive(value, "limit"),
        None => Ok(config.general.projection_limit),
    }
}

/// Full partition enumeration grows as p(n); refuse indices past the configured limit.
pub(crate) fn ensure_enumerable(index: u64, config: &Config) -> AppResult<()> {
    if index > config.general.enumeration_limit {
        return Err(AppError::invalid(format!(
            "index {} exceeds enumeration_limit {}; raise general.enumeration_limit to enumerate its partitions",
            index, config.general.enumeration_limit
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_limit() {
        let config = Config::default();
        assert_eq!(resolve_limit(None, &config), Ok(100));
        assert_eq!(resolve_limit(Some(30), &config), Ok(30));
        assert!(resolve_limit(Some(0), &config).is_err());
    }

    #[test]
    fn test_ensure_enumerable() {
        let mut config = Config::default();
        config.general.enumeration_limit = 10;
        assert!(ensure_enumerable(10, &config).is_ok());
        assert!(matches!(ensure_enumerable(11, &config), Err(AppError::InvalidArgument(_))));
    }
}
