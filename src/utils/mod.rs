pub mod error;
pub mod format;
pub mod output;

pub use error::{AppError, AppResult};
pub use output::{OutputStyle, print_json, print_success, print_warning};
