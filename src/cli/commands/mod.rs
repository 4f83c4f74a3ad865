//! Command implementations

mod batch;
mod check_digit;
mod config;
mod types;
mod validate;

pub use batch::batch;
pub use check_digit::check_digit;
pub use config::config;
pub use types::types;
pub use validate::validate;
