pub mod config;
pub mod error;
pub mod types;

pub use config::NaviConfig;
pub use error::{NaviError, Result};
pub use types::*;
