pub mod config;
pub mod error;
pub mod toolkit;

pub use config::TextConfig;
pub use error::TextError;
pub use toolkit::Toolkit;
