pub mod error;

// Archived complaint domain
pub mod archive_date;
pub mod complaint;
pub mod config;
pub mod date_format;
pub mod fixture;

pub use error::*;

pub use archive_date::*;
pub use complaint::*;
pub use config::*;
pub use date_format::*;
pub use fixture::*;
