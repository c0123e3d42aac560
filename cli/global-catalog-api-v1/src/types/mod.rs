//! Types used as operation parameters and responses.

pub mod error;
mod models;
mod options;

pub use error::ErrorResponse;
pub use models::*;
pub use options::*;
