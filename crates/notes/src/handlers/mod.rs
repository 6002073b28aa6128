pub mod error;
pub mod notes;
pub mod root;

pub use error::ApiError;
