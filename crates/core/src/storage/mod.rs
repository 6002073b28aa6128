mod error;
mod http_mapping;
mod traits;

pub use error::{Result, StoreError};
pub use http_mapping::note_error_to_status_code;
pub use traits::{NoteStore, TableAdmin};
