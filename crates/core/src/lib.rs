//! Functional core for the notes service.
//!
//! Pure data types, validation and decision logic. Nothing in this crate
//! performs I/O; the server crate supplies the store implementations and
//! drives the bootstrap state machine.

pub mod api;
pub mod note;
pub mod serde;
pub mod storage;
pub mod table;
