//! Persistence layer - the single on-disk JSON document and its data model.

pub mod document;
pub mod file;

pub use document::{AccountRecord, CharacterSnapshot, Document, UserRecord};
pub use file::UserStore;
