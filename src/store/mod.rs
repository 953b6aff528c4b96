//! Access to the chat application's existing SQLite database
//!
//! The schema belongs to the application. This module only opens the file,
//! inserts rows, and reads them back. It never creates the file or its tables.

pub mod sqlite;

pub use sqlite::{Store, insert_conversation, insert_message};
