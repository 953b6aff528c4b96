//! Chat Seeder - insert test conversations into a local chat assistant database
//!
//! A developer utility for manual testing of a desktop chat application that
//! keeps its history in SQLite. It supports:
//!
//! - Creating a conversation with placeholder metadata when none is given
//! - Appending one message to a new or existing conversation
//! - Running both inserts in a single transaction against an existing database
//! - Resolving the application's default database location
//!
//! The database schema is owned by the application; this crate never creates
//! the file or its tables.
//!
//! # Example
//!
//! ```no_run
//! use chat_seeder::{SeedRequest, Seeder};
//!
//! let mut seeder = Seeder::new("/home/alice/.local/share/com.linuxai.assistant/database.db");
//! let first = seeder.seed(&SeedRequest::new("hello world"))?;
//! let reply = SeedRequest::new("follow-up").in_conversation(first.conversation_id);
//! seeder.seed(&reply)?;
//! # Ok::<(), chat_seeder::SeedError>(())
//! ```

pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod seeder;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use error::{SeedError, SeedResult};
pub use models::{Conversation, ConversationDefaults, Message, Role};
pub use seeder::{Clock, IdGenerator, SeedOutcome, SeedRequest, Seeder};
pub use store::Store;
pub use utils::{default_store_path, format_path_with_tilde};
