//! Row models for the chat application's database.
//!
//! - [`Conversation`] / [`NewConversation`] - rows of the `conversations` table
//! - [`Message`] / [`NewMessage`] - rows of the `messages` table
//! - [`Role`] - the fixed set of message authors
//!
//! Timestamps are stored as unix seconds, matching what the application writes.

pub mod conversation;
pub mod message;

pub use conversation::{Conversation, ConversationDefaults, NewConversation};
pub use message::{Message, NewMessage, Role};
