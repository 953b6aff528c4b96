use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use super::ids::{Clock, IdGenerator, SystemClock, UuidGenerator};
use crate::error::{SeedError, SeedResult};
use crate::models::{ConversationDefaults, NewMessage, Role};
use crate::store::{Store, insert_conversation, insert_message};

/// What to insert
///
/// Only `content` is required. Everything else falls back to the dev
/// placeholders: role `assistant`, no token count, and
/// [`ConversationDefaults`] for a newly created conversation.
#[derive(Debug, Clone, Default)]
pub struct SeedRequest {
    pub content: String,
    pub conversation_id: Option<String>,
    pub role: Role,
    pub tokens_used: Option<i64>,
    pub defaults: ConversationDefaults,
}

impl SeedRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into(), ..Self::default() }
    }

    pub fn in_conversation(mut self, conversation_id: impl Into<String>) -> Self {
        self.conversation_id = Some(conversation_id.into());
        self
    }
}

/// Identifiers written by a successful seed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedOutcome {
    pub conversation_id: String,
    pub message_id: String,
    /// Whether the conversation row was created by this call
    pub created_conversation: bool,
}

/// Inserts test conversations and messages into an existing database
pub struct Seeder<I = UuidGenerator, C = SystemClock> {
    db_path: PathBuf,
    ids: I,
    clock: C,
}

impl Seeder {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self::with_capabilities(db_path, UuidGenerator, SystemClock)
    }
}

impl<I: IdGenerator, C: Clock> Seeder<I, C> {
    pub fn with_capabilities(db_path: impl Into<PathBuf>, ids: I, clock: C) -> Self {
        Self { db_path: db_path.into(), ids, clock }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Ensure a conversation exists and append one message to it
    ///
    /// Opens the store, runs both inserts in a single transaction and closes
    /// the store again before returning, whether or not the inserts succeed.
    ///
    /// # Errors
    ///
    /// - [`SeedError::InvalidInput`] if the content is empty
    /// - [`SeedError::StoreUnavailable`] if the database file is missing or unreadable
    /// - [`SeedError::StoreWriteFailed`] if SQLite rejects an insert, including a
    ///   `conversation_id` that does not exist
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chat_seeder::{SeedRequest, Seeder};
    ///
    /// let mut seeder = Seeder::new("/home/alice/.local/share/com.linuxai.assistant/database.db");
    /// let outcome = seeder.seed(&SeedRequest::new("hello world"))?;
    /// println!("{} / {}", outcome.conversation_id, outcome.message_id);
    /// # Ok::<(), chat_seeder::SeedError>(())
    /// ```
    pub fn seed(&mut self, request: &SeedRequest) -> SeedResult<SeedOutcome> {
        if request.content.is_empty() {
            return Err(SeedError::InvalidInput("no message content provided".to_string()));
        }

        let mut store = Store::open(&self.db_path)?;
        let now = self.clock.now();

        let tx = store.conn_mut().transaction()?;

        // An empty id counts as absent
        let existing = request.conversation_id.as_deref().filter(|id| !id.is_empty());
        let (conversation_id, created_conversation) = match existing {
            Some(id) => (id.to_string(), false),
            None => {
                let new_conv = request.defaults.to_new_conversation(self.ids.next_id(), now);
                insert_conversation(&tx, &new_conv)?;
                (new_conv.id, true)
            }
        };

        let message = NewMessage {
            id: self.ids.next_id(),
            conversation_id: conversation_id.clone(),
            role: request.role,
            content: request.content.clone(),
            timestamp: now,
            tokens_used: request.tokens_used,
        };
        insert_message(&tx, &message)?;

        // Dropping an uncommitted transaction rolls it back, so an early
        // return above leaves no conversation row behind
        tx.commit()?;
        debug!(path = %self.db_path.display(), "committed seed transaction");

        info!(
            conversation_id = %conversation_id,
            message_id = %message.id,
            created_conversation,
            "seeded message"
        );

        Ok(SeedOutcome { conversation_id, message_id: message.id, created_conversation })
    }
}
