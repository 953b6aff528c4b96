use std::path::Path;

use rusqlite::types::Type;
use rusqlite::{Connection, OpenFlags, OptionalExtension, Row, params};
use tracing::debug;

use crate::error::{SeedError, SeedResult};
use crate::models::{Conversation, Message, NewConversation, NewMessage, Role};

/// Handle to an existing database file
///
/// The connection is closed when the `Store` is dropped.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open an existing database for reading and writing
    ///
    /// Foreign keys are switched on so messages cannot reference a
    /// conversation that does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::StoreUnavailable`] if:
    /// - The path does not exist or is not a regular file
    /// - SQLite cannot open the file or it is not a database
    pub fn open(path: &Path) -> SeedResult<Self> {
        let unavailable =
            |reason: String| SeedError::StoreUnavailable { path: path.to_path_buf(), reason };

        if !path.exists() {
            return Err(unavailable("file does not exist".to_string()));
        }
        if !path.is_file() {
            return Err(unavailable("not a regular file".to_string()));
        }

        // No SQLITE_OPEN_CREATE: a vanished file must not be recreated empty
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn =
            Connection::open_with_flags(path, flags).map_err(|e| unavailable(e.to_string()))?;

        conn.pragma_update(None, "foreign_keys", true).map_err(|e| unavailable(e.to_string()))?;

        // Forces SQLite to read the header so garbage files fail here
        conn.query_row("SELECT count(*) FROM sqlite_master", [], |row| row.get::<_, i64>(0))
            .map_err(|e| unavailable(e.to_string()))?;

        debug!(path = %path.display(), "opened store");
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn conn_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    /// Look up a conversation by id
    pub fn find_conversation(&self, id: &str) -> SeedResult<Option<Conversation>> {
        let conversation = self
            .conn
            .query_row(
                "SELECT id, title, created_at, updated_at, model, provider, system_prompt
                 FROM conversations WHERE id = ?1",
                params![id],
                conversation_from_row,
            )
            .optional()?;
        Ok(conversation)
    }

    /// Look up a message by id
    pub fn find_message(&self, id: &str) -> SeedResult<Option<Message>> {
        let message = self
            .conn
            .query_row(
                "SELECT id, conversation_id, role, content, timestamp, tokens_used
                 FROM messages WHERE id = ?1",
                params![id],
                message_from_row,
            )
            .optional()?;
        Ok(message)
    }

    /// All messages of a conversation, oldest first
    pub fn messages_for(&self, conversation_id: &str) -> SeedResult<Vec<Message>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, conversation_id, role, content, timestamp, tokens_used
             FROM messages WHERE conversation_id = ?1
             ORDER BY timestamp ASC, rowid ASC",
        )?;
        let messages =
            stmt.query_map(params![conversation_id], message_from_row)?.collect::<Result<_, _>>()?;
        Ok(messages)
    }

    pub fn count_conversations(&self) -> SeedResult<i64> {
        Ok(self.conn.query_row("SELECT count(*) FROM conversations", [], |row| row.get(0))?)
    }

    pub fn count_messages(&self) -> SeedResult<i64> {
        Ok(self.conn.query_row("SELECT count(*) FROM messages", [], |row| row.get(0))?)
    }
}

/// Insert a conversation row
///
/// Takes a plain connection so it can run inside a transaction.
pub fn insert_conversation(conn: &Connection, conv: &NewConversation) -> SeedResult<()> {
    conn.execute(
        "INSERT INTO conversations
             (id, title, created_at, updated_at, model, provider, system_prompt)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            conv.id,
            conv.title,
            conv.now,
            conv.now,
            conv.model,
            conv.provider,
            conv.system_prompt
        ],
    )?;
    debug!(conversation_id = %conv.id, "inserted conversation");
    Ok(())
}

/// Insert a message row
pub fn insert_message(conn: &Connection, msg: &NewMessage) -> SeedResult<()> {
    conn.execute(
        "INSERT INTO messages (id, conversation_id, role, content, timestamp, tokens_used)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            msg.id,
            msg.conversation_id,
            msg.role.as_str(),
            msg.content,
            msg.timestamp,
            msg.tokens_used
        ],
    )?;
    debug!(message_id = %msg.id, conversation_id = %msg.conversation_id, "inserted message");
    Ok(())
}

fn conversation_from_row(row: &Row<'_>) -> rusqlite::Result<Conversation> {
    Ok(Conversation {
        id: row.get(0)?,
        title: row.get(1)?,
        created_at: row.get(2)?,
        updated_at: row.get(3)?,
        model: row.get(4)?,
        provider: row.get(5)?,
        system_prompt: row.get(6)?,
    })
}

fn message_from_row(row: &Row<'_>) -> rusqlite::Result<Message> {
    let role: String = row.get(2)?;
    let role = role
        .parse::<Role>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, e.into()))?;

    Ok(Message {
        id: row.get(0)?,
        conversation_id: row.get(1)?,
        role,
        content: row.get(3)?,
        timestamp: row.get(4)?,
        tokens_used: row.get(5)?,
    })
}
