//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rusqlite::{Connection, params};
use tempfile::TempDir;

/// Tables as the chat application creates them, including columns this
/// crate never writes
pub const APP_SCHEMA: &str = "
    CREATE TABLE conversations (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL,
        model TEXT NOT NULL,
        provider TEXT NOT NULL,
        system_prompt TEXT,
        deleted INTEGER NOT NULL DEFAULT 0,
        deleted_at INTEGER
    );
    CREATE TABLE messages (
        id TEXT PRIMARY KEY,
        conversation_id TEXT NOT NULL,
        role TEXT NOT NULL CHECK(role IN ('user', 'assistant', 'system')),
        content TEXT NOT NULL,
        timestamp INTEGER NOT NULL,
        tokens_used INTEGER,
        deleted INTEGER NOT NULL DEFAULT 0,
        deleted_at INTEGER,
        FOREIGN KEY (conversation_id) REFERENCES conversations(id) ON DELETE CASCADE
    );
    CREATE INDEX idx_messages_conversation ON messages(conversation_id, timestamp);";

/// Builder for a temp directory holding an application database
pub struct StoreBuilder {
    temp_dir: TempDir,
    schema: Option<String>,
    conversations: Vec<(String, String)>,
}

impl StoreBuilder {
    /// Create a builder that will write the full application schema
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, schema: Some(APP_SCHEMA.to_string()), conversations: Vec::new() }
    }

    /// Use a custom schema instead of the application one
    pub fn with_schema(mut self, schema: &str) -> Self {
        self.schema = Some(schema.to_string());
        self
    }

    /// Create the database file with no tables at all
    pub fn without_schema(mut self) -> Self {
        self.schema = None;
        self
    }

    /// Pre-populate a conversation row
    pub fn with_conversation(mut self, id: &str, title: &str) -> Self {
        self.conversations.push((id.to_string(), title.to_string()));
        self
    }

    /// Write the database and return the fixture
    pub fn build(self) -> TestStore {
        let path = self.temp_dir.path().join("database.db");
        let conn = Connection::open(&path).expect("Failed to create database");
        if let Some(schema) = &self.schema {
            conn.execute_batch(schema).expect("Failed to create schema");
        }
        for (id, title) in &self.conversations {
            conn.execute(
                "INSERT INTO conversations (id, title, created_at, updated_at, model, provider)
                 VALUES (?1, ?2, 100, 100, 'gpt-4o', 'openai')",
                params![id, title],
            )
            .expect("Failed to insert conversation");
        }
        TestStore { temp_dir: self.temp_dir, path }
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A database file that lives as long as this value
pub struct TestStore {
    temp_dir: TempDir,
    path: PathBuf,
}

impl TestStore {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Count rows in a table with a fresh connection
    pub fn count(&self, table: &str) -> i64 {
        let conn = Connection::open(&self.path).expect("Failed to open database");
        conn.query_row(&format!("SELECT count(*) FROM {}", table), [], |row| row.get(0))
            .expect("Failed to count rows")
    }

    /// Read a single text column of one row
    pub fn text(&self, table: &str, column: &str, id: &str) -> Option<String> {
        let conn = Connection::open(&self.path).expect("Failed to open database");
        conn.query_row(
            &format!("SELECT {} FROM {} WHERE id = ?1", column, table),
            params![id],
            |row| row.get(0),
        )
        .ok()
    }
}

/// Pull `(message_id, conversation_id)` out of the CLI's success line
pub fn parse_inserted_line(stdout: &str) -> (String, String) {
    let line = stdout
        .lines()
        .find(|l| l.starts_with("Inserted message "))
        .expect("No 'Inserted message' line in output");
    let parts: Vec<&str> = line.split_whitespace().collect();
    // Inserted message <mid> into conversation <cid>
    (parts[2].to_string(), parts[5].to_string())
}
