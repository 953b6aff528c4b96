use serde::Serialize;

pub const DEFAULT_TITLE: &str = "Dev Test Conversation";
pub const DEFAULT_MODEL: &str = "gpt-test";
pub const DEFAULT_PROVIDER: &str = "local";

/// A row of the `conversations` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversation {
    pub id: String,
    pub title: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub model: String,
    pub provider: String,
    pub system_prompt: Option<String>,
}

/// Insert payload for a conversation; both timestamps are set to `now`
#[derive(Debug, Clone)]
pub struct NewConversation {
    pub id: String,
    pub title: String,
    pub model: String,
    pub provider: String,
    pub system_prompt: Option<String>,
    pub now: i64,
}

/// Placeholder metadata applied to conversations created by the seeder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationDefaults {
    pub title: String,
    pub model: String,
    pub provider: String,
    pub system_prompt: Option<String>,
}

impl Default for ConversationDefaults {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            provider: DEFAULT_PROVIDER.to_string(),
            system_prompt: None,
        }
    }
}

impl ConversationDefaults {
    /// Build the insert payload for a fresh conversation
    pub fn to_new_conversation(&self, id: String, now: i64) -> NewConversation {
        NewConversation {
            id,
            title: self.title.clone(),
            model: self.model.clone(),
            provider: self.provider.clone(),
            system_prompt: self.system_prompt.clone(),
            now,
        }
    }
}
