use chrono::Utc;
use uuid::Uuid;

/// Source of unique row identifiers
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs in hyphenated form, as the chat application uses
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Source of the current time in unix seconds
pub trait Clock {
    fn now(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}
