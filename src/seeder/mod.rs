//! Test-data seeding for the conversation/message store.
//!
//! [`Seeder::seed`] makes sure a conversation exists, creating one with
//! placeholder metadata when no id is given, then appends one message to it.
//! Identifier generation and the clock are injected through [`IdGenerator`]
//! and [`Clock`] so tests can pin both.

pub mod ids;
pub mod seed;

pub use ids::{Clock, IdGenerator, SystemClock, UuidGenerator};
pub use seed::{SeedOutcome, SeedRequest, Seeder};
