//! Domain types for the habit log.
//!
//! - `LogTime`: when an entry was recorded, ordered and serialized for the API
//! - `DailyTarget`: the user's daily goal and its JSON validation

pub mod primitives;

pub use primitives::{DailyTarget, InvalidTarget, LogTime};
