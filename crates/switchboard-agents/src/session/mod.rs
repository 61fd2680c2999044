//! Expiring in-memory chat sessions.
//!
//! A session is created explicitly, refreshed on every successful access,
//! and evicted the first time it is touched after sitting idle longer than
//! the expiration window. An evicted id behaves exactly like one that never
//! existed, apart from the reason string.

mod store;
mod types;

#[cfg(test)]
mod tests;

pub use store::{SessionStore, DEFAULT_EXPIRATION};
