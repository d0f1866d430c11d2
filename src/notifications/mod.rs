//! Local in-memory notification queue.
//!
//! Authentication outcomes and registration results are surfaced here so
//! any part of the portal can observe them.

pub mod queue;

pub use queue::NotificationQueue;
