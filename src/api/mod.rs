//! Quiz repository client.
//!
//! CRUD access to the remote quiz API over HTTP. Calls are spawned as
//! independent tasks; results come back to the UI loop as [`ApiEvent`]s.

mod client;
mod events;

pub use client::{ApiError, QuizApi};
pub use events::ApiEvent;
