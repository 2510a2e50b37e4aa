use crate::models::Quiz;

use super::ApiError;

/// Outcome of one repository call, delivered to the UI loop over a channel.
#[derive(Debug)]
pub enum ApiEvent {
    /// `list()` finished.
    Listed(Result<Vec<Quiz>, ApiError>),
    /// `create()` finished; carries the server-assigned document.
    Created(Result<Quiz, ApiError>),
    /// `update()` finished.
    Updated(Result<Quiz, ApiError>),
    /// `delete()` finished; carries the deleted quiz's title for the notice.
    Deleted(Result<String, ApiError>),
}
