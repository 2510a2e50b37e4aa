use reqwest::{Client, StatusCode};

use crate::models::{Quiz, QuizDraft};

/// Error type for repository calls.
///
/// No retries are attempted; every failure is reported once and local
/// state is left unchanged so the user may retry.
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused, timeout).
    Network(reqwest::Error),
    /// The server answered with a non-success status.
    Server { status: StatusCode },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "Network error: {}", e),
            ApiError::Server { status } => write!(f, "Server error: {}", status),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Network(e) => Some(e),
            ApiError::Server { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err)
    }
}

/// HTTP client for the quiz CRUD API.
///
/// Cheap to clone; clones share the underlying connection pool, so one
/// handle can be captured per spawned request task.
///
/// Wire note: request bodies carry the quiz name under the `title` key on
/// both POST and PATCH, while list responses may label the same field
/// `title` or `name` depending on the server version (see
/// [`crate::models::Quiz`]).
#[derive(Debug, Clone)]
pub struct QuizApi {
    base_url: String,
    http: Client,
}

impl QuizApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: Client::new(),
        }
    }

    fn quizzes_url(&self) -> String {
        format!("{}/quizzes", self.base_url)
    }

    fn quiz_url(&self, id: &str) -> String {
        format!("{}/quizzes/{}", self.base_url, id)
    }

    /// Fetch all quizzes.
    pub async fn list(&self) -> Result<Vec<Quiz>, ApiError> {
        let response = self.http.get(self.quizzes_url()).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Server {
                status: response.status(),
            });
        }
        Ok(response.json().await?)
    }

    /// Create a quiz; the server assigns the id and timestamps.
    pub async fn create(&self, draft: &QuizDraft) -> Result<Quiz, ApiError> {
        let response = self
            .http
            .post(self.quizzes_url())
            .json(draft)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Server {
                status: response.status(),
            });
        }
        Ok(response.json().await?)
    }

    /// Replace a quiz's title, description and questions wholesale.
    pub async fn update(&self, id: &str, draft: &QuizDraft) -> Result<Quiz, ApiError> {
        let response = self
            .http
            .patch(self.quiz_url(id))
            .json(draft)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Server {
                status: response.status(),
            });
        }
        Ok(response.json().await?)
    }

    /// Delete a quiz. An already-deleted quiz (404) counts as success.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = self.http.delete(self.quiz_url(id)).send().await?;
        let status = response.status();
        if status.is_success() || status == StatusCode::NOT_FOUND {
            Ok(())
        } else {
            Err(ApiError::Server { status })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let api = QuizApi::new("http://localhost:5000/api/");
        assert_eq!(api.quizzes_url(), "http://localhost:5000/api/quizzes");
        assert_eq!(api.quiz_url("abc"), "http://localhost:5000/api/quizzes/abc");
    }

    #[test]
    fn urls_embed_the_quiz_id() {
        let api = QuizApi::new("http://example.com/api");
        assert_eq!(
            api.quiz_url("64f0c2"),
            "http://example.com/api/quizzes/64f0c2"
        );
    }
}
