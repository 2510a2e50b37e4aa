use serde::{Deserialize, Serialize};

/// A single multiple-choice question as stored by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
}

/// A quiz document as returned by the server.
///
/// The server labels the quiz name `title` in some list responses and
/// `name` in others, so both are accepted on read; use [`Quiz::title`]
/// instead of touching the raw fields. Request bodies always send `title`
/// (see `QuizDraft`).
#[derive(Debug, Clone, Deserialize)]
pub struct Quiz {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<Question>,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

impl Quiz {
    /// The quiz name, whichever field the server put it in.
    pub fn title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("Untitled Quiz")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_uses_wire_field_names() {
        let json = r#"{"question":"2+2?","options":["3","4"],"correctAnswer":"4"}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.text, "2+2?");
        assert_eq!(q.correct_answer, "4");

        let back = serde_json::to_string(&q).unwrap();
        assert!(back.contains("\"question\":\"2+2?\""));
        assert!(back.contains("\"correctAnswer\":\"4\""));
    }

    #[test]
    fn quiz_reads_title_field() {
        let json = r#"{
            "_id": "abc123",
            "title": "Math",
            "description": "Numbers",
            "questions": [],
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z"
        }"#;
        let quiz: Quiz = serde_json::from_str(json).unwrap();
        assert_eq!(quiz.id, "abc123");
        assert_eq!(quiz.title(), "Math");
    }

    #[test]
    fn quiz_falls_back_to_name_field() {
        let json = r#"{"_id":"x","name":"Geo","questions":[]}"#;
        let quiz: Quiz = serde_json::from_str(json).unwrap();
        assert_eq!(quiz.title(), "Geo");
        assert_eq!(quiz.description, "");
    }

    #[test]
    fn quiz_without_any_name_is_untitled() {
        let json = r#"{"_id":"x","questions":[]}"#;
        let quiz: Quiz = serde_json::from_str(json).unwrap();
        assert_eq!(quiz.title(), "Untitled Quiz");
    }
}
