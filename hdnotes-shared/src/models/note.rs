use serde::{Deserialize, Serialize};

/// Maximum number of title characters shown in the dashboard list view.
pub const DISPLAY_TITLE_LIMIT: usize = 50;

/// A note as returned by the backend.
///
/// The backend identifies notes with a Mongo-style `_id` string; the field is
/// renamed so the rest of the client can use a plain `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    /// Unique identifier for the note.
    #[serde(rename = "_id")]
    pub id: String,

    /// The note's title.
    pub title: String,

    /// The note's body text.
    pub content: String,
}

impl Note {
    /// Title as shown in the list view: truncated to
    /// [`DISPLAY_TITLE_LIMIT`] characters with a trailing ellipsis.
    ///
    /// The editor always receives the untruncated title.
    #[must_use]
    pub fn display_title(&self) -> String {
        let chars = self.title.chars().count();
        if chars > DISPLAY_TITLE_LIMIT {
            let truncated: String = self.title.chars().take(DISPLAY_TITLE_LIMIT).collect();
            format!("{truncated}...")
        } else {
            self.title.clone()
        }
    }
}

/// Body for creating or updating a note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotePayload {
    /// The note's title.
    pub title: String,

    /// The note's body text.
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note_with_title(title: &str) -> Note {
        Note {
            id: "64f1c0ffee".to_string(),
            title: title.to_string(),
            content: "body".to_string(),
        }
    }

    #[test]
    fn test_short_title_untouched() {
        let note = note_with_title("Groceries");
        assert_eq!(note.display_title(), "Groceries");
    }

    #[test]
    fn test_title_at_limit_untouched() {
        let note = note_with_title(&"a".repeat(50));
        assert_eq!(note.display_title(), "a".repeat(50));
    }

    #[test]
    fn test_long_title_truncated_with_ellipsis() {
        let note = note_with_title(&"a".repeat(51));
        let shown = note.display_title();
        assert_eq!(shown, format!("{}...", "a".repeat(50)));
        // The full title stays available for the editor.
        assert_eq!(note.title.len(), 51);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let note = note_with_title(&"é".repeat(60));
        let shown = note.display_title();
        assert_eq!(shown.chars().count(), 53); // 50 chars + "..."
    }

    #[test]
    fn test_note_deserializes_backend_id_field() {
        let json = r#"{"_id":"abc123","title":"t","content":"c"}"#;
        let note: Note = serde_json::from_str(json).expect("valid note json");
        assert_eq!(note.id, "abc123");
        assert_eq!(note.title, "t");
        assert_eq!(note.content, "c");
    }

    #[test]
    fn test_note_serializes_id_as_underscore_id() {
        let note = note_with_title("t");
        let json = serde_json::to_string(&note).expect("serializable");
        assert!(json.contains("\"_id\""));
        assert!(!json.contains("\"id\""));
    }

    #[test]
    fn test_note_payload_shape() {
        let payload = NotePayload {
            title: "A".to_string(),
            content: "B".to_string(),
        };
        let json = serde_json::to_string(&payload).expect("serializable");
        assert_eq!(json, r#"{"title":"A","content":"B"}"#);
    }
}
