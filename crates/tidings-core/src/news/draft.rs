//! Raw request body and its validation.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

use crate::error::ValidationError;
use crate::news::NewsValue;

/// A news record as submitted by a client, before validation.
///
/// All fields default when absent, so a missing field reports the same
/// field-is-empty error as an explicitly empty one. Unknown fields in the
/// body (including a client-supplied `id`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewsDraft {
    pub author: String,
    pub title: String,
    pub content: String,
    pub summary: String,
    /// RFC 3339 timestamp, supplied by the caller.
    pub created_at: String,
    /// Source URL string.
    pub source: String,
    pub tags: Vec<String>,
}

impl NewsDraft {
    /// Validate the draft into a [`NewsValue`].
    ///
    /// Fields are checked sequentially and the first failure wins:
    /// author, title, content, summary, created_at, source, tags.
    /// On success the source holds the canonicalized URL string as
    /// reconstructed from the parse.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending field.
    pub fn validate(&self) -> Result<NewsValue, ValidationError> {
        if self.author.is_empty() {
            return Err(ValidationError::AuthorEmpty);
        }
        if self.title.is_empty() {
            return Err(ValidationError::TitleEmpty);
        }
        if self.content.is_empty() {
            return Err(ValidationError::ContentEmpty);
        }
        if self.summary.is_empty() {
            return Err(ValidationError::SummaryEmpty);
        }

        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|err| ValidationError::CreatedAtInvalid {
                value: self.created_at.clone(),
                reason: err.to_string(),
            })?
            .with_timezone(&Utc);

        if self.source.is_empty() {
            return Err(ValidationError::SourceEmpty);
        }
        let source = Url::parse(&self.source).map_err(|err| ValidationError::SourceInvalid {
            value: self.source.clone(),
            reason: err.to_string(),
        })?;

        if self.tags.is_empty() {
            return Err(ValidationError::TagsEmpty);
        }

        Ok(NewsValue {
            author: self.author.clone(),
            title: self.title.clone(),
            content: self.content.clone(),
            summary: self.summary.clone(),
            tags: self.tags.clone(),
            created_at,
            source: source.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn valid_draft() -> NewsDraft {
        NewsDraft {
            author: "test-author".to_string(),
            title: "test-title".to_string(),
            content: "test-content".to_string(),
            summary: "test-summary".to_string(),
            created_at: "2024-04-07T05:13:27+00:00".to_string(),
            source: "https://example.com/article".to_string(),
            tags: vec!["tag1".to_string(), "tag2".to_string()],
        }
    }

    #[test]
    fn author_is_checked_first() {
        // Everything is missing; the author error must win.
        let err = NewsDraft::default().validate().unwrap_err();
        assert_eq!(err, ValidationError::AuthorEmpty);
    }

    #[test]
    fn title_is_checked_second() {
        let draft = NewsDraft {
            author: "test-author".to_string(),
            ..NewsDraft::default()
        };
        assert_eq!(draft.validate().unwrap_err(), ValidationError::TitleEmpty);
    }

    #[test]
    fn content_is_checked_third() {
        let draft = NewsDraft {
            author: "test-author".to_string(),
            title: "test-title".to_string(),
            ..NewsDraft::default()
        };
        assert_eq!(draft.validate().unwrap_err(), ValidationError::ContentEmpty);
    }

    #[test]
    fn summary_is_checked_fourth() {
        let draft = NewsDraft {
            author: "test-author".to_string(),
            title: "test-title".to_string(),
            content: "test-content".to_string(),
            ..NewsDraft::default()
        };
        assert_eq!(draft.validate().unwrap_err(), ValidationError::SummaryEmpty);
    }

    #[test]
    fn invalid_time_names_the_literal() {
        let draft = NewsDraft {
            created_at: "invalid-time".to_string(),
            ..valid_draft()
        };
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("invalid-time"));
    }

    #[test]
    fn empty_source_is_rejected() {
        let draft = NewsDraft {
            source: String::new(),
            ..valid_draft()
        };
        assert_eq!(draft.validate().unwrap_err(), ValidationError::SourceEmpty);
    }

    #[test]
    fn unparseable_source_is_rejected() {
        let draft = NewsDraft {
            source: "not a url".to_string(),
            ..valid_draft()
        };
        let err = draft.validate().unwrap_err();
        assert!(matches!(err, ValidationError::SourceInvalid { .. }));
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn source_is_canonicalized() {
        let draft = NewsDraft {
            source: "https://example.com".to_string(),
            ..valid_draft()
        };
        let value = draft.validate().unwrap();
        assert_eq!(value.source, "https://example.com/");
    }

    #[test]
    fn empty_tags_are_rejected() {
        let draft = NewsDraft {
            tags: Vec::new(),
            ..valid_draft()
        };
        assert_eq!(draft.validate().unwrap_err(), ValidationError::TagsEmpty);
    }

    #[test]
    fn valid_draft_produces_value() {
        let value = valid_draft().validate().unwrap();

        assert_eq!(value.author, "test-author");
        assert_eq!(value.title, "test-title");
        assert_eq!(value.content, "test-content");
        assert_eq!(value.summary, "test-summary");
        assert_eq!(value.tags, vec!["tag1".to_string(), "tag2".to_string()]);
        assert_eq!(
            value.created_at,
            Utc.with_ymd_and_hms(2024, 4, 7, 5, 13, 27).unwrap()
        );
        assert_eq!(value.source, "https://example.com/article");
    }

    #[test]
    fn client_supplied_id_is_ignored() {
        let json = r#"{
            "id": "3b082d9d-1dc7-4d1f-907e-50d449a03d45",
            "author": "test-author",
            "title": "test-title",
            "content": "test-content",
            "summary": "test-summary",
            "created_at": "2024-04-07T05:13:27+00:00",
            "source": "https://example.com",
            "tags": ["tag1"]
        }"#;

        let draft: NewsDraft = serde_json::from_str(json).unwrap();
        assert!(draft.validate().is_ok());
    }
}
