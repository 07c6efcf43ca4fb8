use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    pub id: Option<i64>,
    pub title: Arc<str>,
    pub content: Arc<str>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Note {
    pub fn new(id: Option<i64>, title: Arc<str>, content: Arc<str>) -> Self {
        Self {
            id,
            title,
            content,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn validate_title(title: &str) -> Result<(), String> {
        if title.trim().is_empty() {
            return Err("Note title cannot be empty".to_string());
        }

        if title.len() > 200 {
            return Err("Note title cannot exceed 200 characters".to_string());
        }

        Ok(())
    }

    pub fn validate_content(content: &str) -> Result<(), String> {
        if content.len() > 10_000 {
            return Err("Note content cannot exceed 10000 characters".to_string());
        }

        Ok(())
    }
}
