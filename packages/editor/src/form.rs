//! Form fields edited next to the outline

use serde::{Deserialize, Serialize};

use crate::example::{EXAMPLE_BASE_URL, EXAMPLE_DATE_FORMAT, EXAMPLE_TITLE};

/// Title, date format and link base URL of a roadmap
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormFields {
    pub title: String,

    /// Go reference-date layout, e.g. `2006-01-02`
    pub date_format: String,

    /// Prefix for relative task links
    pub base_url: String,
}

impl FormFields {
    pub fn new(
        title: impl Into<String>,
        date_format: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            date_format: date_format.into(),
            base_url: base_url.into(),
        }
    }

    /// Fields filled in by the "load example" button
    pub fn example() -> Self {
        Self::new(EXAMPLE_TITLE, EXAMPLE_DATE_FORMAT, EXAMPLE_BASE_URL)
    }

    /// Fields after a reset: the title is kept, the rest restored
    pub fn reset_to(&self, initial: &FormFields) -> Self {
        Self {
            title: self.title.clone(),
            date_format: initial.date_format.clone(),
            base_url: initial.base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_fields() {
        let fields = FormFields::example();
        assert_eq!(fields.title, "How To Start a Startup");
        assert_eq!(fields.date_format, "2006-01-02");
        assert_eq!(fields.base_url, "https://example.com/foo");
    }

    #[test]
    fn test_reset_keeps_title() {
        let initial = FormFields::new("Q1", "02.01.2006", "");
        let reset = FormFields::example().reset_to(&initial);

        assert_eq!(reset.title, "How To Start a Startup");
        assert_eq!(reset.date_format, "02.01.2006");
        assert_eq!(reset.base_url, "");
    }

    #[test]
    fn test_deserialize_partial() {
        let fields: FormFields = serde_json::from_str(r#"{ "baseUrl": "https://x" }"#).unwrap();
        assert_eq!(fields.base_url, "https://x");
        assert_eq!(fields.title, "");
    }
}
