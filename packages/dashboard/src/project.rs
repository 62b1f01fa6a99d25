//! Project tree as delivered by the server
//!
//! ```json
//! {
//!   "Title": "Roadmap",
//!   "Dates": { "Start": "2020-01-01T00:00:00Z", "End": "2020-12-31T00:00:00Z" },
//!   "Percentage": 40,
//!   "URL": "",
//!   "Color": { "R": 40, "G": 120, "B": 200, "A": 255 },
//!   "Children": [ ... ]
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::DashboardResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Project {
    pub title: String,

    /// Unplanned projects have no dates
    #[serde(default)]
    pub dates: Option<Dates>,

    #[serde(default)]
    pub percentage: u8,

    #[serde(rename = "URL", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default)]
    pub color: Color,

    /// `null` for leaves
    #[serde(default)]
    pub children: Option<Vec<Project>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dates {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Dates {
    pub fn duration_ms(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    #[serde(rename = "R")]
    pub r: u8,
    #[serde(rename = "G")]
    pub g: u8,
    #[serde(rename = "B")]
    pub b: u8,
    #[serde(rename = "A")]
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 255,
        }
    }
}

impl Project {
    pub fn from_json(json: &str) -> DashboardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn children(&self) -> &[Project] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Link of the project, ignoring empty strings
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }

    /// Descendants in depth-first pre-order, with direct children at level 1
    pub fn walk(&self) -> Vec<(usize, &Project)> {
        let mut out = Vec::new();
        walk_children(self, 1, &mut out);
        out
    }
}

fn walk_children<'a>(project: &'a Project, level: usize, out: &mut Vec<(usize, &'a Project)>) {
    for child in project.children() {
        out.push((level, child));
        walk_children(child, level + 1, out);
    }
}
