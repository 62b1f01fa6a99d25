//! # Roadmap Dashboard
//!
//! Model behind the roadmap dashboard page: the project table with its
//! progress bars, subproject collapsing, the timeline header, URLs of the
//! server-rendered images and the privacy notice flag.
//!
//! Everything here is pure data; the page binds it to the DOM.
//!
//! ```rust
//! use roadmap_dashboard::{layout_rows, Project, RowVisibility};
//!
//! let root = Project::from_json(r#"{
//!     "Title": "Roadmap",
//!     "Children": [
//!         { "Title": "Plan", "Children": [ { "Title": "Research" } ] }
//!     ]
//! }"#).unwrap();
//!
//! let rows = layout_rows(&root);
//! let mut visibility = RowVisibility::new(rows.iter().map(|r| r.level).collect());
//! visibility.toggle(0);
//! assert_eq!(visibility.visible(), &[true, false]);
//! ```

mod errors;
mod privacy;
mod project;
mod render;
mod table;
mod timeline;
mod toggle;

pub use errors::{DashboardError, DashboardResult};
pub use privacy::{MemoryStore, PreferenceStore, PrivacyNotice, PRIVACY_POLICY_KEY};
pub use project::{Color, Dates, Project};
pub use render::{
    annotate_project_links, fix_svg_units, ImageFormat, RenderConfig, RenderRequest,
};
pub use table::{bar_color, layout_rows, ProjectRow};
pub use timeline::{Anchor, Label, Line, TimelineGeometry, TIMELINE_HEIGHT};
pub use toggle::RowVisibility;
