//! Project table rows
//!
//! Every descendant of the root project becomes one table row with a
//! progress bar positioned on the root's timeline. Widths and offsets are
//! percentages of the root's duration.

use serde::Serialize;
use tracing::debug;

use crate::project::{Color, Dates, Project};

const MS_PER_DAY: f64 = 86_400_000.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRow {
    pub title: String,
    pub level: usize,
    pub url: Option<String>,
    pub percentage: u8,

    /// Bar width as a share of the root duration
    pub width_pct: f64,

    /// Bar start as a share of the root duration
    pub offset_pct: f64,

    pub duration_days: f64,
    pub bar_color: String,
    pub tooltip: String,
}

/// Lay out the table rows for a root project
pub fn layout_rows(root: &Project) -> Vec<ProjectRow> {
    let rows: Vec<ProjectRow> = root
        .walk()
        .into_iter()
        .map(|(level, project)| layout_row(project, level, root.dates.as_ref()))
        .collect();

    debug!(rows = rows.len(), "Laid out project rows");
    rows
}

fn layout_row(project: &Project, level: usize, root: Option<&Dates>) -> ProjectRow {
    let (width_pct, offset_pct, duration_days, span) = match (project.dates, root) {
        (Some(dates), Some(root)) => {
            let full = root.duration_ms() as f64;
            let diff = dates.duration_ms() as f64;
            let offset = (dates.start - root.start).num_milliseconds() as f64;

            let (w, l) = if full > 0.0 {
                (diff / full * 100.0, offset / full * 100.0)
            } else {
                (0.0, 0.0)
            };
            (w, l, diff / MS_PER_DAY, Some(dates))
        }
        (Some(dates), None) => (0.0, 0.0, dates.duration_ms() as f64 / MS_PER_DAY, Some(dates)),
        _ => (0.0, 0.0, 0.0, None),
    };

    let tooltip = match span {
        Some(dates) => format!(
            "{}%, {} - {}, {} days",
            project.percentage,
            dates.start.format("%Y-%m-%d"),
            dates.end.format("%Y-%m-%d"),
            duration_days
        ),
        None => format!("{}%", project.percentage),
    };

    ProjectRow {
        title: project.title.clone(),
        level,
        url: project.link().map(str::to_string),
        percentage: project.percentage,
        width_pct,
        offset_pct,
        duration_days,
        bar_color: bar_color(project.color, project.percentage),
        tooltip,
    }
}

/// CSS color of a progress bar; finished projects are drawn half transparent
pub fn bar_color(color: Color, percentage: u8) -> String {
    let alpha = if percentage == 100 {
        0.5
    } else {
        color.a as f64 / 255.0
    };

    format!("rgba({}, {}, {}, {})", color.r, color.g, color.b, alpha)
}
