//! Geometry of the timeline drawn in the table header
//!
//! The drawing itself is done by a vector library on the page; this only
//! decides where the lines and labels go.

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const TIMELINE_HEIGHT: f64 = 75.0;

const BASELINE_Y: f64 = 40.0;
const TICK_Y: f64 = 35.0;
const TICK_LENGTH: f64 = 10.0;
const LABEL_Y: f64 = 10.0;
const TODAY_LABEL_Y: f64 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub anchor: Anchor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineGeometry {
    pub width: f64,
    pub height: f64,
    pub baseline: Line,
    pub start_tick: Line,
    pub end_tick: Line,
    pub start_label: Label,
    pub end_label: Label,

    /// Marker for the current day, only when it falls inside the roadmap
    pub today: Option<(Line, Label)>,
}

impl TimelineGeometry {
    pub fn compute(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        today: DateTime<Utc>,
        width: f64,
    ) -> Self {
        let tick = |x: f64| Line {
            x1: x,
            y1: TICK_Y,
            x2: x,
            y2: TICK_Y + TICK_LENGTH,
        };

        let today_marker = if start < today && today < end {
            let full = (end - start).num_milliseconds() as f64;
            let x = (today - start).num_milliseconds() as f64 / full * width;
            Some((
                Line {
                    x1: x,
                    y1: 0.0,
                    x2: x,
                    y2: TIMELINE_HEIGHT,
                },
                Label {
                    text: format_date(today),
                    x,
                    y: TODAY_LABEL_Y,
                    anchor: Anchor::Middle,
                },
            ))
        } else {
            None
        };

        Self {
            width,
            height: TIMELINE_HEIGHT,
            baseline: Line {
                x1: 0.0,
                y1: BASELINE_Y,
                x2: width,
                y2: BASELINE_Y,
            },
            start_tick: tick(10.0),
            end_tick: tick(width - 10.0),
            start_label: Label {
                text: format_date(start),
                x: 5.0,
                y: LABEL_Y,
                anchor: Anchor::Start,
            },
            end_label: Label {
                text: format_date(end),
                x: width - 5.0,
                y: LABEL_Y,
                anchor: Anchor::End,
            },
            today: today_marker,
        }
    }
}

fn format_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}
