//! Requests for server-rendered roadmap images
//!
//! The server renders the roadmap of a page at `{page}/{format}?width={w}`.
//! This module builds those URLs and post-processes the returned SVG.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::{DashboardError, DashboardResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Svg,
    Png,
    Jpg,
    Gif,
    Pdf,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 5] = [
        ImageFormat::Svg,
        ImageFormat::Png,
        ImageFormat::Jpg,
        ImageFormat::Gif,
        ImageFormat::Pdf,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Gif => "gif",
            ImageFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImageFormat {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageFormat::ALL
            .into_iter()
            .find(|f| f.extension().eq_ignore_ascii_case(s))
            .ok_or_else(|| DashboardError::UnknownFormat(s.to_string()))
    }
}

/// Limits applied to requested image widths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    pub min_width: u32,
    pub max_width: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            min_width: 800,
            max_width: 30000,
        }
    }
}

impl RenderConfig {
    pub fn clamp_width(&self, width: u32) -> u32 {
        width.max(self.min_width).min(self.max_width)
    }

    /// Width to render at: the custom width when enabled, else the container's
    pub fn select_width(&self, container_width: u32, custom_width: Option<u32>) -> u32 {
        self.clamp_width(custom_width.unwrap_or(container_width))
    }
}

/// Render endpoints for one roadmap page at one width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    base: String,
    width: u32,
}

impl RenderRequest {
    /// Build from the page's `location.origin` and `location.pathname`
    pub fn new(origin: &str, pathname: &str, width: u32, config: &RenderConfig) -> Self {
        let base = format!("{}{}", origin.trim_end_matches('/'), pathname.trim_end_matches('/'));

        Self {
            base,
            width: config.clamp_width(width),
        }
    }

    /// Build from a full page URL (query and fragment are ignored)
    pub fn from_page_url(page: &str, width: u32, config: &RenderConfig) -> DashboardResult<Self> {
        let url = Url::parse(page).map_err(|e| DashboardError::InvalidLocation(e.to_string()))?;
        if !url.origin().is_tuple() {
            return Err(DashboardError::InvalidLocation(page.to_string()));
        }

        Ok(Self::new(
            &url.origin().ascii_serialization(),
            url.path(),
            width,
            config,
        ))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn url(&self, format: ImageFormat) -> String {
        format!("{}/{}?width={}", self.base, format.extension(), self.width)
    }

    pub fn urls(&self) -> Vec<(ImageFormat, String)> {
        let urls: Vec<_> = ImageFormat::ALL
            .into_iter()
            .map(|f| (f, self.url(f)))
            .collect();

        debug!(base = %self.base, width = self.width, "Built render URLs");
        urls
    }
}

/// Drop millimetre units from SVG attribute values so the image scales
/// to its container
pub fn fix_svg_units(markup: &str) -> String {
    markup.replace("mm\"", "\"")
}

/// Append an external-link glyph per URL to a project title in the SVG
///
/// Relative URLs are resolved against `base_url`.
pub fn annotate_project_links(title_html: &str, urls: &[String], base_url: &str) -> String {
    let mut html = title_html.to_string();

    for url in urls {
        let href = if url.starts_with("http") {
            url.clone()
        } else {
            format!("{}{}", base_url, url)
        };

        html.push_str(&format!(
            "&nbsp;<a href=\"{}\" target=\"_blank\" style=\"text-decoration: none;\">&#x2B08;</a>",
            href
        ));
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_is_clamped() {
        let config = RenderConfig::default();
        assert_eq!(config.clamp_width(200), 800);
        assert_eq!(config.clamp_width(1200), 1200);
        assert_eq!(config.clamp_width(50_000), 30_000);

        assert_eq!(config.select_width(1024, None), 1024);
        assert_eq!(config.select_width(1024, Some(100)), 800);
    }

    #[test]
    fn test_render_urls() {
        let request = RenderRequest::new(
            "https://roadmapper.example",
            "/r/abc",
            500,
            &RenderConfig::default(),
        );

        assert_eq!(
            request.url(ImageFormat::Svg),
            "https://roadmapper.example/r/abc/svg?width=800"
        );

        let urls = request.urls();
        assert_eq!(urls.len(), 5);
        assert_eq!(urls[4].1, "https://roadmapper.example/r/abc/pdf?width=800");
    }

    #[test]
    fn test_from_page_url() {
        let request = RenderRequest::from_page_url(
            "http://localhost:1323/r/abc?ts=1#top",
            1000,
            &RenderConfig::default(),
        )
        .unwrap();

        assert_eq!(
            request.url(ImageFormat::Png),
            "http://localhost:1323/r/abc/png?width=1000"
        );

        assert!(RenderRequest::from_page_url("not a url", 1000, &RenderConfig::default()).is_err());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("PNG".parse::<ImageFormat>().unwrap(), ImageFormat::Png);
        assert!(matches!(
            "bmp".parse::<ImageFormat>(),
            Err(DashboardError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_fix_svg_units() {
        assert_eq!(
            fix_svg_units(r#"<svg width="210mm" height="297mm">"#),
            r#"<svg width="210" height="297">"#
        );
    }

    #[test]
    fn test_annotate_project_links() {
        let html = annotate_project_links(
            "Launch",
            &["https://example.com/a".to_string(), "/tickets/1".to_string()],
            "https://tracker.example",
        );

        assert!(html.starts_with("Launch&nbsp;<a href=\"https://example.com/a\""));
        assert!(html.contains("href=\"https://tracker.example/tickets/1\""));
        assert_eq!(html.matches("&#x2B08;").count(), 2);
    }
}
