use anyhow::Result;
use clap::Args;
use colored::Colorize;
use roadmap_dashboard::RenderRequest;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct UrlsArgs {
    /// Roadmap page URL
    pub page: String,

    /// Image width in pixels, clamped to the configured limits
    #[arg(short, long)]
    pub width: Option<u32>,
}

/// Print the rendered image URL for every format
pub fn urls(args: UrlsArgs, config: &Config) -> Result<()> {
    let width = config.render.select_width(config.render.min_width, args.width);
    let request = RenderRequest::from_page_url(&args.page, width, &config.render)?;

    for (format, url) in request.urls() {
        println!("{}  {}", format!("{:>4}", format).bold(), url);
    }

    Ok(())
}
