//! GitHub flavored markdown to Slack `mrkdwn` conversion.
//!
//! Release notes are first rendered by the GitHub markdown API and converted
//! back from HTML, which normalises GitHub-only syntax. When rendering fails
//! the raw markdown goes through a set of regex rewrites instead.

mod html;
mod rules;

use crate::http;
use thiserror::Error;

pub const PLACEHOLDER: &str = "No release notes provided.";

/// Longest source accepted by the render endpoint.
pub const SOURCE_LIMIT: usize = 4000;
/// Longest text Slack accepts in a section block, with headroom.
pub const OUTPUT_LIMIT: usize = 2900;

pub trait MarkdownRenderer {
    /// Renders markdown to HTML.
    async fn render(&self, markdown: &str) -> Result<String, http::Error>;
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("markdown rendering failed: {0}")]
    Render(#[from] http::Error),
    #[error("html conversion failed: {0}")]
    Html(#[from] std::io::Error),
}

/// Converts release notes into Slack markup. Never fails: any rendering
/// problem degrades to the local conversion.
pub async fn convert<R>(renderer: &R, source: Option<&str>) -> String
where
    R: MarkdownRenderer,
{
    let source = match source {
        Some(source) if !source.trim().is_empty() => source.replace("\r\n", "\n"),
        _ => return PLACEHOLDER.to_owned(),
    };

    let source = rules::truncate(&source, SOURCE_LIMIT);

    let converted = match render(renderer, &source).await {
        Ok(converted) => converted,
        Err(err) => {
            log::warn!("{}. Using simple conversion", err);
            fallback(&source)
        }
    };

    let converted = rules::truncate(&converted, OUTPUT_LIMIT);

    if converted.trim().is_empty() {
        PLACEHOLDER.to_owned()
    } else {
        converted
    }
}

async fn render<R>(renderer: &R, source: &str) -> Result<String, Error>
where
    R: MarkdownRenderer,
{
    let html = renderer.render(source).await?;
    let markdown = html::to_markdown(&html)?;

    let markup = rules::rewrite_links(&markdown);
    Ok(rules::rewrite_headings(&markup))
}

fn fallback(source: &str) -> String {
    let text = rules::rewrite_links(source);
    let text = rules::rewrite_headings(&text);
    let text = rules::strip_fence_languages(&text);
    let text = rules::unescape_entities(&text);

    rules::space_list_items(&text)
}
