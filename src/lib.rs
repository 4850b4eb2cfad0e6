//! A constrained Markdown converter and the static site built around it
pub mod block;
pub mod config;
pub mod error;
pub mod feed;
pub mod frontmatter;
pub mod inline;
pub mod post;
pub mod renderer;
pub mod segmenter;
pub mod site;
pub mod sitemap;
pub mod slug;
pub mod template;

pub use error::Error;

use renderer::HtmlRenderer;
use segmenter::Segmenter;

/// Convert a Markdown body into an HTML fragment.
///
/// Total over any input: malformed constructs degrade to paragraphs
/// instead of failing, and an unterminated code fence comes through as
/// an unterminated code region in the output.
pub fn render(markdown: &str) -> String {
    let segmenter = Segmenter::new();
    let blocks = segmenter.segment(markdown);
    let renderer = HtmlRenderer::new();
    renderer.render(&blocks)
}
