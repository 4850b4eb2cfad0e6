//! HTML renderer for segmented blocks
use crate::block::{Block, ListKind};
use crate::inline;

pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        HtmlRenderer
    }

    /// Render each block to one HTML string and join them with newlines.
    /// No page wrapper and no whitespace normalization beyond the join.
    pub fn render(&self, blocks: &[Block]) -> String {
        let rendered: Vec<String> = blocks.iter().map(render_block).collect();
        rendered.join("\n")
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Paragraph { text } => format!("<p>{}</p>", inline::transform(text)),
        Block::Heading { level, text } => {
            format!("<h{}>{}</h{}>", level, inline::transform(text), level)
        }
        Block::HorizontalRule => "<hr>".to_string(),
        Block::BlockQuote { text } => {
            format!("<blockquote><p>{}</p></blockquote>", inline::transform(text))
        }
        Block::List { kind, items } => {
            let tag = match kind {
                ListKind::Unordered => "ul",
                ListKind::Ordered => "ol",
            };
            let mut parts = vec![format!("<{}>", tag)];
            for item in items {
                parts.push(format!("<li>{}</li>", inline::transform(item)));
            }
            parts.push(format!("</{}>", tag));
            parts.join("\n")
        }
        // Code content is escaped, never inline-processed. An unclosed
        // block keeps its opening tags unmatched in the output.
        Block::CodeBlock { lines, closed, .. } => {
            let mut parts = vec!["<pre><code>".to_string()];
            for line in lines {
                parts.push(escape_html(line));
            }
            if *closed {
                parts.push("</code></pre>".to_string());
            }
            parts.join("\n")
        }
    }
}

pub(crate) fn escape_html(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '&' => "&amp;".to_string(),
            '"' => "&quot;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}
