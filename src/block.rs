//! Block-level node types produced by the segmenter
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    /// Consecutive plain lines joined into one logical paragraph
    Paragraph {
        text: String,
    },
    Heading {
        level: u8, // 1-6, the number of leading '#'
        text: String,
    },
    CodeBlock {
        info: String,       // fence tag text, captured but not rendered
        lines: Vec<String>, // raw content, escaped at render time
        closed: bool,       // false when input ended before a closing fence
    },
    HorizontalRule,
    /// Quoted lines joined into one logical paragraph; no nesting
    BlockQuote {
        text: String,
    },
    List {
        kind: ListKind,
        items: Vec<String>, // raw inline text, one entry per item
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListKind {
    Unordered,
    Ordered,
}
