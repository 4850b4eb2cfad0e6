//! Line-driven block segmenter
use crate::block::{Block, ListKind};

/// The at-most-one block currently accumulating lines. Keeping this as
/// an explicit value means every transition is visible in `segment`.
#[derive(Debug)]
enum Open {
    None,
    Quote(String),
    List(ListKind, Vec<String>),
    Code { info: String, lines: Vec<String> },
}

pub struct Segmenter;

impl Segmenter {
    pub fn new() -> Self {
        Segmenter
    }

    /// Partition input into an ordered sequence of blocks.
    ///
    /// Never fails: every line is classified into some block, with
    /// unrecognized content defaulting to a paragraph. A fence left
    /// unclosed at end of input yields a code block with `closed` false.
    pub fn segment(&self, input: &str) -> Vec<Block> {
        let lines: Vec<&str> = input.lines().collect();
        let mut blocks = Vec::new();
        let mut open = Open::None;

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i];
            let trimmed = line.trim();

            // Inside a fence everything is literal, blank lines included.
            // Only another fence line ends the block, and neither fence
            // line becomes content.
            if matches!(open, Open::Code { .. }) {
                if self.is_fence(trimmed) {
                    if let Open::Code { info, lines } = std::mem::replace(&mut open, Open::None) {
                        blocks.push(Block::CodeBlock {
                            info,
                            lines,
                            closed: true,
                        });
                    }
                } else if let Open::Code { lines, .. } = &mut open {
                    lines.push(line.to_string());
                }
                i += 1;
                continue;
            }

            // Fence opening
            if self.is_fence(trimmed) {
                self.flush(&mut open, &mut blocks);
                open = Open::Code {
                    info: trimmed[3..].trim().to_string(),
                    lines: Vec::new(),
                };
                i += 1;
                continue;
            }

            // Blank line closes whatever is accumulating
            if trimmed.is_empty() {
                self.flush(&mut open, &mut blocks);
                i += 1;
                continue;
            }

            if self.is_horizontal_rule(trimmed) {
                self.flush(&mut open, &mut blocks);
                blocks.push(Block::HorizontalRule);
                i += 1;
                continue;
            }

            if let Some((level, text)) = self.parse_heading(trimmed) {
                self.flush(&mut open, &mut blocks);
                blocks.push(Block::Heading { level, text });
                i += 1;
                continue;
            }

            // Blockquote line: quotes and lists never interleave
            if let Some(rest) = trimmed.strip_prefix('>') {
                let content = rest.trim();
                match &mut open {
                    Open::Quote(text) => {
                        text.push(' ');
                        text.push_str(content);
                    }
                    _ => {
                        self.flush(&mut open, &mut blocks);
                        open = Open::Quote(content.to_string());
                    }
                }
                i += 1;
                continue;
            }

            if let Some(item) = self.parse_unordered_item(trimmed) {
                match &mut open {
                    Open::List(ListKind::Unordered, items) => items.push(item),
                    // Switching marker kind closes the current list
                    _ => {
                        self.flush(&mut open, &mut blocks);
                        open = Open::List(ListKind::Unordered, vec![item]);
                    }
                }
                i += 1;
                continue;
            }

            if let Some(item) = self.parse_ordered_item(trimmed) {
                match &mut open {
                    Open::List(ListKind::Ordered, items) => items.push(item),
                    _ => {
                        self.flush(&mut open, &mut blocks);
                        open = Open::List(ListKind::Ordered, vec![item]);
                    }
                }
                i += 1;
                continue;
            }

            // Paragraph: consume this line plus every following line that
            // is non-blank and would not start another block, joined with
            // single spaces. The pointer advances past all of them at once.
            self.flush(&mut open, &mut blocks);
            let mut text = trimmed.to_string();
            let mut consumed = 1;
            while i + consumed < lines.len() {
                let next = lines[i + consumed].trim();
                if next.is_empty() || self.starts_block(next) {
                    break;
                }
                text.push(' ');
                text.push_str(next);
                consumed += 1;
            }
            blocks.push(Block::Paragraph { text });
            i += consumed;
        }

        // A still-open quote or list is flushed; a still-open code block
        // comes out with `closed` false rather than being terminated.
        self.flush(&mut open, &mut blocks);
        blocks
    }

    /// Finalize the accumulating block, if any
    fn flush(&self, open: &mut Open, blocks: &mut Vec<Block>) {
        match std::mem::replace(open, Open::None) {
            Open::None => {}
            Open::Quote(text) => blocks.push(Block::BlockQuote { text }),
            Open::List(kind, items) => blocks.push(Block::List { kind, items }),
            Open::Code { info, lines } => blocks.push(Block::CodeBlock {
                info,
                lines,
                closed: false,
            }),
        }
    }

    fn is_fence(&self, trimmed: &str) -> bool {
        trimmed.starts_with("```")
    }

    /// A run of three or more identical characters from -, * or _
    fn is_horizontal_rule(&self, trimmed: &str) -> bool {
        let Some(first) = trimmed.chars().next() else {
            return false;
        };
        if !matches!(first, '-' | '*' | '_') {
            return false;
        }
        trimmed.len() >= 3 && trimmed.chars().all(|c| c == first)
    }

    /// 1-6 leading '#', at least one whitespace, then the heading text
    fn parse_heading(&self, trimmed: &str) -> Option<(u8, String)> {
        let level = trimmed.chars().take_while(|&c| c == '#').count();
        if level == 0 || level > 6 {
            return None;
        }
        let rest = &trimmed[level..];
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let text = rest.trim_start();
        if text.is_empty() {
            return None;
        }
        Some((level as u8, text.to_string()))
    }

    /// -, * or + followed by whitespace and the item text
    fn parse_unordered_item(&self, trimmed: &str) -> Option<String> {
        let rest = trimmed.strip_prefix(['-', '*', '+'])?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let text = rest.trim_start();
        if text.is_empty() {
            return None;
        }
        Some(text.to_string())
    }

    /// Digits, a literal dot, whitespace, then the item text. The source
    /// number itself is not kept; rendering relies on <ol> numbering.
    fn parse_ordered_item(&self, trimmed: &str) -> Option<String> {
        let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            return None;
        }
        let rest = trimmed[digits..].strip_prefix('.')?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let text = rest.trim_start();
        if text.is_empty() {
            return None;
        }
        Some(text.to_string())
    }

    /// Would this (already trimmed) line start some non-paragraph block?
    /// Used for the paragraph lookahead.
    fn starts_block(&self, trimmed: &str) -> bool {
        self.is_fence(trimmed)
            || self.is_horizontal_rule(trimmed)
            || self.parse_heading(trimmed).is_some()
            || trimmed.starts_with('>')
            || self.parse_unordered_item(trimmed).is_some()
            || self.parse_ordered_item(trimmed).is_some()
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(input: &str) -> Vec<Block> {
        Segmenter::new().segment(input)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(segment(""), vec![]);
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(
            segment("# one\n### three"),
            vec![
                Block::Heading {
                    level: 1,
                    text: "one".to_string()
                },
                Block::Heading {
                    level: 3,
                    text: "three".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_seven_hashes_is_a_paragraph() {
        assert_eq!(
            segment("####### too deep"),
            vec![Block::Paragraph {
                text: "####### too deep".to_string()
            }]
        );
    }

    #[test]
    fn test_hash_without_space_is_a_paragraph() {
        assert_eq!(
            segment("#nospace"),
            vec![Block::Paragraph {
                text: "#nospace".to_string()
            }]
        );
    }

    #[test]
    fn test_paragraph_lines_join_with_spaces() {
        assert_eq!(
            segment("first\nsecond\nthird"),
            vec![Block::Paragraph {
                text: "first second third".to_string()
            }]
        );
    }

    #[test]
    fn test_blank_line_splits_paragraphs() {
        assert_eq!(
            segment("one\n\ntwo"),
            vec![
                Block::Paragraph {
                    text: "one".to_string()
                },
                Block::Paragraph {
                    text: "two".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_heading_interrupts_paragraph() {
        assert_eq!(
            segment("text\n# heading"),
            vec![
                Block::Paragraph {
                    text: "text".to_string()
                },
                Block::Heading {
                    level: 1,
                    text: "heading".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_horizontal_rule_variants() {
        for input in ["---", "****", "___"] {
            assert_eq!(segment(input), vec![Block::HorizontalRule], "{input}");
        }
        // Mixed characters are not a rule
        assert_eq!(
            segment("--*"),
            vec![Block::Paragraph {
                text: "--*".to_string()
            }]
        );
    }

    #[test]
    fn test_blockquote_lines_accumulate() {
        assert_eq!(
            segment("> a\n> b"),
            vec![Block::BlockQuote {
                text: "a b".to_string()
            }]
        );
    }

    #[test]
    fn test_list_accumulates_items() {
        assert_eq!(
            segment("- a\n- b"),
            vec![Block::List {
                kind: ListKind::Unordered,
                items: vec!["a".to_string(), "b".to_string()]
            }]
        );
    }

    #[test]
    fn test_switching_list_kind_starts_a_new_list() {
        assert_eq!(
            segment("- a\n1. b"),
            vec![
                Block::List {
                    kind: ListKind::Unordered,
                    items: vec!["a".to_string()]
                },
                Block::List {
                    kind: ListKind::Ordered,
                    items: vec!["b".to_string()]
                },
            ]
        );
    }

    #[test]
    fn test_quote_then_list_do_not_interleave() {
        assert_eq!(
            segment("> q\n- item"),
            vec![
                Block::BlockQuote {
                    text: "q".to_string()
                },
                Block::List {
                    kind: ListKind::Unordered,
                    items: vec!["item".to_string()]
                },
            ]
        );
    }

    #[test]
    fn test_fence_swallows_special_lines() {
        assert_eq!(
            segment("```\n# not a heading\n- not a list\n```"),
            vec![Block::CodeBlock {
                info: String::new(),
                lines: vec!["# not a heading".to_string(), "- not a list".to_string()],
                closed: true,
            }]
        );
    }

    #[test]
    fn test_blank_lines_stay_inside_code() {
        assert_eq!(
            segment("```\na\n\nb\n```"),
            vec![Block::CodeBlock {
                info: String::new(),
                lines: vec!["a".to_string(), String::new(), "b".to_string()],
                closed: true,
            }]
        );
    }

    #[test]
    fn test_fence_tag_is_captured() {
        assert_eq!(
            segment("```rust\nfn main() {}\n```"),
            vec![Block::CodeBlock {
                info: "rust".to_string(),
                lines: vec!["fn main() {}".to_string()],
                closed: true,
            }]
        );
    }

    #[test]
    fn test_unterminated_fence_stays_open() {
        assert_eq!(
            segment("```\nline"),
            vec![Block::CodeBlock {
                info: String::new(),
                lines: vec!["line".to_string()],
                closed: false,
            }]
        );
    }

    #[test]
    fn test_fence_closes_open_list() {
        assert_eq!(
            segment("- a\n```\ncode\n```"),
            vec![
                Block::List {
                    kind: ListKind::Unordered,
                    items: vec!["a".to_string()]
                },
                Block::CodeBlock {
                    info: String::new(),
                    lines: vec!["code".to_string()],
                    closed: true,
                },
            ]
        );
    }

    #[test]
    fn test_bare_list_marker_is_a_paragraph() {
        assert_eq!(
            segment("-"),
            vec![Block::Paragraph {
                text: "-".to_string()
            }]
        );
    }

    #[test]
    fn test_segmentation_is_deterministic() {
        let input = "# h\n\npara one\npara two\n\n- a\n- b\n\n> q\n\n```\ncode\n";
        assert_eq!(segment(input), segment(input));
    }
}
