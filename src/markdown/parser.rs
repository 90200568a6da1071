//! Block-level Markdown parsing.

use super::inline::parse_inline;
use crate::document::{Block, Document};

/// Parse Markdown source text into a [`Document`].
///
/// The input is processed as an ordered sequence of `\n`-separated lines:
///
/// - A line whose trimmed form starts with ```` ```math ```` opens a fenced
///   display-math block; a line starting with a bare ```` ``` ```` closes it.
///   Content lines between the fences are trimmed and joined with single
///   spaces into one LaTeX fragment.
/// - A line starting with one or more `#` characters becomes a heading; the
///   `#`-run length is the level and the remaining trimmed text is carried
///   verbatim (heading text is not scanned for inline spans).
/// - Blank lines separate paragraphs. Consecutive non-blank lines are
///   trimmed and joined with single spaces, then scanned by
///   [`parse_inline`].
///
/// A fence that is opened but never closed discards its accumulated content:
/// no block is emitted and no error is raised.
pub fn parse_blocks(text: &str) -> Document {
    log::debug!("parsing {} bytes of markdown source", text.len());

    let mut blocks: Vec<Block> = Vec::new();
    let mut pending: Vec<&str> = Vec::new();
    let mut in_math_fence = false;
    let mut math_content = String::new();

    for line in text.split('\n') {
        let trimmed = line.trim();

        // The fence-open check runs before every other rule, even while a
        // fence is already open: re-opening resets the accumulator.
        if trimmed.starts_with("```math") {
            flush_paragraph(&mut blocks, &mut pending);
            in_math_fence = true;
            math_content.clear();
            continue;
        }

        if in_math_fence {
            if trimmed.starts_with("```") {
                log::debug!("display math block: {math_content}");
                blocks.push(Block::MathBlock {
                    latex: std::mem::take(&mut math_content),
                });
                in_math_fence = false;
            } else {
                if !math_content.is_empty() {
                    math_content.push(' ');
                }
                math_content.push_str(trimmed);
            }
            continue;
        }

        if trimmed.is_empty() {
            flush_paragraph(&mut blocks, &mut pending);
        } else if trimmed.starts_with('#') {
            flush_paragraph(&mut blocks, &mut pending);
            // The run length is counted in bytes; `#` is ASCII.
            let level = trimmed.bytes().take_while(|&b| b == b'#').count();
            blocks.push(Block::Heading {
                level,
                text: trimmed[level..].trim().to_string(),
            });
        } else {
            pending.push(trimmed);
        }
    }

    // An unterminated fence drops its content; pending paragraph lines
    // still flush.
    flush_paragraph(&mut blocks, &mut pending);

    Document { blocks }
}

/// Flush buffered paragraph lines into a `Paragraph` block, if any.
fn flush_paragraph(blocks: &mut Vec<Block>, pending: &mut Vec<&str>) {
    if pending.is_empty() {
        return;
    }
    let joined = pending.join(" ");
    pending.clear();
    blocks.push(Block::Paragraph {
        inlines: parse_inline(&joined),
    });
}
