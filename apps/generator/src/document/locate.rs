//! Locator — pure search over a block sequence.
//!
//! All lookups address direct children by index; subtree matches recurse
//! through `Block::contains_text`. Placeholder resolution is literal
//! substring matching throughout, never expression parsing.

use tracing::debug;

use crate::document::{Block, Body, TableRow};
use crate::errors::AppError;

/// A captured template region: deep copies of every block strictly between
/// the start and end sentinel paragraphs, plus the sentinel indices in the
/// source body. The captured blocks are never mutated, only re-cloned.
#[derive(Debug, Clone)]
pub struct TemplateRegion {
    pub blocks: Vec<Block>,
    pub start: usize,
    pub end: usize,
}

/// Index of the list item whose full text equals `text` exactly.
///
/// Scans every child and keeps overwriting the result, so the **last** match
/// wins when duplicates exist. The known document shapes never contain
/// duplicate list placeholders, but the behavior is kept for compatibility.
pub fn find_list_item_with_text(blocks: &[Block], text: &str) -> Option<usize> {
    let mut index = None;
    for (i, block) in blocks.iter().enumerate() {
        if let Block::ListItem(item) = block {
            if item.text == text {
                index = Some(i);
            }
        }
    }
    index
}

/// Index of the first table child whose subtree contains `text` anywhere.
pub fn find_table_with_text(blocks: &[Block], text: &str) -> Option<usize> {
    blocks.iter().position(|block| {
        matches!(block, Block::Table(table) if table.contains_text(text))
    })
}

/// Cell-level variant: index of the first cell in `row` whose subtree
/// contains `text` anywhere.
pub fn find_cell_with_text(row: &TableRow, text: &str) -> Option<usize> {
    row.cells.iter().position(|cell| cell.contains_text(text))
}

/// Captures the template region delimited by two sentinel paragraphs.
///
/// Scans the body for a paragraph whose exact text equals `start_sentinel`,
/// then deep-copies every following sibling until a paragraph equal to
/// `end_sentinel`. Both sentinels are exclusive. A missing sentinel is fatal:
/// sentinels are consumed by the first population pass, so a second pass over
/// the same document fails here rather than double-expanding.
pub fn find_template_region(
    body: &Body,
    start_sentinel: &str,
    end_sentinel: &str,
) -> Result<TemplateRegion, AppError> {
    let start = body
        .blocks
        .iter()
        .position(|block| matches!(block, Block::Paragraph(p) if p.text == start_sentinel))
        .ok_or_else(|| AppError::PlaceholderNotFound(start_sentinel.to_string()))?;

    let mut blocks = Vec::new();
    for (offset, block) in body.blocks[start + 1..].iter().enumerate() {
        if let Block::Paragraph(p) = block {
            if p.text == end_sentinel {
                let end = start + 1 + offset;
                debug!(
                    "Captured template region: {} block(s) between indices {start} and {end}",
                    blocks.len()
                );
                return Ok(TemplateRegion { blocks, start, end });
            }
        }
        blocks.push(block.clone());
    }

    Err(AppError::PlaceholderNotFound(end_sentinel.to_string()))
}
