//! Document Tree Model — an owned, hierarchical rich-text document.
//!
//! The tree is the single mutable structure the population pass operates on:
//! a `Body` owns an ordered sequence of `Block`s, tables own rows, rows own
//! cells, and cells own nested blocks. Child order is document reading order
//! and is semantically meaningful everywhere.
//!
//! Every node is exclusively owned by its parent's child vector. Template
//! regions are captured as deep copies (`Clone`) and never mutated in place —
//! only their per-record clones are.
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

pub mod lists;
pub mod locate;

/// Bullet/numbering style of a list item. Preserved verbatim when a list
/// placeholder is expanded so the inserted items render as the same list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphType {
    Bullet,
    HollowBullet,
    SquareBullet,
    Number,
    LatinUpper,
    LatinLower,
    RomanUpper,
    RomanLower,
}

/// A plain paragraph. Sentinel markers are paragraphs whose exact text is a
/// reserved string (`***history-template-start***` etc.).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A list item. `list_id` is a logical grouping key: items sharing it render
/// as one continuous list (shared bullet/numbering sequence), not independent
/// single-item lists. Indentation metrics are in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub text: String,
    pub glyph_type: GlyphType,
    pub list_id: u32,
    pub indent_first_line: f64,
    pub indent_start: f64,
    pub indent_end: f64,
}

impl ListItem {
    pub fn new(text: impl Into<String>, glyph_type: GlyphType, list_id: u32) -> Self {
        Self {
            text: text.into(),
            glyph_type,
            list_id,
            indent_first_line: 18.0,
            indent_start: 36.0,
            indent_end: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self { rows }
    }

    /// Appends a row at the end of the table. Row repetition uses this rather
    /// than positional insertion: appended rows land in append order.
    pub fn append_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    pub fn remove_row(&mut self, index: usize) -> TableRow {
        self.rows.remove(index)
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.rows.iter().any(|row| row.contains_text(needle))
    }

    pub fn replace_text(&mut self, from: &str, to: &str) {
        for row in &mut self.rows {
            row.replace_text(from, to);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.cells.iter().any(|cell| cell.contains_text(needle))
    }

    pub fn replace_text(&mut self, from: &str, to: &str) {
        for cell in &mut self.cells {
            cell.replace_text(from, to);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    pub blocks: Vec<Block>,
}

impl TableCell {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Single-paragraph cell, the common case for scalar table fields.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            blocks: vec![Block::Paragraph(Paragraph::new(text))],
        }
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.blocks.iter().any(|block| block.contains_text(needle))
    }

    pub fn replace_text(&mut self, from: &str, to: &str) {
        for block in &mut self.blocks {
            block.replace_text(from, to);
        }
    }
}

/// One block-level node. `HorizontalRule` stands in for block variants the
/// population pass carries through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Block {
    Paragraph(Paragraph),
    ListItem(ListItem),
    Table(Table),
    HorizontalRule,
}

impl Block {
    /// Recursive substring search over all text content in this subtree.
    pub fn contains_text(&self, needle: &str) -> bool {
        match self {
            Block::Paragraph(p) => p.text.contains(needle),
            Block::ListItem(li) => li.text.contains(needle),
            Block::Table(table) => table.contains_text(needle),
            Block::HorizontalRule => false,
        }
    }

    /// Literal substring replacement over all text content in this subtree.
    /// Operates on raw text, not node boundaries: a token split across two
    /// nodes never matches.
    pub fn replace_text(&mut self, from: &str, to: &str) {
        match self {
            Block::Paragraph(p) => p.text = p.text.replace(from, to),
            Block::ListItem(li) => li.text = li.text.replace(from, to),
            Block::Table(table) => table.replace_text(from, to),
            Block::HorizontalRule => {}
        }
    }
}

/// The document body: the root child sequence the Locator, List Expander and
/// Region Cloner all address by index.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Body {
    pub blocks: Vec<Block>,
}

impl Body {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn replace_text(&mut self, from: &str, to: &str) {
        for block in &mut self.blocks {
            block.replace_text(from, to);
        }
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.blocks.iter().any(|block| block.contains_text(needle))
    }
}

/// A complete document. The template file deserializes into this; population
/// mutates it in place; the store serializes the result back out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub body: Body,
}
