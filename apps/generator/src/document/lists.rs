//! List Expander — rewrites one placeholder list item into N list items.
//!
//! Expansion preserves the placeholder item's glyph type, list-group id and
//! indentation metrics on every inserted item, so the result renders as one
//! contiguous list visually indistinguishable from the original.

use crate::document::locate::find_list_item_with_text;
use crate::document::{Block, ListItem};
use crate::errors::AppError;

/// Replaces the list item whose exact text equals `placeholder` with one
/// list item per value, in order.
///
/// Works on any block sequence holding list items: the document body or a
/// table cell. `values` must be non-empty; an empty expansion would have to
/// delete the item and is rejected instead of guessing.
pub fn expand_list_placeholder(
    blocks: &mut Vec<Block>,
    placeholder: &str,
    values: &[String],
) -> Result<(), AppError> {
    if values.is_empty() {
        return Err(AppError::InvalidArgument(format!(
            "empty value list for list placeholder '{placeholder}'"
        )));
    }

    let index = find_list_item_with_text(blocks, placeholder)
        .ok_or_else(|| AppError::PlaceholderNotFound(placeholder.to_string()))?;

    let template = match &mut blocks[index] {
        Block::ListItem(item) => {
            item.text = values[0].clone();
            item.clone()
        }
        // Unreachable: the locator only matches list items.
        other => {
            return Err(AppError::StructuralMismatch(format!(
                "expected list item at index {index}, found {other:?}"
            )))
        }
    };

    for (i, value) in values.iter().enumerate().skip(1) {
        let item = ListItem {
            text: value.clone(),
            glyph_type: template.glyph_type,
            list_id: template.list_id,
            indent_first_line: template.indent_first_line,
            indent_start: template.indent_start,
            indent_end: template.indent_end,
        };
        blocks.insert(index + i, Block::ListItem(item));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{GlyphType, Paragraph};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn placeholder_item() -> ListItem {
        ListItem {
            text: "{profile.skillDescription}".to_string(),
            glyph_type: GlyphType::HollowBullet,
            list_id: 42,
            indent_first_line: 21.0,
            indent_start: 42.0,
            indent_end: 3.5,
        }
    }

    #[test]
    fn test_expansion_yields_one_item_per_value_in_order() {
        let mut blocks = vec![
            Block::Paragraph(Paragraph::new("skills:")),
            Block::ListItem(placeholder_item()),
            Block::Paragraph(Paragraph::new("after")),
        ];

        expand_list_placeholder(
            &mut blocks,
            "{profile.skillDescription}",
            &strings(&["Rust", "TypeScript", "PostgreSQL"]),
        )
        .unwrap();

        assert_eq!(blocks.len(), 5);
        let texts: Vec<&str> = blocks[1..4]
            .iter()
            .map(|b| match b {
                Block::ListItem(item) => item.text.as_str(),
                other => panic!("expected list item, got {other:?}"),
            })
            .collect();
        assert_eq!(texts, ["Rust", "TypeScript", "PostgreSQL"]);
        assert_eq!(blocks[4], Block::Paragraph(Paragraph::new("after")));
    }

    #[test]
    fn test_expansion_preserves_glyph_list_id_and_indents() {
        let template = placeholder_item();
        let mut blocks = vec![Block::ListItem(template.clone())];

        expand_list_placeholder(
            &mut blocks,
            "{profile.skillDescription}",
            &strings(&["a", "b"]),
        )
        .unwrap();

        for block in &blocks {
            let Block::ListItem(item) = block else {
                panic!("expected list item, got {block:?}");
            };
            assert_eq!(item.glyph_type, template.glyph_type);
            assert_eq!(item.list_id, template.list_id);
            assert_eq!(item.indent_first_line, template.indent_first_line);
            assert_eq!(item.indent_start, template.indent_start);
            assert_eq!(item.indent_end, template.indent_end);
        }
    }

    #[test]
    fn test_single_value_overwrites_in_place() {
        let mut blocks = vec![Block::ListItem(placeholder_item())];
        expand_list_placeholder(
            &mut blocks,
            "{profile.skillDescription}",
            &strings(&["only one"]),
        )
        .unwrap();

        assert_eq!(blocks.len(), 1);
        assert!(matches!(&blocks[0], Block::ListItem(item) if item.text == "only one"));
    }

    #[test]
    fn test_empty_values_rejected() {
        let mut blocks = vec![Block::ListItem(placeholder_item())];
        let err =
            expand_list_placeholder(&mut blocks, "{profile.skillDescription}", &[]).unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
        // Tree untouched on rejection.
        assert_eq!(blocks, vec![Block::ListItem(placeholder_item())]);
    }

    #[test]
    fn test_missing_placeholder_is_an_error() {
        let mut blocks = vec![Block::Paragraph(Paragraph::new("no lists here"))];
        let err = expand_list_placeholder(&mut blocks, "{profile.licenses}", &strings(&["x"]))
            .unwrap_err();
        assert!(matches!(err, AppError::PlaceholderNotFound(p) if p == "{profile.licenses}"));
    }
}
