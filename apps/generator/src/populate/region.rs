//! Region Cloner — stamps a captured template region once per record.

use tracing::debug;

use crate::document::locate::TemplateRegion;
use crate::document::Body;
use crate::errors::AppError;

/// Replaces the sentinel-delimited template with one cloned block per record.
///
/// First deletes body children `region.start..=region.end` inclusive (both
/// sentinels plus the original template content), removing the child at
/// `region.start` repeatedly so indices never drift. Then, per record in
/// input order, inserts deep copies of the region's blocks in reverse order
/// at the position where the end sentinel stood, which lands each record's
/// block contiguous, in the region's original relative order, and after the
/// previous record's block.
///
/// `per_record` runs right after each insertion, while the fresh block is the
/// only one still carrying live placeholder text, so it can address the block
/// by placeholder rather than by index range. This requires placeholders to
/// be unique within one expanded block at substitution time.
pub fn clone_region_for_each<T>(
    body: &mut Body,
    region: &TemplateRegion,
    records: &[T],
    mut per_record: impl FnMut(&mut Body, &T) -> Result<(), AppError>,
) -> Result<(), AppError> {
    if region.end >= body.blocks.len() || region.start > region.end {
        return Err(AppError::StructuralMismatch(format!(
            "template region {}..={} does not fit a body of {} block(s)",
            region.start,
            region.end,
            body.blocks.len()
        )));
    }

    for _ in region.start..=region.end {
        body.blocks.remove(region.start);
    }

    // Where the end sentinel logically stood; advances past each stamped
    // block so records land in input order.
    let mut anchor = region.start;

    for (i, record) in records.iter().enumerate() {
        for block in region.blocks.iter().rev() {
            body.blocks.insert(anchor, block.clone());
        }
        debug!("Inserted template clone {} of {}", i + 1, records.len());
        per_record(body, record)?;
        anchor += region.blocks.len();
    }

    Ok(())
}
