//! Population pass — scalar substitution plus list and region expansion.
//!
//! One sequential pass over one exclusively owned tree: profile scalars and
//! lists first, then the history template region is captured, deleted, and
//! stamped once per history with its nested product table expanded. Any
//! failure aborts the pass; the tree is left partially modified and the
//! sentinels are already consumed, so re-running over the same tree fails
//! with `PlaceholderNotFound` instead of double-expanding.

pub mod region;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::document::lists::expand_list_placeholder;
use crate::document::locate::{find_cell_with_text, find_table_with_text, find_template_region};
use crate::document::{Block, Body, Document, TableRow};
use crate::errors::AppError;
use crate::models::{History, Product, Profile, YearMonth};
use crate::populate::region::clone_region_for_each;

pub const HISTORY_TEMPLATE_START: &str = "***history-template-start***";
pub const HISTORY_TEMPLATE_END: &str = "***history-template-end***";

/// Rendered in place of an absent end month.
pub const ONGOING_LABEL: &str = "現在";

/// `YYYY/MM`, month zero-padded.
pub fn format_year_month(ym: &YearMonth) -> String {
    format!("{}/{:02}", ym.year, ym.month)
}

/// A present end month as `YYYY/MM`, an absent one as the ongoing label.
pub fn format_end_month(ym: Option<&YearMonth>) -> String {
    match ym {
        Some(ym) => format_year_month(ym),
        None => ONGOING_LABEL.to_string(),
    }
}

/// Runs the full population pass over `doc`.
pub fn populate_document(
    doc: &mut Document,
    profile: &Profile,
    histories: &[History],
    run_date: NaiveDate,
) -> Result<(), AppError> {
    let body = &mut doc.body;

    body.replace_text("{timestamp}", &run_date.format("%Y/%m/%d").to_string());
    body.replace_text("{profile.job}", &profile.job);
    body.replace_text("{profile.description}", &profile.description);
    expand_list_placeholder(
        &mut body.blocks,
        "{profile.skillDescription}",
        &profile.skill_description,
    )?;
    expand_list_placeholder(&mut body.blocks, "{profile.licenses}", &profile.licenses)?;
    body.replace_text("{profile.pr}", &profile.pr);
    debug!("Profile placeholders substituted");

    let region = find_template_region(body, HISTORY_TEMPLATE_START, HISTORY_TEMPLATE_END)?;
    clone_region_for_each(body, &region, histories, expand_history)?;

    info!("Populated document with {} history block(s)", histories.len());
    Ok(())
}

/// Substitutes one freshly stamped history block: history scalars, then the
/// nested product table.
///
/// The block is addressed by placeholder text, not by index range; the table
/// lookup always resolves to the newest block because earlier blocks'
/// placeholders were already replaced.
fn expand_history(body: &mut Body, history: &History) -> Result<(), AppError> {
    body.replace_text("{history.organization}", &history.organization);
    body.replace_text(
        "{history.startMonth}",
        &format_year_month(&history.start_month),
    );
    body.replace_text(
        "{history.endMonth}",
        &format_end_month(history.end_month.as_ref()),
    );

    let table_index = find_table_with_text(&body.blocks, "{product.title}")
        .ok_or_else(|| AppError::PlaceholderNotFound("{product.title}".to_string()))?;
    let Block::Table(table) = &mut body.blocks[table_index] else {
        return Err(AppError::StructuralMismatch(format!(
            "expected table at index {table_index}"
        )));
    };

    // Row 0 is the header; row 1 is the product row template.
    if table.rows.len() < 2 {
        return Err(AppError::StructuralMismatch(format!(
            "product table needs a header and a template row, found {} row(s)",
            table.rows.len()
        )));
    }
    let template_row = table.remove_row(1);

    for product in &history.products {
        let mut row = template_row.clone();
        substitute_product_row(&mut row, product)?;
        table.append_row(row);
    }

    debug!(
        "Expanded history block for {} with {} product row(s)",
        history.organization,
        history.products.len()
    );
    Ok(())
}

fn substitute_product_row(row: &mut TableRow, product: &Product) -> Result<(), AppError> {
    row.replace_text(
        "{product.startMonth}",
        &format_year_month(&product.start_month),
    );
    row.replace_text(
        "{product.endMonth}",
        &format_end_month(product.end_month.as_ref()),
    );
    row.replace_text("{product.title}", &product.title);

    for (placeholder, values) in [
        ("{product.description}", &product.description),
        ("{product.technologies}", &product.technologies),
    ] {
        let cell = find_cell_with_text(row, placeholder)
            .ok_or_else(|| AppError::PlaceholderNotFound(placeholder.to_string()))?;
        expand_list_placeholder(&mut row.cells[cell].blocks, placeholder, values)?;
    }

    Ok(())
}
