//! Plain-text report: full listing plus the free-tier subset.

use std::io::{self, Write};

use super::fetch::is_likely_free;
use super::info::ModelInfo;

const FREE_TIER_NOTE: &str = " (likely works with free account)";

/// Write both report sections for models already in display order.
pub fn render_report<W: Write>(models: &[ModelInfo], out: &mut W) -> io::Result<()> {
    writeln!(out, "\nAvailable Venice AI Models:")?;
    writeln!(out, "==========================")?;
    for model in models {
        let note = if is_likely_free(&model.id) {
            FREE_TIER_NOTE
        } else {
            ""
        };
        writeln!(out, "- {}{}", model.id, note)?;
    }

    writeln!(out, "\nRecommended models for free accounts:")?;
    writeln!(out, "==================================")?;
    for model in models.iter().filter(|m| is_likely_free(&m.id)) {
        writeln!(out, "- {}", model.id)?;
    }
    Ok(())
}
