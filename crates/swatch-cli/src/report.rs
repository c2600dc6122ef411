//! Report rendering for a classified catalog.
//!
//! Both renderers write to any `io::Write` so tests can capture output in a
//! `Vec<u8>`.

use std::io::{self, Write};

use serde::Serialize;
use swatch_core::{Classification, ColoredProduct, ColorlessProduct};

#[derive(Serialize)]
struct JsonReport<'a> {
    total: usize,
    with_colors: &'a [ColoredProduct],
    without_colors: &'a [ColorlessProduct],
}

/// Writes the human-readable report.
///
/// `total` is the number of products fetched, printed in the header and the
/// summary.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub(crate) fn write_text<W: Write>(
    out: &mut W,
    total: usize,
    classification: &Classification,
) -> io::Result<()> {
    let with_colors = &classification.with_colors;
    let without_colors = &classification.without_colors;

    writeln!(out, "Found {total} products total.")?;

    writeln!(out)?;
    writeln!(out, "=== Products WITH Color Options ===")?;
    writeln!(out, "Total: {}", with_colors.len())?;
    for product in with_colors {
        writeln!(out, "- {} ({})", product.title, product.handle)?;
        writeln!(out, "  Colors: {}", product.colors.join(", "))?;
    }

    writeln!(out)?;
    writeln!(out, "=== Products WITHOUT Color Options ===")?;
    writeln!(out, "Total: {}", without_colors.len())?;
    for product in without_colors {
        writeln!(out, "- {} ({})", product.title, product.handle)?;
        writeln!(
            out,
            "  Type: \"{}\", Tags: {}",
            product.product_type,
            product.tags.join(", ")
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Summary:")?;
    writeln!(out, "Total products: {total}")?;
    writeln!(out, "Products with color options: {}", with_colors.len())?;
    writeln!(out, "Products without color options: {}", without_colors.len())?;

    Ok(())
}

/// Writes the report as one pretty-printed JSON document.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub(crate) fn write_json<W: Write>(
    out: &mut W,
    total: usize,
    classification: &Classification,
) -> io::Result<()> {
    let report = JsonReport {
        total,
        with_colors: &classification.with_colors,
        without_colors: &classification.without_colors,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}
