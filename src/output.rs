//! Rendering of the inventory report

use anyhow::Result;

use lcm_types::{ContainerRecord, InventoryReport};

use crate::config::OutputFormat;

const HEADERS: [&str; 3] = ["REGISTRY", "NAME", "VERSION"];

pub fn render(report: &InventoryReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(&report.containers)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// One aligned row per record, sorted by name then version
fn render_table(containers: &[ContainerRecord]) -> String {
    let mut rows: Vec<[&str; 3]> = containers
        .iter()
        .map(|c| {
            let registry = if c.has_registry() { c.registry_url.as_str() } else { "-" };
            [registry, c.name.as_str(), c.version.as_str()]
        })
        .collect();
    rows.sort_by(|a, b| (a[1], a[2], a[0]).cmp(&(b[1], b[2], b[0])));

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    std::iter::once(HEADERS)
        .chain(rows)
        .map(|row| {
            format!(
                "{:<w0$}  {:<w1$}  {}",
                row[0],
                row[1],
                row[2],
                w0 = widths[0],
                w1 = widths[1]
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
