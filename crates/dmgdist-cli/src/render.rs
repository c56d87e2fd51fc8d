//! Text renderings of a distribution.

use colored::Colorize;
use comfy_table::{CellAlignment, ContentArrangement, Table};

use dmgdist_core::{Distribution, Fixed16};

use crate::config::{OutputFormat, RenderConfig};

/// Format a value with a fixed number of decimal places.
pub fn format_fixed(value: f64, digits: usize) -> String {
    format!("{value:.digits$}")
}

/// Format a ratio as a percentage with a fixed number of decimal places.
pub fn format_percent(ratio: f64, digits: usize) -> String {
    format_fixed(ratio * 100.0, digits)
}

/// The average as decimal and as its raw fraction, e.g. `100.0000 (6553600/65536)`.
pub fn format_average(avg: Fixed16, digits: usize) -> String {
    format!("{} ({avg})", format_fixed(avg.to_f64(), digits))
}

fn label(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Render in the configured format.
pub fn render(dist: &Distribution, cfg: &RenderConfig) -> Result<String, String> {
    match cfg.format {
        OutputFormat::Table => Ok(render_table(dist, cfg)),
        OutputFormat::Json => render_json(dist),
        OutputFormat::Markdown => Ok(render_markdown(dist, cfg)),
    }
}

fn summary(dist: &Distribution, cfg: &RenderConfig) -> [(&'static str, String); 4] {
    [
        ("average", format_average(dist.avg, cfg.digits)),
        (
            "min / max",
            format!("{} / {}", dist.min_damage(), dist.max_damage()),
        ),
        ("outcomes", dist.total_outcomes.to_string()),
        ("algorithm", cfg.algorithm.to_string()),
    ]
}

fn row_cells(dist: &Distribution, digits: usize) -> impl Iterator<Item = [String; 4]> + '_ {
    dist.rows.iter().map(move |r| {
        [
            r.damage.to_string(),
            r.count.to_string(),
            format_percent(r.prob, digits),
            format_percent(r.cum_prob, digits),
        ]
    })
}

const HEADERS: [&str; 4] = ["Damage", "Count", "Prob (%)", "Cum (%)"];

fn render_table(dist: &Distribution, cfg: &RenderConfig) -> String {
    let mut out = String::new();
    for (name, value) in summary(dist, cfg) {
        out.push_str(&format!("  {} {value}\n", label(&format!("{name}:"), cfg.color)));
    }
    out.push('\n');

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(HEADERS.to_vec());
    for cells in row_cells(dist, cfg.digits) {
        table.add_row(cells.to_vec());
    }
    for i in 0..HEADERS.len() {
        if let Some(column) = table.column_mut(i) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    out.push_str(&format!("{table}\n"));
    out
}

fn render_markdown(dist: &Distribution, cfg: &RenderConfig) -> String {
    let mut out = String::from("# Damage distribution\n\n");
    for (name, value) in summary(dist, cfg) {
        out.push_str(&format!("- **{name}:** {value}\n"));
    }
    out.push('\n');

    out.push_str(&format!("| {} |\n", HEADERS.join(" | ")));
    out.push_str("|---:|---:|---:|---:|\n");
    for cells in row_cells(dist, cfg.digits) {
        out.push_str(&format!("| {} |\n", cells.join(" | ")));
    }
    out
}

fn render_json(dist: &Distribution) -> Result<String, String> {
    serde_json::to_string_pretty(dist)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|e| format!("JSON serialization error: {e}"))
}
