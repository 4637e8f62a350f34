use anyhow::Context;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use prune_kernel::PassStats;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn summary_table(stats: &PassStats) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Property", "Value"]);

    table.add_row(vec!["Pass", stats.pass]);
    table.add_row(vec!["Input", &stats.input.to_string()]);
    table.add_row(vec!["Buckets", &stats.buckets.to_string()]);
    table.add_row(vec!["Flagged", &stats.flagged.to_string()]);
    table.add_row(vec!["Output", &stats.output.to_string()]);
    if let Some(groups) = stats.groups {
        table.add_row(vec!["Groups", &groups.to_string()]);
        table.add_row(vec!["Truncated", if stats.truncated { "YES" } else { "NO" }]);
    }
    table
}

pub fn write_json(path: &Path, stats: &PassStats) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create report {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, stats)?;
    writer.flush()?;
    Ok(())
}

/// Prints and/or saves the stats as the operator asked.
pub fn emit(stats: &PassStats, summary: bool, report: Option<&Path>) -> anyhow::Result<()> {
    if summary {
        println!("\nPass Summary");
        println!("------------");
        println!("{}\n", summary_table(stats));
    }
    if let Some(path) = report {
        write_json(path, stats)?;
        tracing::info!(report = %path.display(), "Wrote pass report");
    }
    Ok(())
}
