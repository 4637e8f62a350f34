use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use prune_persistence::{layout, universe};
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Every file a pass reads or writes, with the passes that use it.
const KNOWN_FILES: &[(&str, &str)] = &[
    (layout::GROUP_EVENTS, "group / replica input"),
    (layout::GROUP_PAIRS, "group declared pairs"),
    (layout::GROUP_OUTPUT, "group output"),
    (layout::INDEPENDENCE_INTERLEAVINGS, "independence input"),
    (layout::INDEPENDENT_EVENTS, "independence markers"),
    (layout::INDEPENDENCE_OUTPUT, "independence output"),
    (layout::CAUSAL_INTERLEAVINGS, "failed-ops input"),
    (layout::PREDECESSOR_EVENTS, "failed-ops predecessors"),
    (layout::SUCCESSOR_EVENTS, "failed-ops successors"),
    (layout::CAUSAL_OUTPUT, "failed-ops output"),
    (layout::REPLICA_OUTPUT, "replica output"),
];

fn count_lines(path: &Path) -> anyhow::Result<usize> {
    let reader = universe::open_input(path)?;
    let mut count = 0;
    for line in reader.split(b'\n') {
        line?;
        count += 1;
    }
    Ok(count)
}

/// Builds the status table for `dir` (the working directory when unset).
pub fn status_table(dir: Option<PathBuf>) -> Table {
    let dir = dir.unwrap_or_default();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["File", "Role", "Status", "Lines"]);

    for (name, role) in KNOWN_FILES {
        let path = dir.join(name);
        if !path.exists() {
            table.add_row(vec![*name, *role, "MISSING", ""]);
            continue;
        }
        match count_lines(&path) {
            Ok(n) => {
                table.add_row(vec![*name, *role, "FOUND", &n.to_string()]);
            }
            Err(e) => {
                table.add_row(vec![*name, *role, "UNREADABLE", &e.to_string()]);
            }
        }
    }
    table
}

pub fn run(dir: Option<PathBuf>) -> anyhow::Result<()> {
    let table = status_table(dir);

    println!("\nPruning Workspace");
    println!("-----------------");
    println!("{table}\n");

    Ok(())
}
