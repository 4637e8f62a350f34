use crate::error::Result;
use crate::layout;

use std::fs;
use std::path::{Path, PathBuf};

pub struct ScenarioPaths {
    pub dir: PathBuf,
    pub output: PathBuf,
}

fn write_inputs(dir: &Path, files: &[(&str, &str)], output: &str) -> Result<ScenarioPaths> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    for (name, contents) in files {
        fs::write(dir.join(name), contents)?;
    }
    Ok(ScenarioPaths {
        dir: dir.to_path_buf(),
        output: dir.join(output),
    })
}

/// Two-token universe where rows 1 and 3 have an all-independent span.
/// Expected output: rows 2 and 4.
pub fn generate_independence_scenario(dir: &Path) -> Result<ScenarioPaths> {
    write_inputs(
        dir,
        &[
            (
                layout::INDEPENDENCE_INTERLEAVINGS,
                "1 a 2 a 3 b\n1 a 3 b 2 a\n3 b 2 a 1 a\n3 b\n",
            ),
            (layout::INDEPENDENT_EVENTS, "1 a\n2 a\n"),
        ],
        layout::INDEPENDENCE_OUTPUT,
    )
}

/// Predecessors 1,3 and successors 2,4. Rows 1 and 3 are correct orderings.
/// Expected output: rows 2, 4 and 5.
pub fn generate_causal_scenario(dir: &Path) -> Result<ScenarioPaths> {
    write_inputs(
        dir,
        &[
            (layout::CAUSAL_INTERLEAVINGS, "1 2 3 4\n2 1 4 3\n1 3 2 4\n5 6\n3 1 2 4\n"),
            (layout::PREDECESSOR_EVENTS, "1 3\n"),
            (layout::SUCCESSOR_EVENTS, "2\n4\n"),
        ],
        layout::CAUSAL_OUTPUT,
    )
}

/// For replica 1, row 1 records the tail {(2,y),(3,z)}; rows 2 and 3 hold it.
/// Expected output: rows 1, 4, 5 and 6.
pub fn generate_replica_scenario(dir: &Path) -> Result<ScenarioPaths> {
    write_inputs(
        dir,
        &[(
            layout::REPLICA_EVENTS,
            "1 x 2 y 3 z\n1 x 3 z 2 y\n2 y 4 w 3 z\n2 y 1 x\n4 w 1 x 5 v\n3 z 5 v\n",
        )],
        layout::REPLICA_OUTPUT,
    )
}

/// One sync pair on channel (1,2) split by a write; one row without groups.
/// Expected output: 4 interleavings.
pub fn generate_grouping_scenario(dir: &Path) -> Result<ScenarioPaths> {
    write_inputs(
        dir,
        &[
            (
                layout::GROUP_EVENTS,
                "1 2 sync_req 3 4 write 1 2 exec_sync\n3 4 write 4 3 read\n",
            ),
            (layout::GROUP_PAIRS, ""),
        ],
        layout::GROUP_OUTPUT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_fixture_generator() {
        let dir = tempdir().unwrap();
        let paths = generate_causal_scenario(dir.path()).unwrap();

        assert!(paths.dir.join(layout::CAUSAL_INTERLEAVINGS).exists());
        assert!(paths.dir.join(layout::PREDECESSOR_EVENTS).exists());
        assert!(paths.dir.join(layout::SUCCESSOR_EVENTS).exists());
        assert!(!paths.output.exists(), "Fixtures must not create the output");
    }
}
