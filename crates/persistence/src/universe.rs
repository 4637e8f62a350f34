use crate::error::{PersistenceError, Result};
use prune_kernel::interleaving::{format_line, parse_line, Interleaving};
use prune_kernel::Record;
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Opens a required input. Missing or unreadable files are reported by name.
pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied) => {
            Err(PersistenceError::InputNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// Reads one interleaving per line. Trailing tokens that do not form a whole
/// event are dropped with a warning; they never fail the run.
pub fn read_universe<E: Record>(path: impl AsRef<Path>) -> Result<Vec<Interleaving<E>>> {
    let path = path.as_ref();
    let reader = open_input(path)?;
    let mut interleavings = Vec::new();

    for (n, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let line = String::from_utf8_lossy(&bytes);
        if matches!(line, Cow::Owned(_)) {
            tracing::warn!(file = %path.display(), line = n + 1, "Replaced invalid UTF-8 bytes");
        }
        let parsed = parse_line::<E>(&line);
        if parsed.dropped > 0 {
            tracing::warn!(
                file = %path.display(),
                line = n + 1,
                dropped = parsed.dropped,
                "Dropped malformed trailing tokens"
            );
        }
        interleavings.push(parsed.events);
    }

    tracing::debug!(file = %path.display(), count = interleavings.len(), "Loaded interleavings");
    Ok(interleavings)
}

/// Writes one interleaving per line via a temp file and rename, so readers
/// never observe a partial output.
pub fn write_universe<E: Record>(path: impl AsRef<Path>, interleavings: &[Interleaving<E>]) -> Result<()> {
    let path = path.as_ref();
    let tmp_path = tmp_path_for(path);

    let written = write_tmp(&tmp_path, interleavings).and_then(|()| fs::rename(&tmp_path, path));
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    Ok(())
}

fn write_tmp<E: Record>(tmp_path: &Path, interleavings: &[Interleaving<E>]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(tmp_path)?);
    for il in interleavings {
        writeln!(writer, "{}", format_line(il))?;
    }
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_data()
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
