use crate::error::{PersistenceError, Result};
use crate::universe::read_universe;
use prune_kernel::passes::grouping::Group;
use prune_kernel::{ChannelEvent, MarkerSet, Record};
use std::io::BufRead;
use std::path::Path;

/// Reads a marker file: any number of events per line, file order kept.
pub fn read_markers<E: Record>(path: impl AsRef<Path>) -> Result<MarkerSet<E>> {
    let path = path.as_ref();
    let markers: MarkerSet<E> = read_universe::<E>(path)?.into_iter().flatten().collect();
    if markers.is_empty() {
        tracing::warn!(file = %path.display(), "Marker set is empty, nothing will be pruned");
    }
    Ok(markers)
}

/// Reads declared groups: two events (six tokens) per line.
pub fn read_groups(path: impl AsRef<Path>) -> Result<Vec<Group>> {
    let path = path.as_ref();
    let mut groups = Vec::new();

    for (n, events) in read_universe::<ChannelEvent>(path)?.into_iter().enumerate() {
        let mut events = events.into_iter();
        match (events.next(), events.next()) {
            (Some(first), Some(second)) => {
                if events.next().is_some() {
                    tracing::warn!(file = %path.display(), line = n + 1, "Ignoring events after the first pair");
                }
                groups.push((first, second));
            }
            (Some(_), None) => {
                tracing::warn!(file = %path.display(), line = n + 1, "Dropped incomplete group");
            }
            _ => {}
        }
    }

    Ok(groups)
}

/// Reads the replica id as the first whitespace token of `reader`.
///
/// Stops at the end of the first non-blank line, so an interactive stdin
/// does not have to be closed.
pub fn read_replica_id<R: BufRead>(mut reader: R) -> Result<i64> {
    let mut input = String::new();
    while input.trim().is_empty() {
        if reader.read_line(&mut input)? == 0 {
            break;
        }
    }
    let token = input.split_whitespace().next().unwrap_or_default();
    token
        .parse()
        .map_err(|_| PersistenceError::InvalidReplicaId(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use prune_kernel::OpId;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_markers_span_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("predecessor_events.txt");
        fs::write(&path, "3 1\n7\n").unwrap();

        let markers = read_markers::<OpId>(&path).unwrap();
        let ids: Vec<i64> = markers.iter().map(|m| m.0).collect();
        assert_eq!(ids, vec![3, 1, 7]);
    }

    #[test]
    fn test_empty_marker_file_is_not_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("independent_events.dl");
        fs::write(&path, "").unwrap();

        assert!(read_markers::<OpId>(&path).unwrap().is_empty());
    }

    #[test]
    fn test_groups_need_two_events() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("groups.dl");
        fs::write(&path, "1 2 sync_req 1 2 exec_sync\n3 4 write\n\n").unwrap();

        let groups = read_groups(&path).unwrap();
        assert_eq!(
            groups,
            vec![(ChannelEvent::new(1, 2, "sync_req"), ChannelEvent::new(1, 2, "exec_sync"))]
        );
    }

    #[test]
    fn test_replica_id_from_reader() {
        assert_eq!(read_replica_id(" 4\n".as_bytes()).unwrap(), 4);
        assert!(matches!(
            read_replica_id("abc".as_bytes()),
            Err(PersistenceError::InvalidReplicaId(t)) if t == "abc"
        ));
        assert!(read_replica_id("".as_bytes()).is_err());
    }

    /// Hands out its lines one `fill_buf` at a time and fails once drained.
    struct Terminal {
        lines: Vec<&'static [u8]>,
        pos: usize,
    }

    impl std::io::Read for Terminal {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let n = {
                let available = self.fill_buf()?;
                let n = available.len().min(buf.len());
                buf[..n].copy_from_slice(&available[..n]);
                n
            };
            self.consume(n);
            Ok(n)
        }
    }

    impl BufRead for Terminal {
        fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
            match self.lines.first() {
                Some(line) => Ok(&line[self.pos..]),
                None => panic!("reader asked for input past the id line"),
            }
        }

        fn consume(&mut self, amt: usize) {
            self.pos += amt;
            if self.lines.first().is_some_and(|line| self.pos >= line.len()) {
                self.lines.remove(0);
                self.pos = 0;
            }
        }
    }

    #[test]
    fn test_replica_id_stops_after_first_line() {
        let tty = Terminal {
            lines: vec![&b"1\n"[..]],
            pos: 0,
        };
        assert_eq!(read_replica_id(tty).unwrap(), 1);

        let tty = Terminal {
            lines: vec![&b"\n"[..], &b"  7 trailing\n"[..]],
            pos: 0,
        };
        assert_eq!(read_replica_id(tty).unwrap(), 7);
    }
}
