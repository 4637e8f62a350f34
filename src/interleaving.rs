// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Interleavings and their line codec.
//!
//! One line holds one interleaving: events written back to back, each event
//! taking `E::ARITY` whitespace-separated tokens. Parsing is strictly left to
//! right and stops at the first token group that does not form a valid event.

use crate::event::Record;

/// One candidate total order of protocol events.
pub type Interleaving<E> = Vec<E>;

/// The full ordered collection of interleavings for one run.
pub type Universe<E> = Vec<Interleaving<E>>;

/// Result of decoding one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<E> {
    pub events: Interleaving<E>,
    /// Tokens left unconsumed after the last complete event.
    pub dropped: usize,
}

pub fn parse_line<E: Record>(line: &str) -> ParsedLine<E> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let mut events = Vec::with_capacity(tokens.len() / E::ARITY);
    let mut consumed = 0;

    for group in tokens.chunks(E::ARITY) {
        match E::from_tokens(group) {
            Ok(event) => {
                events.push(event);
                consumed += group.len();
            }
            Err(_) => break,
        }
    }

    ParsedLine {
        events,
        dropped: tokens.len() - consumed,
    }
}

pub fn format_line<E: Record>(interleaving: &[E]) -> String {
    interleaving
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{ChannelEvent, LabeledEvent, OpId};

    #[test]
    fn test_trailing_partial_group_is_truncated() {
        let parsed: ParsedLine<ChannelEvent> = parse_line("1 2 sync_req 2 1");
        assert_eq!(parsed.events, vec![ChannelEvent::new(1, 2, "sync_req")]);
        assert_eq!(parsed.dropped, 2);
    }

    #[test]
    fn test_parsing_stops_at_bad_integer() {
        // "b" is not an id, so everything from it on is dropped
        let parsed: ParsedLine<LabeledEvent> = parse_line("1 a b 2 3 c");
        assert_eq!(parsed.events, vec![LabeledEvent::new(1, "a")]);
        assert_eq!(parsed.dropped, 4);
    }

    #[test]
    fn test_blank_line_is_empty_interleaving() {
        let parsed: ParsedLine<OpId> = parse_line("   ");
        assert!(parsed.events.is_empty());
        assert_eq!(parsed.dropped, 0);
    }

    #[test]
    fn test_format_is_inverse_of_parse() {
        let line = "4 1 exec_sync 1 4 sync_req";
        let parsed: ParsedLine<ChannelEvent> = parse_line(line);
        assert_eq!(format_line(&parsed.events), line);
    }
}
