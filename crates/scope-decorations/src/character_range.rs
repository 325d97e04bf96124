//! Segments for character ranges
//!
//! A single-line range is one fully bordered box. A multi-line range is cut
//! into one span per line and each line is bordered by looking at the spans
//! directly above and below it, so that the whole range reads as a single
//! shape: edges shared with a neighbouring line are left open, and edges
//! where the shape continues past a step are dashed.

use smallvec::SmallVec;

use crate::lines::LineLengths;
use crate::range::CharacterRange;
use crate::style::{BorderStyle, DecorationStyle, Segment};

/// Splits a character range into bordered segments.
///
/// `lines` is only consulted for the length of every line but the last.
pub fn segment_character_range<L: LineLengths + ?Sized>(
    range: CharacterRange,
    lines: &L,
) -> Vec<Segment> {
    if range.is_single_line() {
        return vec![Segment::new(range, DecorationStyle::uniform(BorderStyle::Solid))];
    }

    segment_line_spans(&split_into_lines(range, lines))
}

/// One span per covered line: the first trimmed to the range start, the
/// last to the range end, the rest spanning their full line.
pub fn split_into_lines<L: LineLengths + ?Sized>(
    range: CharacterRange,
    lines: &L,
) -> Vec<CharacterRange> {
    (range.start.line..=range.end.line)
        .map(|line| {
            let start = if line == range.start.line { range.start.character } else { 0 };
            let end = if line == range.end.line {
                range.end.character
            } else {
                lines.line_length(line)
            };
            CharacterRange::on_line(line, start, end)
        })
        .collect()
}

/// Borders a range that has already been split into consecutive per-line
/// spans, as produced by [`split_into_lines`].
pub fn segment_line_spans(line_spans: &[CharacterRange]) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(line_spans.len());
    for info in line_infos(line_spans) {
        segment_line(&info, &mut segments);
    }
    segments
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineSpan {
    start: u32,
    end: u32,
    is_first: bool,
    is_last: bool,
}

/// A line together with its neighbours from the same range
#[derive(Debug, Clone, Copy)]
struct LineInfo {
    line: u32,
    previous: Option<LineSpan>,
    current: LineSpan,
    next: Option<LineSpan>,
}

fn line_infos(line_spans: &[CharacterRange]) -> impl Iterator<Item = LineInfo> + '_ {
    let count = line_spans.len();
    let span = move |index: usize| LineSpan {
        start: line_spans[index].start.character,
        end: line_spans[index].end.character,
        is_first: index == 0,
        is_last: index + 1 == count,
    };

    (0..count).map(move |index| LineInfo {
        line: line_spans[index].start.line,
        previous: index.checked_sub(1).map(span),
        current: span(index),
        next: (index + 1 < count).then(|| span(index + 1)),
    })
}

/// Events are handled in this order when they share an offset: the
/// previous line is resolved before the current line ends, and the current
/// line ending stops the sweep before the next line's end is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    PreviousStart,
    PreviousEnd,
    CurrentEnd,
    NextEnd,
}

#[derive(Debug, Clone, Copy)]
struct Event {
    offset: u32,
    kind: EventKind,
}

fn line_events(info: &LineInfo) -> SmallVec<[Event; 4]> {
    let mut events: SmallVec<[Event; 4]> = SmallVec::new();

    if let Some(previous) = info.previous {
        events.push(Event { offset: previous.start, kind: EventKind::PreviousStart });
        events.push(Event { offset: previous.end, kind: EventKind::PreviousEnd });
    }

    // The current and next line never start after our own start offset, so
    // only their ends matter.
    events.push(Event { offset: info.current.end, kind: EventKind::CurrentEnd });

    if let Some(next) = info.next {
        events.push(Event { offset: next.end, kind: EventKind::NextEnd });
    }

    events.sort_unstable_by_key(|event| (event.offset, event.kind));
    events
}

/// Sweeps the line from left to right, cutting a new segment wherever the
/// line above or below starts or ends.
fn segment_line(info: &LineInfo, segments: &mut Vec<Segment>) {
    let current = info.current;

    // Only the first line can start after column 0, and it has no previous
    // line, so the top starts solid everywhere.
    let mut top = BorderStyle::Solid;
    let mut bottom = if current.is_last { BorderStyle::Solid } else { BorderStyle::None };
    let mut left = if current.is_first { BorderStyle::Solid } else { BorderStyle::Porous };
    let line_end_right = if current.is_last { BorderStyle::Solid } else { BorderStyle::Porous };

    let mut offset = current.start;
    let mut emitted = false;

    for event in line_events(info) {
        if event.offset > offset {
            let right = if event.offset == current.end {
                line_end_right
            } else {
                BorderStyle::None
            };
            segments.push(Segment::new(
                CharacterRange::on_line(info.line, offset, event.offset),
                DecorationStyle { top, right, bottom, left, is_whole_line: false },
            ));
            emitted = true;
            left = BorderStyle::None;
            offset = event.offset;
        }

        match event.kind {
            // Overlapping the line above: merge into it
            EventKind::PreviousStart => top = BorderStyle::None,
            // Past the end of the line above: dashed step
            EventKind::PreviousEnd => top = BorderStyle::Porous,
            EventKind::CurrentEnd => break,
            EventKind::NextEnd => {
                bottom = if info.next.is_some_and(|next| next.is_last) {
                    BorderStyle::Solid
                } else {
                    BorderStyle::Porous
                };
            }
        }
    }

    if !emitted {
        // Empty line
        segments.push(Segment::new(
            CharacterRange::on_line(info.line, current.start, current.end),
            DecorationStyle { top, right: line_end_right, bottom, left, is_whole_line: false },
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::GeneralizedRange;
    use crate::style::BorderStyle::{None as N, Porous as P, Solid as S};
    use proptest::prelude::*;

    /// `[line, [start, end], [top, right, bottom, left]]`
    type Expected = (u32, (u32, u32), [BorderStyle; 4]);

    /// First line spans `first`, every following line starts at column 0
    /// and ends at the given column.
    fn run(first: (u32, u32), rest: &[u32]) -> Vec<Expected> {
        let mut spans = vec![CharacterRange::on_line(0, first.0, first.1)];
        spans.extend(
            rest.iter()
                .enumerate()
                .map(|(index, &end)| CharacterRange::on_line(index as u32 + 1, 0, end)),
        );

        segment_line_spans(&spans)
            .into_iter()
            .map(|segment| match segment.range {
                GeneralizedRange::Character(range) => (
                    range.start.line,
                    (range.start.character, range.end.character),
                    segment.style.edges(),
                ),
                GeneralizedRange::Line(_) => panic!("character range produced a line segment"),
            })
            .collect()
    }

    #[test]
    fn test_single_line_is_fully_solid() {
        let segments = segment_character_range(CharacterRange::on_line(3, 2, 5), &[10u32; 4][..]);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].style, DecorationStyle::uniform(S));
        assert!(!segments[0].style.is_whole_line);
    }

    #[test]
    fn test_aligned_lines() {
        assert_eq!(
            run((0, 1), &[1]),
            vec![(0, (0, 1), [S, P, N, S]), (1, (0, 1), [N, S, S, P])]
        );
    }

    #[test]
    fn test_lines_meeting_at_a_corner() {
        assert_eq!(
            run((1, 2), &[1]),
            vec![(0, (1, 2), [S, P, S, S]), (1, (0, 1), [S, S, S, P])]
        );
    }

    #[test]
    fn test_partial_overlap() {
        assert_eq!(
            run((1, 3), &[2]),
            vec![
                (0, (1, 2), [S, N, N, S]),
                (0, (2, 3), [S, P, S, N]),
                (1, (0, 1), [S, N, S, P]),
                (1, (1, 2), [N, S, S, N]),
            ]
        );
    }

    #[test]
    fn test_empty_lines() {
        assert_eq!(
            run((0, 0), &[0, 0]),
            vec![
                (0, (0, 0), [S, P, N, S]),
                (1, (0, 0), [P, P, N, P]),
                (2, (0, 0), [P, S, S, P]),
            ]
        );
    }

    #[test]
    fn test_disjoint_columns() {
        assert_eq!(
            run((2, 3), &[1]),
            vec![(0, (2, 3), [S, P, S, S]), (1, (0, 1), [S, S, S, P])]
        );
    }

    #[test]
    fn test_wide_middle_line() {
        assert_eq!(
            run((1, 3), &[4, 2]),
            vec![
                (0, (1, 3), [S, P, N, S]),
                (1, (0, 1), [S, N, N, P]),
                (1, (1, 2), [N, N, N, N]),
                (1, (2, 3), [N, N, S, N]),
                (1, (3, 4), [P, P, S, N]),
                (2, (0, 2), [N, S, S, P]),
            ]
        );
    }

    #[test]
    fn test_narrowing_last_line() {
        assert_eq!(
            run((0, 2), &[1]),
            vec![
                (0, (0, 1), [S, N, N, S]),
                (0, (1, 2), [S, P, S, N]),
                (1, (0, 1), [N, S, S, P]),
            ]
        );
    }

    #[test]
    fn test_staircase_down_to_empty_line() {
        assert_eq!(
            run((0, 2), &[1, 0]),
            vec![
                (0, (0, 1), [S, N, N, S]),
                (0, (1, 2), [S, P, P, N]),
                (1, (0, 1), [N, P, S, P]),
                (2, (0, 0), [N, S, S, P]),
            ]
        );
    }

    #[test]
    fn test_two_line_range_partial_overlap() {
        // Line 0 columns [2, 5), line 1 columns [0, 3)
        let lines = vec![5u32, 9];
        let segments = segment_character_range(CharacterRange::from_coords(0, 2, 1, 3), &lines);

        let first_line: Vec<_> = segments
            .iter()
            .filter(|s| s.range.line_span().0 == 0)
            .collect();
        assert!(first_line.iter().all(|s| s.style.top == S));
        assert_eq!(first_line[0].style.left, S);
        assert_eq!(first_line.last().unwrap().style.right, P);
        assert!(first_line.iter().any(|s| s.style.bottom == N));
        assert!(first_line.iter().any(|s| s.style.bottom == S));

        let last_line: Vec<_> = segments
            .iter()
            .filter(|s| s.range.line_span().0 == 1)
            .collect();
        assert!(last_line.iter().all(|s| s.style.bottom == S));
        assert_eq!(last_line.last().unwrap().style.right, S);
    }

    #[test]
    fn test_split_uses_line_lengths() {
        let lines = vec![14u32, 16, 0, 3, 1];
        let spans = split_into_lines(CharacterRange::from_coords(0, 4, 4, 1), &lines);
        assert_eq!(
            spans,
            vec![
                CharacterRange::on_line(0, 4, 14),
                CharacterRange::on_line(1, 0, 16),
                CharacterRange::on_line(2, 0, 0),
                CharacterRange::on_line(3, 0, 3),
                CharacterRange::on_line(4, 0, 1),
            ]
        );
    }

    #[test]
    fn test_starts_at_line_end_and_ends_at_column_zero() {
        let lines = vec![5u32, 4, 9];
        let range = CharacterRange::from_coords(0, 5, 2, 0);
        let segments = segment_character_range(range, &lines);

        let actual: Vec<_> = segments
            .iter()
            .map(|segment| (segment.range, segment.style.edges()))
            .collect();
        assert_eq!(
            actual,
            vec![
                (GeneralizedRange::character(0, 5, 0, 5), [S, P, P, S]),
                (GeneralizedRange::character(1, 0, 1, 4), [S, P, S, P]),
                (GeneralizedRange::character(2, 0, 2, 0), [N, S, S, P]),
            ]
        );
    }

    fn arb_multiline() -> impl Strategy<Value = (Vec<u32>, CharacterRange)> {
        prop::collection::vec(0u32..8, 2..7).prop_flat_map(|lengths| {
            let last = lengths.len() - 1;
            let first_len = lengths[0];
            let last_len = lengths[last];
            (Just(lengths), 0..=first_len, 0..=last_len).prop_map(move |(lengths, start, end)| {
                (lengths, CharacterRange::from_coords(0, start, last as u32, end))
            })
        })
    }

    fn columns(segment: &Segment) -> (u32, u32, u32) {
        match segment.range {
            GeneralizedRange::Character(range) => {
                assert!(range.is_single_line());
                (range.start.line, range.start.character, range.end.character)
            }
            GeneralizedRange::Line(_) => panic!("unexpected line segment"),
        }
    }

    proptest! {
        #[test]
        fn prop_segments_tile_each_line((lengths, range) in arb_multiline()) {
            let spans = split_into_lines(range, &lengths);
            let segments = segment_character_range(range, &lengths);

            for span in &spans {
                let mut on_line: Vec<_> = segments
                    .iter()
                    .map(columns)
                    .filter(|(line, _, _)| *line == span.start.line)
                    .collect();
                on_line.sort();

                prop_assert!(!on_line.is_empty());
                prop_assert_eq!(on_line[0].1, span.start.character);
                prop_assert_eq!(on_line.last().unwrap().2, span.end.character);
                for pair in on_line.windows(2) {
                    prop_assert_eq!(pair[0].2, pair[1].1, "gap or overlap on line {}", span.start.line);
                    prop_assert!(pair[1].1 < pair[1].2);
                }
            }
        }

        #[test]
        fn prop_outer_edges_are_solid((lengths, range) in arb_multiline()) {
            let segments = segment_character_range(range, &lengths);
            let last_line = range.end.line;

            for segment in &segments {
                let (line, _, _) = columns(segment);
                if line == 0 {
                    prop_assert_eq!(segment.style.top, S);
                }
                if line == last_line {
                    prop_assert_eq!(segment.style.bottom, S);
                }
                prop_assert!(!segment.style.is_whole_line);
            }

            let first = segments.first().unwrap();
            prop_assert_eq!(first.style.left, S);
            let last = segments.last().unwrap();
            prop_assert_eq!(last.style.right, S);
        }

        #[test]
        fn prop_open_top_edges_follow_line_above((lengths, range) in arb_multiline()) {
            let spans = split_into_lines(range, &lengths);
            let segments = segment_character_range(range, &lengths);

            for segment in &segments {
                let (line, start, end) = columns(segment);
                if line == 0 {
                    continue;
                }
                let above = spans[line as usize - 1];
                match segment.style.top {
                    BorderStyle::None => {
                        prop_assert!(start >= above.start.character && end <= above.end.character);
                    }
                    BorderStyle::Porous => prop_assert!(start >= above.end.character),
                    BorderStyle::Solid => prop_assert!(end <= above.start.character),
                }
            }
        }

        #[test]
        fn prop_open_bottom_edges_follow_line_below((lengths, range) in arb_multiline()) {
            let spans = split_into_lines(range, &lengths);
            let segments = segment_character_range(range, &lengths);

            for segment in &segments {
                let (line, start, end) = columns(segment);
                if line == range.end.line {
                    continue;
                }
                let below = spans[line as usize + 1];
                match segment.style.bottom {
                    BorderStyle::None => prop_assert!(end <= below.end.character),
                    _ => prop_assert!(start >= below.end.character),
                }
            }
        }
    }
}
