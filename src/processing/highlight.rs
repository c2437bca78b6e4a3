//! Classification of the source text for highlighted display.

use crate::models::MatchSpan;

/// What a slice of the source text is.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    /// Text the scanner did not pick up.
    Plain,
    /// A candidate that validated into a record.
    Matched,
    /// A candidate the validator rejected.
    Rejected,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Segment {
    pub span: MatchSpan,
    pub kind: SegmentKind,
}

/// Split `text` into consecutive segments covering every byte.
///
/// `candidates` are `(span, is_valid)` pairs in source order, non-overlapping.
pub fn segments(text: &str, candidates: &[(MatchSpan, bool)]) -> Vec<Segment> {
    let mut out = Vec::with_capacity(candidates.len() * 2 + 1);
    let mut pos = 0;
    for (span, valid) in candidates {
        if span.start > pos {
            out.push(Segment {
                span: MatchSpan::new(pos, span.start),
                kind: SegmentKind::Plain,
            });
        }
        out.push(Segment {
            span: *span,
            kind: if *valid {
                SegmentKind::Matched
            } else {
                SegmentKind::Rejected
            },
        });
        pos = span.end;
    }
    if pos < text.len() {
        out.push(Segment {
            span: MatchSpan::new(pos, text.len()),
            kind: SegmentKind::Plain,
        });
    }
    out
}
