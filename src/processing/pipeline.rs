//! Extract, validate, sort and render in one pass.

use super::extract::extract_candidates;
use super::highlight::{segments, Segment};
use super::sort::sort_records;
use super::validate::{validate, PrefixPolicy};
use crate::models::{AddressRecord, MatchSpan};
use crate::output::{render, OutputFormat, Summary};

/// Everything one pass over a text produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    /// Valid records, sorted.
    pub records: Vec<AddressRecord>,
    /// `records` rendered in the requested format.
    pub rendered: String,
    /// Byte offsets of the tokens that validated, in source order.
    /// [`MatchSpan::char_range`] gives character offsets.
    pub spans: Vec<MatchSpan>,
    /// The whole source text split into plain / matched / rejected slices.
    pub segments: Vec<Segment>,
    pub summary: Summary,
}

/// Run the full pipeline over `text`.
///
/// Never fails: tokens that do not validate are dropped and an input with no
/// addresses yields an empty rendering.
pub fn process(text: &str, format: OutputFormat, policy: PrefixPolicy) -> Processed {
    let candidates = extract_candidates(text);

    let mut records = Vec::new();
    let mut spans = Vec::new();
    let mut classified = Vec::with_capacity(candidates.len());
    for candidate in &candidates {
        match validate(candidate.text, policy) {
            Some(record) => {
                records.push(record);
                spans.push(candidate.span);
                classified.push((candidate.span, true));
            }
            None => classified.push((candidate.span, false)),
        }
    }
    log::debug!(
        "process() candidates={} valid={} rejected={}",
        candidates.len(),
        records.len(),
        candidates.len() - records.len()
    );

    let records = sort_records(records);
    let rendered = render(&records, format);
    let summary = Summary::from_records(&records);

    Processed {
        records,
        rendered,
        spans,
        segments: segments(text, &classified),
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::SegmentKind;

    #[test]
    fn test_process_mixed_text() {
        let text = "192.168.1.5, 10.0.0.0/24 and ::1 plus garbage-text-999";
        let p = process(text, OutputFormat::OnePerLine, PrefixPolicy::Lenient);
        assert_eq!(p.rendered, "10.0.0.0/24\n192.168.1.5/32\n::1/128\n");
        assert_eq!(p.summary, Summary { total: 3, v4: 2, v6: 1 });
        let spans: Vec<&str> = p.spans.iter().map(|s| &text[s.range()]).collect();
        assert_eq!(spans, vec!["192.168.1.5", "10.0.0.0/24", "::1"]);
        assert!(p
            .segments
            .iter()
            .any(|s| s.kind == SegmentKind::Rejected && &text[s.span.range()] == "999"));
    }

    #[test]
    fn test_process_spans_are_byte_offsets() {
        let text = "→ 10.0.0.1 ∙ ::1";
        let p = process(text, OutputFormat::OnePerLine, PrefixPolicy::Lenient);
        assert_eq!(p.spans, vec![MatchSpan::new(4, 12), MatchSpan::new(17, 20)]);
        assert_eq!(&text[p.spans[1].range()], "::1");
        assert_eq!(p.spans[0].char_range(text), 2..10);
        assert_eq!(p.spans[1].char_range(text), 13..16);
    }

    #[test]
    fn test_process_strict_drops_wide_prefix() {
        let text = "1.2.3.4/999 5.6.7.8/24";
        let lenient = process(text, OutputFormat::SpaceDelimited, PrefixPolicy::Lenient);
        assert_eq!(lenient.rendered, "1.2.3.4/999 5.6.7.8/24");
        let strict = process(text, OutputFormat::SpaceDelimited, PrefixPolicy::Strict);
        assert_eq!(strict.rendered, "5.6.7.8/24");
        assert_eq!(strict.spans.len(), 1);
    }

    #[test]
    fn test_process_empty() {
        let p = process("", OutputFormat::F5BigIp, PrefixPolicy::Lenient);
        assert!(p.records.is_empty());
        assert!(p.spans.is_empty());
        assert!(p.segments.is_empty());
        assert_eq!(p.rendered, "");
        assert!(p.summary.is_empty());
    }
}
