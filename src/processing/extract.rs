//! Candidate token scanner.
//!
//! A permissive lexical pass: anything made of hex digits, `.` and `:`, with an
//! optional `/` and up to three digits, is a candidate. Validation is separate.

use crate::models::MatchSpan;
use regex::Regex;
use std::sync::OnceLock;

/// Regex for runs of hex digits, dots and colons with an optional `/nnn`.
static CANDIDATE_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_candidate_regex() -> &'static Regex {
    CANDIDATE_REGEX
        .get_or_init(|| Regex::new(r"[0-9A-Fa-f:.]+(?:/[0-9]{1,3})?").expect("Invalid Regex"))
}

/// A token admitted by the scanner, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub text: &'a str,
    pub span: MatchSpan,
}

/// Scan `text` left to right for candidate tokens, in source order.
///
/// Trailing `.` and `:` are stripped from each match and the span shrinks with
/// them. Matches that strip down to nothing are skipped.
pub fn extract_candidates(text: &str) -> Vec<Candidate<'_>> {
    let candidates: Vec<Candidate> = get_candidate_regex()
        .find_iter(text)
        .filter_map(|m| {
            let token = m.as_str().trim_end_matches(['.', ':']);
            if token.is_empty() {
                return None;
            }
            Some(Candidate {
                text: token,
                span: MatchSpan::new(m.start(), m.start() + token.len()),
            })
        })
        .collect();
    log::trace!("extract_candidates() found {} candidates", candidates.len());
    candidates
}
