// parse.rs - Text to terrain
//
// Tokens are separated by commas, semicolons or whitespace. A token that is
// not a finite, non-negative number is dropped and parsing carries on, so a
// typo shortens the profile instead of rejecting it.

use log::warn;

use super::Terrain;

/// A token that was dropped during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedToken {
    /// Byte offset of the token in the input
    pub offset: usize,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub skipped: Vec<SkippedToken>,
}

impl ParseReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

#[inline]
fn is_separator(c: char) -> bool {
    c == ',' || c == ';' || c.is_whitespace()
}

/// Split into `(offset, token)` pairs, ignoring empty fragments.
fn tokens(text: &str) -> Vec<(usize, &str)> {
    let mut start = None;
    let mut out = Vec::new();
    for (i, c) in text.char_indices() {
        match (is_separator(c), start) {
            (true, Some(s)) => {
                out.push((s, &text[s..i]));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        out.push((s, &text[s..]));
    }
    out
}

#[inline]
fn parse_elevation(token: &str) -> Option<f64> {
    let value: f64 = token.parse().ok()?;
    // `-0` parses fine; normalise it so elevations never carry a sign bit
    (value.is_finite() && value >= 0.0).then_some(value + 0.0)
}

/// Parse a terrain, returning which tokens were dropped.
pub fn parse_terrain_with_report(text: &str) -> (Terrain, ParseReport) {
    let mut elevations = Vec::new();
    let mut report = ParseReport::default();

    for (offset, token) in tokens(text) {
        match parse_elevation(token) {
            Some(h) => elevations.push(h),
            None => {
                warn!("skipping malformed terrain token {token:?} at byte {offset}");
                report.skipped.push(SkippedToken { offset, text: token.to_string() });
            }
        }
    }

    (Terrain::from_valid(elevations), report)
}

pub fn parse_terrain(text: &str) -> Terrain {
    parse_terrain_with_report(text).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_separated() {
        assert_eq!(
            parse_terrain("3,1,6,4,8,9").elevations(),
            &[3.0, 1.0, 6.0, 4.0, 8.0, 9.0]
        );
    }

    #[test]
    fn mixed_separators_and_padding() {
        let t = parse_terrain("  1.5, 2 ;\t3\n\n4  ");
        assert_eq!(t.elevations(), &[1.5, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(parse_terrain("").is_empty());
        assert!(parse_terrain(" , ,, ").is_empty());
    }

    #[test]
    fn malformed_tokens_are_skipped_and_reported() {
        let (t, report) = parse_terrain_with_report("1 2 x 4");
        assert_eq!(t.elevations(), &[1.0, 2.0, 4.0]);
        assert_eq!(
            report.skipped,
            vec![SkippedToken { offset: 4, text: "x".into() }]
        );
    }

    #[test]
    fn negative_and_non_finite_are_rejected() {
        let (t, report) = parse_terrain_with_report("-1,NaN,inf,2,-0");
        assert_eq!(t.elevations(), &[2.0, 0.0]);
        assert!(t.elevations()[1].is_sign_positive());
        assert_eq!(report.skipped.len(), 3);
    }

    #[test]
    fn clean_report() {
        let (_, report) = parse_terrain_with_report("0 0 0");
        assert!(report.is_clean());
    }
}
