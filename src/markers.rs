use aho_corasick::{AhoCorasick, MatchKind};

use super::error::Result;

/// Substring tokens the classifier looks for in a User-Agent header.
///
/// Discriminants index into the `MarkerSet` bitset and into `MARKER_TOKENS`;
/// keep the two in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Marker {
    Ipad = 0,
    Tablet,
    Kindle,
    Android,
    Mobile,
    Iphone,
    Ipod,
    Blackberry,
    WindowsPhone,
    OperaMini,
    Webos,
    Windows,
    MacOs,
    Linux,
}

/// Token table in `Marker` discriminant order. Scan order is irrelevant;
/// priority between tokens lives in the classifier's decision passes.
const MARKER_TOKENS: &[(&str, Marker)] = &[
    ("ipad", Marker::Ipad),
    ("tablet", Marker::Tablet),
    ("kindle", Marker::Kindle),
    ("android", Marker::Android),
    ("mobile", Marker::Mobile),
    ("iphone", Marker::Iphone),
    ("ipod", Marker::Ipod),
    ("blackberry", Marker::Blackberry),
    ("windows phone", Marker::WindowsPhone),
    ("opera mini", Marker::OperaMini),
    ("webos", Marker::Webos),
    ("windows", Marker::Windows),
    ("mac os", Marker::MacOs),
    ("linux", Marker::Linux),
];

/// Set of markers found by one scan, stored as a bitset.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MarkerSet {
    bits: u16,
}

impl MarkerSet {
    pub fn contains(&self, marker: Marker) -> bool {
        self.bits & (1 << marker as u16) != 0
    }

    pub fn contains_any(&self, markers: &[Marker]) -> bool {
        markers.iter().any(|&m| self.contains(m))
    }

    fn insert(&mut self, marker: Marker) {
        self.bits |= 1 << marker as u16;
    }
}

/// Single-pass scanner that records every marker token present in a
/// User-Agent string.
///
/// Tokens are matched ASCII-case-insensitively, which is equivalent to the
/// lowercase-then-contains reading of the header since all tokens are ASCII.
/// Overlapping iteration is required because some tokens nest
/// (`windows phone` contains `windows`); non-overlapping matching would
/// report only the shorter token.
pub(crate) struct MarkerScanner {
    automaton: AhoCorasick,
}

impl MarkerScanner {
    pub fn build() -> Result<Self> {
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .build(MARKER_TOKENS.iter().map(|(token, _)| token))?;
        Ok(Self { automaton })
    }

    pub fn scan(&self, ua: &str) -> MarkerSet {
        let mut found = MarkerSet::default();
        for m in self.automaton.find_overlapping_iter(ua) {
            found.insert(MARKER_TOKENS[m.pattern().as_usize()].1);
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(ua: &str) -> MarkerSet {
        MarkerScanner::build().unwrap().scan(ua)
    }

    #[test]
    fn tokens_match_case_insensitively() {
        let found = scan("IPAD Kindle WebOS");
        assert!(found.contains(Marker::Ipad));
        assert!(found.contains(Marker::Kindle));
        assert!(found.contains(Marker::Webos));
        assert!(!found.contains(Marker::Android));
    }

    #[test]
    fn nested_tokens_are_both_reported() {
        let found = scan("Windows Phone 8.0");
        assert!(found.contains(Marker::Windows));
        assert!(found.contains(Marker::WindowsPhone));
    }

    #[test]
    fn windows_alone_does_not_set_windows_phone() {
        let found = scan("Windows NT 10.0");
        assert!(found.contains(Marker::Windows));
        assert!(!found.contains(Marker::WindowsPhone));
    }

    #[test]
    fn no_tokens_yields_empty_set() {
        let found = scan("curl/8.4.0");
        assert!(!found.contains_any(&[Marker::Mobile, Marker::Tablet, Marker::Linux]));
    }
}
