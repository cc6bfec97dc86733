// Phonetic code pair produced by the encoder.

use std::fmt;

/// A pair of phonetic codes for one word.
///
/// `primary` is the most likely pronunciation, `alternate` a second plausible
/// one (typically native vs. anglicized). Codes use the alphabet `A`-`Z` plus
/// `0` for a "TH"-like sound.
///
/// The alternate is never a copy of the primary: [`DualCode::new`] turns an
/// alternate equal to the primary into the empty string. Either code may be
/// empty when no sound was emitted to that stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DualCode {
    primary: String,
    alternate: String,
}

impl DualCode {
    /// Create a code pair, collapsing a redundant alternate.
    pub fn new(primary: impl Into<String>, alternate: impl Into<String>) -> Self {
        let primary = primary.into();
        let mut alternate = alternate.into();
        if alternate == primary {
            alternate.clear();
        }
        Self { primary, alternate }
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn alternate(&self) -> &str {
        &self.alternate
    }

    /// Returns `true` if a distinct, non-empty alternate code exists.
    pub fn has_alternate(&self) -> bool {
        !self.alternate.is_empty()
    }

    /// Iterate over the non-empty codes, primary first.
    ///
    /// Yields at most two items and never the same code twice.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        [self.primary.as_str(), self.alternate.as_str()]
            .into_iter()
            .filter(|c| !c.is_empty())
    }
}

impl fmt::Display for DualCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alternate.is_empty() {
            f.write_str(&self.primary)
        } else {
            write!(f, "{},{}", self.primary, self.alternate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_codes_are_kept() {
        let code = DualCode::new("RXRT", "RKRT");
        assert_eq!(code.primary(), "RXRT");
        assert_eq!(code.alternate(), "RKRT");
        assert!(code.has_alternate());
    }

    #[test]
    fn equal_alternate_collapses() {
        let code = DualCode::new("KMPR", "KMPR");
        assert_eq!(code.primary(), "KMPR");
        assert_eq!(code.alternate(), "");
        assert!(!code.has_alternate());
    }

    #[test]
    fn empty_primary_with_alternate() {
        let code = DualCode::new("", "R");
        assert_eq!(code.codes().collect::<Vec<_>>(), vec!["R"]);
    }

    #[test]
    fn codes_skips_empty() {
        assert_eq!(DualCode::new("JS", "HS").codes().collect::<Vec<_>>(), vec!["JS", "HS"]);
        assert_eq!(DualCode::new("KT", "").codes().collect::<Vec<_>>(), vec!["KT"]);
        assert_eq!(DualCode::default().codes().count(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(DualCode::new("XMT", "SMT").to_string(), "XMT,SMT");
        assert_eq!(DualCode::new("PRS", "").to_string(), "PRS");
    }
}
