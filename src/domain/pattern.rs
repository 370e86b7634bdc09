//! Wildcard file-name patterns (`*` and `?` only).
//!
//! Matching is done here rather than through a platform globbing API so
//! the same pattern behaves the same on every host:
//!
//! - `*` matches zero or more characters
//! - `?` matches exactly one character
//! - every other character matches itself
//!
//! There are no character classes, no escapes and no `**`. A pattern is
//! matched against the whole file name, extension included. Matching is
//! case-insensitive by default, following the case-insensitive file
//! systems this behavior was first defined on; [`MatchCase::Sensitive`]
//! opts into exact comparison.

use std::fmt;

/// Case handling for wildcard matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchCase {
    /// Characters are compared after Unicode lowercasing.
    #[default]
    Insensitive,
    Sensitive,
}

impl MatchCase {
    pub fn from_sensitive(case_sensitive: bool) -> Self {
        if case_sensitive {
            MatchCase::Sensitive
        } else {
            MatchCase::Insensitive
        }
    }

    /// Compares one pattern character with one name character.
    ///
    /// Folding is per character, so `?` still consumes exactly one
    /// character of the name even when its lowercase form is longer.
    fn chars_eq(self, a: char, b: char) -> bool {
        match self {
            MatchCase::Sensitive => a == b,
            MatchCase::Insensitive => a == b || a.to_lowercase().eq(b.to_lowercase()),
        }
    }
}

/// A compiled wildcard pattern.
///
/// # Examples
///
/// ```
/// use filepaths::domain::{MatchCase, WildcardPattern};
///
/// let pattern = WildcardPattern::new("testFile?.json");
/// assert!(pattern.matches("testFile1.json"));
/// assert!(pattern.matches("TESTFILE2.JSON"));
/// assert!(!pattern.matches("testFile10.json"));
///
/// let strict = pattern.with_case(MatchCase::Sensitive);
/// assert!(!strict.matches("TESTFILE2.JSON"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct WildcardPattern {
    raw: String,
    chars: Vec<char>,
    case: MatchCase,
}

impl WildcardPattern {
    /// Creates a case-insensitive pattern.
    pub fn new(pattern: &str) -> Self {
        Self::with_match_case(pattern, MatchCase::default())
    }

    pub fn with_match_case(pattern: &str, case: MatchCase) -> Self {
        Self {
            raw: pattern.to_string(),
            chars: pattern.chars().collect(),
            case,
        }
    }

    /// Returns a copy of this pattern using `case`.
    pub fn with_case(&self, case: MatchCase) -> Self {
        Self::with_match_case(&self.raw, case)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn match_case(&self) -> MatchCase {
        self.case
    }

    /// Returns true if `name` matches the whole pattern.
    pub fn matches(&self, name: &str) -> bool {
        let name: Vec<char> = name.chars().collect();
        wildcard_match(&self.chars, &name, self.case)
    }
}

impl fmt::Display for WildcardPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl fmt::Debug for WildcardPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WildcardPattern(\"{}\", {:?})", self.raw, self.case)
    }
}

/// Iterative matcher that backtracks only to the most recent `*`.
fn wildcard_match(pattern: &[char], name: &[char], case: MatchCase) -> bool {
    let (mut p, mut n) = (0, 0);
    let mut star: Option<usize> = None;
    let mut resume = 0;

    while n < name.len() {
        match pattern.get(p) {
            Some('*') => {
                star = Some(p);
                resume = n;
                p += 1;
            }
            Some('?') => {
                p += 1;
                n += 1;
            }
            Some(&c) if case.chars_eq(c, name[n]) => {
                p += 1;
                n += 1;
            }
            _ => match star {
                Some(s) => {
                    p = s + 1;
                    resume += 1;
                    n = resume;
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}
