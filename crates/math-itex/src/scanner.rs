//! Single-pass scanner over all enabled delimiter rules.
//!
//! The enabled rules are compiled into one leftmost-first alternation, so a
//! single left-to-right pass yields an ordered, non-overlapping sequence of
//! matches across every convention.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::rules::{ESCAPE_PATTERN, RULES};
use crate::{ConvertError, Convention, MathKind};

/// Scanner for all conventions with escapes enabled.
static DEFAULT_SCANNER: LazyLock<Scanner> = LazyLock::new(|| {
    Scanner::new(&Convention::ALL, true).expect("built-in delimiter rules compile")
});

/// One alternative of the combined pattern. Capture group `i + 1` belongs to branch `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Branch {
    Escape,
    Rule(Convention),
}

/// A math span located in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MathMatch<'t> {
    /// Byte offset of the opening marker.
    pub start: usize,
    /// Byte offset just past the closing marker.
    pub end: usize,
    /// Content between the markers.
    pub content: &'t str,
    /// Convention that matched.
    pub convention: Convention,
}

impl MathMatch<'_> {
    /// Classification of this span.
    #[must_use]
    pub fn kind(&self) -> MathKind {
        self.convention.kind()
    }

    /// Byte range of the whole span, delimiters included.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Compiled delimiter rules.
#[derive(Debug, Clone)]
pub struct Scanner {
    regex: Regex,
    branches: Vec<Branch>,
}

impl Scanner {
    /// Compile a scanner for the given conventions.
    ///
    /// Precedence always follows [`RULES`]; the order of `conventions` is
    /// irrelevant. With `escapes`, `\$` and `\\` outside math are skipped as
    /// literal text.
    pub fn new(conventions: &[Convention], escapes: bool) -> Result<Self, ConvertError> {
        let mut branches = Vec::with_capacity(RULES.len() + 1);
        let mut alternatives = Vec::with_capacity(RULES.len() + 1);

        if escapes {
            branches.push(Branch::Escape);
            alternatives.push(ESCAPE_PATTERN.to_owned());
        }
        for rule in RULES {
            if conventions.contains(&rule.convention) {
                branches.push(Branch::Rule(rule.convention));
                alternatives.push(rule.pattern());
            }
        }

        if !branches
            .iter()
            .any(|branch| matches!(branch, Branch::Rule(_)))
        {
            return Err(ConvertError::NoConventions);
        }

        let regex = Regex::new(&format!("(?s){}", alternatives.join("|")))?;
        Ok(Self { regex, branches })
    }

    /// Shared scanner with every convention and escapes enabled.
    #[must_use]
    pub fn shared() -> &'static Self {
        &DEFAULT_SCANNER
    }

    /// Conventions this scanner recognizes, in precedence order.
    pub fn conventions(&self) -> impl Iterator<Item = Convention> + '_ {
        self.branches.iter().filter_map(|branch| match branch {
            Branch::Rule(convention) => Some(*convention),
            Branch::Escape => None,
        })
    }

    /// Iterate over math spans in `text`, left to right.
    ///
    /// # Example
    ///
    /// ```
    /// use math_itex::{Convention, Scanner};
    ///
    /// let found: Vec<_> = Scanner::shared()
    ///     .matches(r"$a$ and \[b\]")
    ///     .map(|m| (m.content, m.convention))
    ///     .collect();
    /// assert_eq!(
    ///     found,
    ///     vec![("a", Convention::Dollar), ("b", Convention::Bracket)]
    /// );
    /// ```
    pub fn matches<'s, 't>(&'s self, text: &'t str) -> Matches<'s, 't> {
        Matches {
            scanner: self,
            text,
            pos: 0,
        }
    }
}

/// Iterator over math spans, created by [`Scanner::matches`].
#[derive(Debug)]
pub struct Matches<'s, 't> {
    scanner: &'s Scanner,
    text: &'t str,
    /// End of the last consumed span or escape.
    pos: usize,
}

impl Matches<'_, '_> {
    /// Whether a `$...$` candidate at `start..end` touches another `$`.
    ///
    /// A `$` before the opener that no earlier span consumed, or a `$` right
    /// after the closer, belongs to a `$$` pair. Single-dollar markers never
    /// take part in one.
    fn touches_dollar(&self, start: usize, end: usize) -> bool {
        let bytes = self.text.as_bytes();
        (start > self.pos && bytes[start - 1] == b'$') || bytes.get(end) == Some(&b'$')
    }
}

impl<'t> Iterator for Matches<'_, 't> {
    type Item = MathMatch<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            let caps = self.scanner.regex.captures_at(self.text, self.pos)?;
            let whole = caps.get(0)?;
            let (branch, content) = self
                .scanner
                .branches
                .iter()
                .enumerate()
                .find_map(|(idx, branch)| caps.get(idx + 1).map(|group| (*branch, group)))?;

            match branch {
                Branch::Escape => self.pos = whole.end(),
                Branch::Rule(Convention::Dollar)
                    if self.touches_dollar(whole.start(), whole.end()) =>
                {
                    self.pos = whole.start() + 1;
                }
                Branch::Rule(convention) => {
                    self.pos = whole.end();
                    return Some(MathMatch {
                        start: whole.start(),
                        end: whole.end(),
                        content: content.as_str(),
                        convention,
                    });
                }
            }
        }
        None
    }
}
