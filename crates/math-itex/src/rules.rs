//! Ordered delimiter rule table.
//!
//! Rules are listed in precedence order. At any position of the input the
//! first rule that can match wins, so the longer `\begin{...}` forms come
//! before the bracket forms and `$$` comes before `$`.

use crate::Convention;

/// Content of every convention except `$`: shortest run up to the closing marker.
const LAZY_CONTENT: &str = ".*?";

/// Content of `$...$`: non-empty, no unescaped `$`, backslash escapes kept whole.
const DOLLAR_CONTENT: &str = r"(?:[^$\\]|\\.)+";

/// Escapes outside math that never open a span (`\$` and `\\`).
pub(crate) const ESCAPE_PATTERN: &str = r"(\\[\\$])";

/// A delimiter convention paired with the regex fragment that matches it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelimiterRule {
    /// Convention recognized by this rule.
    pub convention: Convention,
    content: &'static str,
}

impl DelimiterRule {
    const fn new(convention: Convention, content: &'static str) -> Self {
        Self {
            convention,
            content,
        }
    }

    /// Regex fragment with exactly one capture group holding the content.
    ///
    /// # Example
    ///
    /// ```
    /// use math_itex::{Convention, RULES};
    ///
    /// let rule = RULES
    ///     .iter()
    ///     .find(|rule| rule.convention == Convention::Bracket)
    ///     .unwrap();
    /// assert_eq!(rule.pattern(), r"\\\[(.*?)\\\]");
    /// ```
    #[must_use]
    pub fn pattern(&self) -> String {
        format!(
            "{}({}){}",
            regex::escape(self.convention.open()),
            self.content,
            regex::escape(self.convention.close())
        )
    }
}

/// All delimiter rules in precedence order.
pub const RULES: [DelimiterRule; 7] = [
    DelimiterRule::new(Convention::Equation, LAZY_CONTENT),
    DelimiterRule::new(Convention::DisplayMath, LAZY_CONTENT),
    DelimiterRule::new(Convention::MathEnv, LAZY_CONTENT),
    DelimiterRule::new(Convention::DoubleDollar, LAZY_CONTENT),
    DelimiterRule::new(Convention::Bracket, LAZY_CONTENT),
    DelimiterRule::new(Convention::Paren, LAZY_CONTENT),
    DelimiterRule::new(Convention::Dollar, DOLLAR_CONTENT),
];
