//! Math classification and the delimiter conventions that produce it.

use std::fmt;
use std::str::FromStr;

use crate::ConvertError;

/// Classification of a math span.
///
/// Decided solely by the convention that matched, never by the content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MathKind {
    /// Math rendered within a line of text, canonical form `$...$`.
    Inline,
    /// Math rendered as its own block, canonical form `$$...$$`.
    Display,
}

impl MathKind {
    /// Lowercase name, suitable for CSS classes and annotations.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Display => "display",
        }
    }

    /// Canonical opening delimiter.
    #[must_use]
    pub fn open(self) -> &'static str {
        match self {
            Self::Inline => "$",
            Self::Display => "$$",
        }
    }

    /// Canonical closing delimiter.
    #[must_use]
    pub fn close(self) -> &'static str {
        self.open()
    }

    /// Wrap `content` in this kind's canonical delimiters.
    ///
    /// # Example
    ///
    /// ```
    /// use math_itex::MathKind;
    ///
    /// assert_eq!(MathKind::Inline.wrap("x"), "$x$");
    /// assert_eq!(MathKind::Display.wrap("x"), "$$x$$");
    /// ```
    #[must_use]
    pub fn wrap(self, content: &str) -> String {
        let mut out = String::with_capacity(content.len() + 2 * self.open().len());
        self.wrap_into(&mut out, content);
        out
    }

    pub(crate) fn wrap_into(self, out: &mut String, content: &str) {
        out.push_str(self.open());
        out.push_str(content);
        out.push_str(self.close());
    }
}

impl fmt::Display for MathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the supported ways of writing math in TeX-family text.
///
/// | Convention | Opening | Closing | Kind |
/// |---|---|---|---|
/// | [`Dollar`](Self::Dollar) | `$` | `$` | inline |
/// | [`Paren`](Self::Paren) | `\(` | `\)` | inline |
/// | [`MathEnv`](Self::MathEnv) | `\begin{math}` | `\end{math}` | inline |
/// | [`DoubleDollar`](Self::DoubleDollar) | `$$` | `$$` | display |
/// | [`Bracket`](Self::Bracket) | `\[` | `\]` | display |
/// | [`Equation`](Self::Equation) | `\begin{equation}` | `\end{equation}` | display |
/// | [`DisplayMath`](Self::DisplayMath) | `\begin{displaymath}` | `\end{displaymath}` | display |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Convention {
    /// `$...$`
    Dollar,
    /// `\(...\)`
    Paren,
    /// `\begin{math}...\end{math}`
    MathEnv,
    /// `$$...$$`
    DoubleDollar,
    /// `\[...\]`
    Bracket,
    /// `\begin{equation}...\end{equation}`
    Equation,
    /// `\begin{displaymath}...\end{displaymath}`
    DisplayMath,
}

impl Convention {
    /// All conventions, in no particular precedence.
    pub const ALL: [Self; 7] = [
        Self::Dollar,
        Self::Paren,
        Self::MathEnv,
        Self::DoubleDollar,
        Self::Bracket,
        Self::Equation,
        Self::DisplayMath,
    ];

    /// Classification produced by this convention.
    #[must_use]
    pub fn kind(self) -> MathKind {
        match self {
            Self::Dollar | Self::Paren | Self::MathEnv => MathKind::Inline,
            Self::DoubleDollar | Self::Bracket | Self::Equation | Self::DisplayMath => {
                MathKind::Display
            }
        }
    }

    /// Opening marker as written in the input.
    #[must_use]
    pub fn open(self) -> &'static str {
        match self {
            Self::Dollar => "$",
            Self::Paren => r"\(",
            Self::MathEnv => r"\begin{math}",
            Self::DoubleDollar => "$$",
            Self::Bracket => r"\[",
            Self::Equation => r"\begin{equation}",
            Self::DisplayMath => r"\begin{displaymath}",
        }
    }

    /// Closing marker as written in the input.
    #[must_use]
    pub fn close(self) -> &'static str {
        match self {
            Self::Dollar => "$",
            Self::Paren => r"\)",
            Self::MathEnv => r"\end{math}",
            Self::DoubleDollar => "$$",
            Self::Bracket => r"\]",
            Self::Equation => r"\end{equation}",
            Self::DisplayMath => r"\end{displaymath}",
        }
    }

    /// Snake-case name, the inverse of [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Dollar => "dollar",
            Self::Paren => "paren",
            Self::MathEnv => "math_env",
            Self::DoubleDollar => "double_dollar",
            Self::Bracket => "bracket",
            Self::Equation => "equation",
            Self::DisplayMath => "display_math",
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Convention {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|convention| convention.name() == s)
            .ok_or_else(|| ConvertError::UnknownConvention(s.to_owned()))
    }
}
