//! Canonical math delimiters for TeX-flavored text.
//!
//! This crate finds math embedded in free text, classifies each span as
//! inline or display math, and rewrites it with canonical delimiters while
//! letting the caller transform the math content itself.
//!
//! # Conventions
//!
//! Seven input conventions are recognized:
//!
//! | Input | Output |
//! |---|---|
//! | `$...$`, `\(...\)`, `\begin{math}...\end{math}` | `$...$` |
//! | `$$...$$`, `\[...\]`, `\begin{equation}...\end{equation}`, `\begin{displaymath}...\end{displaymath}` | `$$...$$` |
//!
//! Math content is opaque: it is never parsed or validated. Unterminated
//! delimiters are left as plain text, so conversion never fails.
//!
//! # Matching
//!
//! All rules are compiled into one pattern and applied in a single left to
//! right pass. At any position the most specific rule wins (`$$` over `$`),
//! content ends at the nearest closing marker, and spans never overlap.
//! A single `$` marker never touches another `$`, so `$$...$$` is never split
//! into inline spans. Outside math, `\$` is a literal dollar and `\\` is a
//! line break that never starts `\[` (see `ConvertOptions::escapes`).
//!
//! # Example
//!
//! ```
//! use math_itex::{MathContext, MathKind};
//!
//! assert_eq!(math_itex::convert(r"\[a \ne 0\]"), r"$$a \ne 0$$");
//!
//! let output = math_itex::convert_with(r"Here we go: \(a \ne 0\)", |ctx: &MathContext<'_>| {
//!     ctx.content.to_uppercase()
//! });
//! assert_eq!(output, r"Here we go: $A \NE 0$");
//!
//! let kinds: Vec<MathKind> = math_itex::MathText::new("$0$ is not $$1 = 0$$")
//!     .matches()
//!     .map(|m| m.kind())
//!     .collect();
//! assert_eq!(kinds, [MathKind::Inline, MathKind::Display]);
//! ```

mod converter;
mod error;
mod kind;
mod options;
mod rules;
mod scanner;
mod transform;

pub use converter::{Converter, MathText};
pub use error::ConvertError;
pub use kind::{Convention, MathKind};
pub use options::ConvertOptions;
pub use rules::{DelimiterRule, RULES};
pub use scanner::{Matches, MathMatch, Scanner};
pub use transform::{Identity, MathContext, Transform, TryTransform};

/// Canonicalize math delimiters in `input`, leaving content unchanged.
#[must_use]
pub fn convert(input: &str) -> String {
    Converter::default().convert(input)
}

/// Canonicalize math delimiters in `input` and transform each span's content.
pub fn convert_with<T: Transform>(input: &str, transform: T) -> String {
    Converter::default().convert_with(input, transform)
}

/// Fallible [`convert_with`]; the first transform error is returned unchanged.
pub fn try_convert_with<T: TryTransform>(input: &str, transform: T) -> Result<String, T::Error> {
    Converter::default().try_convert_with(input, transform)
}
