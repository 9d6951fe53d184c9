//! Error types for converter construction.
//!
//! Conversion itself never fails: unterminated or malformed delimiters are
//! plain text. These errors only come from building a [`Converter`](crate::Converter)
//! out of invalid options.

/// Error while building a converter.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// Options enable no delimiter convention at all.
    #[error("no math delimiter conventions enabled")]
    NoConventions,

    /// Combined delimiter pattern failed to compile.
    ///
    /// Markers are always escaped, so only the regex size limit can trigger this.
    #[error("invalid delimiter pattern")]
    Pattern(#[from] regex::Error),

    /// Convention name not recognized.
    #[error("unknown math delimiter convention: {0}")]
    UnknownConvention(String),
}
