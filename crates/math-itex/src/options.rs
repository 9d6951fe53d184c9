//! Converter options.
//!
//! With the `serde` feature, [`ConvertOptions`] deserializes from an embedding
//! application's own config, for example a TOML table:
//!
//! ```toml
//! [math]
//! conventions = ["dollar", "double_dollar", "bracket"]
//! escapes = true
//! ```

use crate::Convention;

/// Options for building a [`Converter`](crate::Converter).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ConvertOptions {
    /// Input conventions to recognize. Precedence is fixed regardless of order.
    pub conventions: Vec<Convention>,
    /// Treat `\$` and `\\` outside math as literal text that never opens math.
    pub escapes: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            conventions: Convention::ALL.to_vec(),
            escapes: true,
        }
    }
}

impl ConvertOptions {
    /// Options recognizing every convention.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recognize only the given conventions.
    #[must_use]
    pub fn with_conventions(mut self, conventions: impl IntoIterator<Item = Convention>) -> Self {
        self.conventions = Vec::new();
        for convention in conventions {
            if !self.conventions.contains(&convention) {
                self.conventions.push(convention);
            }
        }
        self
    }

    /// Stop recognizing `convention`.
    ///
    /// # Example
    ///
    /// ```
    /// use math_itex::{ConvertOptions, Convention};
    ///
    /// // Prose with prices: leave single dollars alone.
    /// let options = ConvertOptions::new().without(Convention::Dollar);
    /// assert!(!options.conventions.contains(&Convention::Dollar));
    /// ```
    #[must_use]
    pub fn without(mut self, convention: Convention) -> Self {
        self.conventions.retain(|c| *c != convention);
        self
    }

    /// Enable or disable escape handling outside math.
    #[must_use]
    pub fn escapes(mut self, escapes: bool) -> Self {
        self.escapes = escapes;
        self
    }

    /// Whether the options match the defaults, so the shared scanner applies.
    pub(crate) fn is_default_set(&self) -> bool {
        self.escapes && Convention::ALL.iter().all(|c| self.conventions.contains(c))
    }
}
