//! Delimiter canonicalization.
//!
//! [`Converter`] scans text once, hands each math span to a transform and
//! rebuilds the text with canonical delimiters: `$...$` for inline math and
//! `$$...$$` for display math. Text outside math is copied verbatim.

use std::borrow::Cow;
use std::convert::Infallible;

use crate::{
    ConvertError, ConvertOptions, Identity, Matches, MathContext, Scanner, Transform, TryTransform,
};

/// Rewrites math spans to canonical delimiters.
///
/// A converter holds only compiled, immutable rules, so it can be shared
/// between threads and reused for any number of inputs.
///
/// # Example
///
/// ```
/// use math_itex::{Converter, MathContext};
///
/// let converter = Converter::default();
/// assert_eq!(converter.convert(r"\(a \ne 0\)"), r"$a \ne 0$");
///
/// let output = converter.convert_with(r"Here we go: \[a \ne 0\]", |ctx: &MathContext<'_>| {
///     ctx.content.to_uppercase()
/// });
/// assert_eq!(output, r"Here we go: $$A \NE 0$$");
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    scanner: Cow<'static, Scanner>,
}

impl Default for Converter {
    fn default() -> Self {
        Self {
            scanner: Cow::Borrowed(Scanner::shared()),
        }
    }
}

impl Converter {
    /// Build a converter from options.
    ///
    /// Default options reuse the process-wide compiled rules.
    pub fn new(options: &ConvertOptions) -> Result<Self, ConvertError> {
        if options.is_default_set() {
            return Ok(Self::default());
        }
        let scanner = Scanner::new(&options.conventions, options.escapes)?;
        Ok(Self {
            scanner: Cow::Owned(scanner),
        })
    }

    /// Canonicalize delimiters without touching content.
    #[must_use]
    pub fn convert(&self, input: &str) -> String {
        self.convert_with(input, Identity)
    }

    /// Canonicalize delimiters and replace each span's content with the
    /// transform's result.
    pub fn convert_with<T: Transform>(&self, input: &str, mut transform: T) -> String {
        let result = self.rewrite(input, |output, ctx| {
            let content = transform.transform(&ctx);
            ctx.kind.wrap_into(output, &content);
            Ok::<(), Infallible>(())
        });
        match result {
            Ok(output) => output,
            Err(never) => match never {},
        }
    }

    /// Fallible [`convert_with`](Self::convert_with).
    ///
    /// Stops at the first transform error and returns it unchanged; no
    /// partially rewritten text is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use math_itex::{Converter, MathContext};
    ///
    /// let result = Converter::default().try_convert_with("$x$ and $y$", |ctx: &MathContext<'_>| {
    ///     if ctx.content == "y" {
    ///         Err("y is not allowed")
    ///     } else {
    ///         Ok(ctx.content.to_owned())
    ///     }
    /// });
    /// assert_eq!(result, Err("y is not allowed"));
    /// ```
    pub fn try_convert_with<T: TryTransform>(
        &self,
        input: &str,
        mut transform: T,
    ) -> Result<String, T::Error> {
        self.rewrite::<T::Error>(input, |output, ctx| {
            let content = transform.try_transform(&ctx)?;
            ctx.kind.wrap_into(output, &content);
            Ok(())
        })
    }

    /// Replace each whole span, delimiters included, with the transform's result.
    ///
    /// Use [`MathContext::canonical`] to get the span with canonical
    /// delimiters, for example to wrap it in markup.
    ///
    /// # Example
    ///
    /// ```
    /// use math_itex::{Converter, MathContext};
    ///
    /// let output = Converter::default().convert_spans(r"\(x\)", |ctx: &MathContext<'_>| {
    ///     format!(r#"<span class="{}">{}</span>"#, ctx.kind, ctx.canonical())
    /// });
    /// assert_eq!(output, r#"<span class="inline">$x$</span>"#);
    /// ```
    pub fn convert_spans<T: Transform>(&self, input: &str, mut transform: T) -> String {
        let result = self.rewrite(input, |output, ctx| {
            output.push_str(&transform.transform(&ctx));
            Ok::<(), Infallible>(())
        });
        match result {
            Ok(output) => output,
            Err(never) => match never {},
        }
    }

    /// Locate math spans without rewriting anything.
    pub fn scan<'s, 't>(&'s self, input: &'t str) -> Matches<'s, 't> {
        self.scanner.matches(input)
    }

    /// Copy `input` into a fresh buffer, letting `emit` write each span.
    ///
    /// The buffer is only returned once every span has been emitted.
    fn rewrite<E>(
        &self,
        input: &str,
        mut emit: impl FnMut(&mut String, MathContext<'_>) -> Result<(), E>,
    ) -> Result<String, E> {
        let mut output = String::with_capacity(input.len());
        let mut last_end = 0;
        let mut count = 0usize;

        for span in self.scanner.matches(input) {
            tracing::trace!(
                convention = %span.convention,
                start = span.start,
                end = span.end,
                "Math span"
            );
            output.push_str(&input[last_end..span.start]);
            emit(&mut output, MathContext::new(span.content, span.convention))?;
            last_end = span.end;
            count += 1;
        }
        output.push_str(&input[last_end..]);

        tracing::debug!(input_len = input.len(), matches = count, "Canonicalized math delimiters");
        Ok(output)
    }
}

/// A piece of text to convert with the default rules.
///
/// # Example
///
/// ```
/// use math_itex::MathText;
///
/// assert_eq!(
///     MathText::new(r"\begin{equation}X\end{equation}").convert(),
///     "$$X$$"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MathText<'a> {
    input: &'a str,
    converter: Converter,
}

impl<'a> MathText<'a> {
    /// Wrap `input` for conversion with every convention enabled.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            converter: Converter::default(),
        }
    }

    /// Wrap `input` for conversion with custom options.
    pub fn with_options(input: &'a str, options: &ConvertOptions) -> Result<Self, ConvertError> {
        Ok(Self {
            input,
            converter: Converter::new(options)?,
        })
    }

    /// See [`Converter::convert`].
    #[must_use]
    pub fn convert(&self) -> String {
        self.converter.convert(self.input)
    }

    /// See [`Converter::convert_with`].
    pub fn convert_with<T: Transform>(&self, transform: T) -> String {
        self.converter.convert_with(self.input, transform)
    }

    /// See [`Converter::try_convert_with`].
    pub fn try_convert_with<T: TryTransform>(&self, transform: T) -> Result<String, T::Error> {
        self.converter.try_convert_with(self.input, transform)
    }

    /// See [`Converter::convert_spans`].
    pub fn convert_spans<T: Transform>(&self, transform: T) -> String {
        self.converter.convert_spans(self.input, transform)
    }

    /// See [`Converter::scan`].
    pub fn matches(&self) -> Matches<'_, 'a> {
        self.converter.scan(self.input)
    }
}
