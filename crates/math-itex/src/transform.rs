//! Transform callbacks applied to math content.
//!
//! A transform receives a [`MathContext`] describing one matched span and
//! returns the content to splice back in. Closures taking `&MathContext`
//! implement [`Transform`] (and [`TryTransform`] when they return a
//! `Result`), so most callers never name the traits.

use crate::{Convention, MathKind};

/// Everything a transform can know about one matched span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MathContext<'a> {
    /// Content handed to this transform.
    pub content: &'a str,
    /// Classification of the span.
    pub kind: MathKind,
    /// Untransformed content, for side annotations such as `data-math`.
    pub original: &'a str,
    /// Convention the span was written in.
    pub convention: Convention,
}

impl<'a> MathContext<'a> {
    /// Context for a span whose content has not been transformed yet.
    #[must_use]
    pub fn new(content: &'a str, convention: Convention) -> Self {
        Self {
            content,
            kind: convention.kind(),
            original: content,
            convention,
        }
    }

    /// Content wrapped in the canonical delimiters for its kind.
    ///
    /// # Example
    ///
    /// ```
    /// use math_itex::{Convention, MathContext};
    ///
    /// let ctx = MathContext::new("a", Convention::Bracket);
    /// assert_eq!(ctx.canonical(), "$$a$$");
    /// ```
    #[must_use]
    pub fn canonical(&self) -> String {
        self.kind.wrap(self.content)
    }
}

/// Rewrites the content of each math span.
///
/// Called once per span, in document order, never concurrently.
pub trait Transform {
    /// Return the new content for the span described by `ctx`.
    fn transform(&mut self, ctx: &MathContext<'_>) -> String;
}

impl<F> Transform for F
where
    F: FnMut(&MathContext<'_>) -> String,
{
    fn transform(&mut self, ctx: &MathContext<'_>) -> String {
        self(ctx)
    }
}

/// Transform that returns the content unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl Transform for Identity {
    fn transform(&mut self, ctx: &MathContext<'_>) -> String {
        ctx.content.to_owned()
    }
}

/// Fallible variant of [`Transform`].
///
/// The first error aborts the conversion and is handed back unchanged.
pub trait TryTransform {
    /// Error type produced by this transform.
    type Error;

    /// Return the new content for the span described by `ctx`.
    fn try_transform(&mut self, ctx: &MathContext<'_>) -> Result<String, Self::Error>;
}

impl<F, E> TryTransform for F
where
    F: FnMut(&MathContext<'_>) -> Result<String, E>,
{
    type Error = E;

    fn try_transform(&mut self, ctx: &MathContext<'_>) -> Result<String, E> {
        self(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_keeps_original() {
        let ctx = MathContext::new("x", Convention::Paren);
        assert_eq!(ctx.content, "x");
        assert_eq!(ctx.original, "x");
        assert_eq!(ctx.kind, MathKind::Inline);
    }

    #[test]
    fn test_canonical() {
        assert_eq!(MathContext::new("x", Convention::Paren).canonical(), "$x$");
        assert_eq!(
            MathContext::new("x", Convention::Equation).canonical(),
            "$$x$$"
        );
    }

    #[test]
    fn test_identity() {
        let ctx = MathContext::new(r"a \ne 0", Convention::Dollar);
        assert_eq!(Identity.transform(&ctx), r"a \ne 0");
    }

    #[test]
    fn test_closure_transform() {
        let mut calls = 0;
        let mut upcase = |ctx: &MathContext<'_>| {
            calls += 1;
            ctx.content.to_uppercase()
        };
        let ctx = MathContext::new("pi", Convention::Dollar);
        assert_eq!(upcase.transform(&ctx), "PI");
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_closure_try_transform() {
        let mut reject = |ctx: &MathContext<'_>| -> Result<String, String> {
            Err(format!("rejected {}", ctx.content))
        };
        let ctx = MathContext::new("x", Convention::Dollar);
        assert_eq!(reject.try_transform(&ctx), Err("rejected x".to_owned()));
    }
}
