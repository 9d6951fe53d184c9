//! End-to-end conversion behavior.

use math_itex::{ConvertOptions, Convention, MathContext, MathKind, MathText};
use pretty_assertions::assert_eq;

const QUADRATIC: &str = r"x = {-b \pm \sqrt{b^2-4ac} \over 2a}";
const QUADRATIC_UPPER: &str = r"X = {-B \PM \SQRT{B^2-4AC} \OVER 2A}";

fn upcase(ctx: &MathContext<'_>) -> String {
    ctx.content.to_uppercase()
}

#[test]
fn test_single_dollar_signs() {
    assert_eq!(MathText::new(r"$a \ne 0$").convert(), r"$a \ne 0$");
    assert_eq!(
        MathText::new(r"Here we go: $a \ne 0$").convert_with(upcase),
        r"Here we go: $A \NE 0$"
    );
    assert_eq!(
        MathText::new(r"Here we go: $3\pi$").convert_with(upcase),
        r"Here we go: $3\PI$"
    );
}

#[test]
fn test_paren_signs() {
    assert_eq!(MathText::new(r"\(a \ne 0\)").convert(), r"$a \ne 0$");
    assert_eq!(
        MathText::new(r"Here we go: when \(a \ne 0\), there are two solutions..")
            .convert_with(upcase),
        r"Here we go: when $A \NE 0$, there are two solutions.."
    );
}

#[test]
fn test_double_dollar_signs() {
    let input = format!("$${QUADRATIC}$$");
    assert_eq!(MathText::new(&input).convert(), input);

    let input = format!("Here we go: $${QUADRATIC}$$");
    assert_eq!(
        MathText::new(&input).convert_with(upcase),
        format!("Here we go: $${QUADRATIC_UPPER}$$")
    );
}

#[test]
fn test_bracket_signs() {
    assert_eq!(MathText::new(r"\[a \ne 0\]").convert(), r"$$a \ne 0$$");
    assert_eq!(
        MathText::new(r"Here we go: \[a \ne 0\]").convert_with(upcase),
        r"Here we go: $$A \NE 0$$"
    );
}

#[test]
fn test_environments() {
    let equation = format!(r"\begin{{equation}}{QUADRATIC}\end{{equation}}");
    assert_eq!(MathText::new(&equation).convert(), format!("$${QUADRATIC}$$"));
    assert_eq!(
        MathText::new(&format!("Here we go: {equation}")).convert_with(upcase),
        format!("Here we go: $${QUADRATIC_UPPER}$$")
    );

    let math = format!(r"\begin{{math}}{QUADRATIC}\end{{math}}");
    assert_eq!(MathText::new(&math).convert(), format!("${QUADRATIC}$"));

    let displaymath = format!(r"\begin{{displaymath}}{QUADRATIC}\end{{displaymath}}");
    assert_eq!(
        MathText::new(&displaymath).convert(),
        format!("$${QUADRATIC}$$")
    );
}

#[test]
fn test_multiple_lines() {
    let text = r"
$$
\begin{array}[t]{clrc}
  1 & 2 & 3 & 4 \\
  5 & 6 & 7 & 8
\end{array}
$$
";
    let result = MathText::new(text)
        .convert_with(|ctx: &MathContext<'_>| ctx.content.replacen('2', "9", 1));

    assert!(result.contains('9'));
    assert!(!result.contains('2'));
    assert_eq!(result, text.replacen('2', "9", 1));
}

#[test]
fn test_manipulates_content_only() {
    let replace = |ctx: &MathContext<'_>| ctx.content.replacen("ne", "eq", 1);

    assert_eq!(
        MathText::new(r"\[a \ne 0\]").convert_with(replace),
        r"$$a \eq 0$$"
    );
    assert_eq!(
        MathText::new(r"ne \[a \ne 0\]").convert_with(replace),
        r"ne $$a \eq 0$$"
    );
}

#[test]
fn test_callback_gets_kind_in_order() {
    let mut seen = Vec::new();
    let result = MathText::new("$0$ is not equal to $$1 = 0$$").convert_with(
        |ctx: &MathContext<'_>| {
            seen.push((ctx.content.to_owned(), ctx.kind));
            format!("<{}>{}", ctx.kind, ctx.content)
        },
    );

    assert_eq!(
        seen,
        vec![
            ("0".to_owned(), MathKind::Inline),
            ("1 = 0".to_owned(), MathKind::Display),
        ]
    );
    assert_eq!(result, "$<inline>0$ is not equal to $$<display>1 = 0$$");
}

#[test]
fn test_annotates_spans_with_plain_math() {
    let result = MathText::new(r"\(0\) is not equal to \[1 = 0\]").convert_spans(
        |ctx: &MathContext<'_>| {
            format!(
                r#"<span class="{}" data-math="{}">{}</span>"#,
                ctx.kind,
                ctx.original,
                ctx.canonical()
            )
        },
    );

    assert_eq!(
        result,
        r#"<span class="inline" data-math="0">$0$</span> is not equal to <span class="display" data-math="1 = 0">$$1 = 0$$</span>"#
    );
}

#[test]
fn test_canonical_output_is_fixed_point() {
    let inputs = [
        "$x$",
        r"\(x\)",
        r"\begin{math}x\end{math}",
        "$$x$$",
        r"\[x\]",
        r"\begin{equation}x\end{equation}",
        r"\begin{displaymath}x\end{displaymath}",
    ];
    for input in inputs {
        let once = math_itex::convert(input);
        assert_eq!(math_itex::convert(&once), once, "{input}");
    }
}

#[test]
fn test_text_without_math_is_untouched() {
    let inputs = [
        "",
        "Nothing to see here.",
        "A lone $ sign",
        r"Unterminated \[ display",
        r"\begin{equation} no end",
        r"Prices: \$5 and \$10",
        "multi\nline\ntext\n",
    ];
    for input in inputs {
        assert_eq!(math_itex::convert(input), input);
    }
}

#[test]
fn test_unterminated_after_valid_span() {
    assert_eq!(
        math_itex::convert(r"\(a\) then \(b and more"),
        r"$a$ then \(b and more"
    );
}

#[test]
fn test_try_convert_with_propagates_error() {
    #[derive(Debug, PartialEq)]
    struct Rejected(String);

    let result = math_itex::try_convert_with("$ok$ then $bad$", |ctx: &MathContext<'_>| {
        if ctx.content == "bad" {
            Err(Rejected(ctx.content.to_owned()))
        } else {
            Ok(ctx.content.to_owned())
        }
    });
    assert_eq!(result, Err(Rejected("bad".to_owned())));
}

#[test]
fn test_disabled_convention_passes_through() {
    let options = ConvertOptions::new().with_conventions([Convention::Equation]);
    let text = MathText::with_options(r"$a$ \[b\] \begin{equation}c\end{equation}", &options)
        .unwrap();
    assert_eq!(text.convert(), r"$a$ \[b\] $$c$$");
}

fn kinds(input: &str) -> Vec<(String, MathKind)> {
    let mut seen = Vec::new();
    math_itex::convert_with(input, |ctx: &MathContext<'_>| {
        seen.push((ctx.content.to_owned(), ctx.kind));
        ctx.content.to_owned()
    });
    seen
}

#[test]
fn test_inline_before_display() {
    assert_eq!(
        kinds("$a$ then $$b$$"),
        vec![
            ("a".to_owned(), MathKind::Inline),
            ("b".to_owned(), MathKind::Display)
        ]
    );
}

#[test]
fn test_display_before_inline() {
    assert_eq!(
        kinds("$$b$$ then $a$"),
        vec![
            ("b".to_owned(), MathKind::Display),
            ("a".to_owned(), MathKind::Inline)
        ]
    );
    assert_eq!(
        kinds("$$x$$$y$"),
        vec![
            ("x".to_owned(), MathKind::Display),
            ("y".to_owned(), MathKind::Inline)
        ]
    );
}

#[test]
fn test_stray_dollar_does_not_split_display() {
    assert_eq!(kinds("Cost $5 or $$x$$"), vec![("x".to_owned(), MathKind::Display)]);
    assert_eq!(kinds("$ $$x$$"), vec![("x".to_owned(), MathKind::Display)]);
    assert_eq!(
        MathText::new("Cost $5 or $$x$$").convert_with(upcase),
        "Cost $5 or $$X$$"
    );
}
