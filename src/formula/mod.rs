//! Mathematical formula conversion (LaTeX to OMML).
//!
//! This module turns one LaTeX fragment into one OMML (Office Math Markup
//! Language) fragment, ready for embedding in a WordprocessingML document.
//!
//! Conversion runs in fixed stages, first match wins:
//!
//! 1. **Literal overrides**: a closed table of well-known equations
//!    (Bessel function, the four vector-calculus field equations, a generic
//!    integral-plus-summation identity) recognized by substring triggers and
//!    answered with hand-authored OMML. A matched trigger renders the
//!    canonical form of the recognized statement; the actual operands in
//!    the input are ignored.
//! 2. **General processing**: `\left`/`\right` delimiter resolution,
//!    `\vec{}` resolution, Unicode symbol substitution, then structural
//!    dispatch over fractions, super/subscripts, and radicals.
//!
//! There is no error path: every malformed construct degrades to a literal
//! text run, so the caller always receives a renderable fragment.
//!
//! # Example
//!
//! ```
//! use quince::formula::latex_to_omml;
//!
//! let omml = latex_to_omml("\\frac{a}{b}");
//! assert!(omml.contains("<m:f>"));
//! assert!(omml.starts_with("<m:oMathPara>"));
//! ```

pub(crate) mod latex;
pub(crate) mod omml;

/// Convert one LaTeX fragment into an OMML fragment.
///
/// The input carries no `$` delimiters; surrounding whitespace is ignored.
/// The result is always enclosed in an `<m:oMathPara><m:oMath>` wrapper.
/// Display-versus-inline presentation (e.g. centering) is a paragraph-level
/// concern applied by the serializer, not here.
pub fn latex_to_omml(latex: &str) -> String {
    let latex = latex.trim();
    log::debug!("converting LaTeX fragment: {latex}");

    let fragment = match latex::literal_override(latex) {
        Some(fixed) => fixed.to_string(),
        None => latex::convert_general(latex),
    };

    omml::ensure_math_paragraph(fragment)
}
