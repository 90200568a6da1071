//! OMML fragment emission.
//!
//! Small builders for the OMML elements the converter produces. Outbound XML
//! is assembled directly into pre-sized `String` buffers; text content is
//! embedded verbatim (the conversion pipeline never introduces
//! markup-significant characters of its own).

/// Opening tag of the math-paragraph wrapper element.
const MATH_PARA_OPEN: &str = "<m:oMathPara>";

/// Emit a plain text run: `<m:r><m:t>…</m:t></m:r>`.
pub fn text_run(content: &str) -> String {
    let mut out = String::with_capacity(content.len() + 22);
    out.push_str("<m:r><m:t>");
    out.push_str(content);
    out.push_str("</m:t></m:r>");
    out
}

/// Emit a bar fraction with plain-text numerator and denominator.
pub fn fraction(numerator: &str, denominator: &str) -> String {
    let mut out = String::with_capacity(numerator.len() + denominator.len() + 128);
    out.push_str("<m:f><m:fPr><m:type m:val=\"bar\"/></m:fPr><m:num>");
    out.push_str(&text_run(numerator));
    out.push_str("</m:num><m:den>");
    out.push_str(&text_run(denominator));
    out.push_str("</m:den></m:f>");
    out
}

/// Emit a superscript element with plain-text base and exponent.
pub fn superscript(base: &str, exponent: &str) -> String {
    let mut out = String::with_capacity(base.len() + exponent.len() + 96);
    out.push_str("<m:sSup><m:e>");
    out.push_str(&text_run(base));
    out.push_str("</m:e><m:sup>");
    out.push_str(&text_run(exponent));
    out.push_str("</m:sup></m:sSup>");
    out
}

/// Emit a subscript element with plain-text base and subscript.
pub fn subscript(base: &str, script: &str) -> String {
    let mut out = String::with_capacity(base.len() + script.len() + 96);
    out.push_str("<m:sSub><m:e>");
    out.push_str(&text_run(base));
    out.push_str("</m:e><m:sub>");
    out.push_str(&text_run(script));
    out.push_str("</m:sub></m:sSub>");
    out
}

/// Emit a radical with the degree hidden (a square root).
pub fn radical(radicand: &str) -> String {
    let mut out = String::with_capacity(radicand.len() + 96);
    out.push_str("<m:rad><m:radPr><m:degHide m:val=\"1\"/></m:radPr><m:deg/><m:e>");
    out.push_str(&text_run(radicand));
    out.push_str("</m:e></m:rad>");
    out
}

/// Wrap a fragment in the math-paragraph container.
pub fn math_paragraph(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len() + 48);
    out.push_str(MATH_PARA_OPEN);
    out.push_str("<m:oMath>");
    out.push_str(fragment);
    out.push_str("</m:oMath></m:oMathPara>");
    out
}

/// Wrap `fragment` in a math-paragraph container unless it already is one.
pub fn ensure_math_paragraph(fragment: String) -> String {
    if fragment.starts_with(MATH_PARA_OPEN) {
        fragment
    } else {
        math_paragraph(&fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_run() {
        assert_eq!(text_run("x + y"), "<m:r><m:t>x + y</m:t></m:r>");
    }

    #[test]
    fn test_fraction() {
        assert_eq!(
            fraction("a", "b"),
            "<m:f><m:fPr><m:type m:val=\"bar\"/></m:fPr>\
             <m:num><m:r><m:t>a</m:t></m:r></m:num>\
             <m:den><m:r><m:t>b</m:t></m:r></m:den></m:f>"
        );
    }

    #[test]
    fn test_superscript() {
        assert_eq!(
            superscript("x", "2"),
            "<m:sSup><m:e><m:r><m:t>x</m:t></m:r></m:e>\
             <m:sup><m:r><m:t>2</m:t></m:r></m:sup></m:sSup>"
        );
    }

    #[test]
    fn test_subscript() {
        assert_eq!(
            subscript("a", "i"),
            "<m:sSub><m:e><m:r><m:t>a</m:t></m:r></m:e>\
             <m:sub><m:r><m:t>i</m:t></m:r></m:sub></m:sSub>"
        );
    }

    #[test]
    fn test_radical_hides_degree() {
        let omml = radical("x+1");
        assert!(omml.starts_with("<m:rad><m:radPr><m:degHide m:val=\"1\"/></m:radPr><m:deg/>"));
        assert!(omml.contains("<m:e><m:r><m:t>x+1</m:t></m:r></m:e>"));
    }

    #[test]
    fn test_ensure_math_paragraph_wraps_once() {
        let wrapped = ensure_math_paragraph(text_run("x"));
        assert_eq!(
            wrapped,
            "<m:oMathPara><m:oMath><m:r><m:t>x</m:t></m:r></m:oMath></m:oMathPara>"
        );
        assert_eq!(ensure_math_paragraph(wrapped.clone()), wrapped);
    }
}
