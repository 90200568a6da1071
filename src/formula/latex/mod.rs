//! LaTeX fragment processing.
//!
//! The general conversion pipeline, applied when no literal override claims
//! the input (see [`special`]):
//!
//! 1. resolve `\left X … \right Y` delimiter pairs to their bare glyphs
//! 2. resolve `\vec{…}` to its content followed by a combining arrow
//! 3. substitute known commands with Unicode glyphs ([`symbols`])
//! 4. dispatch on structure: fraction, superscript, subscript, radical, or
//!    a plain text run
//!
//! Stage order matters both ways: symbol substitution must run before the
//! structural dispatch so that e.g. fraction operands carry their Greek
//! glyphs, and after the delimiter/vector stages because those consume raw
//! command text.
//!
//! Scan-and-replace stages process one occurrence fully and then rescan from
//! the start of the rebuilt string, so overlapping constructs resolve in a
//! deterministic order. Brace matching uses a plain depth counter; the
//! supported grammar nests braces at most one construct deep.

pub(crate) mod special;
pub(crate) mod symbols;

pub(crate) use special::literal_override;
pub(crate) use symbols::substitute_symbols;

use super::omml;

/// Run the general pipeline on a trimmed LaTeX fragment.
///
/// Returns an unwrapped OMML fragment; the caller applies the
/// math-paragraph container.
pub(crate) fn convert_general(latex: &str) -> String {
    let resolved = resolve_delimiters(latex);
    let resolved = resolve_vectors(&resolved);
    let substituted = substitute_symbols(&resolved);
    log::trace!("after symbol substitution: {substituted}");
    dispatch(&substituted)
}

/// Byte offset of the `}` matching an already-consumed `{`, tracking nested
/// pairs with a depth counter. `None` if the group never closes.
fn matching_brace(s: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (i, b) in s.bytes().enumerate() {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Replace every `\left X … \right Y` span with the bare `X … Y` glyphs.
///
/// A pair whose glyphs are missing or whose `\right` arrives before the
/// opening glyph ends is left untouched.
fn resolve_delimiters(latex: &str) -> String {
    let mut result = latex.to_string();
    loop {
        let Some(left) = result.find("\\left") else {
            break;
        };
        let Some(right) = result[left..].find("\\right").map(|i| left + i) else {
            break;
        };
        let Some(open) = result[left + 5..].chars().next() else {
            break;
        };
        let Some(close) = result[right + 6..].chars().next() else {
            break;
        };
        if right < left + 5 + open.len_utf8() {
            break;
        }

        let mut next = String::with_capacity(result.len());
        next.push_str(&result[..left]);
        next.push(open);
        next.push_str(&result[left + 5 + open.len_utf8()..right]);
        next.push(close);
        next.push_str(&result[right + 6 + close.len_utf8()..]);
        result = next;
    }
    result
}

/// Replace every `\vec{…}` with its content followed by an arrow glyph.
fn resolve_vectors(latex: &str) -> String {
    let mut result = latex.to_string();
    while let Some(start) = result.find("\\vec{") {
        let inner_start = start + 5;
        let Some(inner_len) = matching_brace(&result[inner_start..]) else {
            break;
        };

        let mut next = String::with_capacity(result.len());
        next.push_str(&result[..start]);
        next.push_str(&result[inner_start..inner_start + inner_len]);
        next.push('→');
        next.push_str(&result[inner_start + inner_len + 1..]);
        result = next;
    }
    result
}

/// Structural dispatch over the symbol-substituted fragment.
fn dispatch(latex: &str) -> String {
    if let Some(rest) = latex.strip_prefix("\\frac{") {
        return fraction_or_literal(latex, rest);
    }
    if latex.contains('=') && latex.contains('^') {
        // An equation carrying both an equality and an exponent is emitted
        // as one opaque run.
        return omml::text_run(latex);
    }
    if latex.contains('^') {
        return scripted(latex, '^', omml::superscript);
    }
    if latex.contains('_') {
        return scripted(latex, '_', omml::subscript);
    }
    if latex.contains("\\sqrt{") {
        return radical_or_literal(latex);
    }
    omml::text_run(latex)
}

/// `\frac{num}{den}`: numerator is the first balanced group, denominator the
/// immediately following one. Both must be non-empty; anything else falls
/// back to a literal run of the whole fragment.
fn fraction_or_literal(latex: &str, rest: &str) -> String {
    if let Some(num_end) = matching_brace(rest) {
        if num_end > 0 {
            if let Some(den_rest) = rest[num_end + 1..].strip_prefix('{') {
                if let Some(den_end) = matching_brace(den_rest) {
                    if den_end > 0 {
                        return omml::fraction(&rest[..num_end], &den_rest[..den_end]);
                    }
                }
            }
        }
    }
    omml::text_run(latex)
}

/// Shared superscript/subscript shape.
///
/// With braces (`x^{n+1}`): the text before the first `marker{` is the base
/// and the content up to the next `}` is the script; trailing text after
/// the closing brace becomes a separate run. Without braces (`x^2`): split
/// at the first marker. Malformed brace forms fall back to a literal run.
fn scripted(latex: &str, marker: char, element: fn(&str, &str) -> String) -> String {
    if latex.contains('{') && latex.contains('}') {
        let opener: String = [marker, '{'].iter().collect();
        if let Some((base, rest)) = latex.split_once(opener.as_str()) {
            if let Some(end) = rest.find('}') {
                let mut out = element(base, &rest[..end]);
                if end + 1 < rest.len() {
                    out.push_str(&omml::text_run(&rest[end + 1..]));
                }
                return out;
            }
        }
        omml::text_run(latex)
    } else if let Some((base, script)) = latex.split_once(marker) {
        element(base, script)
    } else {
        omml::text_run(latex)
    }
}

/// `\sqrt{…}`: balanced radicand, emitted with the degree hidden.
fn radical_or_literal(latex: &str) -> String {
    if let Some(start) = latex.find("\\sqrt{") {
        let rest = &latex[start + 6..];
        if let Some(end) = matching_brace(rest) {
            return omml::radical(&rest[..end]);
        }
    }
    omml::text_run(latex)
}
