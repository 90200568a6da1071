// Symbol substitution for LaTeX commands
//
// Replaces known LaTeX commands with their Unicode glyphs in a single pass.
// Matching is leftmost-longest, so a command sharing a prefix with a longer
// one (`\le` / `\ldots`) can never truncate it.

use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

// Static lookup table mapping LaTeX commands to Unicode glyphs
static SYMBOLS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    // Operators
    "\\nabla" => "∇",
    "\\int" => "∫",
    "\\sum" => "∑",
    "\\partial" => "∂",
    "\\pm" => "±",
    "\\cdot" => "·",
    "\\times" => "×",
    "\\circ" => "○",

    // Lowercase Greek
    "\\pi" => "π",
    "\\alpha" => "α",
    "\\beta" => "β",
    "\\gamma" => "γ",
    "\\delta" => "δ",
    "\\epsilon" => "ε",
    "\\theta" => "θ",
    "\\sigma" => "σ",
    "\\mu" => "μ",

    // Uppercase Greek
    "\\Delta" => "Δ",
    "\\Gamma" => "Γ",

    // Arrows, dots, and comparison
    "\\to" => "→",
    "\\ldots" => "…",
    "\\infty" => "∞",
    "\\le" => "≤",
    "\\ge" => "≥",
    "\\neq" => "≠",
    "\\approx" => "≈",
    "\\equiv" => "≡",
};

// Static initialization: automaton is built only once, thread-safe.
// Patterns are ordered longest-first (lexical tiebreak) so the build is
// deterministic; leftmost-longest matching does the actual precedence work.
static SUBSTITUTION: Lazy<(AhoCorasick, Vec<&'static str>)> = Lazy::new(|| {
    let mut entries: Vec<(&'static str, &'static str)> =
        SYMBOLS.entries().map(|(k, v)| (*k, *v)).collect();
    entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));

    let (commands, glyphs): (Vec<&'static str>, Vec<&'static str>) =
        entries.into_iter().unzip();
    let automaton = AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(&commands)
        .expect("Failed to build symbol substitution automaton");
    (automaton, glyphs)
});

/// Replace every known LaTeX command in `latex` with its Unicode glyph.
///
/// Commands outside the table are left untouched.
pub(crate) fn substitute_symbols(latex: &str) -> String {
    let (automaton, glyphs) = &*SUBSTITUTION;
    automaton.replace_all(latex, glyphs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greek_letters() {
        assert_eq!(substitute_symbols("\\alpha + \\beta"), "α + β");
    }

    #[test]
    fn test_operators() {
        assert_eq!(substitute_symbols("a \\times b \\pm c"), "a × b ± c");
    }

    #[test]
    fn test_longest_command_wins_on_shared_prefix() {
        // `\le` is a prefix of `\ldots`; the longer command must win.
        assert_eq!(substitute_symbols("a \\ldots b"), "a … b");
        assert_eq!(substitute_symbols("a \\le b"), "a ≤ b");
    }

    #[test]
    fn test_distinct_commands_with_common_stem() {
        assert_eq!(substitute_symbols("\\int \\infty"), "∫ ∞");
    }

    #[test]
    fn test_unknown_commands_left_untouched() {
        assert_eq!(substitute_symbols("\\foo{x}"), "\\foo{x}");
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(substitute_symbols("\\Delta \\delta"), "Δ δ");
    }

    #[test]
    fn test_no_commands() {
        assert_eq!(substitute_symbols("x + y"), "x + y");
    }
}
