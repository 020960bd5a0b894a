//! Prose pools for remedy explanations
//!
//! Placeholders: `{code}` is the remedy code, `{category}` the focus category.

use crate::core::random::RandomSource;
use crate::types::{Category, DigitString};

/// Why the original number needs a remedy
pub const PROBLEM_TEMPLATES: [&str; 3] = [
    "Numbers are how the energy of all things shows itself. The field in your original number is like an inborn fate: it has its pattern, but it is not a fixed limit.",
    "The current distribution shows negative fields quietly disturbing your fortune, so that {category} energy fails to gather and your focus scatters.",
    "Your original number leaves the {category} field thin. Where one field is weak, the others cannot carry the whole.",
];

/// How the remedy code works
pub const METHOD_TEMPLATES: [&str; 3] = [
    "The order of {code} follows the changes of the eight trigrams. It works through daily repeated resonance.",
    "{code} was arranged so that {category} pairs recur throughout, rebuilding the field step by step.",
    "Each pair in {code} was chosen to cover the gap your number left, weighted toward the {category} field.",
];

/// Food suggestions
pub const DIET_TEMPLATES: [&str; 3] = [
    "To lift the {category} field, favour yellow foods such as corn and pumpkin.",
    "Warm grains and root vegetables steady the {category} field; avoid cold drinks in the morning.",
    "Green leafy vegetables and a little citrus each day keep the {category} field bright.",
];

/// How to use the code
pub const USAGE_TEMPLATES: [&str; 3] = [
    "Use {code} as a phone suffix, a PIN or a password you type every day.",
    "Write {code} down each morning and keep it in your wallet.",
    "Set {code} as a lock screen code so the resonance repeats throughout the day.",
];

/// Pick one template from each pool and fill the placeholders
pub fn compose_explanation<S: RandomSource>(code: &DigitString, focus: Category, rng: &mut S) -> String {
    [&PROBLEM_TEMPLATES, &METHOD_TEMPLATES, &DIET_TEMPLATES, &USAGE_TEMPLATES]
        .iter()
        .map(|pool| fill(*rng.choice(&pool[..]), code, focus))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn fill(template: &str, code: &DigitString, focus: Category) -> String {
    template
        .replace("{code}", code.as_str())
        .replace("{category}", focus.label())
}
