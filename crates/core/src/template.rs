//! Learner-specific placeholder substitution for prompt templates.
//!
//! The exported document's preamble introduces the learner's profession
//! and curiosity once, so the multi-field "As a ..." openers collapse to
//! a short back-reference instead of repeating them in every prompt.
//! The remaining single-placeholder rules are a safety net: no raw
//! placeholder syntax may reach learner-facing text, whatever phrasing a
//! catalog entry uses.

use crate::IntakeProfile;
use regex::Regex;
use std::sync::LazyLock;

/// Replacement for the "As a ..." opener forms.
const CONTEXT_PHRASE: &str = "Given what you know about me";

const NAME_FALLBACK: &str = "the learner";
const PROFESSION_FALLBACK: &str = "someone in my position";
const CURIOSITY_FALLBACK: &str = "the topics I care about";

static AS_A_WHO_IS_CURIOUS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)As a \{\{profession\}\}\s+who is curious about \{\{curiosity\}\}").unwrap()
});

static AS_A_CURIOUS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)As a \{\{profession\}\}\s+curious about \{\{curiosity\}\}").unwrap()
});

static AS_A: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)As a \{\{profession\}\}").unwrap());

/// Substitute learner placeholders into a prompt template.
///
/// Rules apply in order, longest pattern first; the opener forms match
/// case-insensitively, the single-placeholder fallbacks are literal.
/// The output contains no placeholder syntax, so rendering an already
/// rendered string is a no-op.
pub fn render(template: &str, profile: &IntakeProfile) -> String {
    let text = AS_A_WHO_IS_CURIOUS.replace_all(template, CONTEXT_PHRASE);
    let text = AS_A_CURIOUS.replace_all(&text, CONTEXT_PHRASE);
    let text = AS_A.replace_all(&text, CONTEXT_PHRASE);

    let text = text.replace(
        "{{name}}",
        profile.display_name().unwrap_or(NAME_FALLBACK),
    );
    let text = text.replace("{{profession}}", PROFESSION_FALLBACK);
    text.replace("{{curiosity}}", CURIOSITY_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> IntakeProfile {
        IntakeProfile::new("Asha", "urban planner", "AI's energy footprint")
    }

    #[test]
    fn test_who_is_curious_opener_collapses() {
        let rendered = render(
            "As a {{profession}} who is curious about {{curiosity}}, what should I watch for?",
            &profile(),
        );
        assert_eq!(
            rendered,
            "Given what you know about me, what should I watch for?"
        );
    }

    #[test]
    fn test_curious_opener_collapses() {
        let rendered = render(
            "As a {{profession}} curious about {{curiosity}}, explain pricing.",
            &profile(),
        );
        assert_eq!(rendered, "Given what you know about me, explain pricing.");
    }

    #[test]
    fn test_standalone_profession_opener_collapses() {
        let rendered = render("As a {{profession}}, where do I start?", &profile());
        assert_eq!(rendered, "Given what you know about me, where do I start?");
    }

    #[test]
    fn test_opener_matches_case_insensitively() {
        let rendered = render("as a {{profession}}, where do I start?", &profile());
        assert_eq!(rendered, "Given what you know about me, where do I start?");
    }

    #[test]
    fn test_opener_allows_whitespace_runs() {
        let rendered = render(
            "As a {{profession}}  who is curious about {{curiosity}}, go on.",
            &profile(),
        );
        assert_eq!(rendered, "Given what you know about me, go on.");
    }

    #[test]
    fn test_name_placeholder_uses_profile_name() {
        let rendered = render("Hello {{name}}, welcome back.", &profile());
        assert_eq!(rendered, "Hello Asha, welcome back.");
    }

    #[test]
    fn test_name_placeholder_falls_back_when_absent() {
        let anon = IntakeProfile::anonymous("urban planner", "energy");
        let rendered = render("Hello {{name}}.", &anon);
        assert_eq!(rendered, "Hello the learner.");
    }

    #[test]
    fn test_stray_placeholders_get_generic_fallbacks() {
        let rendered = render(
            "Relate {{curiosity}} to the daily work of {{profession}}.",
            &profile(),
        );
        assert_eq!(
            rendered,
            "Relate the topics I care about to the daily work of someone in my position."
        );
    }

    #[test]
    fn test_no_placeholders_is_untouched() {
        let rendered = render("Plain prompt with no placeholders.", &profile());
        assert_eq!(rendered, "Plain prompt with no placeholders.");
    }

    #[test]
    fn test_render_is_idempotent() {
        let templates = [
            "As a {{profession}} who is curious about {{curiosity}}, what should I watch for?",
            "Hello {{name}}, relate {{curiosity}} to {{profession}}.",
            "As a {{profession}}, go.",
            "Nothing to replace here.",
        ];
        for template in templates {
            let once = render(template, &profile());
            let twice = render(&once, &profile());
            assert_eq!(once, twice, "second pass changed: {}", template);
        }
    }
}
