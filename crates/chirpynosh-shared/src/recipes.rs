//! Rule-based recipe suggestions for rescued ingredients.
//!
//! Each rule fires when any of its keywords appears as a substring of the
//! lower-cased ingredient text.

use serde::Serialize;

struct Rule {
    keys: &'static [&'static str],
    name: &'static str,
    why: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        keys: &["bread", "bun", "baguette"],
        name: "Bread pudding / French toast",
        why: "Great for stale bread; reduces bakery waste.",
    },
    Rule {
        keys: &["tomato", "onion", "carrot"],
        name: "Vegetable soup",
        why: "Flexible recipe; works with mixed produce.",
    },
    Rule {
        keys: &["yogurt", "milk"],
        name: "Smoothie + overnight oats",
        why: "Uses dairy near expiry safely.",
    },
    Rule {
        keys: &["rice", "chicken"],
        name: "Fried rice",
        why: "Perfect for leftovers; scalable.",
    },
];

const FALLBACK: Rule = Rule {
    keys: &[],
    name: "Mixed bowl / stir-fry",
    why: "When in doubt: sauté vegetables + add protein + sauce.",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeSuggestion {
    pub name: &'static str,
    pub why: &'static str,
    /// Keywords of the rule, empty for the fallback suggestion.
    pub keys: &'static [&'static str],
}

impl From<&Rule> for RecipeSuggestion {
    fn from(rule: &Rule) -> Self {
        Self {
            name: rule.name,
            why: rule.why,
            keys: rule.keys,
        }
    }
}

/// Suggest recipes for a free-text ingredient list.
///
/// Blank input yields nothing; input matching no rule yields the single
/// fallback suggestion.
pub fn suggest_recipes(ingredients: &str) -> Vec<RecipeSuggestion> {
    let text = ingredients.to_lowercase();
    if text.trim().is_empty() {
        return Vec::new();
    }

    let hits: Vec<RecipeSuggestion> = RULES
        .iter()
        .filter(|rule| rule.keys.iter().any(|k| text.contains(k)))
        .map(RecipeSuggestion::from)
        .collect();

    if hits.is_empty() {
        vec![RecipeSuggestion::from(&FALLBACK)]
    } else {
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input() {
        assert!(suggest_recipes("").is_empty());
        assert!(suggest_recipes("   ").is_empty());
    }

    #[test]
    fn test_matches_are_case_insensitive_and_ordered() {
        let names: Vec<_> = suggest_recipes("Milk, old BREAD, carrots")
            .iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "Bread pudding / French toast",
                "Vegetable soup",
                "Smoothie + overnight oats"
            ]
        );
    }

    #[test]
    fn test_substring_match() {
        // "brown rice" contains "rice"; "buns" contains "bun".
        let names: Vec<_> = suggest_recipes("brown rice, buns")
            .iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Bread pudding / French toast", "Fried rice"]);
    }

    #[test]
    fn test_fallback() {
        let out = suggest_recipes("lentils");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Mixed bowl / stir-fry");
        assert!(out[0].keys.is_empty());
    }
}
