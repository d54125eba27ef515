//! Diet classification by keyword containment.

use fauna_model::Diet;

const CARNIVORE_KEYWORDS: &[&str] = &["carnivor", "meat", "predator", "hunt"];
const HERBIVORE_KEYWORDS: &[&str] = &["herbivor", "plant", "vegetation", "grazer"];
const OMNIVORE_KEYWORDS: &[&str] = &["omnivor", "both", "mixed", "varied"];

/// Returns the keywords that classify text as `diet`.
pub fn diet_keywords(diet: Diet) -> &'static [&'static str] {
    match diet {
        Diet::Carnivore => CARNIVORE_KEYWORDS,
        Diet::Herbivore => HERBIVORE_KEYWORDS,
        Diet::Omnivore => OMNIVORE_KEYWORDS,
    }
}

/// Maps free-form diet text to a category, or `None` when no keyword hits.
///
/// Keyword sets are tested in `Diet::ALL` order: the first set with a hit wins.
pub fn classify_diet(raw: &str) -> Option<Diet> {
    if let Ok(diet) = raw.parse::<Diet>() {
        return Some(diet);
    }
    let text = raw.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }
    Diet::ALL.into_iter().find(|diet| {
        diet_keywords(*diet)
            .iter()
            .any(|keyword| text.contains(keyword))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_values_pass_through() {
        for diet in Diet::ALL {
            assert_eq!(classify_diet(diet.as_str()), Some(diet));
        }
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(classify_diet("Strict Carnivore"), Some(Diet::Carnivore));
        assert_eq!(classify_diet("HUNTS small mammals"), Some(Diet::Carnivore));
        assert_eq!(classify_diet("Grazer"), Some(Diet::Herbivore));
        assert_eq!(classify_diet("Varied"), Some(Diet::Omnivore));
    }

    #[test]
    fn carnivore_takes_precedence() {
        assert_eq!(classify_diet("eats plants and meat"), Some(Diet::Carnivore));
        assert_eq!(classify_diet("plants, both kinds"), Some(Diet::Herbivore));
    }

    #[test]
    fn unmatched_text() {
        assert_eq!(classify_diet("insects"), None);
        assert_eq!(classify_diet("   "), None);
    }

    #[test]
    fn each_keyword_classifies_to_its_own_diet() {
        for diet in Diet::ALL {
            for keyword in diet_keywords(diet) {
                assert_eq!(classify_diet(&format!("mostly {keyword}s")), Some(diet));
            }
        }
    }
}
