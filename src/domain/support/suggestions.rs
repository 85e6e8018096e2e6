//! Static "things to do" suggestions shown on period days.

use once_cell::sync::Lazy;

/// One supportive suggestion with its display icon name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportSuggestion {
    pub icon: &'static str,
    pub text: &'static str,
}

static SUGGESTIONS: Lazy<Vec<SupportSuggestion>> = Lazy::new(|| {
    vec![
        SupportSuggestion { icon: "heart.fill", text: "Reassure her with a warm hug" },
        SupportSuggestion { icon: "hand.raised.fill", text: "Validate Her Feelings" },
        SupportSuggestion { icon: "bubble.left.fill", text: "Encourage her to express herself" },
        SupportSuggestion { icon: "checklist", text: "Offer to help with daily tasks" },
        SupportSuggestion { icon: "house.fill", text: "Create a relaxing environment" },
        SupportSuggestion { icon: "ear.fill", text: "Listen to her concerns" },
        SupportSuggestion { icon: "heart.circle.fill", text: "Support her emotionally" },
        SupportSuggestion { icon: "person.fill", text: "Encourage self-care" },
        SupportSuggestion { icon: "star.fill", text: "Provide positive reinforcement" },
        SupportSuggestion { icon: "text.bubble.fill", text: "Offer words of encouragement" },
        SupportSuggestion { icon: "calendar", text: "Help her stay organized" },
    ]
});

/// The full suggestion list, in display order.
pub fn support_suggestions() -> &'static [SupportSuggestion] {
    &SUGGESTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_are_nonempty_and_stable() {
        let suggestions = support_suggestions();
        assert_eq!(suggestions.len(), 11);
        assert_eq!(suggestions[0].text, "Reassure her with a warm hug");
        for suggestion in suggestions {
            assert!(!suggestion.icon.is_empty());
            assert!(!suggestion.text.is_empty());
        }
    }
}
