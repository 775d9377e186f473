use crate::{CategoryFilter, Flashcard, ALL_CATEGORIES};

pub fn filter_by_category(cards: &[Flashcard], filter: &CategoryFilter) -> Vec<Flashcard> {
    cards.iter().filter(|c| filter.matches(c)).cloned().collect()
}

/// Positions of the cards matching `filter`, in their original order.
pub fn matching_indices(cards: &[Flashcard], filter: &CategoryFilter) -> Vec<usize> {
    cards
        .iter()
        .enumerate()
        .filter(|(_, c)| filter.matches(c))
        .map(|(i, _)| i)
        .collect()
}

/// `"All"` followed by every distinct category, in order of first appearance.
pub fn categories(cards: &[Flashcard]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for c in cards {
        if !out.iter().any(|x| *x == c.category) {
            out.push(c.category.clone());
        }
    }
    out
}
