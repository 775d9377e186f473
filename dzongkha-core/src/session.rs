//! Flashcard review state: a category-filtered working set walked circularly,
//! with a reveal flag and a running "known" score.

use crate::{categories, matching_indices, mastery_percent, progress_percent};
use crate::{CategoryFilter, Flashcard};

#[derive(Clone, Debug, Default)]
pub struct ReviewSession {
    all_cards: Vec<Flashcard>,
    category: CategoryFilter,
    // Indices into `all_cards`; rebuilt only from `all_cards` and `category`.
    working: Vec<usize>,
    position: usize,
    revealed: bool,
    score: u32,
}

impl ReviewSession {
    pub fn new(cards: Vec<Flashcard>) -> Self {
        let mut s = Self::default();
        s.load(cards);
        s
    }

    /// Swaps in a freshly loaded card set. Keeps the selected category and the score.
    pub fn load(&mut self, cards: Vec<Flashcard>) {
        self.all_cards = cards;
        self.rebuild();
    }

    pub fn set_category(&mut self, category: impl Into<CategoryFilter>) {
        self.category = category.into();
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.working = matching_indices(&self.all_cards, &self.category);
        self.position = 0;
        self.revealed = false;
    }

    pub fn next(&mut self) {
        let n = self.working.len();
        if n <= 1 {
            return;
        }
        self.revealed = false;
        self.position = (self.position + 1) % n;
    }

    pub fn previous(&mut self) {
        let n = self.working.len();
        if n <= 1 {
            return;
        }
        self.revealed = false;
        self.position = (self.position + n - 1) % n;
    }

    pub fn flip(&mut self) {
        self.revealed = !self.revealed;
    }

    pub fn mark_known(&mut self) {
        self.score = self.score.saturating_add(1);
        self.next();
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.position = 0;
        self.revealed = false;
    }

    /// `None` while the working set is empty; callers show an empty/loading view.
    pub fn current_card(&self) -> Option<&Flashcard> {
        self.working
            .get(self.position)
            .map(|&i| &self.all_cards[i])
    }

    pub fn all_cards(&self) -> &[Flashcard] {
        &self.all_cards
    }

    pub fn working_set(&self) -> impl Iterator<Item = &Flashcard> + '_ {
        self.working.iter().map(|&i| &self.all_cards[i])
    }

    pub fn len(&self) -> usize {
        self.working.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn categories(&self) -> Vec<String> {
        categories(&self.all_cards)
    }

    pub fn position(&self) -> Option<usize> {
        if self.working.is_empty() {
            None
        } else {
            Some(self.position)
        }
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.position(), self.len())
    }

    pub fn mastery_percent(&self) -> u32 {
        mastery_percent(self.score, self.len())
    }
}
