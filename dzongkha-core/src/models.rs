use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type CardId = Uuid;

/// Label of the category filter that matches every card.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flashcard {
    pub id: CardId,
    /// Dzongkha script, UTF-8.
    pub dzongkha: String,
    pub english: String,
    /// Latin transliteration.
    pub pronunciation: String,
    pub category: String,
}

impl Flashcard {
    pub fn from_new(card: &NewFlashcard) -> Self {
        Self {
            id: Uuid::new_v4(),
            dzongkha: card.dzongkha.clone(),
            english: card.english.clone(),
            pronunciation: card.pronunciation.clone(),
            category: card.category.clone(),
        }
    }
}

/// A card that has not been given an identity by a store yet.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewFlashcard {
    pub dzongkha: String,
    pub english: String,
    pub pronunciation: String,
    pub category: String,
}

impl NewFlashcard {
    pub fn new(
        dzongkha: impl Into<String>,
        english: impl Into<String>,
        pronunciation: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            dzongkha: dzongkha.into(),
            english: english.into(),
            pronunciation: pronunciation.into(),
            category: category.into(),
        }
    }
}

impl From<Flashcard> for NewFlashcard {
    fn from(c: Flashcard) -> Self {
        Self {
            dzongkha: c.dzongkha,
            english: c.english,
            pronunciation: c.pronunciation,
            category: c.category,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn parse(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    pub fn matches(&self, card: &Flashcard) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => card.category == *c,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(c) => c,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}
