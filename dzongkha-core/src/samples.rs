use crate::{Flashcard, NewFlashcard};

const SAMPLES: [(&str, &str, &str, &str); 8] = [
    ("ཀུང་ཌྲུ", "Hello", "Kuzu zangpo la", "Greetings"),
    ("བཀྲ་ཤིས་བདེ་ལེགས།", "Blessings and good luck", "Tashi delek", "Greetings"),
    ("ཁ་རྗེ་ག་དེ་རེད།", "What is your name?", "Chhoe gi minga ga chi mo?", "Questions"),
    ("ང་ཚོ་......ལ་སྤྲོ་པོ་ཡིན།", "My name is...", "Nga... la ringochen", "Basics"),
    ("ཐུགས་རྗེ་ཆེ།", "Thank you", "Kadrin cheyla", "Greetings"),
    ("ག་པ་ཡེ་ཡོད།", "How are you?", "Ga de bay yoe?", "Questions"),
    ("ལེགས་སོ།", "Goodbye", "Legso", "Greetings"),
    ("ཅི་རེད།", "What is this?", "Chi re?", "Questions"),
];

/// The built-in sample set used both to seed the store and as the client fallback.
pub fn sample_cards() -> Vec<NewFlashcard> {
    SAMPLES
        .iter()
        .map(|(dz, en, pr, cat)| NewFlashcard::new(*dz, *en, *pr, *cat))
        .collect()
}

/// The sample set with fresh client-side ids.
pub fn sample_flashcards() -> Vec<Flashcard> {
    sample_cards().iter().map(Flashcard::from_new).collect()
}
