use dzongkha_core::{sample_flashcards, CategoryFilter, Flashcard, NewFlashcard, ReviewSession};

fn card(en: &str, cat: &str) -> Flashcard {
    Flashcard::from_new(&NewFlashcard::new("ཀ", en, "ka", cat))
}

fn three() -> Vec<Flashcard> {
    vec![
        card("Hello", "Greetings"),
        card("What is your name?", "Questions"),
        card("Tashi delek", "Greetings"),
    ]
}

#[test]
fn greetings_walkthrough() {
    let mut s = ReviewSession::new(three());
    s.set_category("Greetings");
    assert_eq!(s.len(), 2);
    assert_eq!(s.position(), Some(0));

    s.next();
    assert_eq!(s.position(), Some(1));
    s.next();
    assert_eq!(s.position(), Some(0));

    s.mark_known();
    assert_eq!(s.score(), 1);
    assert_eq!(s.position(), Some(1));
    assert_eq!(s.current_card().unwrap().english, "Tashi delek");
}

#[test]
fn next_n_times_is_identity() {
    let mut s = ReviewSession::new(sample_flashcards());
    let n = s.len();
    for start in 0..n {
        s.reset();
        for _ in 0..start {
            s.next();
        }
        assert_eq!(s.position(), Some(start));
        for _ in 0..n {
            s.next();
        }
        assert_eq!(s.position(), Some(start));
    }
}

#[test]
fn previous_then_next_round_trips() {
    let mut s = ReviewSession::new(sample_flashcards());
    let n = s.len();
    for start in 0..n {
        s.reset();
        for _ in 0..start {
            s.next();
        }
        s.previous();
        s.next();
        assert_eq!(s.position(), Some(start));
        s.next();
        s.previous();
        assert_eq!(s.position(), Some(start));
    }
}

#[test]
fn previous_wraps_to_last() {
    let mut s = ReviewSession::new(three());
    s.previous();
    assert_eq!(s.position(), Some(2));
}

#[test]
fn navigation_is_noop_on_single_card() {
    let mut s = ReviewSession::new(three());
    s.set_category("Questions");
    assert_eq!(s.len(), 1);
    s.flip();

    s.next();
    s.previous();
    assert_eq!(s.position(), Some(0));
    assert!(s.revealed(), "guarded no-op leaves the reveal flag alone");

    s.mark_known();
    s.mark_known();
    assert_eq!(s.score(), 2);
    assert_eq!(s.position(), Some(0));
}

#[test]
fn navigation_hides_translation() {
    let mut s = ReviewSession::new(three());
    s.flip();
    s.next();
    assert!(!s.revealed());
    s.flip();
    s.previous();
    assert!(!s.revealed());
    s.flip();
    s.mark_known();
    assert!(!s.revealed());
}

#[test]
fn flip_twice_restores() {
    let mut s = ReviewSession::new(three());
    let before = s.revealed();
    s.flip();
    assert_ne!(s.revealed(), before);
    s.flip();
    assert_eq!(s.revealed(), before);
}

#[test]
fn set_category_filters_in_order_and_keeps_score() {
    let cards = three();
    let mut s = ReviewSession::new(cards.clone());
    s.mark_known();
    s.flip();

    s.set_category("Greetings");
    assert_eq!(s.position(), Some(0));
    assert!(!s.revealed());
    assert_eq!(s.score(), 1);
    let got: Vec<_> = s.working_set().cloned().collect();
    assert_eq!(got, vec![cards[0].clone(), cards[2].clone()]);

    s.set_category(CategoryFilter::All);
    let got: Vec<_> = s.working_set().cloned().collect();
    assert_eq!(got, cards);
}

#[test]
fn reset_keeps_cards() {
    let mut s = ReviewSession::new(three());
    s.set_category("Greetings");
    s.mark_known();
    s.flip();
    let before: Vec<_> = s.working_set().cloned().collect();

    s.reset();
    assert_eq!(s.score(), 0);
    assert_eq!(s.position(), Some(0));
    assert!(!s.revealed());
    assert_eq!(s.working_set().cloned().collect::<Vec<_>>(), before);
    assert_eq!(s.all_cards().len(), 3);
    assert_eq!(s.category(), &CategoryFilter::Only("Greetings".into()));
}

#[test]
fn empty_working_set() {
    let mut s = ReviewSession::new(three());
    s.set_category("Basics");
    assert!(s.is_empty());
    assert!(s.current_card().is_none());
    assert_eq!(s.position(), None);
    assert_eq!(s.progress_percent(), 0.0);
    assert_eq!(s.mastery_percent(), 0);

    s.next();
    s.previous();
    s.mark_known();
    assert!(s.current_card().is_none());

    let nothing = ReviewSession::default();
    assert!(nothing.current_card().is_none());
    assert_eq!(nothing.progress_percent(), 0.0);
}

#[test]
fn mastery_follows_live_working_set() {
    let mut s = ReviewSession::new(three());
    s.mark_known();
    s.mark_known();
    // 2 of 3
    assert_eq!(s.mastery_percent(), 67);

    s.set_category("Questions");
    assert_eq!(s.mastery_percent(), 200);
}

#[test]
fn progress_counts_current_card() {
    let mut s = ReviewSession::new(sample_flashcards());
    assert_eq!(s.progress_percent(), 12.5);
    s.previous();
    assert_eq!(s.progress_percent(), 100.0);
}

#[test]
fn load_keeps_category_and_score() {
    let mut s = ReviewSession::new(three());
    s.set_category("Greetings");
    s.mark_known();

    s.load(sample_flashcards());
    assert_eq!(s.score(), 1);
    assert_eq!(s.position(), Some(0));
    assert_eq!(s.len(), 4);
    assert!(s.working_set().all(|c| c.category == "Greetings"));
}

#[test]
fn categories_in_first_seen_order() {
    let s = ReviewSession::new(sample_flashcards());
    assert_eq!(s.categories(), vec!["All", "Greetings", "Questions", "Basics"]);
}
