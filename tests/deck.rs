use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::SeedableRng;

use splice::deck::{self, Card, Deck, Rank, Suit};

#[test]
fn standard_deck_round_trip() {
    let mut cards: Vec<Card> = Deck::standard().iter().copied().collect();
    cards.sort();

    assert_eq!(cards.len(), 52);

    let mut per_rank: HashMap<Rank, usize> = HashMap::new();
    let mut per_suit: HashMap<Suit, usize> = HashMap::new();
    for card in &cards {
        *per_rank.entry(card.rank()).or_default() += 1;
        *per_suit.entry(card.suit()).or_default() += 1;
    }
    assert_eq!(per_rank.len(), 13);
    assert!(per_rank.values().all(|count| *count == 4));
    assert_eq!(per_suit.len(), 4);
    assert!(per_suit.values().all(|count| *count == 13));
}

#[test]
fn seeded_shuffle_then_stable_sort() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut deck = Deck::standard();
    let original: HashSet<_> = deck.iter().map(Card::pair).collect();
    assert_eq!(original.len(), 52);

    deck.shuffle(&mut rng);
    let shuffled: Vec<Card> = deck.iter().copied().collect();

    deck.stable_selection_sort();

    assert!(deck.is_sorted());
    assert!(deck::is_stably_sorted(&deck, &shuffled));

    let sorted: HashSet<_> = deck.iter().map(Card::pair).collect();
    assert_eq!(deck.len(), 52);
    assert_eq!(sorted, original);

    // Within each rank, the suits come in the order the shuffle left them in.
    for rank in Rank::ALL {
        let suits_after: Vec<_> = deck.iter().filter(|c| c.rank() == rank).map(Card::suit).collect();
        let suits_before: Vec<_> = shuffled
            .iter()
            .filter(|c| c.rank() == rank)
            .map(Card::suit)
            .collect();
        assert_eq!(suits_after, suits_before);
    }
}

#[test]
fn repeated_rounds_stay_stable() {
    let mut rng = StdRng::seed_from_u64(31337);
    let mut deck = Deck::standard();

    for _ in 0..100 {
        deck.shuffle(&mut rng);
        let shuffled: Vec<Card> = deck.iter().copied().collect();
        deck.stable_selection_sort();

        assert!(deck.is_sorted());
        assert!(deck::is_stably_sorted(&deck, &shuffled));
    }
}

#[test]
fn sorting_a_sorted_deck_changes_nothing() {
    let mut deck = Deck::standard();
    let before: Vec<_> = deck.iter().map(Card::pair).collect();

    deck.stable_selection_sort();

    let after: Vec<_> = deck.iter().map(Card::pair).collect();
    assert_eq!(before, after);
}

#[test]
fn front_operations_through_the_sentinel() {
    let mut deck = Deck::standard();
    let two_of_diamonds = deck.pop_front().unwrap();
    assert_eq!(two_of_diamonds.pair(), (Suit::Diamond, Rank::Two));
    assert_eq!(deck.len(), 51);

    deck.push_front(Card::new(Suit::Heart, Rank::King));
    assert_eq!(deck.front().map(Card::pair), Some((Suit::Heart, Rank::King)));
    assert!(!deck.is_sorted());

    while deck.pop_front().is_some() {}
    assert!(deck.is_empty());
    assert_eq!(deck.iter().count(), 0);
}

#[test]
fn cursor_walks_the_whole_deck() {
    let mut deck = Deck::standard();
    let mut cursor = deck.cursor_before_front();

    let mut seen = 0;
    while cursor.peek_next().is_some() {
        assert!(cursor.move_next());
        seen += 1;
        assert_eq!(cursor.index(), seen);
    }
    assert_eq!(seen, 52);
    assert_eq!(cursor.erase_after(), None);
}
