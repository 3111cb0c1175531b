//! Playing cards. A [`Card`] is compared by its [`Rank`] alone, so two cards of different suits
//! but equal rank are equal as far as sorting is concerned.

use std::cmp::Ordering;
use std::fmt;

/// The rank of a card, from [`Rank::Two`] (lowest) to [`Rank::Ace`] (highest).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Every rank, lowest first.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Jack => f.write_str("J"),
            Rank::Queen => f.write_str("Q"),
            Rank::King => f.write_str("K"),
            Rank::Ace => f.write_str("A"),
            // The discriminants of the number cards are their face values.
            number => write!(f, "{}", *number as u8),
        }
    }
}

/// The suit of a card. Suits have no order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Suit {
    Spade,
    Heart,
    Diamond,
    Club,
}

impl Suit {
    /// Every suit, in the order a standard deck is generated in.
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond];

    /// The single letter naming this suit.
    pub fn code(self) -> char {
        match self {
            Suit::Spade => 'S',
            Suit::Heart => 'H',
            Suit::Diamond => 'D',
            Suit::Club => 'C',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A playing card.
///
/// Equality and ordering only look at the rank:
///
/// ```
/// use splice::deck::{Card, Rank, Suit};
///
/// let spade = Card::new(Suit::Spade, Rank::Queen);
/// let heart = Card::new(Suit::Heart, Rank::Queen);
///
/// assert_eq!(spade, heart);
/// assert_ne!(spade.pair(), heart.pair());
/// assert!(Card::new(Suit::Club, Rank::Ten) < spade);
/// assert_eq!(spade.to_string(), "(Q|S)");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Creates the card of the given suit and rank.
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// The suit of this card.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// The rank of this card.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Both halves of the card. Unlike `==` on cards this tells apart equal ranks of
    /// different suits.
    pub fn pair(&self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}|{})", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_render_as_face_values() {
        let rendered: Vec<_> = Rank::ALL.iter().map(Rank::to_string).collect();
        assert_eq!(
            rendered,
            ["2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A"]
        );
    }

    #[test]
    fn suits_render_as_letters() {
        let rendered: String = Suit::ALL.iter().map(|s| s.code()).collect();
        assert_eq!(rendered, "SHCD");
    }

    #[test]
    fn ranks_are_ordered_two_to_ace() {
        assert!(Rank::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn suit_is_ignored_by_comparisons() {
        let ten_of_clubs = Card::new(Suit::Club, Rank::Ten);
        let ten_of_hearts = Card::new(Suit::Heart, Rank::Ten);

        assert_eq!(ten_of_clubs, ten_of_hearts);
        assert_eq!(ten_of_clubs.cmp(&ten_of_hearts), Ordering::Equal);
        assert!(Card::new(Suit::Spade, Rank::Nine) < ten_of_hearts);
        assert!(Card::new(Suit::Spade, Rank::Ace) > ten_of_hearts);
    }

    #[test]
    fn card_renders_rank_then_suit() {
        assert_eq!(Card::new(Suit::Diamond, Rank::Ten).to_string(), "(10|D)");
        assert_eq!(Card::new(Suit::Club, Rank::Two).to_string(), "(2|C)");
    }
}
