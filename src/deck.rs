//! A deck of cards kept in a singly linked list.
//!
//! The deck owns a link standing in for a node before the first card. Every insertion and
//! removal is "after some position", and the front of the deck is just the position before
//! the first card, so the head needs no special casing.
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng;
//! use splice::deck::{self, Deck};
//!
//! let mut deck = Deck::standard();
//! assert_eq!(deck.len(), 52);
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! deck.shuffle(&mut rng);
//! let shuffled: Vec<_> = deck.iter().copied().collect();
//!
//! deck.stable_selection_sort();
//! assert!(deck.is_sorted());
//! assert!(deck::is_stably_sorted(&deck, &shuffled));
//! ```

mod card;

use std::fmt;

use rand::Rng;

pub use card::{Card, Rank, Suit};

type Link = Option<Box<Node>>;

struct Node {
    card: Card,
    next: Link,
}

/// A deck of playing cards supporting O(1) changes at the front or after a [`CursorMut`].
pub struct Deck {
    /// The link out of the (imaginary) node before the first card.
    head: Link,
    len: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Deck {
    fn drop(&mut self) {
        // Unlink one node at a time so a long deck doesn't recurse through `Box::drop`.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl Clone for Deck {
    fn clone(&self) -> Self {
        self.iter().copied().collect()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut cards = self.iter();
        if let Some(first) = cards.next() {
            write!(f, "{}", first)?;
            for card in cards {
                write!(f, ", {}", card)?;
            }
        }
        f.write_str("]")
    }
}

/// Collects the cards keeping their order: the first card yielded is the front of the deck.
impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut deck = Deck::new();
        let mut cursor = deck.cursor_before_front();
        for card in iter {
            cursor.insert_after(card);
            cursor.move_next();
        }
        deck
    }
}

/// Pushes every card to the front, so the last card yielded ends up first.
impl Extend<Card> for Deck {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        for card in iter {
            self.push_front(card);
        }
    }
}

impl Deck {
    /// The number of cards in [`Deck::standard`].
    pub const STANDARD_LEN: usize = Rank::ALL.len() * Suit::ALL.len();

    /// Creates an empty deck.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Creates the standard 52 card deck.
    ///
    /// Cards are generated from aces down to twos, and within a rank in the suit order of
    /// [`Suit::ALL`]. Each generated card is pushed to the front, so the deck starts with the
    /// two of diamonds and ends with the ace of spades.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice::deck::{Card, Deck, Rank, Suit};
    ///
    /// let deck = Deck::standard();
    ///
    /// let first = deck.iter().next().unwrap();
    /// let last = deck.iter().last().unwrap();
    /// assert_eq!(first.pair(), (Suit::Diamond, Rank::Two));
    /// assert_eq!(last.pair(), (Suit::Spade, Rank::Ace));
    /// ```
    pub fn standard() -> Self {
        let mut deck = Self::new();
        for rank in Rank::ALL.iter().rev() {
            for suit in Suit::ALL {
                deck.push_front(Card::new(suit, *rank));
            }
        }
        deck
    }

    /// The number of cards in the deck.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the deck has no cards.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The first card of the deck.
    pub fn front(&self) -> Option<&Card> {
        self.head.as_deref().map(|node| &node.card)
    }

    /// Puts `card` on top of the deck.
    pub fn push_front(&mut self, card: Card) {
        self.cursor_before_front().insert_after(card);
    }

    /// Takes the card on top of the deck, if there is one.
    pub fn pop_front(&mut self) -> Option<Card> {
        self.cursor_before_front().erase_after()
    }

    /// Returns a cursor positioned before the first card.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice::deck::{Card, Deck, Rank, Suit};
    ///
    /// let mut deck: Deck = [Rank::Two, Rank::Four]
    ///     .into_iter()
    ///     .map(|rank| Card::new(Suit::Heart, rank))
    ///     .collect();
    ///
    /// let mut cursor = deck.cursor_before_front();
    /// assert!(cursor.move_next());
    /// cursor.insert_after(Card::new(Suit::Heart, Rank::Three));
    ///
    /// let ranks: Vec<_> = deck.iter().map(Card::rank).collect();
    /// assert_eq!(ranks, [Rank::Two, Rank::Three, Rank::Four]);
    /// ```
    pub fn cursor_before_front(&mut self) -> CursorMut<'_> {
        CursorMut {
            next: Some(&mut self.head),
            len: &mut self.len,
            index: 0,
        }
    }

    /// Iterates over the cards from the front of the deck to its back.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Iterates over the cards from the front of the deck to its back, allowing them to be
    /// replaced.
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut::new(&mut self.head)
    }

    /// Whether the ranks never decrease from front to back.
    pub fn is_sorted(&self) -> bool {
        self.iter().zip(self.iter().skip(1)).all(|(a, b)| a <= b)
    }

    /// Shuffles the deck in place.
    ///
    /// Walking from the front, the card at position `i` is swapped with the card at a position
    /// drawn uniformly from `i..=len - 1` (possibly itself). With a uniform `rng` every order of
    /// the deck is equally likely.
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        let Some(last) = self.len.checked_sub(1) else {
            return;
        };

        let mut current = self.head.as_deref_mut();
        let mut position = 0;
        while let Some(Node { card, next }) = current {
            let target = rng.gen_range(position..=last);
            if target > position {
                let other = IterMut::new(next)
                    .nth(target - position - 1)
                    .expect("Shuffle target lies within the deck");
                std::mem::swap(card, other);
            }
            current = next.as_deref_mut();
            position += 1;
        }
    }

    /// Sorts the deck by rank, keeping cards of equal rank in the order they were in.
    ///
    /// This is a selection sort which moves nodes instead of cards: the smallest card of the
    /// unsorted part is unlinked and relinked at the end of the sorted part. Taking the first of
    /// several equally small cards is what keeps the sort stable.
    ///
    /// # Examples
    ///
    /// ```
    /// use splice::deck::{Card, Deck, Rank, Suit};
    ///
    /// let mut deck: Deck = [
    ///     Card::new(Suit::Spade, Rank::King),
    ///     Card::new(Suit::Heart, Rank::Two),
    ///     Card::new(Suit::Club, Rank::King),
    ///     Card::new(Suit::Diamond, Rank::Two),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// deck.stable_selection_sort();
    ///
    /// let suits: Vec<_> = deck.iter().map(Card::suit).collect();
    /// assert_eq!(suits, [Suit::Heart, Suit::Diamond, Suit::Spade, Suit::Club]);
    /// ```
    pub fn stable_selection_sort(&mut self) {
        // The link leaving the last node of the sorted prefix.
        let mut sorted = &mut self.head;

        while sorted.is_some() {
            let offset = leftmost_min_offset(sorted);
            let before_min = link_at(sorted, offset);
            let min = extract_after(before_min).expect("The minimum is part of the unsorted rest");
            attach_after(sorted, min);

            sorted = match sorted {
                Some(node) => &mut node.next,
                None => unreachable!("A node was just attached to the sorted prefix"),
            };
        }

        if cfg!(test) {
            assert_eq!(self.iter().count(), self.len);
            assert!(self.is_sorted());
        }
    }
}

/// Links `node` in right after the position whose outgoing link is `link`.
fn attach_after(link: &mut Link, mut node: Box<Node>) {
    node.next = link.take();
    *link = Some(node);
}

/// Unlinks the node right after the position whose outgoing link is `link`.
fn extract_after(link: &mut Link) -> Option<Box<Node>> {
    let mut node = link.take()?;
    *link = node.next.take();
    Some(node)
}

/// Follows `steps` links starting at `link`, stopping early at the end of the list.
fn link_at(mut link: &mut Link, steps: usize) -> &mut Link {
    for _ in 0..steps {
        link = match link {
            Some(node) => &mut node.next,
            None => break,
        };
    }
    link
}

/// How many links past `link` the first of the smallest cards is.
fn leftmost_min_offset(link: &Link) -> usize {
    let mut min: Option<&Card> = None;
    let mut min_offset = 0;

    let nodes = std::iter::successors(link.as_deref(), |node| node.next.as_deref());
    for (offset, node) in nodes.enumerate() {
        // Strictly smaller, so a later card of equal rank never wins.
        if min.map_or(true, |min| node.card < *min) {
            min = Some(&node.card);
            min_offset = offset;
        }
    }
    min_offset
}

/// Checks that `sorted` is `before_sort` sorted by rank with every run of equal ranks in the
/// same order as in `before_sort`.
///
/// Cards are told apart by their [`pair`](Card::pair) here, not by `==`.
pub fn is_stably_sorted(sorted: &Deck, before_sort: &[Card]) -> bool {
    if sorted.len() != before_sort.len() || !sorted.is_sorted() {
        return false;
    }

    Rank::ALL.iter().all(|rank| {
        let after = sorted.iter().filter(|card| card.rank() == *rank);
        let before = before_sort.iter().filter(|card| card.rank() == *rank);
        after.map(Card::pair).eq(before.map(Card::pair))
    })
}

/// A position in a [`Deck`]: either before the first card or on one of the cards. Cards are
/// inserted and erased right after the position.
pub struct CursorMut<'a> {
    /// The link leaving the current position. Only `None` while `move_next` runs.
    next: Option<&'a mut Link>,
    len: &'a mut usize,
    index: usize,
}

impl<'a> CursorMut<'a> {
    /// How many cards lie at or before the current position. A cursor before the first card
    /// has an index of 0.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The card right after the current position.
    pub fn peek_next(&self) -> Option<&Card> {
        self.link().as_deref().map(|node| &node.card)
    }

    /// Moves onto the next card. Returns `false`, staying put, if there is none.
    pub fn move_next(&mut self) -> bool {
        match self.next.take() {
            Some(Some(node)) => {
                self.next = Some(&mut node.next);
                self.index += 1;
                true
            }
            next => {
                self.next = next;
                false
            }
        }
    }

    /// Inserts `card` right after the current position. The cursor stays where it is, so the
    /// new card is the next one.
    pub fn insert_after(&mut self, card: Card) {
        attach_after(self.link_mut(), Box::new(Node { card, next: None }));
        *self.len += 1;
    }

    /// Removes the card right after the current position and returns it. Returns `None` if the
    /// cursor is on the last card.
    pub fn erase_after(&mut self) -> Option<Card> {
        let node = extract_after(self.link_mut())?;
        *self.len -= 1;
        Some(node.card)
    }

    fn link(&self) -> &Link {
        self.next.as_deref().expect("Cursor link is restored by move_next")
    }

    fn link_mut(&mut self) -> &mut Link {
        self.next
            .as_deref_mut()
            .expect("Cursor link is restored by move_next")
    }
}

/// An iterator over the cards of a [`Deck`], created by [`Deck::iter`].
pub struct Iter<'a> {
    next: Option<&'a Node>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Card;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.card
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// A mutable iterator over the cards of a [`Deck`], created by [`Deck::iter_mut`].
pub struct IterMut<'a> {
    next: Option<&'a mut Node>,
}

impl<'a> IterMut<'a> {
    fn new(link: &'a mut Link) -> Self {
        Self {
            next: link.as_deref_mut(),
        }
    }
}

impl<'a> Iterator for IterMut<'a> {
    type Item = &'a mut Card;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.card
        })
    }
}
