use quickcheck::{Arbitrary, Gen};

use crate::deck::{Card, Rank, Suit};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the T into the data structure
    Insert(T),
    /// Erase the T from the data structure
    Erase(T),
    /// Compare iterators
    Iter,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Erase(T::arbitrary(g)),
            2 => Op::Iter,
            _ => unreachable!(),
        }
    }
}

impl Arbitrary for Card {
    /// Picks any of the 52 cards. Small decks drawn from these are full of equal ranks, which
    /// is what the stability tests want.
    fn arbitrary(g: &mut Gen) -> Self {
        let suit = *g.choose(&Suit::ALL).unwrap();
        let rank = *g.choose(&Rank::ALL).unwrap();
        Card::new(suit, rank)
    }
}
