//! Adaptation of the pull protocol to [`Iterator`].

use std::iter::FusedIterator;

use crate::consumer::Consumer;

/// The direction an [`Iter`] walks its consumer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// From the first element towards the last.
    Forward,
    /// From the last element towards the first.
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Active,
    Done,
}

/// An iterator driving a [`Consumer`] in one direction.
///
/// The first call to [`next`](Iterator::next) positions the consumer
/// (`move_first` or `move_last`), later calls step it. Once the consumer
/// runs out, `next` keeps returning `None` without touching it again.
///
/// # Examples
///
/// ```rust
/// use seqview::from_container;
///
/// let numbers = [1, 2, 3];
/// let collection = from_container(&numbers);
///
/// let forward: Vec<&i32> = collection.iter().collect();
/// let backward: Vec<&i32> = collection.iter_rev().collect();
/// assert_eq!(forward, vec![&1, &2, &3]);
/// assert_eq!(backward, vec![&3, &2, &1]);
/// ```
pub struct Iter<C> {
    consumer: C,
    direction: Direction,
    state: State,
    remaining: Option<usize>,
}

impl<C: Consumer> Iter<C> {
    /// Creates an iterator over a fresh consumer.
    ///
    /// `length` is the exact number of elements the consumer produces, if
    /// known; it only feeds [`size_hint`](Iterator::size_hint).
    pub const fn new(consumer: C, direction: Direction, length: Option<usize>) -> Self {
        Self {
            consumer,
            direction,
            state: State::Fresh,
            remaining: length,
        }
    }

    /// Returns the direction of traversal.
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the underlying consumer.
    pub fn into_consumer(self) -> C {
        self.consumer
    }

    fn advance(&mut self) -> bool {
        match (self.state, self.direction) {
            (State::Fresh, Direction::Forward) => self.consumer.move_first(),
            (State::Fresh, Direction::Backward) => self.consumer.move_last(),
            (State::Active, Direction::Forward) => self.consumer.move_next(),
            (State::Active, Direction::Backward) => self.consumer.move_prev(),
            (State::Done, _) => false,
        }
    }
}

impl<C: Consumer> Iterator for Iter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.advance() {
            self.state = State::Active;
            self.remaining = self.remaining.map(|count| count.saturating_sub(1));
            Some(self.consumer.current())
        } else {
            self.state = State::Done;
            self.remaining = Some(0);
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(count) => (count, Some(count)),
            None => (0, None),
        }
    }
}

impl<C: Consumer> FusedIterator for Iter<C> {}
