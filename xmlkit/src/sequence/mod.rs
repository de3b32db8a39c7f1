//! Lazy, restartable sequences.
//!
//! A [`Sequence`] hands out a fresh iterator every time [`Sequence::iter`] is
//! called, so the same sequence can be traversed any number of times.
//! [`Sequence::map`] and [`Sequence::filter`] compose new sequences without
//! materializing anything; the work happens while the caller iterates.
mod filter;
mod map;
mod node_sequence;

pub use filter::{Filter, FilterCursor};
pub use map::Map;
pub use node_sequence::{nodes, NodeList, NodeSequence, Nodes};

/// An ordered, finite sequence that can be traversed repeatedly.
pub trait Sequence {
    type Item;

    /// The traversal state of one pass over the sequence.
    type Iter<'a>: Iterator<Item = Self::Item>
    where
        Self: 'a;

    /// Start a new traversal at the first element.
    fn iter(&self) -> Self::Iter<'_>;

    /// A sequence where every element is passed through `transform`.
    ///
    /// `transform` is called once per element produced, at the moment the
    /// element is requested.
    fn map<T, F>(self, transform: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> T,
    {
        Map::new(self, transform)
    }

    /// A sequence of the elements for which `predicate` holds, in their
    /// original order.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<S: Sequence>(sequence: &S) -> Vec<S::Item> {
        sequence.iter().collect()
    }

    #[test]
    fn test_map_then_filter() {
        let sequence = nodes(vec![1, 2, 3, 4, 5, 6])
            .map(|n| n * 10)
            .filter(|n| n % 20 == 0);
        assert_eq!(collect(&sequence), vec![20, 40, 60]);
    }

    #[test]
    fn test_filter_then_map() {
        let sequence = nodes(vec![1, 2, 3, 4, 5, 6])
            .filter(|n| n % 2 == 1)
            .map(|n| n.to_string());
        assert_eq!(collect(&sequence), vec!["1", "3", "5"]);
    }

    #[test]
    fn test_composed_sequence_is_restartable() {
        let sequence = nodes(vec![1, 2, 3]).filter(|n| *n != 2).map(|n| n + 1);
        assert_eq!(collect(&sequence), vec![2, 4]);
        assert_eq!(collect(&sequence), vec![2, 4]);
    }
}
