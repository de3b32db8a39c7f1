use super::Sequence;

/// A fixed-length collection that can be read by index.
pub trait NodeList {
    type Node: Copy;

    fn length(&self) -> usize;

    /// The item at `index`, or `None` if the collection no longer has it.
    fn item(&self, index: usize) -> Option<Self::Node>;
}

impl<T: Copy> NodeList for [T] {
    type Node = T;

    fn length(&self) -> usize {
        self.len()
    }

    fn item(&self, index: usize) -> Option<T> {
        self.get(index).copied()
    }
}

impl<T: Copy, const N: usize> NodeList for [T; N] {
    type Node = T;

    fn length(&self) -> usize {
        N
    }

    fn item(&self, index: usize) -> Option<T> {
        self.get(index).copied()
    }
}

impl<T: Copy> NodeList for Vec<T> {
    type Node = T;

    fn length(&self) -> usize {
        self.len()
    }

    fn item(&self, index: usize) -> Option<T> {
        self.get(index).copied()
    }
}

impl<L: NodeList + ?Sized> NodeList for &L {
    type Node = L::Node;

    fn length(&self) -> usize {
        (**self).length()
    }

    fn item(&self, index: usize) -> Option<Self::Node> {
        (**self).item(index)
    }
}

/// A [`NodeList`] exposed as a [`Sequence`].
///
/// The length of the list is taken once, when the sequence is constructed.
/// Items appended to the list afterwards are not visited; if the list
/// shrinks, a traversal ends at the first index that is gone.
#[derive(Debug, Clone)]
pub struct NodeSequence<L> {
    list: L,
    length: usize,
}

impl<L: NodeList> NodeSequence<L> {
    pub fn new(list: L) -> Self {
        let length = list.length();
        Self { list, length }
    }

    /// The length captured at construction.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// Wrap a node list into a [`NodeSequence`].
pub fn nodes<L: NodeList>(list: L) -> NodeSequence<L> {
    NodeSequence::new(list)
}

impl<L: NodeList> Sequence for NodeSequence<L> {
    type Item = L::Node;
    type Iter<'a>
        = Nodes<'a, L>
    where
        Self: 'a;

    fn iter(&self) -> Nodes<'_, L> {
        Nodes {
            list: &self.list,
            index: 0,
            length: self.length,
        }
    }
}

impl<'a, L: NodeList> IntoIterator for &'a NodeSequence<L> {
    type Item = L::Node;
    type IntoIter = Nodes<'a, L>;

    fn into_iter(self) -> Nodes<'a, L> {
        self.iter()
    }
}

/// A traversal of a [`NodeSequence`], by index.
#[derive(Debug)]
pub struct Nodes<'a, L> {
    list: &'a L,
    index: usize,
    length: usize,
}

impl<L: NodeList> Iterator for Nodes<'_, L> {
    type Item = L::Node;

    fn next(&mut self) -> Option<L::Node> {
        if self.index >= self.length {
            return None;
        }
        match self.list.item(self.index) {
            Some(node) => {
                self.index += 1;
                Some(node)
            }
            None => {
                self.index = self.length;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.length - self.index))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use rstest::rstest;

    use super::*;

    struct LiveList(RefCell<Vec<u32>>);

    impl NodeList for LiveList {
        type Node = u32;

        fn length(&self) -> usize {
            self.0.borrow().len()
        }

        fn item(&self, index: usize) -> Option<u32> {
            self.0.borrow().get(index).copied()
        }
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![7])]
    #[case(vec![3, 1, 2])]
    fn test_yields_items_in_index_order(#[case] items: Vec<u32>) {
        let sequence = nodes(items.clone());
        assert_eq!(sequence.len(), items.len());
        assert_eq!(sequence.iter().collect::<Vec<_>>(), items);
    }

    #[test]
    fn test_empty_list() {
        let sequence = nodes(Vec::<u32>::new());
        assert!(sequence.is_empty());
        assert_eq!(sequence.iter().next(), None);
    }

    #[test]
    fn test_each_traversal_starts_over() {
        let sequence = nodes([1, 2, 3]);
        let mut first = sequence.iter();
        assert_eq!(first.next(), Some(1));
        assert_eq!(sequence.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(first.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_slices_and_for_loops() {
        let items = [4, 5, 6];
        let sequence = nodes(&items[1..]);
        let mut seen = Vec::new();
        for item in &sequence {
            seen.push(item);
        }
        assert_eq!(seen, vec![5, 6]);
    }

    #[test]
    fn test_growth_after_construction_is_not_visited() {
        let live = LiveList(RefCell::new(vec![1, 2, 3]));
        let sequence = nodes(&live);
        live.0.borrow_mut().push(4);
        assert_eq!(sequence.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_shrink_after_construction_ends_early() {
        let live = LiveList(RefCell::new(vec![1, 2, 3]));
        let sequence = nodes(&live);
        live.0.borrow_mut().pop();
        assert_eq!(sequence.iter().collect::<Vec<_>>(), vec![1, 2]);
    }
}
