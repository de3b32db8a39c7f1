use super::Sequence;

/// A sequence that transforms each element of another sequence.
///
/// Construct this using [`Sequence::map`].
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    source: S,
    transform: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(source: S, transform: F) -> Self {
        Self { source, transform }
    }
}

impl<S, T, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> T,
{
    type Item = T;
    type Iter<'a>
        = std::iter::Map<S::Iter<'a>, &'a F>
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        self.source.iter().map(&self.transform)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::sequence::nodes;

    use super::*;

    #[test]
    fn test_identity_map_is_source() {
        let source = nodes(vec![5, 3, 8]);
        let mapped = source.clone().map(|n| n);
        assert_eq!(
            mapped.iter().collect::<Vec<_>>(),
            source.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_map_composition() {
        let f = |n: i32| n + 1;
        let g = |n: i32| n * 3;
        let chained = nodes(vec![1, 2, 3]).map(f).map(g);
        let composed = nodes(vec![1, 2, 3]).map(|n| g(f(n)));
        assert_eq!(
            chained.iter().collect::<Vec<_>>(),
            composed.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_transform_runs_only_on_demand() {
        let calls = Cell::new(0);
        let mapped = nodes(vec![1, 2, 3]).map(|n| {
            calls.set(calls.get() + 1);
            n * 2
        });
        assert_eq!(calls.get(), 0);

        let mut iter = mapped.iter();
        assert_eq!(iter.next(), Some(2));
        assert_eq!(calls.get(), 1);

        assert_eq!(iter.collect::<Vec<_>>(), vec![4, 6]);
        assert_eq!(calls.get(), 3);
    }
}
