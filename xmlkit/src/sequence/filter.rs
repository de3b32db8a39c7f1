use crate::error::{Error, Result};

use super::Sequence;

/// A sequence of the elements of another sequence that satisfy a
/// predicate.
///
/// Construct this using [`Sequence::filter`].
#[derive(Debug, Clone)]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Iter<'a>
        = FilterCursor<'a, S::Iter<'a>, P>
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        FilterCursor {
            source: self.source.iter(),
            predicate: &self.predicate,
            lookahead: Lookahead::Unprimed,
        }
    }
}

#[derive(Debug)]
enum Lookahead<T> {
    Unprimed,
    Primed(T),
    Exhausted,
}

/// A traversal of a [`Filter`].
///
/// Besides being an [`Iterator`], the cursor supports an explicit
/// two-step protocol: [`FilterCursor::has_next`] scans ahead to the next
/// accepted element and holds on to it, [`FilterCursor::next_item`] hands
/// it out. Every source element is looked at once.
pub struct FilterCursor<'a, I: Iterator, P> {
    source: I,
    predicate: &'a P,
    lookahead: Lookahead<I::Item>,
}

impl<I, P> FilterCursor<'_, I, P>
where
    I: Iterator,
    P: Fn(&I::Item) -> bool,
{
    /// Whether another accepted element exists. Rejected elements are
    /// skipped; the accepted one is kept until [`FilterCursor::next_item`].
    pub fn has_next(&mut self) -> bool {
        match self.lookahead {
            Lookahead::Primed(_) => true,
            Lookahead::Exhausted => false,
            Lookahead::Unprimed => {
                for candidate in self.source.by_ref() {
                    if (self.predicate)(&candidate) {
                        self.lookahead = Lookahead::Primed(candidate);
                        return true;
                    }
                }
                self.lookahead = Lookahead::Exhausted;
                false
            }
        }
    }

    /// Take the element found by the last successful
    /// [`FilterCursor::has_next`].
    ///
    /// Fails with [`Error::InvalidSequenceState`] if no element is held.
    pub fn next_item(&mut self) -> Result<I::Item> {
        self.take_primed().ok_or(Error::InvalidSequenceState)
    }

    fn take_primed(&mut self) -> Option<I::Item> {
        match std::mem::replace(&mut self.lookahead, Lookahead::Unprimed) {
            Lookahead::Primed(item) => Some(item),
            other => {
                self.lookahead = other;
                None
            }
        }
    }
}

impl<I, P> Iterator for FilterCursor<'_, I, P>
where
    I: Iterator,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.has_next() {
            self.take_primed()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let held = usize::from(matches!(self.lookahead, Lookahead::Primed(_)));
        match self.lookahead {
            Lookahead::Exhausted => (0, Some(0)),
            _ => {
                let (_, upper) = self.source.size_hint();
                (held, upper.and_then(|upper| upper.checked_add(held)))
            }
        }
    }
}
