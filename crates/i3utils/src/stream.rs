//! Forward-only streams over in-memory sequences
//!
//! A [`Stream`] exposes two operations: ask whether another item is
//! available, and take it. [`ListStream`] is the concrete variant backed by
//! its own copy of a sequence plus a cursor.
//!
//! # Access
//!
//! Streams are single-writer/single-reader. A `ListStream` may be moved to
//! another thread when its items can, but callers that share one stream
//! between threads must serialise access themselves (for example behind a
//! `Mutex`). The copy taken at construction only insulates the stream from
//! later changes to the caller's sequence.

/// "Has more / take next" protocol over a sequence of items
pub trait Stream {
    /// Item yielded by the stream
    type Item;

    /// Whether a call to [`Stream::next`] would yield an item
    fn has_next(&self) -> bool;

    /// Take the next item
    ///
    /// Returns `None` once the stream is exhausted; an exhausted stream
    /// keeps returning `None` and its state does not change.
    fn next(&mut self) -> Option<Self::Item>;

    /// Borrow the stream as an [`Iterator`] over its remaining items
    fn by_iter(&mut self) -> StreamIter<'_, Self>
    where
        Self: Sized,
    {
        StreamIter { stream: self }
    }
}

/// Iterator adapter returned by [`Stream::by_iter`]
#[derive(Debug)]
pub struct StreamIter<'a, S> {
    stream: &'a mut S,
}

impl<S: Stream> Iterator for StreamIter<'_, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        Stream::next(self.stream)
    }
}

impl<S: Stream> std::iter::FusedIterator for StreamIter<'_, S> {}

/// Stream over an owned copy of a sequence
///
/// The cursor never moves backwards and never passes the end:
/// `0 <= position() <= len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListStream<T> {
    items: Vec<T>,
    cursor: usize,
    len: usize,
}

impl<T: Clone> ListStream<T> {
    /// Create a stream over a copy of `items`
    ///
    /// Later changes to the caller's sequence do not affect the stream.
    pub fn new(items: &[T]) -> Self {
        Self::from(items.to_vec())
    }

    /// Take every unconsumed item, leaving the stream exhausted
    ///
    /// Calling it again returns an empty vector.
    pub fn to_list(&mut self) -> Vec<T> {
        let remaining = self.items[self.cursor..self.len].to_vec();
        self.cursor = self.len;
        remaining
    }
}

impl<T> ListStream<T> {
    /// Number of items the stream was created with
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the stream was created from an empty sequence
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of items consumed so far
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Number of items not yet consumed
    pub const fn remaining(&self) -> usize {
        self.len - self.cursor
    }
}

impl<T: Clone> Stream for ListStream<T> {
    type Item = T;

    fn has_next(&self) -> bool {
        self.cursor < self.len
    }

    fn next(&mut self) -> Option<T> {
        if !self.has_next() {
            return None;
        }

        let item = self.items[self.cursor].clone();
        self.cursor += 1;
        Some(item)
    }
}

/// Takes ownership of a vector the caller no longer needs; no copy is made
impl<T> From<Vec<T>> for ListStream<T> {
    fn from(items: Vec<T>) -> Self {
        let len = items.len();
        Self {
            items,
            cursor: 0,
            len,
        }
    }
}

impl<T: Clone> From<&[T]> for ListStream<T> {
    fn from(items: &[T]) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for ListStream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}
