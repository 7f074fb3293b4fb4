//! # Instrumented Streams
//!
//! A stream adapter that counts how many elements a consumer actually pulled.
//!
//! Lazy combinators promise not to evaluate more than they need. The only way
//! to check that promise from the outside is to wrap the source and watch the
//! `next()` calls go by. [`Counted`] does exactly that, publishing the count
//! through a cloneable [`PullCounter`] handle that outlives the stream itself
//! (the stream is usually moved into the consumer under test).
//!
//! ## Example
//!
//! ```
//! use impatient_common::counting::Counted;
//!
//! let (stream, counter) = Counted::new(1..);
//! let firsts: Vec<i32> = stream.take(3).collect();
//!
//! assert_eq!(firsts, vec![1, 2, 3]);
//! assert_eq!(counter.pulled(), 3);
//! ```

use std::iter::FusedIterator;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared view on the number of elements pulled through a [`Counted`] stream.
#[derive(Debug, Clone, Default)]
pub struct PullCounter {
    pulled: Arc<AtomicUsize>,
    exhausted: Arc<AtomicUsize>,
}

impl PullCounter {
    /// Number of elements handed out so far.
    pub fn pulled(&self) -> usize {
        self.pulled.load(Ordering::SeqCst)
    }

    /// Number of `next()` calls that returned `None`.
    pub fn exhaustion_signals(&self) -> usize {
        self.exhausted.load(Ordering::SeqCst)
    }
}

/// Iterator adapter recording every element it hands out.
///
/// The counter is atomic so the adapter stays `Send` and can be driven from
/// worker threads (for example by a parallel probe).
#[derive(Debug)]
pub struct Counted<I> {
    inner: I,
    counter: PullCounter,
}

impl<I> Counted<I>
where
    I: Iterator,
{
    /// Wraps `inner`, returning the adapter together with its counter handle.
    pub fn new<S>(inner: S) -> (Self, PullCounter)
    where
        S: IntoIterator<IntoIter = I>,
    {
        let counter = PullCounter::default();
        let counted = Counted {
            inner: inner.into_iter(),
            counter: counter.clone(),
        };
        (counted, counter)
    }
}

impl<I> Iterator for Counted<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.next() {
            Some(item) => {
                self.counter.pulled.fetch_add(1, Ordering::SeqCst);
                Some(item)
            }
            None => {
                self.counter.exhausted.fetch_add(1, Ordering::SeqCst);
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I> FusedIterator for Counted<I> where I: FusedIterator {}
