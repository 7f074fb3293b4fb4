//! 2.4절: 부분 스트림 추출과 스트림 결합 (Extracting Substreams and Combining Streams)
//!
//! 이 절의 두 연습 문제는 지연 스트림의 경계를 다룬다
//! (The two exercises of this section deal with the boundaries of lazy streams):
//!
//! - [`is_finite`]: 스트림이 유한한지 묻는 것은 일반적으로 결정 불가능하다.
//!   그래서 명시적인 반복 예산을 두고, 예산을 다 쓰면 "무한해 보인다"고 답한다
//!   (Asking whether a stream is finite is undecidable in general, so the probe carries an
//!   explicit iteration budget and answers "apparently infinite" once it is spent).
//! - [`zip`]: 두 스트림의 원소를 번갈아 내보내고, 한쪽이 끝나면 멈춘다
//!   (Alternates elements from two streams, stopping when either runs out).
//!
//! # 예산 회로 차단기 (The Budget Circuit Breaker)
//!
//! ```text
//!   stream ──next()──> [ remaining: budget ] ──> 0 이하? (crossed zero?)
//!      │                      │ -1 per element          │
//!      │                      ▼                          ▼
//!    None ──> Finite { len }           ApparentlyInfinite (더 이상 당기지 않음 (stop pulling))
//! ```
//!
//! 병렬 모드에서는 여러 작업 스레드가 같은 원천에서 순서 없이 원소를 당기고,
//! 하나의 원자적 카운터를 공유한다 (In parallel mode several workers pull from the same
//! source unordered and share a single atomic countdown).

use std::collections::VecDeque;
use std::convert::Infallible;
use std::iter::FusedIterator;
use std::num::NonZeroUsize;
use std::panic;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;

use impatient_common::{Result, StreamError};
use tracing::{debug, trace, warn};

// =============================================================================
// 유한성 판별 (Finiteness Probe)
// =============================================================================

/// 기본 반복 예산 (Default iteration budget): 2^25 = 33,554,432 elements.
///
/// 테스트나 실제 사용에서 만나는 유한 스트림(수 개에서 수천 개)은 언제나 유한으로 분류되고,
/// 끝나지 않는 스트림은 유한한 시간 안에 "무한해 보인다"고 판정된다
/// (Realistic finite streams, from a handful to thousands of elements, are always classified
/// finite, while a stream that never ends is flagged in bounded time).
pub const DEFAULT_ITERATION_BUDGET: u64 = 1 << 25;

/// 기본 작업 스레드 수 (Default worker count): sequential.
pub const DEFAULT_PROBE_WORKERS: usize = 1;

/// 판별 결과 (Outcome of a probe).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finiteness {
    /// 예산 안에서 스트림이 끝났다 (The stream ended within budget after `len` elements).
    Finite { len: u64 },
    /// 예산을 넘어서도 원소가 계속 나왔다 (More than `budget` elements were observed).
    ApparentlyInfinite,
}

impl Finiteness {
    pub fn is_finite(self) -> bool {
        matches!(self, Finiteness::Finite { .. })
    }
}

/// 반복 예산과 작업 스레드 수를 가진 유한성 판별기
/// (Finiteness probe configured with an iteration budget and a worker count).
///
/// 길이가 `budget` 이하인 스트림은 유한이다. `budget + 1`번째 원소를 본 순간 차단기가 작동한다
/// (A stream of length `<= budget` is finite; observing element `budget + 1` trips the breaker).
///
/// # Examples
/// ```
/// use impatient_chapter2::section_2_4::{Finiteness, FinitenessProbe};
///
/// let probe = FinitenessProbe::new().with_budget(10);
/// assert_eq!(probe.probe(0..10), Finiteness::Finite { len: 10 });
/// assert_eq!(probe.probe(0..11), Finiteness::ApparentlyInfinite);
/// assert_eq!(probe.probe(std::iter::repeat(())), Finiteness::ApparentlyInfinite);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinitenessProbe {
    budget: u64,
    workers: NonZeroUsize,
}

impl Default for FinitenessProbe {
    fn default() -> Self {
        FinitenessProbe {
            budget: DEFAULT_ITERATION_BUDGET,
            workers: NonZeroUsize::MIN,
        }
    }
}

impl FinitenessProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_budget(mut self, budget: u64) -> Self {
        self.budget = budget;
        self
    }

    /// 병렬 판별에 쓸 작업 스레드 수를 정한다 (Sets the worker count for parallel probing).
    pub fn with_workers(mut self, workers: usize) -> Result<Self> {
        self.workers = NonZeroUsize::new(workers).ok_or(StreamError::NoWorkers)?;
        Ok(self)
    }

    pub fn budget(&self) -> u64 {
        self.budget
    }

    pub fn workers(&self) -> usize {
        self.workers.get()
    }

    /// 스트림을 현재 스레드에서 순차적으로 소비하며 판별한다
    /// (Probes by consuming the stream sequentially on the current thread).
    pub fn probe<I>(&self, stream: I) -> Finiteness
    where
        I: IntoIterator,
    {
        match self.try_probe(stream.into_iter().map(Ok::<_, Infallible>)) {
            Ok(finiteness) => finiteness,
            Err(never) => match never {},
        }
    }

    /// 실패할 수 있는 스트림을 순차적으로 판별한다 (Sequentially probes a fallible stream).
    ///
    /// 원천의 첫 오류는 그대로 반환되며, 어느 쪽 판정으로도 바뀌지 않는다
    /// (The first producer error is returned as-is and never turned into either verdict).
    pub fn try_probe<I, T, E>(&self, stream: I) -> std::result::Result<Finiteness, E>
    where
        I: IntoIterator<Item = std::result::Result<T, E>>,
    {
        debug!(budget = self.budget, "probing stream sequentially");

        let mut observed: u64 = 0;
        for item in stream {
            item?;
            if observed == self.budget {
                warn!(
                    budget = self.budget,
                    "iteration budget exhausted, treating stream as infinite"
                );
                return Ok(Finiteness::ApparentlyInfinite);
            }
            observed += 1;
        }

        debug!(len = observed, "stream ended within budget");
        Ok(Finiteness::Finite { len: observed })
    }

    /// 여러 작업 스레드로 순서 없이 판별한다 (Probes unordered with several worker threads).
    ///
    /// 결과는 순차 판별과 같다. 작업 스레드가 하나면 순차 판별로 처리한다
    /// (The verdict matches the sequential probe; a single worker falls back to it).
    pub fn probe_parallel<I>(&self, stream: I) -> Finiteness
    where
        I: IntoIterator,
        I::IntoIter: Send,
    {
        match self.try_probe_parallel(stream.into_iter().map(Ok::<_, Infallible>)) {
            Ok(finiteness) => finiteness,
            Err(never) => match never {},
        }
    }

    /// 실패할 수 있는 스트림을 병렬로 판별한다 (Probes a fallible stream in parallel).
    ///
    /// 원천이 패닉하면 그 패닉은 호출자에게 다시 전파된다
    /// (A panicking producer re-raises its panic in the caller).
    pub fn try_probe_parallel<I, T, E>(&self, stream: I) -> std::result::Result<Finiteness, E>
    where
        I: IntoIterator<Item = std::result::Result<T, E>>,
        I::IntoIter: Send,
        E: Send,
    {
        let workers = self.workers.get();
        if workers == 1 {
            return self.try_probe(stream);
        }
        debug!(budget = self.budget, workers, "probing stream in parallel");

        let shared = SharedProbe {
            source: Mutex::new(stream.into_iter()),
            remaining: AtomicU64::new(self.budget),
            observed: AtomicU64::new(0),
            stop: AtomicBool::new(false),
            tripped: AtomicBool::new(false),
            failure: Mutex::new(None),
        };

        thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|worker| {
                    let shared = &shared;
                    scope.spawn(move || shared.work(worker))
                })
                .collect();

            // 원천의 패닉 내용을 그대로 다시 던진다 (Re-raise the producer's own panic payload).
            let mut panicked = None;
            for handle in handles {
                if let Err(payload) = handle.join() {
                    panicked.get_or_insert(payload);
                }
            }
            if let Some(payload) = panicked {
                panic::resume_unwind(payload);
            }
        });

        if let Some(err) = shared.failure.into_inner().unwrap_or_else(PoisonError::into_inner) {
            return Err(err);
        }
        if shared.tripped.into_inner() {
            warn!(
                budget = self.budget,
                workers,
                "iteration budget exhausted, treating stream as infinite"
            );
            return Ok(Finiteness::ApparentlyInfinite);
        }

        let len = shared.observed.into_inner();
        debug!(len, "stream ended within budget");
        Ok(Finiteness::Finite { len })
    }
}

/// 병렬 판별의 작업 스레드들이 공유하는 상태 (State shared by the workers of a parallel probe).
///
/// 원천은 잠금 아래에서만 당긴다. 예산 카운터가 유일한 다른 공유 가변 상태다
/// (The source is only pulled under its lock; the budget countdown is the only other
/// shared mutable state).
struct SharedProbe<I, E> {
    source: Mutex<I>,
    remaining: AtomicU64,
    observed: AtomicU64,
    stop: AtomicBool,
    tripped: AtomicBool,
    failure: Mutex<Option<E>>,
}

impl<I, T, E> SharedProbe<I, E>
where
    I: Iterator<Item = std::result::Result<T, E>>,
{
    fn work(&self, worker: usize) {
        let mut accepted: u64 = 0;

        while !self.stop.load(Ordering::Acquire) {
            let item = {
                let Ok(mut source) = self.source.lock() else {
                    // 다른 작업 스레드에서 원천이 패닉했다 (The producer panicked on another worker).
                    self.stop.store(true, Ordering::Release);
                    break;
                };
                if self.stop.load(Ordering::Acquire) {
                    break;
                }
                source.next()
            };

            match item {
                None => self.stop.store(true, Ordering::Release),
                Some(Err(err)) => {
                    self.failure
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .get_or_insert(err);
                    self.stop.store(true, Ordering::Release);
                }
                Some(Ok(_)) => {
                    let decremented = self.remaining.fetch_update(
                        Ordering::AcqRel,
                        Ordering::Acquire,
                        |left| left.checked_sub(1),
                    );
                    if decremented.is_err() {
                        self.tripped.store(true, Ordering::Release);
                        self.stop.store(true, Ordering::Release);
                    } else {
                        self.observed.fetch_add(1, Ordering::AcqRel);
                        accepted += 1;
                    }
                }
            }
        }

        trace!(worker, accepted, "probe worker finished");
    }
}

/// 스트림이 유한해 보이면 `true`를 반환한다 (Returns `true` if the stream appears finite).
///
/// 스트림을 소비하므로 이후에 다시 쓸 수 없다. 길이가 [`DEFAULT_ITERATION_BUDGET`]을
/// 넘는 유한 스트림도 무한으로 분류된다. 이것은 보장이 아니라 근사다
/// (The stream is consumed and cannot be reused. A finite stream longer than
/// [`DEFAULT_ITERATION_BUDGET`] is also reported infinite; this is an approximation,
/// not a guarantee).
///
/// # Examples
/// ```
/// use impatient_chapter2::section_2_4::is_finite;
///
/// assert!(is_finite(vec![1, 2, 3, 4, 5]));
/// assert!(is_finite(std::iter::empty::<u8>()));
/// ```
pub fn is_finite<I>(stream: I) -> bool
where
    I: IntoIterator,
{
    FinitenessProbe::default().probe(stream).is_finite()
}

/// [`is_finite`]의 실패 가능 버전 (Fallible version of [`is_finite`]).
///
/// # Examples
/// ```
/// use impatient_chapter2::section_2_4::try_is_finite;
///
/// let items: Vec<Result<u8, &str>> = vec![Ok(1), Err("disk on fire"), Ok(3)];
/// assert_eq!(try_is_finite(items), Err("disk on fire"));
/// ```
pub fn try_is_finite<I, T, E>(stream: I) -> std::result::Result<bool, E>
where
    I: IntoIterator<Item = std::result::Result<T, E>>,
{
    FinitenessProbe::default()
        .try_probe(stream)
        .map(Finiteness::is_finite)
}

// =============================================================================
// 교대 지퍼 (Alternating Zipper)
// =============================================================================

/// `first`와 `second`의 원소를 번갈아 내보내는 스트림 (Stream alternating elements of two captured prefixes).
#[derive(Debug, Clone)]
pub struct Alternate<T> {
    firsts: VecDeque<T>,
    seconds: VecDeque<T>,
    from_first: bool,
    remaining: usize,
}

impl<T> Iterator for Alternate<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let queue = if self.from_first {
            &mut self.firsts
        } else {
            &mut self.seconds
        };
        self.from_first = !self.from_first;
        self.remaining -= 1;
        queue.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Alternate<T> {}

impl<T> FusedIterator for Alternate<T> {}

/// 두 스트림의 원소를 번갈아 내보내고, 어느 한쪽이 끝나면 멈춘다
/// (Alternates elements from `first` and `second`, stopping when either runs out).
///
/// `first`는 끝까지 모두 읽어 들인다. 따라서 `first`는 유한해야 한다. 무한한 `first`를 넘기면
/// 이 함수는 반환하지 않는다 (이는 호출자 계약 위반이며 실행 중에 검사하지 않는다)
/// (`first` is materialised completely, so it must be finite: an unbounded `first` never
/// returns. That is a caller contract violation and is not checked at runtime).
///
/// `second`에서는 `first`의 길이만큼만 당긴다. 그보다 긴 `second`의 나머지는 건드리지 않으므로
/// `second`는 무한해도 된다 (Only as many elements as `first` produced are pulled from `second`;
/// its surplus is never touched, so `second` may be infinite).
///
/// 결과 길이는 `2 * min(len(first), len(second))`다
/// (The result has `2 * min(len(first), len(second))` elements).
///
/// # Examples
/// ```
/// use impatient_chapter2::section_2_4::zip;
///
/// let odd = (1..).step_by(2).take(10);
/// let even = (2..).step_by(2).take(13);
/// let zipped: Vec<i32> = zip(odd, even).collect();
/// assert_eq!(zipped, (1..=20).collect::<Vec<_>>());
/// ```
pub fn zip<A, B, T>(first: A, second: B) -> Alternate<T>
where
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let firsts: VecDeque<T> = first.into_iter().collect();
    let seconds: VecDeque<T> = second.into_iter().take(firsts.len()).collect();
    let remaining = firsts.len().min(seconds.len()).saturating_mul(2);

    trace!(
        first = firsts.len(),
        second = seconds.len(),
        remaining,
        "captured zip inputs"
    );

    Alternate {
        firsts,
        seconds,
        from_first: true,
        remaining,
    }
}

// =============================================================================
// 테스트 (Tests)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use impatient_common::Counted;
    use proptest::prelude::*;
    use std::cell::Cell;

    // -------------------------------------------------------------------------
    // is_finite
    // -------------------------------------------------------------------------

    #[test]
    fn test_finite_streams_are_finite() {
        assert!(is_finite(vec![1, 2, 3, 4, 5]));
        assert!(is_finite(std::iter::empty::<i32>()));
        assert!(is_finite("a b c".split(' ')));
    }

    #[test]
    fn test_generated_stream_is_infinite() {
        // Stream.generate(() -> 1)에 해당 (Equivalent of Stream.generate(() -> 1)).
        assert!(!is_finite(std::iter::repeat_with(|| 1)));
    }

    #[test]
    fn test_consumes_exactly_k_elements() {
        for k in [0usize, 1, 5, 1000] {
            let (stream, counter) = Counted::new(0..k);
            assert!(is_finite(stream), "stream of {k} elements should be finite");
            assert_eq!(counter.pulled(), k);
            assert_eq!(counter.exhaustion_signals(), 1);
        }
    }

    #[test]
    fn test_trips_after_budget_plus_one() {
        let probe = FinitenessProbe::new().with_budget(100);
        let (stream, counter) = Counted::new(std::iter::repeat('x'));

        assert_eq!(probe.probe(stream), Finiteness::ApparentlyInfinite);
        assert_eq!(counter.pulled(), 101, "no element is pulled after the breaker trips");
    }

    #[test]
    fn test_budget_boundary() {
        let probe = FinitenessProbe::new().with_budget(3);
        assert_eq!(probe.probe(0..3), Finiteness::Finite { len: 3 });
        assert_eq!(probe.probe(0..4), Finiteness::ApparentlyInfinite);

        let zero = FinitenessProbe::new().with_budget(0);
        assert_eq!(zero.probe(std::iter::empty::<()>()), Finiteness::Finite { len: 0 });
        assert_eq!(zero.probe(std::iter::once(())), Finiteness::ApparentlyInfinite);
    }

    #[test]
    fn test_values_are_never_inspected() {
        // 원소의 존재만 관찰하므로 복사할 수 없는 값도 괜찮다
        // (Only the existence of elements is observed, so non-Clone values are fine).
        struct Opaque;
        assert!(is_finite((0..10).map(|_| Opaque)));
    }

    #[test]
    fn test_default_probe_configuration() {
        let probe = FinitenessProbe::default();
        assert_eq!(probe.budget(), DEFAULT_ITERATION_BUDGET);
        assert_eq!(probe.workers(), DEFAULT_PROBE_WORKERS);
    }

    #[test]
    fn test_zero_workers_rejected() {
        assert_eq!(
            FinitenessProbe::new().with_workers(0).unwrap_err(),
            StreamError::NoWorkers
        );
    }

    #[test]
    fn test_producer_error_propagates() {
        let stream = (0..10).map(|i| if i == 4 { Err(format!("failed at {i}")) } else { Ok(i) });
        assert_eq!(try_is_finite(stream), Err("failed at 4".to_string()));

        let infinite_then_error = (0u64..).map(|i| if i == 50 { Err(i) } else { Ok(i) });
        let probe = FinitenessProbe::new().with_budget(1_000);
        assert_eq!(probe.try_probe(infinite_then_error), Err(50));
    }

    #[test]
    fn test_ok_stream_through_try_variant() {
        let stream = vec![Ok::<_, String>(1), Ok(2)];
        assert_eq!(try_is_finite(stream), Ok(true));
    }

    #[test]
    fn test_sequential_probe_accepts_non_send_streams() {
        let calls = Cell::new(0);
        let stream = std::iter::from_fn(|| {
            calls.set(calls.get() + 1);
            (calls.get() <= 3).then_some(())
        });
        assert!(is_finite(stream));
        assert_eq!(calls.get(), 4);
    }

    // -------------------------------------------------------------------------
    // 병렬 판별 (Parallel probe)
    // -------------------------------------------------------------------------

    #[test]
    fn test_parallel_matches_sequential() {
        let probe = FinitenessProbe::new().with_budget(10_000).with_workers(4).unwrap();

        for k in [0u64, 1, 5, 1000, 10_000] {
            assert_eq!(probe.probe_parallel(0..k), Finiteness::Finite { len: k });
            assert_eq!(probe.probe(0..k), Finiteness::Finite { len: k });
        }
        assert_eq!(probe.probe_parallel(0..10_001u64), Finiteness::ApparentlyInfinite);
        assert_eq!(probe.probe_parallel(std::iter::repeat(1)), Finiteness::ApparentlyInfinite);
    }

    #[test]
    fn test_parallel_stops_promptly_after_trip() {
        let workers = 8;
        let probe = FinitenessProbe::new().with_budget(500).with_workers(workers).unwrap();
        let (stream, counter) = Counted::new(std::iter::repeat(0u8));

        assert_eq!(probe.probe_parallel(stream), Finiteness::ApparentlyInfinite);
        // 각 작업 스레드는 차단기가 작동하기 전에 당긴 원소를 많아야 하나 더 가지고 있다
        // (Each worker holds at most one element pulled before the breaker tripped).
        let pulled = counter.pulled();
        assert!((501..=500 + workers).contains(&pulled), "pulled {pulled} elements");
    }

    #[test]
    fn test_parallel_consumes_exactly_k_elements() {
        let probe = FinitenessProbe::new().with_workers(3).unwrap();
        let (stream, counter) = Counted::new(0..1000);

        assert!(probe.probe_parallel(stream).is_finite());
        assert_eq!(counter.pulled(), 1000);
    }

    #[test]
    fn test_parallel_error_propagates() {
        let probe = FinitenessProbe::new().with_budget(1_000_000).with_workers(4).unwrap();
        let stream = (0u64..).map(|i| if i == 777 { Err("producer failed") } else { Ok(i) });
        assert_eq!(probe.try_probe_parallel(stream), Err("producer failed"));
    }

    #[test]
    #[should_panic(expected = "producer exploded")]
    fn test_parallel_panic_propagates() {
        let probe = FinitenessProbe::new().with_workers(2).unwrap();
        let stream = (0..100).map(|i| {
            assert!(i != 42, "producer exploded");
            i
        });
        probe.probe_parallel(stream);
    }

    #[test]
    fn test_single_worker_parallel_is_sequential() {
        let probe = FinitenessProbe::new().with_budget(2);
        assert_eq!(probe.workers(), 1);
        assert_eq!(probe.probe_parallel(vec![1, 2]), Finiteness::Finite { len: 2 });
        assert_eq!(probe.probe_parallel(vec![1, 2, 3]), Finiteness::ApparentlyInfinite);
    }

    // -------------------------------------------------------------------------
    // zip
    // -------------------------------------------------------------------------

    #[test]
    fn test_zip_odd_and_even() {
        let odd = std::iter::successors(Some(1), |x| Some(x + 2)).take(10);
        let even = std::iter::successors(Some(2), |x| Some(x + 2)).take(13);

        let actual: Vec<i32> = zip(odd, even).collect();
        let expected: Vec<i32> = (1..=20).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_zip_surplus_is_never_observed() {
        let (even, counter) = Counted::new((2..).step_by(2));
        let zipped: Vec<i32> = zip(vec![1, 3, 5], even).collect();

        assert_eq!(zipped, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(counter.pulled(), 3);
        assert_eq!(counter.exhaustion_signals(), 0);
    }

    #[test]
    fn test_zip_with_empty_input() {
        let (second, counter) = Counted::new(std::iter::repeat(9));
        assert_eq!(zip(Vec::<i32>::new(), second).count(), 0);
        assert_eq!(counter.pulled(), 0, "an empty first side pulls nothing from the second");

        assert_eq!(zip(vec![1, 2, 3], Vec::new()).count(), 0);
    }

    #[test]
    fn test_zip_shorter_second_truncates() {
        let zipped: Vec<char> = zip("abcde".chars(), "XY".chars()).collect();
        assert_eq!(zipped, vec!['a', 'X', 'b', 'Y']);
    }

    #[test]
    fn test_zip_equal_lengths_keep_everything() {
        let zipped: Vec<&str> = zip(["a", "b"], ["c", "d"]).collect();
        assert_eq!(zipped, vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_zip_is_exact_size_and_fused() {
        let mut zipped = zip(0..4, 10..12);
        assert_eq!(zipped.len(), 4);
        zipped.next();
        assert_eq!(zipped.len(), 3);

        let rest: Vec<i32> = zipped.by_ref().collect();
        assert_eq!(rest, vec![10, 1, 11]);
        assert_eq!(zipped.next(), None);
        assert_eq!(zipped.next(), None);
    }

    #[test]
    fn test_zip_infinite_second_side() {
        let zipped: Vec<u64> = zip([0, 0, 0], std::iter::repeat(1)).collect();
        assert_eq!(zipped, vec![0, 1, 0, 1, 0, 1]);
    }

    proptest! {
        #[test]
        fn prop_zip_shape(
            a in proptest::collection::vec(any::<i16>(), 0..50),
            b in proptest::collection::vec(any::<i16>(), 0..50),
        ) {
            let (second, counter) = Counted::new(b.clone());
            let zipped: Vec<i16> = zip(a.clone(), second).collect();
            let m = a.len().min(b.len());

            prop_assert_eq!(zipped.len(), 2 * m);
            for i in 0..m {
                prop_assert_eq!(zipped[2 * i], a[i]);
                prop_assert_eq!(zipped[2 * i + 1], b[i]);
            }
            prop_assert!(counter.pulled() <= a.len());
        }

        #[test]
        fn prop_short_streams_are_finite(len in 0usize..2_000) {
            let (stream, counter) = Counted::new(0..len);
            prop_assert!(is_finite(stream));
            prop_assert_eq!(counter.pulled(), len);
        }
    }
}
