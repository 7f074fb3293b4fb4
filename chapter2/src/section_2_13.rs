//! 2.13절: 병렬 스트림 (Parallel Streams)
//!
//! 병렬 연산은 서로 겹치지 않는 구간을 각 스레드에 나눠 주고, 공유 상태는 원자적 연산으로만 갱신한다
//! (Parallel operations hand each thread a disjoint segment and touch shared state only
//! through atomics).
//!
//! ```text
//!  words: [────seg 0────][────seg 1────][────seg 2────]
//!              │               │               │
//!           스레드 0         스레드 1         스레드 2   (threads)
//!              └──────fetch_add──────┬─────────┘
//!                                    ▼
//!                          AtomicUsize (공유 카운터 (shared counter))
//! ```

use std::collections::BTreeMap;
use std::panic;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use impatient_common::{Result, StreamError};
use tracing::trace;

/// `workers`개의 연속 구간으로 나눈다. 마지막 구간이 나머지를 가진다
/// (Splits into `workers` contiguous segments; the last one takes the remainder).
fn segments<'a, T>(items: &'a [T], workers: usize) -> impl Iterator<Item = &'a [T]> {
    (0..workers).map(move |i| {
        let from = i * items.len() / workers;
        let to = if i + 1 < workers {
            (i + 1) * items.len() / workers
        } else {
            items.len()
        };
        &items[from..to]
    })
}

fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// `min_len`보다 긴 단어를 구간별 스레드로 센다
/// (Counts words longer than `min_len` with one thread per segment).
///
/// # Examples
/// ```
/// use impatient_chapter2::section_2_13::count_long_words;
///
/// let words = ["a", "abracadabra", "extraordinary", "cat"];
/// assert_eq!(count_long_words(&words, 10, 2).unwrap(), 2);
/// ```
pub fn count_long_words(words: &[&str], min_len: usize, workers: usize) -> Result<usize> {
    if workers == 0 {
        return Err(StreamError::NoWorkers);
    }

    let count = AtomicUsize::new(0);
    thread::scope(|scope| {
        for (worker, segment) in segments(words, workers).enumerate() {
            let count = &count;
            scope.spawn(move || {
                let local = segment.iter().filter(|w| char_len(w) > min_len).count();
                trace!(worker, local, "segment counted");
                count.fetch_add(local, Ordering::Relaxed);
            });
        }
    });

    Ok(count.into_inner())
}

/// 길이가 `limit` 미만인 단어의 길이별 개수. 원자적 카운터 배열을 길이로 색인한다
/// (Histogram of word lengths below `limit`, using an array of atomic counters indexed by length).
pub fn short_word_histogram(words: &[&str], limit: usize, workers: usize) -> Result<Vec<usize>> {
    if workers == 0 {
        return Err(StreamError::NoWorkers);
    }

    let buckets: Vec<AtomicUsize> = (0..limit).map(|_| AtomicUsize::new(0)).collect();
    thread::scope(|scope| {
        for segment in segments(words, workers) {
            let buckets = &buckets;
            scope.spawn(move || {
                for len in segment.iter().map(|w| char_len(w)).filter(|&len| len < limit) {
                    buckets[len].fetch_add(1, Ordering::Relaxed);
                }
            });
        }
    });

    Ok(buckets.into_iter().map(AtomicUsize::into_inner).collect())
}

/// 크기를 미리 정한 하나의 결과 벡터에 여러 스레드가 동시에 모은다
/// (Collects into a single pre-sized result vector from several threads at once).
///
/// 슬롯은 입력 길이만큼 미리 만들고, 각 스레드는 공유 인덱스의 `fetch_add`로 서로 다른 슬롯을
/// 받아 한 번만 쓴다. 그래서 부분 결과를 합칠 필요가 없다. 순서는 보장하지 않는다
/// (Slots are created up front for the input length and each thread claims a distinct slot
/// with `fetch_add` on a shared index, writing it exactly once, so no partial results are
/// merged. Order is not preserved).
///
/// # Examples
/// ```
/// use impatient_chapter2::section_2_13::collect_presized;
///
/// let mut collected = collect_presized(&[3, 1, 2], 2).unwrap();
/// collected.sort();
/// assert_eq!(collected, vec![1, 2, 3]);
/// ```
pub fn collect_presized<T>(items: &[T], workers: usize) -> Result<Vec<T>>
where
    T: Clone + Send + Sync,
{
    if workers == 0 {
        return Err(StreamError::NoWorkers);
    }

    let slots: Vec<OnceLock<T>> = (0..items.len()).map(|_| OnceLock::new()).collect();
    let index = AtomicUsize::new(0);
    thread::scope(|scope| {
        for segment in segments(items, workers) {
            let (slots, index) = (&slots, &index);
            scope.spawn(move || {
                for item in segment {
                    let slot = index.fetch_add(1, Ordering::Relaxed);
                    // 인덱스가 겹치지 않으므로 슬롯은 비어 있다 (Indices never repeat, so the slot is empty).
                    let _ = slots[slot].set(item.clone());
                }
            });
        }
    });

    Ok(slots.into_iter().filter_map(OnceLock::into_inner).collect())
}

/// 단어를 길이별로 묶어 센다. 각 스레드가 지역 맵을 만든 뒤 마지막에 합친다
/// (Groups words by length and counts them; each thread builds a local map merged at the end).
pub fn word_length_counts(words: &[&str], workers: usize) -> Result<BTreeMap<usize, u64>> {
    if workers == 0 {
        return Err(StreamError::NoWorkers);
    }

    let partials: Vec<BTreeMap<usize, u64>> = thread::scope(|scope| {
        let handles: Vec<_> = segments(words, workers)
            .map(|segment| {
                scope.spawn(move || {
                    segment.iter().fold(BTreeMap::new(), |mut counts, word| {
                        *counts.entry(char_len(word)).or_insert(0) += 1;
                        counts
                    })
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect()
    });

    Ok(partials.into_iter().fold(BTreeMap::new(), |mut merged, partial| {
        for (len, n) in partial {
            *merged.entry(len).or_insert(0) += n;
        }
        merged
    }))
}

// =============================================================================
// 테스트 (Tests)
// =============================================================================
