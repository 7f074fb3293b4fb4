//! 2.9절: 리덕션 연산 (Reduction Operations)
//!
//! `reduce`에는 세 가지 형태가 있다 (There are three forms of `reduce`):
//!
//! 1. 항등원이 없는 형태: 빈 스트림이면 결과가 없다 → `Iterator::reduce` (`Option`)
//!    (Without identity: an empty stream has no result)
//! 2. 항등원이 있는 형태 → `Iterator::fold`
//!    (With identity)
//! 3. 항등원 + 누산기 + 결합기: 구간별로 병렬 누적한 뒤 부분 결과를 결합한다
//!    (Identity, accumulator and combiner: accumulate segments in parallel, then combine
//!    partial results)
//!
//! 여러 벡터를 하나로 이어 붙이는 예제에서는 영속 벡터 `im::Vector`를 쓴다.
//! 항등원을 공유해도 구조적 공유 덕분에 원본이 변하지 않고, `append`는 O(log n)이다
//! (Joining vectors uses the persistent `im::Vector`: a shared identity is never mutated thanks to
//! structural sharing, and `append` is O(log n)).

use std::panic;
use std::thread;

use im::Vector;
use impatient_common::{Result, StreamError};
use tracing::trace;

/// 항등원이 있는 reduce로 벡터들을 이어 붙인다 (Joins vectors with the identity form of reduce).
pub fn concat_with_identity<T, I>(parts: I) -> Vector<T>
where
    T: Clone,
    I: IntoIterator<Item = Vector<T>>,
{
    parts.into_iter().fold(Vector::new(), |mut joined, part| {
        joined.append(part);
        joined
    })
}

/// 항등원이 없는 reduce로 벡터들을 이어 붙인다. 입력이 없으면 `None`
/// (Joins vectors with the identity-free form of reduce; `None` when there is no input).
pub fn concat_optional<T, I>(parts: I) -> Option<Vector<T>>
where
    T: Clone,
    I: IntoIterator<Item = Vector<T>>,
{
    parts.into_iter().reduce(|mut joined, part| {
        joined.append(part);
        joined
    })
}

/// 항등원, 누산기, 결합기를 쓰는 reduce로 벡터들을 이어 붙인다
/// (Joins vectors with the identity/accumulator/combiner form of reduce).
///
/// 입력을 `workers`개의 연속 구간으로 나눠 각 스레드가 누적하고, 구간 순서대로 결합하므로
/// 원래 순서가 유지된다 (Each worker folds one contiguous segment and partial results are
/// combined in segment order, so the original order is preserved).
///
/// # Examples
/// ```
/// use im::vector;
/// use impatient_chapter2::section_2_9::concat_with_combiner;
///
/// let parts = [vector![1, 2], vector![3], vector![4, 5, 6]];
/// let joined = concat_with_combiner(&parts, 2).unwrap();
/// assert_eq!(joined, vector![1, 2, 3, 4, 5, 6]);
/// ```
pub fn concat_with_combiner<T>(parts: &[Vector<T>], workers: usize) -> Result<Vector<T>>
where
    T: Clone + Send + Sync,
{
    if workers == 0 {
        return Err(StreamError::NoWorkers);
    }
    if parts.is_empty() {
        return Ok(Vector::new());
    }

    let segment = parts.len().div_ceil(workers);
    let partials: Vec<Vector<T>> = thread::scope(|scope| {
        let handles: Vec<_> = parts
            .chunks(segment)
            .map(|chunk| scope.spawn(move || concat_with_identity(chunk.iter().cloned())))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect()
    });
    trace!(segments = partials.len(), "combining partial joins");

    Ok(partials.into_iter().fold(Vector::new(), |mut joined, partial| {
        joined.append(partial);
        joined
    }))
}

/// 한 번의 fold로 평균을 구한다. 빈 스트림이면 `None`
/// (Computes the mean with a single fold; `None` for an empty stream).
///
/// 합을 구한 뒤 `count()`로 나누려면 스트림을 두 번 순회해야 하는데, 스트림은 한 번만 소비할 수 있다.
/// 대신 `(개수, 평균)`을 누적하며 평균을 점진적으로 갱신한다
/// (Dividing a sum by `count()` would traverse the stream twice, but a stream is single-pass.
/// Instead `(count, mean)` is accumulated and the mean updated incrementally).
///
/// # Examples
/// ```
/// use impatient_chapter2::section_2_9::running_average;
///
/// assert_eq!(running_average([1.0, 2.0, 3.0, 4.0]), Some(2.5));
/// assert_eq!(running_average(std::iter::empty()), None);
/// ```
pub fn running_average<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (count, mean) = values.into_iter().fold((0u64, 0.0), |(count, mean), value| {
        let count = count + 1;
        (count, mean + (value - mean) / count as f64)
    });
    (count > 0).then_some(mean)
}

// =============================================================================
// 테스트 (Tests)
// =============================================================================
