//! 2.2절: 스트림 생성 (Stream Creation)
//!
//! `Stream.iterate(seed, f)`는 `seed, f(seed), f(f(seed)), ...`로 이어지는 무한 스트림을 만든다.
//! 러스트에서는 상태를 가진 `Iterator`가 같은 역할을 하며, `next()`가 호출될 때만 다음 값을 계산한다
//! (`Stream.iterate(seed, f)` builds the infinite stream `seed, f(seed), f(f(seed)), ...`.
//! In Rust a stateful `Iterator` plays that role and only computes the next value when
//! `next()` is called).
//!
//! 연습 문제 (Exercise): 선형 합동 생성기를 직접 구현해 무한 난수 스트림을 만든다.
//! `x_0 = seed`, `x_{n+1} = (a * x_n + c) % m`
//! (Implement a linear congruential generator directly and expose it as an infinite stream).

use std::iter::FusedIterator;
use std::time::{SystemTime, UNIX_EPOCH};

use impatient_common::{Result, StreamError};

/// 참조 곱수 a (Reference multiplier `a`), roughly 2^34.
pub const REFERENCE_MULTIPLIER: i64 = 25_214_903_917;

/// 참조 증분 c (Reference increment `c`).
pub const REFERENCE_INCREMENT: i64 = 11;

/// 참조 법 m = 2^48 (Reference modulus `m = 2^48`).
pub const REFERENCE_MODULUS: i64 = 1 << 48;

/// 점화식 매개변수 `(seed, a, c, m)` (Recurrence parameters).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcgParams {
    pub seed: i64,
    pub a: i64,
    pub c: i64,
    pub m: i64,
}

impl LcgParams {
    /// 참조 계수와 주어진 시드로 매개변수를 만든다
    /// (Parameters with the reference coefficients and the given seed).
    pub fn reference(seed: i64) -> Self {
        LcgParams {
            seed,
            a: REFERENCE_MULTIPLIER,
            c: REFERENCE_INCREMENT,
            m: REFERENCE_MODULUS,
        }
    }

    /// 한 단계 점화식을 적용한다 (Applies one step of the recurrence).
    ///
    /// 곱 `a * x`는 2^34 * 2^48 정도까지 커지므로 `i128`에서 계산한 뒤 줄인다
    /// (The product `a * x` reaches about 2^34 * 2^48, so it is computed in `i128`).
    /// 유클리드 나머지라 결과는 항상 `[0, m)`에 있다
    /// (Euclidean remainder keeps the result in `[0, m)`).
    ///
    /// `m > 0`은 `RandomLongs::new`가 검증한다. 그래서 이 함수는 모듈 밖으로 내보내지 않는다
    /// (`m > 0` is checked by `RandomLongs::new`, so this stays private to the module).
    fn step(&self, x: i64) -> i64 {
        let product = i128::from(self.a) * i128::from(x) + i128::from(self.c);
        let next = product.rem_euclid(i128::from(self.m));
        // m이 i64에 들어가므로 나머지도 들어간다 (m fits in i64, so does the remainder).
        next as i64
    }
}

/// 선형 합동 생성기 무한 스트림 (Infinite linear congruential generator stream).
///
/// 첫 원소는 시드 자체이고, 이후 원소는 요청될 때 하나씩 계산된다
/// (The first element is the seed itself; later elements are computed one at a time on demand).
/// 다음 값은 `next()`가 실제로 불릴 때 직전 값에서 계산한다
/// (A successor is derived from the previous value only when `next()` is actually called).
/// 복제본은 현재 위치에서 같은 수열을 다시 재생한다
/// (A clone replays the same sequence from the current position).
#[derive(Debug, Clone)]
pub struct RandomLongs {
    params: LcgParams,
    /// 마지막으로 내보낸 값. 아직 없으면 `None` (Last emitted value, `None` before the first).
    last: Option<i64>,
}

impl RandomLongs {
    /// 검증된 매개변수로 스트림을 만든다 (Builds the stream from validated parameters).
    pub fn new(params: LcgParams) -> Result<Self> {
        if params.m <= 0 {
            return Err(StreamError::InvalidModulus { modulus: params.m });
        }
        Ok(RandomLongs { params, last: None })
    }

    pub fn params(&self) -> LcgParams {
        self.params
    }
}

impl Iterator for RandomLongs {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let value = match self.last {
            None => self.params.seed,
            Some(previous) => self.params.step(previous),
        };
        self.last = Some(value);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for RandomLongs {}

/// `x_0 = seed`, `x_{n+1} = (a * x_n + c) mod m`인 무한 스트림을 반환한다
/// (Returns the infinite stream `x_0 = seed`, `x_{n+1} = (a * x_n + c) mod m`).
///
/// `m <= 0`이면 0으로 나누는 대신 즉시 실패한다
/// (Fails immediately on `m <= 0` instead of dividing by zero).
///
/// # Examples
/// ```
/// use impatient_chapter2::section_2_2::random_longs;
///
/// let xs: Vec<i64> = random_longs(1, 3, 1, 10).unwrap().take(4).collect();
/// assert_eq!(xs, vec![1, 4, 3, 0]);
/// assert!(random_longs(1, 3, 1, 0).is_err());
/// ```
pub fn random_longs(seed: i64, a: i64, c: i64, m: i64) -> Result<RandomLongs> {
    RandomLongs::new(LcgParams { seed, a, c, m })
}

/// 시계 기반 시드: UNIX 기준 밀리초 (Clock-based seed: milliseconds since the UNIX epoch).
///
/// 시계가 기준 이전이면 0을 돌려준다 (Returns 0 if the clock reads before the epoch).
pub fn clock_seed() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

// =============================================================================
// 테스트 (Tests)
// =============================================================================
