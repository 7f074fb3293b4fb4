//! 2장: 스트림 API (The Stream API)
//!
//! 이 장에서는 지연 평가되는 스트림을 러스트 Iterator로 다룹니다:
//! - 스트림 생성과 무한 스트림 (Stream creation and infinite streams)
//! - filter, map, flat_map 컴비네이터 (Combinators)
//! - 부분 스트림 추출과 스트림 결합 (Extracting substreams and combining streams)
//! - 리덕션 연산 (Reduction operations)
//! - 병렬 스트림 (Parallel streams)

pub mod section_2_2; // 스트림 생성 (Stream Creation)
pub mod section_2_3; // filter, map, flat_map
pub mod section_2_4; // 부분 스트림과 결합 (Substreams and Combining Streams)
pub mod section_2_9; // 리덕션 연산 (Reduction Operations)
pub mod section_2_13; // 병렬 스트림 (Parallel Streams)

// 핵심 스트림 도우미를 재수출한다 (Re-export the core stream helpers).
pub use section_2_2::{LcgParams, RandomLongs, random_longs};
pub use section_2_4::{
    Alternate, DEFAULT_ITERATION_BUDGET, Finiteness, FinitenessProbe, is_finite, try_is_finite, zip,
};
