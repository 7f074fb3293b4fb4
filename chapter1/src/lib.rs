//! 1장: 람다 표현식 (Lambda Expressions)
//!
//! 이 장에서는 함수를 값으로 다루는 기본 요소를 소개합니다:
//! - 클로저와 Fn 트레이트 (Closures and the Fn traits)
//! - 함수형 인터페이스 합성 (Composing functional interfaces)
//! - 트레이트의 기본 메서드 (Default methods in traits)

pub mod section_1_3; // 함수형 인터페이스 (Functional Interfaces)
pub mod section_1_7; // 기본 메서드 (Default Methods)

// 자주 사용되는 항목들을 재수출한다 (Re-export commonly used items).
pub use section_1_3::and_then;
pub use section_1_7::Collection2;
