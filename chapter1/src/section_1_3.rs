//! 1.3절: 함수형 인터페이스 (Functional Interfaces)
//!
//! 추상 메서드가 하나뿐인 인터페이스는 람다로 채울 수 있다.
//! 러스트에서는 `Fn`, `FnMut`, `FnOnce` 트레이트가 그 역할을 하고, 모양이 맞는 클로저는 모두 이를 구현한다
//! (An interface with a single abstract method is satisfied by a lambda.
//! In Rust the `Fn`, `FnMut` and `FnOnce` traits play that role, and any closure
//! of the right shape implements them).

/// `first`를 실행한 뒤 `second`를 실행하는 동작을 반환한다
/// (Returns an action that runs `first`, then `second`).
///
/// # Examples
/// ```
/// use std::cell::RefCell;
/// use impatient_chapter1::section_1_3::and_then;
///
/// let log = RefCell::new(Vec::new());
/// let both = and_then(|| log.borrow_mut().push("first"), || log.borrow_mut().push("second"));
/// both();
/// assert_eq!(*log.borrow(), vec!["first", "second"]);
/// ```
pub fn and_then<F, G>(first: F, second: G) -> impl Fn()
where
    F: Fn(),
    G: Fn(),
{
    move || {
        first();
        second();
    }
}

/// 캡처한 값을 소비하는 동작을 위한 [`and_then`]의 일회용 형태
/// (One-shot variant of [`and_then`] for actions that consume their captures).
pub fn and_then_once<F, G>(first: F, second: G) -> impl FnOnce()
where
    F: FnOnce(),
    G: FnOnce(),
{
    move || {
        first();
        second();
    }
}
