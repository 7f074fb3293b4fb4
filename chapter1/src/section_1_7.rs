//! 1.7절: 기본 메서드 (Default Methods)
//!
//! 인터페이스에 구현을 가진 메서드를 추가해도 기존 구현체는 깨지지 않는다.
//! 러스트 트레이트의 제공 메서드(provided method)가 같은 역할을 한다
//! (Adding a method with a body to an interface does not break existing implementors.
//! A provided method on a Rust trait plays the same role).
//!
//! 구현체는 요소를 훑는 이터레이터 하나만 제공하면 되고, [`Collection2::for_each_if`]는 공짜로 얻는다
//! (Implementors only supply an element iterator and get [`Collection2::for_each_if`] for free).

use std::collections::VecDeque;

/// 조건부 순회를 기본 메서드로 가진 컬렉션 (Collection with conditional traversal as a default method).
pub trait Collection2<T> {
    /// 요소를 순서대로 빌려준다 (Borrows the elements in order).
    ///
    /// `T`가 컬렉션 빌림보다 오래 살아야 하므로 `T: 'a`를 명시한다
    /// (`T` must outlive the borrow of the collection, hence the explicit `T: 'a`).
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;

    /// `filter`가 참인 요소마다 `action`을 적용한다
    /// (Applies `action` to each element for which `filter` is true).
    ///
    /// # Examples
    /// ```
    /// use impatient_chapter1::section_1_7::Collection2;
    ///
    /// let mut evens = Vec::new();
    /// vec![1, 2, 3, 4].for_each_if(|&x| evens.push(x), |&x| x % 2 == 0);
    /// assert_eq!(evens, vec![2, 4]);
    /// ```
    fn for_each_if<A, P>(&self, action: A, mut filter: P)
    where
        A: FnMut(&T),
        P: FnMut(&T) -> bool,
    {
        self.elements().filter(|element| filter(element)).for_each(action);
    }
}

impl<T> Collection2<T> for Vec<T> {
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T> Collection2<T> for VecDeque<T> {
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T: Clone> Collection2<T> for im::Vector<T> {
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_for_each_if() {
        let words = vec!["lambda", "closure", "fn", "stream"];
        let mut long = Vec::new();
        words.for_each_if(|w| long.push(w.to_uppercase()), |w| w.len() > 5);
        assert_eq!(long, vec!["LAMBDA", "CLOSURE", "STREAM"]);
    }

    #[test]
    fn test_vec_deque_for_each_if() {
        let queue: VecDeque<i32> = (1..=10).collect();
        let mut sum = 0;
        queue.for_each_if(|x| sum += x, |x| x % 3 == 0);
        assert_eq!(sum, 18);
    }

    #[test]
    fn test_persistent_vector_for_each_if() {
        let vector: im::Vector<char> = "functional".chars().collect();
        let mut vowels = String::new();
        vector.for_each_if(|&c| vowels.push(c), |c| "aeiou".contains(*c));
        assert_eq!(vowels, "uioa");
    }

    #[test]
    fn test_nothing_matches() {
        let mut called = false;
        Vec::<u8>::new().for_each_if(|_| called = true, |_| true);
        vec![1, 2, 3].for_each_if(|_| called = true, |_| false);
        assert!(!called);
    }

    /// 제네릭 경계만 보고 호출한다 (Calls through the trait bound alone).
    fn collect_matching<C, T>(collection: &C, filter: impl FnMut(&T) -> bool) -> Vec<T>
    where
        C: Collection2<T>,
        T: Clone,
    {
        let mut out = Vec::new();
        collection.for_each_if(|x| out.push(x.clone()), filter);
        out
    }

    #[test]
    fn test_generic_caller_with_borrowed_elements() {
        let owned = String::from("short borrowed elements");
        let words: Vec<&str> = owned.split(' ').collect();
        let queue: VecDeque<&str> = words.iter().copied().collect();
        let vector: im::Vector<&str> = words.iter().copied().collect();

        let long = |w: &&str| w.len() > 5;
        assert_eq!(collect_matching(&words, long), vec!["borrowed", "elements"]);
        assert_eq!(collect_matching(&queue, long), vec!["borrowed", "elements"]);
        assert_eq!(collect_matching(&vector, long), vec!["borrowed", "elements"]);
        assert_eq!(words.elements().count(), 3);
    }
}
