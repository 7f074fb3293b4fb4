//! 2.3절: filter, map, flatMap 메서드 (The filter, map, and flatMap Methods)
//!
//! 러스트에서 스트림 변환은 이터레이터 어댑터다. 어댑터는 지연되어, `.filter()`에 넘긴 조건은
//! 하류에서 다음 원소를 요청할 때만 실행된다. 그래서 `.take(n)`이 상류의 작업량을 제한한다
//! (Stream transformations in Rust are iterator adapters. They are lazy: a predicate passed to
//! `.filter()` runs only when a downstream consumer asks for another element, so `.take(n)`
//! bounds the work done upstream).

/// `s`의 문자를 지연 스트림으로 내보낸다 (Lazy stream of the characters of `s`).
///
/// # Examples
/// ```
/// use impatient_chapter2::section_2_3::character_stream;
/// assert_eq!(character_stream("Character Stream").count(), 16);
/// ```
pub fn character_stream(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars()
}

/// 글자가 아닌 문자마다 `text`를 나눈다 (Splits `text` on every non-letter character).
///
/// 연속된 구분자 사이와 앞쪽의 빈 조각은 남기고, 끝에 붙은 빈 조각은 버린다.
/// 빈 입력은 빈 조각 하나가 된다
/// (Empty pieces between or before delimiters are kept, trailing empty pieces are dropped,
/// and an empty input yields a single empty piece).
///
/// # Examples
/// ```
/// use impatient_chapter2::section_2_3::split_words;
///
/// let words: Vec<&str> = split_words("a, b.").collect();
/// assert_eq!(words, vec!["a", "", "b"]);
/// ```
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    let is_delimiter = |c: char| !c.is_alphabetic();
    let trimmed = text.trim_end_matches(is_delimiter);
    // 구분자만 있는 입력은 조각이 없다 (Delimiter-only input has no pieces).
    let pieces = (text.is_empty() || !trimmed.is_empty()).then_some(trimmed);
    pieces.into_iter().flat_map(move |t| t.split(is_delimiter))
}

/// `min_len`보다 엄격히 긴 처음 `n`개의 단어 (First `n` words strictly longer than `min_len`).
///
/// `n`번째 긴 단어를 찾는 즉시 길이 검사를 멈춘다
/// (The length check stops running as soon as the `n`-th long word is found).
pub fn first_long_words<'a, I>(words: I, min_len: usize, n: usize) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    words
        .into_iter()
        .filter(|word| word.chars().count() > min_len)
        .take(n)
        .collect()
}
