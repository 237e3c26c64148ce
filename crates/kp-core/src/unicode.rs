//! Character-level classification shared by the buffer, the boundary
//! tracker and the sentence splitter.

/// Word character as matched by `\w`: Unicode alphanumerics plus `_`.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Characters that end the word currently being typed.
pub fn is_word_terminator(c: char) -> bool {
    matches!(c, ' ' | ',' | ';' | ':' | '.' | '!' | '?')
}

/// Terminators other than the space. A space typed right after one of
/// these belongs to the same boundary.
pub fn is_punctuation_terminator(c: char) -> bool {
    is_word_terminator(c) && c != ' '
}

/// Terminators that also end the sentence.
pub fn is_sentence_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Trailing characters stripped from reference words.
pub const WORD_TRAILING_PUNCTUATION: &[char] = &[',', ';', '!', '?', '.'];
