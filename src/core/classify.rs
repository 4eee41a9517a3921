//! Gurmukhi code point classification
//!
//! Every scalar value falls into exactly one [`CharClass`]. The tables are
//! closed sets over the Gurmukhi block (U+0A00..U+0A7F); anything outside
//! them is [`CharClass::Other`] and gets stripped by [`clean`].

/// Segmentation class of a single code point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Combining vowel sign or diacritic that attaches to the preceding letter
    Matra,
    /// U+0A4D, joins two base letters into a conjunct
    Virama,
    /// Consonant or independent vowel; the only class that can start a unit
    BaseLetter,
    /// Whitespace, punctuation, digits and anything non-Gurmukhi
    Other,
}

/// The Gurmukhi virama (halant)
pub const VIRAMA: char = '\u{0A4D}';

/// The Gurmukhi nukta (pair bindi)
pub const NUKTA: char = '\u{0A3C}';

/// Vowel signs and diacritics that attach to the preceding unit
pub const MATRAS: &[char] = &[
    '\u{0A01}', // adak bindi
    '\u{0A02}', // bindi
    '\u{0A03}', // visarga
    '\u{0A3C}', // nukta
    '\u{0A3E}', // kanna
    '\u{0A3F}', // sihari
    '\u{0A40}', // bihari
    '\u{0A41}', // aunkar
    '\u{0A42}', // dulainkar
    '\u{0A47}', // lavan
    '\u{0A48}', // dulavan
    '\u{0A4B}', // hora
    '\u{0A4C}', // kanaura
    '\u{0A51}', // udaat
    '\u{0A70}', // tippi
    '\u{0A71}', // addak
    '\u{0A75}', // yakash
];

/// Classify a single code point
///
/// # Examples
/// ```
/// use punjabi_wordle::core::{CharClass, classify};
///
/// assert_eq!(classify('ਕ'), CharClass::BaseLetter);
/// assert_eq!(classify('ਾ'), CharClass::Matra);
/// assert_eq!(classify('੍'), CharClass::Virama);
/// assert_eq!(classify(' '), CharClass::Other);
/// ```
#[must_use]
pub fn classify(ch: char) -> CharClass {
    if ch == VIRAMA {
        CharClass::Virama
    } else if is_matra(ch) {
        CharClass::Matra
    } else if is_base_letter(ch) {
        CharClass::BaseLetter
    } else {
        CharClass::Other
    }
}

/// Check whether a code point is a matra (vowel sign or diacritic)
#[inline]
#[must_use]
pub fn is_matra(ch: char) -> bool {
    MATRAS.contains(&ch)
}

/// Check whether a code point is a consonant or an independent vowel
#[must_use]
pub const fn is_base_letter(ch: char) -> bool {
    matches!(
        ch,
        // Independent vowels
        '\u{0A05}'..='\u{0A0A}'
            | '\u{0A0F}'
            | '\u{0A10}'
            | '\u{0A13}'
            | '\u{0A14}'
            // Consonants
            | '\u{0A15}'..='\u{0A28}'
            | '\u{0A2A}'..='\u{0A30}'
            | '\u{0A32}'
            | '\u{0A33}'
            | '\u{0A35}'
            | '\u{0A36}'
            | '\u{0A38}'
            | '\u{0A39}'
            // Nukta consonants and rra
            | '\u{0A59}'..='\u{0A5C}'
            | '\u{0A5E}'
            // Iri and ura vowel carriers
            | '\u{0A72}'
            | '\u{0A73}'
    )
}

/// Map a precomposed nukta consonant to its base letter
///
/// These six letters have canonical decompositions `base + U+0A3C`.
const fn nukta_base(ch: char) -> Option<char> {
    match ch {
        '\u{0A33}' => Some('\u{0A32}'), // ਲ਼
        '\u{0A36}' => Some('\u{0A38}'), // ਸ਼
        '\u{0A59}' => Some('\u{0A16}'), // ਖ਼
        '\u{0A5A}' => Some('\u{0A17}'), // ਗ਼
        '\u{0A5B}' => Some('\u{0A1C}'), // ਜ਼
        '\u{0A5E}' => Some('\u{0A2B}'), // ਫ਼
        _ => None,
    }
}

/// Strip `Other` code points and decompose precomposed nukta letters
///
/// All segmentation, evaluation and validation operates on cleaned text.
///
/// # Examples
/// ```
/// use punjabi_wordle::core::clean;
///
/// assert_eq!(clean(" ਸ ਰ ਦਾ ਰ ਨੀ\n"), "ਸਰਦਾਰਨੀ");
/// assert_eq!(clean("\u{0A36}"), "\u{0A38}\u{0A3C}");
/// ```
#[must_use]
pub fn clean(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for ch in text.chars() {
        if classify(ch) == CharClass::Other {
            continue;
        }
        if let Some(base) = nukta_base(ch) {
            cleaned.push(base);
            cleaned.push(NUKTA);
        } else {
            cleaned.push(ch);
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_are_disjoint() {
        for cp in 0x0A00..=0x0A7F_u32 {
            let Some(ch) = char::from_u32(cp) else {
                continue;
            };
            let memberships = [is_matra(ch), ch == VIRAMA, is_base_letter(ch)]
                .iter()
                .filter(|&&m| m)
                .count();
            assert!(memberships <= 1, "U+{cp:04X} is in {memberships} sets");
        }
    }

    #[test]
    fn consonants_and_vowels_are_base_letters() {
        for ch in ['ਕ', 'ਸ', 'ਹ', 'ੜ', 'ਅ', 'ਆ', 'ਉ', 'ੳ', 'ੲ', '\u{0A59}'] {
            assert_eq!(classify(ch), CharClass::BaseLetter, "{ch}");
        }
    }

    #[test]
    fn vowel_signs_are_matras() {
        for ch in ['ਾ', 'ਿ', 'ੀ', 'ੁ', 'ੂ', 'ੇ', 'ੈ', 'ੋ', 'ੌ', 'ੰ', 'ੱ', 'ਂ', '਼'] {
            assert_eq!(classify(ch), CharClass::Matra, "{ch}");
        }
    }

    #[test]
    fn non_gurmukhi_is_other() {
        for ch in [' ', '\n', 'a', '!', '੧', 'ੴ', 'क'] {
            assert_eq!(classify(ch), CharClass::Other, "{ch:?}");
        }
    }

    #[test]
    fn clean_strips_whitespace_and_punctuation() {
        assert_eq!(clean("ਹਸ ਪਤਾਲ!"), "ਹਸਪਤਾਲ");
        assert_eq!(clean("abc"), "");
        assert_eq!(clean(""), "");
    }

    #[test]
    fn clean_decomposes_nukta_letters() {
        let precomposed = "ਦਸਤ\u{0A59}ਤ";
        let decomposed = "ਦਸਤ\u{0A16}\u{0A3C}ਤ";
        assert_eq!(clean(precomposed), decomposed);
        assert_eq!(clean(decomposed), decomposed);
    }
}
