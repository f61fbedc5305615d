//! Locale-aware comparison for stage labels.
//!
//! Letters are case-folded. Polish letters with diacritics are distinct
//! letters sorted right after their base letter (`a < ą < b`, `l < ł < m`).
//! Other Latin-1 accented letters sort after the Polish ones sharing their
//! base (`e < ę < é < f`). Case only breaks ties, lowercase first.

use std::cmp::Ordering;

fn fold(c: char) -> (char, u8) {
    let lower = c.to_lowercase().next().unwrap_or(c);
    match lower {
        'ą' => ('a', 1),
        'ć' => ('c', 1),
        'ę' => ('e', 1),
        'ł' => ('l', 1),
        'ń' => ('n', 1),
        'ó' => ('o', 1),
        'ś' => ('s', 1),
        'ź' => ('z', 1),
        'ż' => ('z', 2),
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => ('a', 3),
        'ç' => ('c', 3),
        'è' | 'é' | 'ê' | 'ë' => ('e', 3),
        'ì' | 'í' | 'î' | 'ï' => ('i', 3),
        'ñ' => ('n', 3),
        'ò' | 'ô' | 'õ' | 'ö' | 'ø' => ('o', 3),
        'ù' | 'ú' | 'û' | 'ü' => ('u', 3),
        'ý' | 'ÿ' => ('y', 3),
        other => (other, 0),
    }
}

pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(fold)
        .cmp(b.chars().map(fold))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
}
