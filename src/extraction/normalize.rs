//! Tokenization and keyword normalization for diagnostic narratives.
//!
//! Narratives are split on single spaces, so consecutive spaces produce
//! empty tokens. Folding is used only to compare tokens against keyword
//! lists; values handed back to callers are always the raw, unfolded token.

/// Split a narrative on the space character, order-preserving.
///
/// No trimming and no separator deduplication: `"a  b"` yields
/// `["a", "", "b"]`.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(' ').collect()
}

/// Fold a token for keyword comparison: lowercased, diacritics stripped.
///
/// Covers the Latin diacritics that occur in Portuguese clinical notes.
/// Characters outside the map pass through unchanged.
pub fn fold_token(token: &str) -> String {
    token
        .chars()
        .flat_map(char::to_lowercase)
        .map(strip_diacritic)
        .collect()
}

fn strip_diacritic(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}
