use std::sync::OnceLock;

use rayon::prelude::*;
use regex::Regex;

/// Contractions expanded before tokenizing, applied in this order.
/// Plain substring replacement, so a surface form inside a longer word is
/// expanded as well.
pub const CONTRACTIONS: &[(&str, &str)] = &[
    ("don't", "do not"),
    ("can't", "can not"),
    ("won't", "will not"),
    ("it's", "it is"),
];

/// Possessive marker emitted as its own token
pub const POSSESSIVE: &str = "'s";

const TOKEN_PATTERN: &str = r"\b\w[\w'-]*\b";

fn token_regex() -> &'static Regex {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    TOKEN_RE.get_or_init(|| {
        // constant pattern, covered by tests
        Regex::new(TOKEN_PATTERN).unwrap_or_else(|e| panic!("invalid token pattern: {e}"))
    })
}

/// 小文字化 -> 短縮形の展開 -> 単語抽出 -> 所有格の分割
///
/// Turns raw text into an ordered sequence of normalized tokens.
///
/// # Examples
/// ```
/// use note_similarity::tokenize;
/// assert_eq!(tokenize("Alice's book"), vec!["alice", "'s", "book"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let mut content = text.to_lowercase();
    for (contraction, expansion) in CONTRACTIONS {
        if content.contains(contraction) {
            content = content.replace(contraction, expansion);
        }
    }

    let mut tokens = Vec::new();
    for word in token_regex().find_iter(&content).map(|m| m.as_str()) {
        match word.strip_suffix(POSSESSIVE) {
            Some(stem) if word.chars().count() > 2 => {
                tokens.push(stem.to_string());
                tokens.push(POSSESSIVE.to_string());
            }
            _ => tokens.push(word.to_string()),
        }
    }
    tokens
}

/// Tokenize every text on the rayon pool, keeping input order
pub fn tokenize_all<T>(texts: &[T]) -> Vec<Vec<String>>
where
    T: AsRef<str> + Sync,
{
    texts.par_iter().map(|text| tokenize(text.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \n\t -- ").is_empty());
    }

    #[test]
    fn lower_cases_and_splits_possessive() {
        assert_eq!(tokenize("Alice's book"), vec!["alice", "'s", "book"]);
    }

    #[test]
    fn contraction_expanded_before_tokenizing() {
        assert_eq!(tokenize("I don't know"), tokenize("i do not know"));
        assert_eq!(tokenize("I Can't, it WON'T"), vec!["i", "can", "not", "it", "will", "not"]);
        assert_eq!(tokenize("It's late"), vec!["it", "is", "late"]);
    }

    #[test]
    fn contraction_replacement_matches_inside_words() {
        // substring replacement, not whole-word
        assert_eq!(tokenize("bandon't"), vec!["bando", "not"]);
        assert_eq!(tokenize("bit's"), vec!["bit", "is"]);
    }

    #[test]
    fn keeps_internal_apostrophes_and_hyphens() {
        assert_eq!(tokenize("a well-known fact"), vec!["a", "well-known", "fact"]);
        assert_eq!(tokenize("o'clock"), vec!["o'clock"]);
    }

    #[test]
    fn strips_leading_and_trailing_punctuation() {
        assert_eq!(tokenize("'quoted' -dash- dogs'"), vec!["quoted", "dash", "dogs"]);
    }

    #[test]
    fn possessive_split_needs_a_stem() {
        // a token cannot start with an apostrophe, so a bare "'s" reads as "s"
        assert_eq!(tokenize("x's"), vec!["x", "'s"]);
        assert_eq!(tokenize("'s"), vec!["s"]);
    }

    #[test]
    fn markdown_is_reduced_to_words() {
        let text = "# Title\n\n- [link](https://example.com) **bold** `code_span`";
        assert_eq!(
            tokenize(text),
            vec!["title", "link", "https", "example", "com", "bold", "code_span"]
        );
    }

    #[test]
    fn tokenizer_is_deterministic() {
        let text = "The cat's toy isn't the dog's toy; it's well-known.";
        assert_eq!(tokenize(text), tokenize(text));
    }

    #[test]
    fn tokenize_all_keeps_order() {
        let texts = ["b a", "", "c"];
        assert_eq!(
            tokenize_all(&texts),
            vec![vec!["b".to_string(), "a".to_string()], vec![], vec!["c".to_string()]]
        );
    }
}
