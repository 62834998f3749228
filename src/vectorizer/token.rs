use indexmap::IndexMap;

///  TokenFrequency 構造体
/// tokenの出現回数を管理するための構造体です
///
/// Multiset of the tokens of one document, used as the base data for TF.
/// Tokens keep their first-occurrence order.
///
/// # Examples
/// ```
/// use note_similarity::TokenFrequency;
/// let mut token_freq = TokenFrequency::new();
/// token_freq.add_tokens(&["cats", "and", "cats"]);
///
/// assert_eq!(token_freq.token_count("cats"), 2);
/// assert_eq!(token_freq.tf_token("cats"), 2.0 / 3.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenFrequency {
    token_count: IndexMap<String, u64>,
    total_token_count: u64,
}

/// Tokenの追加
impl TokenFrequency {
    pub fn new() -> Self {
        TokenFrequency {
            token_count: IndexMap::new(),
            total_token_count: 0,
        }
    }

    /// tokenを追加する
    #[inline]
    pub fn add_token(&mut self, token: &str) -> &mut Self {
        if let Some(count) = self.token_count.get_mut(token) {
            *count += 1;
        } else {
            self.token_count.insert(token.to_string(), 1);
        }
        self.total_token_count += 1;
        self
    }

    /// 複数のtokenを追加する
    #[inline]
    pub fn add_tokens<T>(&mut self, tokens: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for token in tokens {
            self.add_token(token.as_ref());
        }
        self
    }
}

impl<T> FromIterator<T> for TokenFrequency
where
    T: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut freq = TokenFrequency::new();
        for token in iter {
            freq.add_token(token.as_ref());
        }
        freq
    }
}

/// TF-calculationの実装
impl TokenFrequency {
    /// Raw term frequency: count / total token count.
    /// Returns 0.0 for an empty document.
    #[inline]
    pub fn tf_token(&self, token: &str) -> f64 {
        if self.total_token_count == 0 {
            return 0.0;
        }
        self.token_count(token) as f64 / self.total_token_count as f64
    }
}

/// TokenFrequencyの情報を取得するための実装
impl TokenFrequency {
    /// 全tokenのカウントの合計
    #[inline]
    pub fn token_sum(&self) -> u64 {
        self.total_token_count
    }

    /// あるtokenの出現回数
    #[inline]
    pub fn token_count(&self, token: &str) -> u64 {
        self.token_count.get(token).copied().unwrap_or(0)
    }

    #[inline]
    pub fn contains_token(&self, token: &str) -> bool {
        self.token_count.contains_key(token)
    }

    /// tokenのset (first-occurrence order)
    #[inline]
    pub fn token_set_ref_str(&self) -> Vec<&str> {
        self.token_count.keys().map(|s| s.as_str()).collect()
    }

    /// (token, count) pairs in first-occurrence order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.token_count.iter().map(|(token, &count)| (token.as_str(), count))
    }

    /// 出現した単語数 (unique tokens)
    #[inline]
    pub fn token_num(&self) -> usize {
        self.token_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_token_count == 0
    }
}
