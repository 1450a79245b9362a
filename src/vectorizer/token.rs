use indexmap::IndexMap;

use crate::utils::sort::stable_sort_desc_by_count;

/// TokenFrequency
/// Counts how often each token occurs.
///
/// Tokens keep the order in which they were first added, which is what makes
/// frequency rankings reproducible: equal counts rank by first occurrence.
///
/// # Examples
/// ```
/// use term_doc_vectorizer::TokenFrequency;
/// let mut freq = TokenFrequency::new();
/// freq.add_tokens(&["b", "a", "b"]);
/// assert_eq!(freq.token_count("b"), 2);
/// assert_eq!(freq.most_common(Some(1)), vec![("b".to_string(), 2)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenFrequency {
    token_count: IndexMap<String, u64>,
    total_token_count: u64,
}

impl TokenFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `token`.
    #[inline]
    pub fn add_token(&mut self, token: &str) -> &mut Self {
        match self.token_count.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.token_count.insert(token.to_owned(), 1);
            }
        }
        self.total_token_count += 1;
        self
    }

    /// Add one occurrence of every token in `tokens`.
    ///
    /// # Arguments
    /// * `tokens` - tokens in document order
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

    /// Occurrences of `token`, 0 if never seen.
    #[inline]
    pub fn token_count(&self, token: &str) -> u64 {
        self.token_count.get(token).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    #[inline]
    pub fn token_sum(&self) -> u64 {
        self.total_token_count
    }

    /// Number of distinct tokens.
    #[inline]
    pub fn token_num(&self) -> usize {
        self.token_count.len()
    }

    #[inline]
    pub fn contains_token(&self, token: &str) -> bool {
        self.token_count.contains_key(token)
    }

    /// Distinct tokens in first-seen order.
    pub fn token_set_ref_str(&self) -> Vec<&str> {
        self.token_count.keys().map(String::as_str).collect()
    }

    /// Remove every token matching `condition`.
    ///
    /// # Returns
    /// * `u64` - number of occurrences removed
    pub fn remove_tokens_by_condition<F>(&mut self, condition: F) -> u64
    where
        F: Fn(&str, &u64) -> bool,
    {
        let mut removed_total_count = 0u64;
        self.token_count.retain(|token, count| {
            if condition(token, count) {
                removed_total_count += *count;
                false
            } else {
                true
            }
        });
        self.total_token_count -= removed_total_count;
        removed_total_count
    }

    /// Tokens by descending count, ties in first-seen order.
    ///
    /// # Arguments
    /// * `limit` - keep at most this many entries, `None` keeps all
    pub fn most_common(&self, limit: Option<usize>) -> Vec<(String, u64)> {
        let mut ranked: Vec<(String, u64)> = self
            .token_count
            .iter()
            .map(|(token, &count)| (token.clone(), count))
            .collect();
        stable_sort_desc_by_count(&mut ranked);
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        ranked
    }
}
