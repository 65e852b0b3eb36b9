use std::collections::HashSet;

use crate::token::Token;

/// Whitespace and punctuation dropped by default. Anything not listed passes.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    "\n", " ", "。", ",", "，", "！", "：", "；", "(", ")", "“", "”",
];

/// Drops noise tokens: too short after trimming, or an excluded form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFilter {
    min_length: usize,
    exclusions: HashSet<String>,
}

impl TokenFilter {
    pub fn new<I, S>(min_length: usize, exclusions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            min_length,
            exclusions: exclusions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn exclusions(&self) -> &HashSet<String> {
        &self.exclusions
    }

    /// Length is counted in chars, so a single CJK ideograph has length 1.
    pub fn accepts(&self, word: &str) -> bool {
        let trimmed = word.trim();
        trimmed.chars().count() >= self.min_length && !self.exclusions.contains(trimmed)
    }

    pub fn filter<I>(&self, tokens: I) -> Filtered<'_, I::IntoIter>
    where
        I: IntoIterator,
    {
        Filtered {
            filter: self,
            inner: tokens.into_iter(),
        }
    }
}

impl Default for TokenFilter {
    fn default() -> Self {
        Self::new(crate::DEFAULT_MIN_LENGTH, DEFAULT_EXCLUSIONS.iter().copied())
    }
}

/// Iterator returned by [`TokenFilter::filter`].
#[derive(Debug)]
pub struct Filtered<'f, I> {
    filter: &'f TokenFilter,
    inner: I,
}

impl<'t, I> Iterator for Filtered<'_, I>
where
    I: Iterator<Item = Token<'t>>,
{
    type Item = Token<'t>;

    fn next(&mut self) -> Option<Token<'t>> {
        let filter = self.filter;
        self.inner.find(|token| filter.accepts(token.text))
    }
}
