use std::fmt;
use std::io::BufRead;
use std::str::SplitInclusive;

use jieba_rs::Jieba;

/// A word produced by segmentation, borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Byte offset of `text` within the source.
    pub offset: usize,
}

impl<'a> Token<'a> {
    pub fn as_str(&self) -> &'a str {
        self.text
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("invalid utf-8 at byte offset {offset}")]
    InvalidUtf8 { offset: usize },
    #[error("invalid segmentation dictionary: {0}")]
    Dictionary(String),
}

/// Dictionary-driven segmenter for mixed CJK/Latin text.
///
/// The segmenter is immutable once built, so one instance can serve any number
/// of concurrent `tokenize` calls. HMM new-word discovery is off by default,
/// which makes the output a function of the dictionary alone.
pub struct Tokenizer {
    jieba: Jieba,
    hmm: bool,
}

impl Tokenizer {
    /// Tokenizer backed by the bundled default dictionary.
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
            hmm: false,
        }
    }

    /// Tokenizer backed only by `dict`, one `word [freq] [tag]` entry per line.
    pub fn with_dictionary<R: BufRead>(dict: &mut R) -> Result<Self, TokenizeError> {
        let mut jieba = Jieba::empty();
        jieba
            .load_dict(dict)
            .map_err(|err| TokenizeError::Dictionary(err.to_string()))?;
        Ok(Self { jieba, hmm: false })
    }

    pub fn with_hmm(mut self, hmm: bool) -> Self {
        self.hmm = hmm;
        self
    }

    pub fn hmm(&self) -> bool {
        self.hmm
    }

    /// Lazily segment `text`; each line is cut only when the iterator reaches it.
    pub fn tokenize<'a>(&'a self, text: &'a str) -> Tokens<'a> {
        Tokens {
            jieba: &self.jieba,
            hmm: self.hmm,
            source: text,
            lines: text.split_inclusive('\n'),
            pending: Vec::new().into_iter(),
        }
    }

    /// Validate `bytes` as UTF-8 and segment them.
    pub fn tokenize_bytes<'a>(&'a self, bytes: &'a [u8]) -> Result<Tokens<'a>, TokenizeError> {
        let text = std::str::from_utf8(bytes).map_err(|err| TokenizeError::InvalidUtf8 {
            offset: err.valid_up_to(),
        })?;
        Ok(self.tokenize(text))
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("hmm", &self.hmm)
            .finish_non_exhaustive()
    }
}

/// Iterator returned by [`Tokenizer::tokenize`].
pub struct Tokens<'a> {
    jieba: &'a Jieba,
    hmm: bool,
    source: &'a str,
    lines: SplitInclusive<'a, char>,
    pending: std::vec::IntoIter<&'a str>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            if let Some(word) = self.pending.next() {
                return Some(Token {
                    text: word,
                    offset: offset_in(self.source, word),
                });
            }
            let line = self.lines.next()?;
            self.pending = self.jieba.cut(line, self.hmm).into_iter();
        }
    }
}

// Segments are always subslices of the source, so the pointer distance is the byte offset.
fn offset_in(source: &str, word: &str) -> usize {
    word.as_ptr() as usize - source.as_ptr() as usize
}

#[cfg(test)]
mod tests {
    use super::{offset_in, Tokenizer, TokenizeError};

    #[test]
    fn offset_of_subslice() {
        let source = "abc def";
        assert_eq!(offset_in(source, &source[4..]), 4);
        assert_eq!(offset_in(source, source), 0);
    }

    #[test]
    fn invalid_utf8_reports_first_bad_byte() {
        let mut dict = "猫猫 10 n\n".as_bytes();
        let tokenizer = Tokenizer::with_dictionary(&mut dict).unwrap();
        let err = tokenizer.tokenize_bytes(b"ok \xff tail").err().unwrap();
        assert_eq!(err, TokenizeError::InvalidUtf8 { offset: 3 });
    }
}
