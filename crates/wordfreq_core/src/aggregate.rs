use std::collections::HashMap;

use crate::rank::RankedEntry;
use crate::token::Token;

/// Word counts in first-occurrence order.
///
/// Entries live in a `Vec` in the order words were first seen; `index` maps a
/// word to its slot so each increment is an expected O(1) hash lookup. Every
/// entry has a count of at least one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<RankedEntry>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn get(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&slot| self.entries[slot].count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens aggregated.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// Entries in first-occurrence order.
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    fn record(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(word.to_owned(), self.entries.len());
                self.entries.push(RankedEntry::new(word, 1));
            }
        }
    }
}

/// Count tokens in a single pass.
pub fn aggregate<'t, I>(tokens: I) -> FrequencyTable
where
    I: IntoIterator<Item = Token<'t>>,
{
    let mut table = FrequencyTable::default();
    for token in tokens {
        table.record(token.text);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::aggregate;
    use crate::token::Token;

    fn tokens<'a>(words: &[&'a str]) -> Vec<Token<'a>> {
        words
            .iter()
            .map(|&text| Token { text, offset: 0 })
            .collect()
    }

    #[test]
    fn skewed_input_collapses_to_one_entry() {
        let words = vec!["spam"; 10_000];
        let table = aggregate(tokens(&words));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("spam"), Some(10_000));
        assert_eq!(table.total(), 10_000);
    }

    #[test]
    fn entries_keep_first_seen_order() {
        let table = aggregate(tokens(&["b", "a", "b", "c", "a"]));
        let order: Vec<_> = table.entries().iter().map(|e| e.word.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
        assert_eq!(table.get("missing"), None);
    }
}
