use std::collections::HashSet;

use proptest::prelude::*;
use wordfreq_core::{
    aggregate, rank, top_n, AnalysisConfig, Pipeline, RankedEntry, TokenFilter, Tokenizer,
    DEFAULT_EXCLUSIONS,
};

const FIXTURE_DICT: &str = "猫猫 10 n\n狗狗 10 n\n爱吃 10 v\n爱玩 10 v\n";

fn fixture_tokenizer() -> Tokenizer {
    let mut dict = FIXTURE_DICT.as_bytes();
    Tokenizer::with_dictionary(&mut dict).unwrap()
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "猫猫", "狗狗", "爱吃", "爱玩", "鱼", "的", "ab", "cd", "x", " ", "\n", "。", "，",
            "！", "：", "；", "(", ")", "“", "”", ",", "hello",
        ]),
        0..60,
    )
    .prop_map(|parts| parts.concat())
}

fn ranked_strategy() -> impl Strategy<Value = Vec<RankedEntry>> {
    prop::collection::vec(1u64..50, 0..30).prop_map(|counts| {
        counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| RankedEntry::new(format!("w{i}"), count))
            .collect()
    })
}

proptest! {
    #[test]
    fn counts_sum_to_filtered_token_count(text in text_strategy()) {
        let tokenizer = fixture_tokenizer();
        let filter = TokenFilter::default();
        let filtered = filter.filter(tokenizer.tokenize(&text)).count() as u64;

        let table = aggregate(filter.filter(tokenizer.tokenize(&text)));
        prop_assert_eq!(table.total(), filtered);
        let ranked = rank(&table);
        prop_assert_eq!(ranked.iter().map(|e| e.count).sum::<u64>(), filtered);
    }

    #[test]
    fn full_table_is_unique_and_ordered(text in text_strategy()) {
        let tokenizer = fixture_tokenizer();
        let pipeline = Pipeline::new(fixture_tokenizer(), &AnalysisConfig::default());
        let report = pipeline.run(&text);

        let mut seen = HashSet::new();
        for entry in &report.full {
            prop_assert!(seen.insert(entry.word.clone()), "duplicate key {}", entry.word);
            prop_assert!(entry.count > 0);
        }

        let first_seen: Vec<String> = {
            let mut order = Vec::new();
            let mut known = HashSet::new();
            for token in TokenFilter::default().filter(tokenizer.tokenize(&text)) {
                if known.insert(token.text) {
                    order.push(token.text.to_string());
                }
            }
            order
        };
        let position = |word: &str| first_seen.iter().position(|w| w == word);
        for pair in report.full.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
            if pair[0].count == pair[1].count {
                prop_assert!(position(&pair[0].word) < position(&pair[1].word));
            }
        }
    }

    #[test]
    fn default_exclusions_never_become_keys(text in text_strategy()) {
        let pipeline = Pipeline::new(fixture_tokenizer(), &AnalysisConfig::default());
        let report = pipeline.run(&text);
        for entry in &report.full {
            prop_assert!(!DEFAULT_EXCLUSIONS.contains(&entry.word.trim()));
            prop_assert!(entry.word.trim().chars().count() >= 2);
        }
    }

    #[test]
    fn runs_are_idempotent(text in text_strategy(), n in -5i64..40) {
        let pipeline = Pipeline::new(fixture_tokenizer(), &AnalysisConfig::default());
        prop_assert_eq!(pipeline.run_with_top(&text, n), pipeline.run_with_top(&text, n));
    }

    #[test]
    fn top_n_length_is_clamped(ranked in ranked_strategy(), n in any::<i64>()) {
        let selected = top_n(&ranked, n);
        let expected = if n <= 0 { 0 } else { (n as u64).min(ranked.len() as u64) as usize };
        prop_assert_eq!(selected.len(), expected);
        prop_assert_eq!(selected, &ranked[..expected]);
    }
}
