// Copyright (c) 2025 Prefix Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the prefix tree.
//!
//! Every property is checked against a `BTreeSet<String>` model holding the
//! same words.

use proptest::prelude::*;
use std::collections::BTreeSet;

use super::test_utils::{ascii_word_strategy, word_set_strategy, word_strategy};
use crate::data_structures::prefix_tree::{PrefixTree, PrefixTreeConfig, TreeNode};

fn build(words: &[String]) -> (PrefixTree, BTreeSet<String>) {
    let tree: PrefixTree = words.iter().collect();
    let model: BTreeSet<String> = words.iter().cloned().collect();
    (tree, model)
}

fn count_terminals(root: &TreeNode) -> usize {
    let mut stack = vec![root];
    let mut count = 0;
    while let Some(node) = stack.pop() {
        if node.is_terminal() {
            count += 1;
        }
        stack.extend(node.children().map(|(_, child)| child));
    }
    count
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Property: size equals the number of distinct words added
    #[test]
    fn prop_size_counts_distinct_words(words in word_set_strategy(ascii_word_strategy())) {
        let (tree, model) = build(&words);
        prop_assert_eq!(tree.size(), model.len());
        prop_assert_eq!(count_terminals(tree.root()), model.len());
        prop_assert_eq!(tree.is_empty(), model.is_empty());
    }

    // Property: adding everything a second time changes nothing
    #[test]
    fn prop_add_is_idempotent(words in word_set_strategy(ascii_word_strategy())) {
        let (mut tree, _) = build(&words);
        let size = tree.size();
        let all = tree.words_for_prefix("");

        for word in &words {
            prop_assert!(!tree.add(word));
        }
        prop_assert_eq!(tree.size(), size);
        prop_assert_eq!(tree.words_for_prefix(""), all);
    }

    // Property: contains is true exactly for added words, not their prefixes
    #[test]
    fn prop_membership_sound(
        words in word_set_strategy(ascii_word_strategy()),
        probes in word_set_strategy(ascii_word_strategy()),
    ) {
        let (tree, model) = build(&words);
        for probe in probes.iter().chain(words.iter()) {
            prop_assert_eq!(tree.contains(probe), model.contains(probe), "probe {:?}", probe);
        }
    }

    // Property: prefix search returns exactly the matching words, sorted
    #[test]
    fn prop_prefix_complete_and_ordered(
        words in word_set_strategy(ascii_word_strategy()),
        prefix in ascii_word_strategy(),
    ) {
        let (tree, model) = build(&words);
        let expected: Vec<String> = model
            .iter()
            .filter(|word| word.starts_with(prefix.as_str()))
            .cloned()
            .collect();
        prop_assert_eq!(tree.words_for_prefix(&prefix), expected);
    }

    // Property: the empty prefix lists every word
    #[test]
    fn prop_empty_prefix_lists_all(words in word_set_strategy(word_strategy())) {
        let (tree, model) = build(&words);
        let expected: Vec<String> = model.into_iter().collect();
        prop_assert_eq!(tree.words_for_prefix(""), expected);
    }

    // Property: suggestions are the leading slice of the full result
    #[test]
    fn prop_suggestions_are_leading_slice(
        words in word_set_strategy(ascii_word_strategy()),
        prefix in ascii_word_strategy(),
        limit in 1usize..10,
    ) {
        let (tree, _) = build(&words);
        let all = tree.words_for_prefix(&prefix);
        let limited = tree.suggestions(&prefix, limit);
        prop_assert_eq!(limited.len(), all.len().min(limit));
        prop_assert_eq!(&all[..limited.len()], &limited[..]);
    }

    // Property: case-insensitive trees treat case variants as one word
    #[test]
    fn prop_case_insensitive_folds(words in word_set_strategy(ascii_word_strategy())) {
        let config = PrefixTreeConfig::new().with_case_sensitive(false);
        let mut tree = PrefixTree::with_config(config);
        for word in &words {
            tree.add(word.to_uppercase());
        }

        let model: BTreeSet<String> = words.iter().cloned().collect();
        prop_assert_eq!(tree.size(), model.len());
        for word in &words {
            prop_assert!(tree.contains(word));
            prop_assert!(tree.contains(word.to_uppercase()));
        }
    }

    #[test]
    fn prop_case_insensitive_folds_any_script(words in word_set_strategy(word_strategy())) {
        let config = PrefixTreeConfig::new().with_case_sensitive(false);
        let mut tree = PrefixTree::with_config(config);
        for word in &words {
            tree.add(word);
        }

        let model: BTreeSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        prop_assert_eq!(tree.size(), model.len());
        for word in &words {
            prop_assert!(tree.contains(word));
        }
        prop_assert_eq!(tree.words_for_prefix(""), model.into_iter().collect::<Vec<_>>());
    }
}
