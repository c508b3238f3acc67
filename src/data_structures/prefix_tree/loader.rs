// Copyright (c) 2025 Prefix Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Populates a prefix tree from a newline-delimited word list.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{PrefixTree, PrefixTreeError, PrefixTreeResult, WordListConfig};

/// Counters describing one word-list load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines read
    pub lines: usize,
    /// Words that were new to the tree
    pub added: usize,
    /// Words that were already present
    pub duplicates: usize,
    /// Blank or comment lines
    pub skipped: usize,
}

/// Reads words from `reader`, one per line, into `tree`.
///
/// `source` is only used to label errors.
pub fn load_from_reader<R: BufRead>(
    tree: &mut PrefixTree,
    reader: R,
    config: &WordListConfig,
    source: &Path,
) -> PrefixTreeResult<LoadStats> {
    let mut stats = LoadStats::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| PrefixTreeError::ReadFailed {
            path: source.to_path_buf(),
            line: index + 1,
            message: e.to_string(),
        })?;
        stats.lines += 1;

        let word = if config.trim { line.trim() } else { line.as_str() };
        if word.is_empty() || is_comment(word, config) {
            stats.skipped += 1;
            continue;
        }

        if tree.add(word) {
            stats.added += 1;
        } else {
            stats.duplicates += 1;
        }
    }

    debug!(
        source = %source.display(),
        lines = stats.lines,
        added = stats.added,
        duplicates = stats.duplicates,
        skipped = stats.skipped,
        "Loaded word list"
    );
    Ok(stats)
}

/// Reads the word list at `path` into `tree`.
pub fn load_from_path<P: AsRef<Path>>(
    tree: &mut PrefixTree,
    path: P,
    config: &WordListConfig,
) -> PrefixTreeResult<LoadStats> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PrefixTreeError::WordListNotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|e| PrefixTreeError::ReadFailed {
        path: PathBuf::from(path),
        line: 0,
        message: e.to_string(),
    })?;

    let stats = load_from_reader(tree, BufReader::new(file), config, path)?;
    info!(
        path = %path.display(),
        added = stats.added,
        size = tree.size(),
        "Word list loaded"
    );
    Ok(stats)
}

fn is_comment(word: &str, config: &WordListConfig) -> bool {
    config
        .comment_prefix
        .as_deref()
        .is_some_and(|prefix| !prefix.is_empty() && word.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn load(input: &str, config: &WordListConfig) -> (PrefixTree, LoadStats) {
        let mut tree = PrefixTree::new();
        let stats =
            load_from_reader(&mut tree, Cursor::new(input), config, Path::new("memory")).unwrap();
        (tree, stats)
    }

    #[test]
    fn test_load_skips_comments_and_blanks() {
        let input = "# fruit\napple\n\n  banana  \napple\n#cherry\n";
        let (tree, stats) = load(input, &WordListConfig::default());

        assert_eq!(
            stats,
            LoadStats {
                lines: 6,
                added: 2,
                duplicates: 1,
                skipped: 3,
            }
        );
        assert_eq!(tree.words_for_prefix(""), vec!["apple", "banana"]);
    }

    #[test]
    fn test_load_without_trim_or_comments() {
        let config = WordListConfig::new()
            .with_trim(false)
            .with_comment_prefix(None);
        let (tree, stats) = load("#tag\n a\n", &config);

        assert_eq!(stats.added, 2);
        assert!(tree.contains("#tag"));
        assert!(tree.contains(" a"));
        assert!(!tree.contains("a"));
    }

    #[test]
    fn test_load_invalid_utf8_reports_line() {
        let mut tree = PrefixTree::new();
        let input: &[u8] = b"ok\n\xff\xfe\n";
        let err = load_from_reader(
            &mut tree,
            Cursor::new(input),
            &WordListConfig::default(),
            Path::new("bad.txt"),
        )
        .unwrap_err();

        match err {
            PrefixTreeError::ReadFailed { path, line, .. } => {
                assert_eq!(path, PathBuf::from("bad.txt"));
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(tree.contains("ok"));
    }

    #[test]
    fn test_load_missing_file() {
        let mut tree = PrefixTree::new();
        let err = load_from_path(
            &mut tree,
            "/definitely/not/here/words.txt",
            &WordListConfig::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            PrefixTreeError::WordListNotFound(PathBuf::from("/definitely/not/here/words.txt"))
        );
    }
}
