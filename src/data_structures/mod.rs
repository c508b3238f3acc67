// Copyright (c) 2025 Prefix Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Data structures for Prefix Complete.

pub mod prefix_tree;

pub use prefix_tree::{PrefixTree, PrefixTreeError, PrefixTreeResult, SharedPrefixTree};
