use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::tree::CodeTree;
use crate::error::Result;

/// Symbol to bit-string mapping derived from a `CodeTree`
///
/// Codes are strings of `'0'` and `'1'`. Tables built from a tree are prefix-free; tables
/// deserialized from elsewhere are checked by `HuffmanDecoder::new`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeTable {
    codes: BTreeMap<char, String>,
}

impl CodeTable {
    /// Derive codes by walking the tree: `0` for left, `1` for right
    ///
    /// Walks with an explicit stack so deep trees cannot exhaust the call stack. A lone leaf
    /// root gets the code `"0"`, since an empty code could never be decoded.
    pub fn from_tree(root: &CodeTree) -> Self {
        let mut codes = BTreeMap::new();
        let mut stack = vec![(root, String::new())];

        while let Some((node, path)) = stack.pop() {
            match node {
                CodeTree::Leaf { symbol, .. } => {
                    let code = if path.is_empty() { "0".to_string() } else { path };
                    codes.insert(*symbol, code);
                }
                CodeTree::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push('1');
                    stack.push((right, right_path));

                    let mut left_path = path;
                    left_path.push('0');
                    stack.push((left, left_path));
                }
            }
        }

        Self { codes }
    }

    /// Code for `symbol`
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs in symbol order
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }

    /// Length of the longest code
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(String::len).max().unwrap_or(0)
    }

    /// Check that no code is a prefix of another
    ///
    /// After sorting, a code that prefixes any other code also prefixes its immediate successor.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.codes.values().map(String::as_str).collect();
        codes.sort_unstable();
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }

    /// Bytes this table occupies when shipped alongside its payload (compact JSON)
    pub fn serialized_size(&self) -> Result<usize> {
        Ok(serde_json::to_vec(self)?.len())
    }

    /// Compact JSON form of the table
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a table previously written by `to_json`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl FromIterator<(char, String)> for CodeTable {
    fn from_iter<I: IntoIterator<Item = (char, String)>>(iter: I) -> Self {
        Self { codes: iter.into_iter().collect() }
    }
}
