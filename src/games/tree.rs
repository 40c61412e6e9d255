//! An explicit game tree keyed by move paths.
//!
//! Every node is named by the moves that lead to it from the root: the root is
//! the empty path, its children are `"0"`, `"1"`, ..., their children `"00"`,
//! `"01"` and so on. A move is a single character and a child's path is its
//! parent's path with that character appended.
//!
//! Trees are written one node per line as `<path> <value>`, with `.` standing
//! for the root. Blank lines and lines starting with `#` are skipped. A node
//! must be listed after its parent, and children are searched in the order
//! they are listed.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::alpha_beta_searcher::{Game, SearchNode};

const ROOT_TOKEN: &str = ".";
const MAX_RANDOM_BRANCHING: u8 = 36;
const RANDOM_VALUE_RANGE: i64 = 100;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("failed to read tree: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected `<path> <value>`, found `{content}`")]
    MalformedLine { line: usize, content: String },
    #[error("line {line}: invalid value `{value}`")]
    InvalidValue { line: usize, value: String },
    #[error("node `{0}` is listed more than once")]
    DuplicatePath(String),
    #[error("node `{0}` is listed before its parent")]
    MissingParent(String),
}

#[derive(Clone, Debug, Default)]
pub struct GameTree {
    values: FxHashMap<String, i64>,
    children: FxHashMap<String, Vec<char>>,
}

impl GameTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a tree in the line format described in the module docs.
    pub fn load<T: AsRef<Path>>(file: T) -> Result<Self, TreeError> {
        fs::read_to_string(file)?.parse()
    }

    /// Builds a reproducible random tree no deeper than `depth`.
    ///
    /// Every node gets between zero and `max_branching` children (at most 36,
    /// labelled `0-9a-z`), so some interior positions end up without moves.
    pub fn random(seed: u64, max_branching: u8, depth: u8) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let max_branching = max_branching.min(MAX_RANDOM_BRANCHING);
        let mut tree = Self::new();
        tree.values.insert(
            String::new(),
            rng.gen_range(-RANDOM_VALUE_RANGE..=RANDOM_VALUE_RANGE),
        );

        let mut pending = vec![String::new()];
        while let Some(parent) = pending.pop() {
            if parent.chars().count() >= depth as usize {
                continue;
            }
            let branching = rng.gen_range(0..=max_branching);
            for digit in 0..branching {
                let radix = MAX_RANDOM_BRANCHING as u32;
                let mv = match std::char::from_digit(digit as u32, radix) {
                    Some(mv) => mv,
                    None => break,
                };
                let path = format!("{}{}", parent, mv);
                tree.values.insert(
                    path.clone(),
                    rng.gen_range(-RANDOM_VALUE_RANGE..=RANDOM_VALUE_RANGE),
                );
                tree.children.entry(parent.clone()).or_default().push(mv);
                pending.push(path);
            }
        }

        tree
    }

    /// Adds a node. The empty path is the root; any other path needs its parent
    /// to be present already.
    pub fn insert(&mut self, path: &str, value: i64) -> Result<(), TreeError> {
        if self.values.contains_key(path) {
            return Err(TreeError::DuplicatePath(path.to_string()));
        }

        let mut chars = path.chars();
        if let Some(mv) = chars.next_back() {
            let parent = chars.as_str();
            if !parent.is_empty() && !self.values.contains_key(parent) {
                return Err(TreeError::MissingParent(path.to_string()));
            }
            self.children.entry(parent.to_string()).or_default().push(mv);
        }

        self.values.insert(path.to_string(), value);
        Ok(())
    }

    /// The value stored for `path`, if the node exists.
    pub fn value(&self, path: &str) -> Option<i64> {
        self.values.get(path).copied()
    }

    /// The moves available from `path`, in insertion order.
    pub fn children(&self, path: &str) -> &[char] {
        self.children
            .get(path)
            .map(|moves| moves.as_slice())
            .unwrap_or(&[])
    }

    /// Number of nodes with a value, the root included if it has one.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromStr for GameTree {
    type Err = TreeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut tree = Self::new();

        for (index, raw_line) in input.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            let (path, value) = match fields.as_slice() {
                [path, value] => (*path, *value),
                _ => {
                    return Err(TreeError::MalformedLine {
                        line: index + 1,
                        content: line.to_string(),
                    })
                }
            };

            let value = value.parse::<i64>().map_err(|_| TreeError::InvalidValue {
                line: index + 1,
                value: value.to_string(),
            })?;
            let path = if path == ROOT_TOKEN { "" } else { path };

            tree.insert(path, value)?;
        }

        Ok(tree)
    }
}

impl Game for GameTree {
    type Position = String;
    type Move = char;

    fn apply_move(&self, node: &SearchNode<String, char>, mv: &char) -> String {
        let mut position = node.position().clone();
        position.push(*mv);
        position
    }

    /// Nodes without a stored value (only ever the root) score 0.
    fn evaluate(&self, node: &SearchNode<String, char>) -> i64 {
        self.value(node.position()).unwrap_or(0)
    }

    fn legal_moves(&self, node: &SearchNode<String, char>) -> Vec<char> {
        self.children(node.position()).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_TREE: &str = "
        # root and two children
        . 1
        0 3
        1 -2
        10 7
    ";

    #[test]
    fn test_parse_small_tree() {
        let tree: GameTree = SMALL_TREE.parse().unwrap();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.value(""), Some(1));
        assert_eq!(tree.value("1"), Some(-2));
        assert_eq!(tree.value("10"), Some(7));
        assert_eq!(tree.value("11"), None);
        assert_eq!(tree.children(""), &['0', '1']);
        assert_eq!(tree.children("1"), &['0']);
        assert!(tree.children("0").is_empty());
    }

    #[test]
    fn test_children_keep_listing_order() {
        let tree: GameTree = "2 0\n0 0\n1 0".parse().unwrap();
        assert_eq!(tree.children(""), &['2', '0', '1']);
    }

    #[test]
    fn test_root_value_defaults_to_zero() {
        let tree: GameTree = "0 4".parse().unwrap();
        assert_eq!(tree.evaluate(&SearchNode::root(String::new())), 0);
    }

    #[test]
    fn test_apply_move_appends() {
        let tree = GameTree::new();
        let node = SearchNode::<String, char>::root("01".to_string());
        assert_eq!(tree.apply_move(&node, &'2'), "012");
    }

    #[test]
    fn test_malformed_line() {
        let err = "0 1 2".parse::<GameTree>().unwrap_err();
        assert!(matches!(err, TreeError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn test_invalid_value() {
        let err = ". 0\n0 many".parse::<GameTree>().unwrap_err();
        assert!(matches!(err, TreeError::InvalidValue { line: 2, .. }));
    }

    #[test]
    fn test_duplicate_path() {
        let err = "0 1\n0 2".parse::<GameTree>().unwrap_err();
        assert!(matches!(err, TreeError::DuplicatePath(ref path) if path == "0"));
    }

    #[test]
    fn test_missing_parent() {
        let err = "01 1\n0 2".parse::<GameTree>().unwrap_err();
        assert!(matches!(err, TreeError::MissingParent(ref path) if path == "01"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameTree::load("does/not/exist.tree").unwrap_err();
        assert!(matches!(err, TreeError::Io(_)));
    }

    #[test]
    fn test_random_tree_is_reproducible() {
        let a = GameTree::random(7, 3, 4);
        let b = GameTree::random(7, 3, 4);
        assert_eq!(a.len(), b.len());
        for path in a.values.keys() {
            assert_eq!(a.value(path), b.value(path));
            assert_eq!(a.children(path), b.children(path));
        }
    }

    #[test]
    fn test_random_tree_respects_limits() {
        let tree = GameTree::random(42, 4, 3);
        for (path, _) in tree.values.iter() {
            assert!(path.chars().count() <= 3);
            assert!(tree.children(path).len() <= 4);
        }
    }
}
