//! Prefix index over the vocabulary
//!
//! Words are stored as a letter tree in an arena of nodes. Each node keeps its
//! children sorted by letter and an explicit terminal flag marking the end of a
//! word. The search engine walks this tree in lock-step with the board, so a
//! missing child is the signal to prune.

use std::fmt;
use tracing::debug;

/// Handle to a node inside a [`PrefixIndex`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    const fn index(self) -> usize {
        self.0
    }
}

/// One letter position in the prefix tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixNode {
    children: Vec<(u8, NodeId)>,
    terminal: bool,
}

impl PrefixNode {
    /// Child for `letter`, if any
    #[inline]
    #[must_use]
    pub fn child(&self, letter: u8) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&letter, |&(l, _)| l)
            .ok()
            .map(|pos| self.children[pos].1)
    }

    /// Whether a word ends exactly at this node
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Children in ascending letter order
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[(u8, NodeId)] {
        &self.children
    }
}

/// Error type for vocabulary construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    /// No usable words were supplied
    Empty,
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Vocabulary contains no usable words"),
        }
    }
}

impl std::error::Error for VocabularyError {}

/// Prefix tree holding the complete vocabulary
///
/// Built once, then shared read-only between searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixIndex {
    nodes: Vec<PrefixNode>,
    word_count: usize,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixIndex {
    /// Node representing the empty prefix
    pub const ROOT: NodeId = NodeId(0);

    /// Create an empty index containing only the root
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![PrefixNode::default()],
            word_count: 0,
        }
    }

    /// Build an index from a vocabulary
    ///
    /// # Errors
    /// Returns `VocabularyError::Empty` if no non-empty word was supplied.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::PrefixIndex;
    ///
    /// let index = PrefixIndex::from_words(["past", "paste", "patch"]).unwrap();
    /// assert!(index.contains("paste"));
    /// assert!(!index.contains("pas"));
    /// assert!(index.find_prefix("pas").is_some());
    /// ```
    pub fn from_words<I, S>(words: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        for word in words {
            index.insert(word.as_ref());
        }

        if index.is_empty() {
            return Err(VocabularyError::Empty);
        }

        debug!(
            words = index.len(),
            nodes = index.node_count(),
            "built prefix index"
        );
        Ok(index)
    }

    /// Insert a word, creating missing nodes along the way
    ///
    /// Returns `true` if the word was not present before. The empty string is
    /// ignored and never marks the root terminal.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut node = Self::ROOT;
        for &letter in word.as_bytes() {
            node = match self.nodes[node.index()].child(letter) {
                Some(next) => next,
                None => self.push_child(node, letter),
            };
        }

        let target = &mut self.nodes[node.index()];
        if target.terminal {
            false
        } else {
            target.terminal = true;
            self.word_count += 1;
            true
        }
    }

    fn push_child(&mut self, parent: NodeId, letter: u8) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(PrefixNode::default());

        let children = &mut self.nodes[parent.index()].children;
        let pos = children.partition_point(|&(l, _)| l < letter);
        children.insert(pos, (letter, id));
        id
    }

    /// Borrow a node
    ///
    /// # Panics
    /// Panics if `id` did not come from this index.
    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> &PrefixNode {
        &self.nodes[id.index()]
    }

    /// Child of `node` for `letter`, or `None` when no word continues that way
    #[inline]
    #[must_use]
    pub fn child(&self, node: NodeId, letter: u8) -> Option<NodeId> {
        self.node(node).child(letter)
    }

    /// Whether a word ends exactly at `node`
    #[inline]
    #[must_use]
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.node(node).is_terminal()
    }

    /// Node reached by following `prefix` from the root
    #[must_use]
    pub fn find_prefix(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .bytes()
            .try_fold(Self::ROOT, |node, letter| self.child(node, letter))
    }

    /// Whether `word` is in the vocabulary
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.find_prefix(word)
            .is_some_and(|node| self.is_terminal(node))
    }

    /// Lazily enumerate every word below `node`, each prefixed by `prefix`
    ///
    /// A node's own word comes before its descendants and children are
    /// visited in ascending letter order. Calling this again restarts the
    /// enumeration.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::PrefixIndex;
    ///
    /// let index = PrefixIndex::from_words(["paste", "past", "patch", "paper"]).unwrap();
    /// let node = index.find_prefix("pas").unwrap();
    /// let words: Vec<String> = index.all_words(node, "pas").collect();
    /// assert_eq!(words, ["past", "paste"]);
    /// ```
    #[must_use]
    pub fn all_words(&self, node: NodeId, prefix: &str) -> Words<'_> {
        Words {
            index: self,
            prefix: prefix.to_string(),
            letters: Vec::new(),
            stack: Vec::new(),
            entering: Some(node),
        }
    }

    /// Number of distinct words stored
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.word_count
    }

    /// Whether the index holds no words
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes in the arena, root included
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Frame of the word enumeration: a node and the next child to visit
#[derive(Debug, Clone)]
struct WordFrame {
    node: NodeId,
    next_child: usize,
}

/// Iterator returned by [`PrefixIndex::all_words`]
#[derive(Debug, Clone)]
pub struct Words<'a> {
    index: &'a PrefixIndex,
    prefix: String,
    letters: Vec<u8>,
    stack: Vec<WordFrame>,
    entering: Option<NodeId>,
}

impl Words<'_> {
    fn current_word(&self) -> String {
        let mut word = self.prefix.clone();
        word.push_str(&String::from_utf8_lossy(&self.letters));
        word
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(node) = self.entering.take() {
                self.stack.push(WordFrame {
                    node,
                    next_child: 0,
                });
                if self.index.is_terminal(node) {
                    return Some(self.current_word());
                }
                continue;
            }

            let frame = self.stack.last_mut()?;
            let children = self.index.node(frame.node).children();

            if let Some(&(letter, child)) = children.get(frame.next_child) {
                frame.next_child += 1;
                self.letters.push(letter);
                self.entering = Some(child);
            } else {
                self.stack.pop();
                // The starting frame has no letter of its own
                if !self.stack.is_empty() {
                    self.letters.pop();
                }
            }
        }
    }
}
