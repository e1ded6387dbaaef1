use std::{collections::BTreeMap, fmt};

use balda_core::Letter;

/// Identifier of a node in the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node, which represents the empty prefix.
    pub const ROOT: Self = Self(0);

    /// Returns the arena index of this node.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy)]
struct NodeData {
    first_edge: u32,
    edge_count: u32,
    terminal: bool,
}

#[derive(Debug, Clone, Copy)]
struct Edge {
    letter: Letter,
    target: NodeId,
}

/// Normalizes a raw word for the dictionary.
///
/// Surrounding whitespace is trimmed and letters are lower-cased. Returns
/// `None` for empty words and words containing anything other than letters
/// (digits, punctuation, inner spaces).
///
/// # Examples
///
/// ```
/// use balda_dictionary::normalize_word;
///
/// assert_eq!(normalize_word("  Балда \r").as_deref(), Some("балда"));
/// assert_eq!(normalize_word("из-за"), None);
/// assert_eq!(normalize_word("   "), None);
/// ```
#[must_use]
pub fn normalize_word(word: &str) -> Option<String> {
    normalize_letters(word).map(|letters| letters.into_iter().map(Letter::as_char).collect())
}

fn normalize_letters(word: &str) -> Option<Vec<Letter>> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        return None;
    }
    Letter::parse_word(trimmed).ok()
}

#[derive(Debug, Clone, Default)]
struct BuildNode {
    children: Vec<(Letter, u32)>,
    terminal: bool,
}

/// Incremental builder for a [`Dictionary`].
///
/// # Examples
///
/// ```
/// use balda_dictionary::DictionaryBuilder;
///
/// let mut builder = DictionaryBuilder::new();
/// assert!(builder.insert("кот"));
/// assert!(!builder.insert("КОТ")); // duplicate after normalization
/// assert!(!builder.insert("к0т")); // rejected
/// assert_eq!(builder.rejected(), 1);
///
/// let dict = builder.build();
/// assert_eq!(dict.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct DictionaryBuilder {
    nodes: Vec<BuildNode>,
    by_len: BTreeMap<usize, Vec<String>>,
    len: usize,
    rejected: usize,
}

impl Default for DictionaryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![BuildNode::default()],
            by_len: BTreeMap::new(),
            len: 0,
            rejected: 0,
        }
    }

    /// Inserts a word.
    ///
    /// Returns `true` if the word was added, `false` if it was rejected by
    /// [`normalize_word`] or was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let Some(letters) = normalize_letters(word) else {
            log::trace!("rejected dictionary entry {word:?}");
            self.rejected += 1;
            return false;
        };

        let mut node = 0;
        for &letter in &letters {
            let children = &self.nodes[node].children;
            node = match children.binary_search_by_key(&letter, |&(l, _)| l) {
                Ok(i) => children[i].1 as usize,
                Err(i) => {
                    let id = self.nodes.len();
                    #[expect(clippy::cast_possible_truncation)]
                    let child = (letter, id as u32);
                    self.nodes[node].children.insert(i, child);
                    self.nodes.push(BuildNode::default());
                    id
                }
            };
        }

        if self.nodes[node].terminal {
            return false;
        }
        self.nodes[node].terminal = true;
        self.by_len
            .entry(letters.len())
            .or_default()
            .push(letters.into_iter().map(Letter::as_char).collect());
        self.len += 1;
        true
    }

    /// Returns the number of distinct words inserted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether no word has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of entries rejected by normalization.
    #[must_use]
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Freezes the builder into an immutable [`Dictionary`].
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn build(self) -> Dictionary {
        let Self {
            nodes: build_nodes,
            mut by_len,
            len,
            rejected: _,
        } = self;

        let mut nodes = Vec::with_capacity(build_nodes.len());
        let mut edges = Vec::with_capacity(build_nodes.len().saturating_sub(1));
        for node in build_nodes {
            nodes.push(NodeData {
                first_edge: edges.len() as u32,
                edge_count: node.children.len() as u32,
                terminal: node.terminal,
            });
            edges.extend(node.children.into_iter().map(|(letter, target)| Edge {
                letter,
                target: NodeId(target),
            }));
        }
        for words in by_len.values_mut() {
            words.sort_unstable();
        }

        Dictionary {
            nodes,
            edges,
            by_len,
            len,
        }
    }
}

impl<S: AsRef<str>> Extend<S> for DictionaryBuilder {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

/// An immutable prefix dictionary.
///
/// Membership of a word `w` is `true` exactly when following the letters of
/// `w` from [`Dictionary::root`] ends on a terminal node. Lookup is case
/// insensitive and runs in time proportional to the word length.
#[derive(Clone)]
pub struct Dictionary {
    nodes: Vec<NodeData>,
    edges: Vec<Edge>,
    by_len: BTreeMap<usize, Vec<String>>,
    len: usize,
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("len", &self.len)
            .field("nodes", &self.nodes.len())
            .finish_non_exhaustive()
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        DictionaryBuilder::new().build()
    }
}

impl Dictionary {
    /// Builds a dictionary from raw words, skipping rejected entries.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut builder = DictionaryBuilder::new();
        builder.extend(words);
        log::debug!(
            "built dictionary with {} words ({} rejected)",
            builder.len(),
            builder.rejected()
        );
        builder.build()
    }

    /// Returns the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the dictionary has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of trie nodes, including the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the root node for prefix traversal.
    #[must_use]
    pub fn root(&self) -> TrieNode<'_> {
        TrieNode {
            dict: self,
            id: NodeId::ROOT,
        }
    }

    /// Returns whether `word` is in the dictionary.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.root().walk(word).is_some_and(|node| node.is_terminal())
    }

    /// Returns all words with exactly `len` letters, sorted.
    #[must_use]
    pub fn words_of_len(&self, len: usize) -> &[String] {
        self.by_len.get(&len).map_or(&[], Vec::as_slice)
    }

    /// Returns every word, grouped by increasing length.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.by_len.values().flatten().map(String::as_str)
    }
}

/// A handle to a node of a [`Dictionary`].
///
/// The node stands for the prefix spelled by the letters leading to it.
#[derive(Clone, Copy)]
pub struct TrieNode<'a> {
    dict: &'a Dictionary,
    id: NodeId,
}

impl fmt::Debug for TrieNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("id", &self.id)
            .field("terminal", &self.is_terminal())
            .finish()
    }
}

impl<'a> TrieNode<'a> {
    fn data(self) -> NodeData {
        self.dict.nodes[self.id.index()]
    }

    fn edges(self) -> &'a [Edge] {
        let NodeData {
            first_edge,
            edge_count,
            ..
        } = self.data();
        let start = first_edge as usize;
        &self.dict.edges[start..start + edge_count as usize]
    }

    fn at(self, id: NodeId) -> Self {
        Self { dict: self.dict, id }
    }

    /// Returns this node's identifier.
    #[must_use]
    pub fn id(self) -> NodeId {
        self.id
    }

    /// Returns whether a complete word ends at this node.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.data().terminal
    }

    /// Returns the number of outgoing edges.
    #[must_use]
    pub fn child_count(self) -> usize {
        self.data().edge_count as usize
    }

    /// Follows the edge labelled `letter`.
    #[must_use]
    pub fn child(self, letter: Letter) -> Option<Self> {
        let edges = self.edges();
        edges
            .binary_search_by_key(&letter, |edge| edge.letter)
            .ok()
            .map(|i| self.at(edges[i].target))
    }

    /// Returns the outgoing edges in letter order.
    pub fn children(self) -> impl Iterator<Item = (Letter, TrieNode<'a>)> + 'a {
        self.edges()
            .iter()
            .map(move |edge| (edge.letter, self.at(edge.target)))
    }

    /// Follows every letter of `prefix`.
    ///
    /// Returns `None` if the prefix leaves the trie or contains a non-letter.
    #[must_use]
    pub fn walk(self, prefix: &str) -> Option<Self> {
        prefix.chars().try_fold(self, |node, c| {
            let letter = Letter::new(c).ok()?;
            node.child(letter)
        })
    }
}
