//! Emoji sequences and the prefix trie used to match them.

/// Emoji presentation selector, optional wherever a sequence carries one.
pub const FE0F: char = '\u{FE0F}';

/// A registered emoji sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmojiSequence {
    qualified: Box<[char]>,
    normalized: Box<[char]>,
}

impl EmojiSequence {
    /// Creates a sequence from its fully-qualified form.
    pub fn new(qualified: impl Into<Box<[char]>>) -> Self {
        let qualified = qualified.into();
        let normalized = qualified.iter().copied().filter(|&c| c != FE0F).collect();
        Self { qualified, normalized }
    }

    /// The fully-qualified form, presentation selectors included.
    pub fn qualified(&self) -> &[char] {
        &self.qualified
    }

    /// The canonical form, presentation selectors removed.
    pub fn normalized(&self) -> &[char] {
        &self.normalized
    }

    pub fn has_presentation_selector(&self) -> bool {
        self.qualified.len() != self.normalized.len()
    }
}

#[derive(Debug, Default)]
struct Node {
    /// Sorted by codepoint.
    children: Vec<(char, usize)>,
    /// Index of the sequence that ends here.
    value: Option<usize>,
}

/// Prefix trie over every accepted spelling of the registered sequences.
#[derive(Debug)]
pub struct EmojiTrie {
    nodes: Vec<Node>,
    sequences: Vec<EmojiSequence>,
}

impl EmojiTrie {
    pub fn new(sequences: Vec<EmojiSequence>) -> Self {
        let mut trie = Self { nodes: vec![Node::default()], sequences: Vec::new() };
        for (index, sequence) in sequences.iter().enumerate() {
            // Every FE0F may be present or absent, so track all nodes reachable so far.
            let mut frontier = vec![0];
            for &c in sequence.qualified() {
                let next: Vec<usize> =
                    frontier.iter().map(|&node| trie.child_or_insert(node, c)).collect();
                if c == FE0F {
                    frontier.extend(next);
                } else {
                    frontier = next;
                }
            }
            for node in frontier {
                trie.nodes[node].value = Some(index);
            }
        }
        trie.sequences = sequences;
        trie
    }

    fn child(&self, node: usize, c: char) -> Option<usize> {
        let children = &self.nodes[node].children;
        children.binary_search_by_key(&c, |&(k, _)| k).ok().map(|i| children[i].1)
    }

    fn child_or_insert(&mut self, node: usize, c: char) -> usize {
        match self.nodes[node].children.binary_search_by_key(&c, |&(k, _)| k) {
            Ok(i) => self.nodes[node].children[i].1,
            Err(i) => {
                let child = self.nodes.len();
                self.nodes.push(Node::default());
                self.nodes[node].children.insert(i, (c, child));
                child
            }
        }
    }

    /// Returns the longest sequence that prefixes `chars` and the number of chars it spans.
    pub fn longest_match(&self, chars: &[char]) -> Option<(usize, &EmojiSequence)> {
        let mut node = 0;
        let mut found = None;
        for (i, &c) in chars.iter().enumerate() {
            let Some(next) = self.child(node, c) else { break };
            node = next;
            if let Some(value) = self.nodes[node].value {
                found = Some((i + 1, &self.sequences[value]));
            }
        }
        found
    }

    pub fn sequences(&self) -> &[EmojiSequence] {
        &self.sequences
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}
