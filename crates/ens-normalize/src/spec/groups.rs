use alloy_primitives::map::HashSet;
use std::fmt;

/// Index of a [`ScriptGroup`] in table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(pub(crate) usize);

impl GroupId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named script group of the rule tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptGroup {
    pub(crate) name: String,
    pub(crate) primary: HashSet<char>,
    pub(crate) secondary: HashSet<char>,
    /// Set when at least one member has a registered whole-script look-alike.
    pub(crate) confusable_checked: bool,
}

impl ScriptGroup {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_primary(&self, c: char) -> bool {
        self.primary.contains(&c)
    }

    /// Whether `c` is a primary or secondary member.
    pub fn contains(&self, c: char) -> bool {
        self.primary.contains(&c) || self.secondary.contains(&c)
    }

    pub fn confusable_checked(&self) -> bool {
        self.confusable_checked
    }
}

/// A set of [`GroupId`]s stored as a bit set.
#[derive(Clone, Default)]
pub struct GroupSet {
    words: Vec<u64>,
}

impl GroupSet {
    /// The set of the first `len` groups.
    pub fn full(len: usize) -> Self {
        let mut words = vec![u64::MAX; len / 64];
        if len % 64 != 0 {
            words.push((1u64 << (len % 64)) - 1);
        }
        Self { words }
    }

    pub fn insert(&mut self, id: GroupId) {
        let (word, bit) = (id.0 / 64, id.0 % 64);
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= 1u64 << bit;
    }

    pub fn contains(&self, id: GroupId) -> bool {
        self.words.get(id.0 / 64).is_some_and(|&w| w & (1u64 << (id.0 % 64)) != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn intersects(&self, other: &Self) -> bool {
        self.words.iter().zip(&other.words).any(|(a, b)| a & b != 0)
    }

    pub fn intersection(&self, other: &Self) -> Self {
        let words = self.words.iter().zip(&other.words).map(|(a, b)| a & b).collect();
        Self { words }
    }

    /// Elements of `self` that are not in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        let words = self
            .words
            .iter()
            .enumerate()
            .map(|(i, a)| a & !other.words.get(i).copied().unwrap_or(0))
            .collect();
        Self { words }
    }

    pub fn union_with(&mut self, other: &Self) {
        if other.words.len() > self.words.len() {
            self.words.resize(other.words.len(), 0);
        }
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a |= b;
        }
    }

    /// The lowest id in the set.
    pub fn first(&self) -> Option<GroupId> {
        self.iter().next()
    }

    /// Ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = GroupId> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            (0..64usize)
                .filter(move |bit| word & (1u64 << bit) != 0)
                .map(move |bit| GroupId(i * 64 + bit))
        })
    }
}

impl PartialEq for GroupSet {
    fn eq(&self, other: &Self) -> bool {
        let len = self.words.len().max(other.words.len());
        (0..len).all(|i| {
            self.words.get(i).copied().unwrap_or(0) == other.words.get(i).copied().unwrap_or(0)
        })
    }
}

impl Eq for GroupSet {}

impl FromIterator<GroupId> for GroupSet {
    fn from_iter<I: IntoIterator<Item = GroupId>>(iter: I) -> Self {
        let mut set = Self::default();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl fmt::Debug for GroupSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|id| id.0)).finish()
    }
}
