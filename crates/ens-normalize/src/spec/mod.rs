//! The immutable ENSIP-15 rule tables.
//!
//! [`SpecData`] is built once from a `spec.json` document in the upstream schema and shared
//! read-only afterwards, usually behind an [`Arc`].

mod emoji;
mod groups;
mod raw;
mod whole;

pub use emoji::{EmojiSequence, EmojiTrie, FE0F};
pub use groups::{GroupId, GroupSet, ScriptGroup};
pub use whole::Whole;

use crate::error::SpecError;
use alloy_primitives::map::{HashMap, HashSet};
use raw::RawSpec;
use std::{
    path::Path,
    sync::{Arc, OnceLock},
};

/// The `spec.json` document compiled into the crate.
pub const EMBEDDED_SPEC: &str = include_str!("../../data/spec.json");

/// Returns the shared tables built from [`EMBEDDED_SPEC`].
pub fn embedded() -> Result<Arc<SpecData>, SpecError> {
    static EMBEDDED: OnceLock<Arc<SpecData>> = OnceLock::new();
    if let Some(spec) = EMBEDDED.get() {
        return Ok(spec.clone());
    }
    let spec = Arc::new(SpecData::from_json(EMBEDDED_SPEC)?);
    Ok(EMBEDDED.get_or_init(|| spec).clone())
}

/// Rule tables of the normalizer.
#[derive(Debug)]
pub struct SpecData {
    created: String,
    unicode: String,
    mapped: HashMap<char, Box<[char]>>,
    ignored: HashSet<char>,
    cm: HashSet<char>,
    nsm: HashSet<char>,
    nsm_max: usize,
    fenced: HashMap<char, String>,
    groups: Vec<ScriptGroup>,
    /// Groups of every valid codepoint.
    membership: HashMap<char, GroupSet>,
    wholes: HashMap<char, Whole>,
    emoji: EmojiTrie,
    greek: Option<GroupId>,
}

impl SpecData {
    /// Parses and indexes a `spec.json` document.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        let raw: RawSpec = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Reads and indexes the `spec.json` document at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SpecError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|source| SpecError::Io { path: path.to_path_buf(), source })?;
        Self::from_json(&json)
    }

    fn from_raw(raw: RawSpec) -> Result<Self, SpecError> {
        if raw.groups.is_empty() {
            return Err(SpecError::NoGroups);
        }

        let mut groups = Vec::with_capacity(raw.groups.len());
        let mut membership: HashMap<char, GroupSet> = HashMap::default();
        for (i, group) in raw.groups.into_iter().enumerate() {
            let primary = chars(group.primary)?.into_iter().collect::<HashSet<_>>();
            let secondary = chars(group.secondary)?.into_iter().collect::<HashSet<_>>();
            for &c in primary.iter().chain(&secondary) {
                membership.entry(c).or_default().insert(GroupId(i));
            }
            groups.push(ScriptGroup {
                name: group.name,
                primary,
                secondary,
                confusable_checked: false,
            });
        }

        let mut mapped = HashMap::default();
        for (cp, to) in raw.mapped {
            if to.is_empty() {
                return Err(SpecError::EmptyMapping(cp));
            }
            mapped.insert(char_of(cp)?, chars(to)?.into_boxed_slice());
        }

        let wholes = raw
            .wholes
            .into_iter()
            .map(|w| Ok((chars(w.valid)?, chars(w.confused)?)))
            .collect::<Result<Vec<_>, SpecError>>()?;
        let mut wholes =
            whole::build(&wholes, |c| membership.get(&c).cloned().unwrap_or_default());
        for (&c, set) in &membership {
            if set.len() == 1 {
                wholes.entry(c).or_insert(Whole::Unique);
            }
        }
        for (c, whole) in &wholes {
            if let (Whole::Confusable(_), Some(set)) = (whole, membership.get(c)) {
                for id in set.iter() {
                    groups[id.0].confusable_checked = true;
                }
            }
        }

        let sequences = raw
            .emoji
            .into_iter()
            .map(|seq| chars(seq).map(EmojiSequence::new))
            .collect::<Result<Vec<_>, _>>()?;
        let emoji = EmojiTrie::new(sequences);

        let fenced = raw
            .fenced
            .into_iter()
            .map(|(cp, name)| Ok((char_of(cp)?, name)))
            .collect::<Result<HashMap<_, _>, SpecError>>()?;

        let greek = groups.iter().position(|g| g.name == "Greek").map(GroupId);

        let spec = Self {
            created: raw.created,
            unicode: raw.unicode,
            mapped,
            ignored: chars(raw.ignored)?.into_iter().collect(),
            cm: chars(raw.cm)?.into_iter().collect(),
            nsm: chars(raw.nsm)?.into_iter().collect(),
            nsm_max: raw.nsm_max,
            fenced,
            groups,
            membership,
            wholes,
            emoji,
            greek,
        };
        debug!(
            unicode = %spec.unicode,
            valid = spec.membership.len(),
            mapped = spec.mapped.len(),
            ignored = spec.ignored.len(),
            groups = spec.groups.len(),
            wholes = spec.wholes.len(),
            emoji = spec.emoji.len(),
            "built spec tables"
        );
        Ok(spec)
    }

    /// Creation timestamp of the source document.
    pub fn created(&self) -> &str {
        &self.created
    }

    /// Unicode version the tables were derived from.
    pub fn unicode_version(&self) -> &str {
        &self.unicode
    }

    pub fn is_valid(&self, c: char) -> bool {
        self.membership.contains_key(&c)
    }

    pub fn mapping(&self, c: char) -> Option<&[char]> {
        self.mapped.get(&c).map(|to| &to[..])
    }

    pub fn is_ignored(&self, c: char) -> bool {
        self.ignored.contains(&c)
    }

    /// Whether `c` is a combining mark.
    pub fn is_cm(&self, c: char) -> bool {
        self.cm.contains(&c)
    }

    /// Whether `c` is a non-spacing mark.
    pub fn is_nsm(&self, c: char) -> bool {
        self.nsm.contains(&c)
    }

    /// Longest allowed run of non-spacing marks.
    pub fn nsm_max(&self) -> usize {
        self.nsm_max
    }

    /// Name of a fenced codepoint.
    pub fn fenced(&self, c: char) -> Option<&str> {
        self.fenced.get(&c).map(String::as_str)
    }

    pub fn groups(&self) -> &[ScriptGroup] {
        &self.groups
    }

    /// The group at `id`, `None` when `id` belongs to larger tables.
    pub fn group(&self, id: GroupId) -> Option<&ScriptGroup> {
        self.groups.get(id.0)
    }

    pub fn group_by_name(&self, name: &str) -> Option<GroupId> {
        self.groups.iter().position(|g| g.name == name).map(GroupId)
    }

    /// The set of every group.
    pub fn all_groups(&self) -> GroupSet {
        GroupSet::full(self.groups.len())
    }

    /// Groups containing `c`, `None` when `c` is not valid.
    pub fn membership(&self, c: char) -> Option<&GroupSet> {
        self.membership.get(&c)
    }

    pub fn whole(&self, c: char) -> Option<&Whole> {
        self.wholes.get(&c)
    }

    pub fn emoji(&self) -> &EmojiTrie {
        &self.emoji
    }

    /// The `Greek` group, if present.
    pub fn greek(&self) -> Option<GroupId> {
        self.greek
    }
}

fn char_of(cp: u32) -> Result<char, SpecError> {
    char::from_u32(cp).ok_or(SpecError::InvalidCodepoint(cp))
}

fn chars(cps: Vec<u32>) -> Result<Vec<char>, SpecError> {
    cps.into_iter().map(char_of).collect()
}
