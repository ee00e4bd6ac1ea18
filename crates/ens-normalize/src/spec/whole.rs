//! Whole-script confusable tables.

use super::GroupSet;
use alloy_primitives::map::{HashMap, HashSet};

/// Whole-script status of a valid codepoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Whole {
    /// Member of exactly one group and confusable with nothing.
    Unique,
    /// Confusable; holds the groups that have a look-alike for it.
    Confusable(GroupSet),
}

/// Builds the whole-script table from the raw confusable sets.
///
/// Each entry is a confusable set as `(valid, confused)` codepoints and `membership` returns the
/// groups a codepoint belongs to. Codepoints of a set are partitioned into records of overlapping
/// groups; each confusable codepoint maps to the groups of the other records in its set.
/// Codepoints listed as `valid` in any set are never confusable.
pub(crate) fn build(
    wholes: &[(Vec<char>, Vec<char>)],
    membership: impl Fn(char) -> GroupSet,
) -> HashMap<char, Whole> {
    let whole_valid: HashSet<char> =
        wholes.iter().flat_map(|(valid, _)| valid).copied().collect();

    let mut table = HashMap::default();
    for (valid, confused) in wholes {
        let mut records: Vec<(GroupSet, Vec<char>)> = Vec::new();
        for &c in valid.iter().chain(confused) {
            let groups = membership(c);
            match records.iter_mut().find(|(g, _)| g.intersects(&groups)) {
                Some((g, members)) => {
                    g.union_with(&groups);
                    members.push(c);
                }
                None => records.push((groups, vec![c])),
            }
        }

        let mut union = GroupSet::default();
        for (groups, _) in &records {
            union.union_with(groups);
        }
        for (groups, members) in &records {
            let complement = union.difference(groups);
            for &c in members {
                if !whole_valid.contains(&c) {
                    table.insert(c, Whole::Confusable(complement.clone()));
                }
            }
        }
    }
    table
}
