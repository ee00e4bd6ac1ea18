//! Script group resolution and the whole-script confusable check.

use crate::{
    error::NormalizeError,
    spec::{GroupId, GroupSet, ScriptGroup, SpecData, Whole},
};
use alloy_primitives::map::HashSet;

/// Narrows the candidate script groups of a label one codepoint at a time.
#[derive(Debug)]
pub struct GroupResolver<'a> {
    spec: &'a SpecData,
    candidates: GroupSet,
    /// Distinct text codepoints in first-occurrence order.
    unique: Vec<char>,
    seen: HashSet<char>,
    mixed: bool,
}

impl<'a> GroupResolver<'a> {
    pub fn new(spec: &'a SpecData) -> Self {
        Self {
            spec,
            candidates: spec.all_groups(),
            unique: Vec::new(),
            seen: HashSet::default(),
            mixed: false,
        }
    }

    /// Narrows the candidates to the groups containing `c`.
    ///
    /// Fails with [`NormalizeError::IllegalMixture`] when no candidate contains `c`, naming the
    /// first candidate before narrowing. Once failed, further codepoints are ignored.
    pub fn push(&mut self, c: char) -> Result<(), NormalizeError> {
        if self.mixed || !self.seen.insert(c) {
            return Ok(());
        }
        self.unique.push(c);

        let narrowed = match self.spec.membership(c) {
            Some(groups) => self.candidates.intersection(groups),
            None => GroupSet::default(),
        };
        if narrowed.is_empty() {
            self.mixed = true;
            let group = self.candidates.first().and_then(|id| self.spec.group(id));
            return Err(NormalizeError::IllegalMixture {
                group: group.map(ScriptGroup::name).unwrap_or_default().to_string(),
                cp: c,
            });
        }
        self.candidates = narrowed;
        Ok(())
    }

    /// The current candidate groups.
    pub fn candidates(&self) -> &GroupSet {
        &self.candidates
    }

    /// The first surviving candidate, `None` when the label has no text.
    pub fn resolved(&self) -> Option<GroupId> {
        if self.unique.is_empty() || self.mixed { None } else { self.candidates.first() }
    }

    /// Runs the whole-script confusable check against the resolved group.
    pub fn check_whole(&self) -> Result<(), NormalizeError> {
        let Some(group) = self.resolved().and_then(|id| self.spec.group(id)) else {
            return Ok(());
        };
        if !group.confusable_checked() {
            return Ok(());
        }

        let mut maker: Option<GroupSet> = None;
        let mut shared = Vec::new();
        for &c in &self.unique {
            match self.spec.whole(c) {
                Some(Whole::Unique) => return Ok(()),
                Some(Whole::Confusable(groups)) => {
                    let next = match &maker {
                        Some(maker) => maker.intersection(groups),
                        None => groups.clone(),
                    };
                    if next.is_empty() {
                        return Ok(());
                    }
                    maker = Some(next);
                }
                None => shared.push(c),
            }
        }

        let Some(maker) = maker else { return Ok(()) };
        for other in maker.iter().filter_map(|id| self.spec.group(id)) {
            if shared.iter().all(|&c| other.contains(c)) {
                trace!(group = group.name(), other = other.name(), "confusable");
                return Err(NormalizeError::WholeConfusable {
                    group: group.name().to_string(),
                    other: other.name().to_string(),
                });
            }
        }
        Ok(())
    }
}
