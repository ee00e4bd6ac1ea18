//! Per-codepoint classification.

use crate::spec::SpecData;

/// What happens to a single input codepoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition<'a> {
    /// Kept as is.
    Valid,
    /// Replaced by one or more codepoints.
    Mapped(&'a [char]),
    /// Dropped.
    Ignored,
    /// Rejected by the validator.
    Disallowed,
}

impl SpecData {
    /// Classifies `c`. Never fails; unknown codepoints are [`Disposition::Disallowed`].
    pub fn disposition(&self, c: char) -> Disposition<'_> {
        if self.is_valid(c) {
            Disposition::Valid
        } else if let Some(to) = self.mapping(c) {
            Disposition::Mapped(to)
        } else if self.is_ignored(c) {
            Disposition::Ignored
        } else {
            Disposition::Disallowed
        }
    }
}
