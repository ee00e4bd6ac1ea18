//! Error types.

use serde::Serialize;
use std::{ffi::CStr, fmt, path::PathBuf};

/// Declares [`ErrorKind`] together with its stable code and message tables.
macro_rules! error_kinds {
    ($($(#[$attr:meta])* $variant:ident = $code:literal => $msg:literal,)+) => {
        /// The fieldless classification of a [`NormalizeError`].
        ///
        /// Discriminants are the stable integer codes used at the C boundary.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
        #[serde(rename_all = "snake_case")]
        #[repr(i32)]
        pub enum ErrorKind {
            $($(#[$attr])* $variant = $code,)+
        }

        impl ErrorKind {
            /// Every kind, in code order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Returns the kind for a stable code.
            pub const fn from_code(code: i32) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Returns the static human readable message.
            pub const fn message(self) -> &'static str {
                match self {
                    $(Self::$variant => $msg,)+
                }
            }

            /// Returns the message as a NUL-terminated string.
            pub const fn c_message(self) -> &'static CStr {
                match self {
                    $(Self::$variant => {
                        match CStr::from_bytes_with_nul(concat!($msg, "\0").as_bytes()) {
                            Ok(s) => s,
                            Err(_) => c"unknown error",
                        }
                    })+
                }
            }
        }
    };
}

error_kinds! {
    /// Output buffer allocation failed.
    OutOfMemory = -1 => "out of memory",
    /// The input bytes are not UTF-8.
    InvalidUtf8 = -2 => "invalid UTF-8",
    /// An ASCII label with `--` at the third and fourth position.
    InvalidLabelExtension = -3 => "invalid label extension",
    /// Codepoints with no script group in common.
    IllegalMixture = -4 => "illegal mixture",
    /// The label is a look-alike of a label in another script.
    WholeConfusable = -5 => "whole-script confusable",
    /// An underscore after the leading underscore run.
    LeadingUnderscore = -6 => "underscore allowed only at start",
    FencedLeading = -7 => "leading fenced character",
    FencedAdjacent = -8 => "adjacent fenced characters",
    FencedTrailing = -9 => "trailing fenced character",
    /// A codepoint that is neither valid, mapped nor ignored.
    DisallowedCharacter = -10 => "disallowed character",
    EmptyLabel = -11 => "empty label",
    CmLeading = -12 => "leading combining mark",
    CmAfterEmoji = -13 => "combining mark after emoji",
    NsmDuplicate = -14 => "duplicate non-spacing marks",
    NsmExcessive = -15 => "excessive non-spacing marks",
    /// Internal failure without a more specific rule.
    Unknown = -99 => "unknown error",
}

impl ErrorKind {
    /// The stable integer code.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Why a name failed to normalize.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("out of memory")]
    OutOfMemory,
    #[error("invalid UTF-8")]
    InvalidUtf8,
    #[error("invalid label extension")]
    InvalidLabelExtension,
    #[error("illegal mixture: {group} + {}", Cp(*.cp))]
    IllegalMixture { group: String, cp: char },
    #[error("whole-script confusable: {group}/{other}")]
    WholeConfusable { group: String, other: String },
    #[error("underscore allowed only at start")]
    LeadingUnderscore,
    #[error("leading fenced character {}", Cp(*.0))]
    FencedLeading(char),
    #[error("adjacent fenced characters {} + {}", Cp(*.0), Cp(*.1))]
    FencedAdjacent(char, char),
    #[error("trailing fenced character {}", Cp(*.0))]
    FencedTrailing(char),
    #[error("disallowed character {}", Cp(*.0))]
    DisallowedCharacter(char),
    #[error("empty label")]
    EmptyLabel,
    #[error("leading combining mark {}", Cp(*.0))]
    CmLeading(char),
    #[error("combining mark after emoji {}", Cp(*.0))]
    CmAfterEmoji(char),
    #[error("duplicate non-spacing marks {}", Cp(*.0))]
    NsmDuplicate(char),
    #[error("excessive non-spacing marks: more than {limit}")]
    NsmExcessive { limit: usize },
    #[error("unknown error: {0}")]
    Unknown(&'static str),
}

impl NormalizeError {
    /// Returns the fieldless kind of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfMemory => ErrorKind::OutOfMemory,
            Self::InvalidUtf8 => ErrorKind::InvalidUtf8,
            Self::InvalidLabelExtension => ErrorKind::InvalidLabelExtension,
            Self::IllegalMixture { .. } => ErrorKind::IllegalMixture,
            Self::WholeConfusable { .. } => ErrorKind::WholeConfusable,
            Self::LeadingUnderscore => ErrorKind::LeadingUnderscore,
            Self::FencedLeading(_) => ErrorKind::FencedLeading,
            Self::FencedAdjacent(..) => ErrorKind::FencedAdjacent,
            Self::FencedTrailing(_) => ErrorKind::FencedTrailing,
            Self::DisallowedCharacter(_) => ErrorKind::DisallowedCharacter,
            Self::EmptyLabel => ErrorKind::EmptyLabel,
            Self::CmLeading(_) => ErrorKind::CmLeading,
            Self::CmAfterEmoji(_) => ErrorKind::CmAfterEmoji,
            Self::NsmDuplicate(_) => ErrorKind::NsmDuplicate,
            Self::NsmExcessive { .. } => ErrorKind::NsmExcessive,
            Self::Unknown(_) => ErrorKind::Unknown,
        }
    }

    /// The stable integer code of this error.
    pub const fn code(&self) -> i32 {
        self.kind().code()
    }

    /// Rank of the rule that produced this error within a label; lower ranks win.
    pub(crate) const fn precedence(&self) -> u8 {
        match self {
            Self::EmptyLabel => 1,
            Self::LeadingUnderscore => 2,
            Self::InvalidLabelExtension => 3,
            Self::CmLeading(_) => 4,
            Self::CmAfterEmoji(_) => 5,
            Self::NsmDuplicate(_) | Self::NsmExcessive { .. } => 6,
            Self::FencedLeading(_) | Self::FencedAdjacent(..) | Self::FencedTrailing(_) => 7,
            Self::DisallowedCharacter(_) => 8,
            Self::IllegalMixture { .. } => 9,
            Self::WholeConfusable { .. } => 10,
            Self::OutOfMemory | Self::InvalidUtf8 | Self::Unknown(_) => 0,
        }
    }
}

/// Errors raised while loading spec data.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    #[error("failed to read spec data from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed spec data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("spec data contains invalid codepoint {0:#06x}")]
    InvalidCodepoint(u32),
    #[error("mapped codepoint {0:#06x} has an empty replacement")]
    EmptyMapping(u32),
    #[error("spec data has no script groups")]
    NoGroups,
    #[error(transparent)]
    Config(#[from] Box<figment::Error>),
}

/// Displays a codepoint as `'c' (U+XXXX)`.
struct Cp(char);

impl fmt::Display for Cp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} (U+{:04X})", self.0, self.0 as u32)
    }
}
