//! Structural label rules.
//!
//! A label is scanned once, left to right. Every rule that fires is recorded and the one with the
//! lowest precedence rank wins, the earliest position breaking ties within a rank:
//!
//! | rank | rule                                          |
//! |------|-----------------------------------------------|
//! | 1    | empty label                                   |
//! | 2    | underscore after the leading underscore run   |
//! | 3    | ASCII label extension (`ab--`)                |
//! | 4    | leading combining mark                        |
//! | 5    | combining mark after emoji                    |
//! | 6    | duplicate or excessive non-spacing marks      |
//! | 7    | misplaced fenced character                    |
//! | 8    | disallowed character                          |
//! | 9    | illegal script mixture                        |
//! | 10   | whole-script confusable                       |

use crate::{
    error::NormalizeError,
    resolver::GroupResolver,
    spec::{GroupId, ScriptGroup, SpecData},
    tokenizer::Token,
};
use unicode_normalization::char::decompose_canonical;

/// Classification of a validated label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelType<'a> {
    /// Text only, every codepoint below 0x80.
    Ascii,
    /// Emoji only.
    Emoji,
    /// Resolved to a script group of the tables the label was validated against.
    Script(&'a ScriptGroup),
}

impl<'a> LabelType<'a> {
    /// Display name, the group name for [`LabelType::Script`].
    pub fn name(&self) -> &'a str {
        match *self {
            Self::Ascii => "ASCII",
            Self::Emoji => "Emoji",
            Self::Script(group) => group.name(),
        }
    }
}

/// A label that passed every rule.
#[derive(Clone, Debug)]
pub struct ValidatedLabel<'a> {
    tokens: Vec<Token<'a>>,
    group: Option<GroupId>,
    label_type: LabelType<'a>,
}

impl<'a> ValidatedLabel<'a> {
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// The resolved script group, `None` for emoji-only labels.
    pub fn group(&self) -> Option<GroupId> {
        self.group
    }

    pub fn label_type(&self) -> LabelType<'a> {
        self.label_type
    }

    /// Codepoints of the canonical form.
    pub fn normalized_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.tokens.iter().flat_map(|token| token.chars().iter().copied())
    }
}

/// Validates the tokens of one label.
pub fn validate_label<'a>(
    spec: &'a SpecData,
    tokens: impl IntoIterator<Item = Token<'a>>,
) -> Result<ValidatedLabel<'a>, NormalizeError> {
    let mut ctx = ValidationContext::new(spec);
    for token in tokens {
        ctx.scan(token);
    }
    ctx.finish()
}

/// Per-label scan state.
struct ValidationContext<'a> {
    spec: &'a SpecData,
    tokens: Vec<Token<'a>>,
    resolver: GroupResolver<'a>,
    violation: Option<NormalizeError>,
    /// Still inside the leading run of underscores.
    underscore_prefix: bool,
    last_emoji: bool,
    last_fenced: Option<char>,
    all_ascii: bool,
    /// Decomposed non-spacing marks of the current run.
    nsm_run: Vec<char>,
    nsm_duplicate: bool,
}

impl<'a> ValidationContext<'a> {
    fn new(spec: &'a SpecData) -> Self {
        Self {
            spec,
            tokens: Vec::new(),
            resolver: GroupResolver::new(spec),
            violation: None,
            underscore_prefix: true,
            last_emoji: false,
            last_fenced: None,
            all_ascii: true,
            nsm_run: Vec::new(),
            nsm_duplicate: false,
        }
    }

    fn record(&mut self, err: NormalizeError) {
        if self.violation.as_ref().is_none_or(|v| err.precedence() < v.precedence()) {
            trace!(%err, position = self.tokens.len(), "rule violation");
            self.violation = Some(err);
        }
    }

    fn scan(&mut self, token: Token<'a>) {
        let position = self.tokens.len();
        match token {
            Token::Emoji(_) => {
                self.all_ascii = false;
                self.underscore_prefix = false;
                self.last_fenced = None;
                self.end_nsm_run();
            }
            Token::Text(c) | Token::Disallowed(c) => {
                let text = matches!(token, Token::Text(_));
                if !c.is_ascii() {
                    self.all_ascii = false;
                }

                if c == '_' {
                    if !self.underscore_prefix {
                        self.record(NormalizeError::LeadingUnderscore);
                    }
                } else {
                    self.underscore_prefix = false;
                }

                if text && self.spec.is_cm(c) {
                    if position == 0 {
                        self.record(NormalizeError::CmLeading(c));
                    } else if self.last_emoji {
                        self.record(NormalizeError::CmAfterEmoji(c));
                    }
                }

                if text {
                    self.scan_nsm(c);
                } else {
                    self.end_nsm_run();
                }

                let fenced = text && self.spec.fenced(c).is_some();
                if fenced {
                    if position == 0 {
                        self.record(NormalizeError::FencedLeading(c));
                    } else if let Some(prev) = self.last_fenced {
                        self.record(NormalizeError::FencedAdjacent(prev, c));
                    }
                }
                self.last_fenced = fenced.then_some(c);

                if text {
                    if let Err(err) = self.resolver.push(c) {
                        self.record(err);
                    }
                } else {
                    self.record(NormalizeError::DisallowedCharacter(c));
                }
            }
        }
        self.last_emoji = token.is_emoji();
        self.tokens.push(token);
    }

    /// Tracks non-spacing marks on the canonical decomposition of `c`.
    fn scan_nsm(&mut self, c: char) {
        let mut decomposed = Vec::with_capacity(4);
        decompose_canonical(c, |d| decomposed.push(d));
        for d in decomposed {
            if !self.spec.is_nsm(d) {
                self.end_nsm_run();
                continue;
            }
            if self.nsm_run.contains(&d) && !self.nsm_duplicate {
                self.nsm_duplicate = true;
                self.record(NormalizeError::NsmDuplicate(d));
            }
            self.nsm_run.push(d);
        }
    }

    fn end_nsm_run(&mut self) {
        let limit = self.spec.nsm_max();
        if !self.nsm_duplicate && self.nsm_run.len() > limit {
            self.record(NormalizeError::NsmExcessive { limit });
        }
        self.nsm_run.clear();
        self.nsm_duplicate = false;
    }

    fn finish(mut self) -> Result<ValidatedLabel<'a>, NormalizeError> {
        if self.tokens.is_empty() {
            return Err(NormalizeError::EmptyLabel);
        }

        self.end_nsm_run();
        if let Some(c) = self.last_fenced {
            self.record(NormalizeError::FencedTrailing(c));
        }

        let hyphen = Token::Text('-');
        if self.all_ascii && self.tokens.get(2..4) == Some(&[hyphen, hyphen][..]) {
            self.record(NormalizeError::InvalidLabelExtension);
        }

        if let Some(err) = self.violation {
            return Err(err);
        }
        self.resolver.check_whole()?;

        let group = self.resolver.resolved();
        let label_type = match group.and_then(|id| self.spec.group(id)) {
            _ if self.all_ascii => LabelType::Ascii,
            Some(group) => LabelType::Script(group),
            None => LabelType::Emoji,
        };
        Ok(ValidatedLabel { tokens: self.tokens, group, label_type })
    }
}
