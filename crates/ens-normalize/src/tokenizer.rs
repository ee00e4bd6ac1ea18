//! Splits a label into text, emoji and disallowed tokens.

use crate::{
    mapper::Disposition,
    spec::{EmojiSequence, SpecData},
};
use std::collections::VecDeque;
use unicode_normalization::UnicodeNormalization;

/// A unit of a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// A valid codepoint of an NFC text run.
    Text(char),
    /// A registered emoji sequence.
    Emoji(&'a EmojiSequence),
    /// A codepoint that is neither valid, mapped nor ignored.
    Disallowed(char),
}

impl Token<'_> {
    pub fn is_emoji(&self) -> bool {
        matches!(self, Self::Emoji(_))
    }

    /// The canonical codepoints of this token.
    pub fn chars(&self) -> &[char] {
        match self {
            Self::Text(c) | Self::Disallowed(c) => std::slice::from_ref(c),
            Self::Emoji(emoji) => emoji.normalized(),
        }
    }
}

/// Lazy iterator over the [`Token`]s of one label.
///
/// Emoji are matched on the raw input so that ZWJ and FE0F are visible to the trie. Everything
/// else goes through the mapper; valid and mapped output accumulates into a text run that is
/// NFC-normalized as a whole. Ignored codepoints are dropped without ending the run and a
/// disallowed codepoint ends it.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    spec: &'a SpecData,
    chars: Vec<char>,
    pos: usize,
    /// Normalized text of the current run not yet yielded.
    pending: VecDeque<char>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(spec: &'a SpecData, label: &str) -> Self {
        Self { spec, chars: label.chars().collect(), pos: 0, pending: VecDeque::new() }
    }

    fn emoji_at(&self, pos: usize) -> Option<(usize, &'a EmojiSequence)> {
        self.spec.emoji().longest_match(&self.chars[pos..])
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(c) = self.pending.pop_front() {
            return Some(Token::Text(c));
        }

        let mut run = Vec::new();
        while self.pos < self.chars.len() {
            if let Some((len, emoji)) = self.emoji_at(self.pos) {
                if run.is_empty() {
                    self.pos += len;
                    trace!(emoji = ?emoji.normalized(), "matched emoji");
                    return Some(Token::Emoji(emoji));
                }
                break;
            }

            let c = self.chars[self.pos];
            match self.spec.disposition(c) {
                Disposition::Valid => run.push(c),
                Disposition::Mapped(to) => run.extend_from_slice(to),
                Disposition::Ignored => {}
                Disposition::Disallowed => {
                    if run.is_empty() {
                        self.pos += 1;
                        trace!(?c, "disallowed codepoint");
                        return Some(Token::Disallowed(c));
                    }
                    break;
                }
            }
            self.pos += 1;
        }

        self.pending.extend(run.into_iter().nfc());
        self.pending.pop_front().map(Token::Text)
    }
}
