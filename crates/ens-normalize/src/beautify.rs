//! Display form of validated labels.

use crate::{spec::SpecData, tokenizer::Token, validator::ValidatedLabel};

const SMALL_XI: char = '\u{3BE}';
const CAPITAL_XI: char = '\u{39E}';

/// Codepoints of the display form of `label`.
///
/// Emoji keep their presentation selectors and, outside of Greek labels, `ξ` is shown as `Ξ`.
/// Normalizing the result gives back the canonical form.
pub fn beautified_chars<'a, 'b>(
    spec: &SpecData,
    label: &'b ValidatedLabel<'a>,
) -> impl Iterator<Item = char> + use<'a, 'b> {
    let greek = label.group().is_some() && label.group() == spec.greek();
    label.tokens().iter().flat_map(move |token| {
        let chars = match token {
            Token::Text(SMALL_XI) if !greek => std::slice::from_ref(&CAPITAL_XI),
            Token::Emoji(emoji) => emoji.qualified(),
            token => token.chars(),
        };
        chars.iter().copied()
    })
}
