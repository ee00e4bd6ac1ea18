use ens_normalize::Normalizer;
use proptest::prelude::*;
use std::sync::LazyLock;

static NORMALIZER: LazyLock<Normalizer> = LazyLock::new(crate::normalizer);

/// Characters that exercise every rule: case mapping, marks, fenced, scripts, emoji parts.
const POOL: &[char] = &[
    'a', 'b', 'c', 'x', 'y', 'z', 'A', 'B', 'C', 'Z', '0', '1', '9', '-', '_', '\'', '.', ':',
    '$', '@', '\u{E9}', '\u{301}', '\u{300}', '\u{302}', '\u{303}', '\u{304}', '\u{3BE}',
    '\u{39E}', '\u{3BF}', '\u{3C1}', '\u{430}', '\u{441}', '\u{43E}', '\u{436}', '\u{AD}',
    '\u{200D}', '\u{200C}', '\u{FE0F}', '\u{20E3}', '\u{1F680}', '\u{1F44D}', '\u{1F3FB}',
    '\u{1F3F3}', '\u{1F308}', '\u{2764}', '\u{1F1FA}', '\u{1F1F8}', '\u{65E5}', '\u{3072}',
    '\u{D55C}', '\u{5D0}', '\u{5B0}', '\u{5B1}', '\u{2019}', '\u{B7}', '\u{FF21}', '\u{1E9E}',
    '\u{DF}', '\u{130}', '\u{1F468}', '\u{1F469}', '\u{2642}', '\u{1F6B4}', '\u{2044}',
    '\u{30FB}', '\u{30A2}',
];

fn name() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(POOL), 0..10)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn normalize_is_idempotent(name in name()) {
        if let Ok(normalized) = NORMALIZER.normalize(&name) {
            prop_assert_eq!(NORMALIZER.normalize(&normalized), Ok(normalized.clone()));
        }
    }

    #[test]
    fn normalize_is_deterministic(name in name()) {
        let other = NORMALIZER.clone();
        prop_assert_eq!(NORMALIZER.normalize(&name), other.normalize(&name));
        prop_assert_eq!(NORMALIZER.normalize(&name), NORMALIZER.normalize(&name));
    }

    #[test]
    fn beautify_round_trips(name in name()) {
        match NORMALIZER.normalize(&name) {
            Ok(normalized) => {
                let beautified = NORMALIZER.beautify(&normalized).unwrap();
                prop_assert_eq!(NORMALIZER.normalize(&beautified), Ok(normalized));
            }
            Err(err) => prop_assert_eq!(NORMALIZER.beautify(&name), Err(err)),
        }
    }

    #[test]
    fn process_agrees_with_normalize(name in name()) {
        let processed = NORMALIZER.process(&name);
        prop_assert_eq!(processed.normalized(), NORMALIZER.normalize(&name).ok());
        prop_assert_eq!(processed.is_valid(), NORMALIZER.normalize(&name).is_ok());
    }
}
