use crate::normalizer;
use ens_normalize::{ErrorKind, NormalizeError};
use similar_asserts::assert_eq;

/// `(input, canonical form or failing rule)`
const CASES: &[(&str, Result<&str, ErrorKind>)] = &[
    ("Nick.ETH", Ok("nick.eth")),
    ("VITALIK.eth", Ok("vitalik.eth")),
    ("invalid..name", Err(ErrorKind::EmptyLabel)),
    ("test@example.eth", Err(ErrorKind::DisallowedCharacter)),
    ("caf\u{E9}.eth", Ok("caf\u{E9}.eth")),
    ("cafe\u{301}.eth", Ok("caf\u{E9}.eth")),
    ("\u{39E}.eth", Ok("\u{3BE}.eth")),
    ("\u{3BE}.eth", Ok("\u{3BE}.eth")),
    ("\u{3BE}\u{3AD}\u{3BD}\u{3BF}\u{3C2}.eth", Ok("\u{3BE}\u{3AD}\u{3BD}\u{3BF}\u{3C2}.eth")),
    (
        "\u{1F680}RaFFY\u{1F6B4}\u{200D}\u{2642}\u{FE0F}.eTh",
        Ok("\u{1F680}raffy\u{1F6B4}\u{200D}\u{2642}.eth"),
    ),
    (
        "\u{1F680}raffy\u{1F6B4}\u{200D}\u{2642}.eth",
        Ok("\u{1F680}raffy\u{1F6B4}\u{200D}\u{2642}.eth"),
    ),
    ("\u{1F3F4}\u{200D}\u{2620}\u{FE0F}nick.eth", Ok("\u{1F3F4}\u{200D}\u{2620}nick.eth")),
    ("\u{430}pple.eth", Err(ErrorKind::IllegalMixture)),
    ("\u{441}\u{43E}\u{441}\u{43E}.eth", Err(ErrorKind::WholeConfusable)),
    ("\u{441}\u{43E}\u{436}.eth", Ok("\u{441}\u{43E}\u{436}.eth")),
    ("\u{3BF}\u{3C1}.eth", Err(ErrorKind::WholeConfusable)),
    ("\u{301}abc.eth", Err(ErrorKind::CmLeading)),
    ("\u{1F44D}\u{301}.eth", Err(ErrorKind::CmAfterEmoji)),
    ("_abc.eth", Ok("_abc.eth")),
    ("__abc.eth", Ok("__abc.eth")),
    ("a_bc.eth", Err(ErrorKind::LeadingUnderscore)),
    ("ab--cd.eth", Err(ErrorKind::InvalidLabelExtension)),
    ("xn--ls8h.eth", Err(ErrorKind::InvalidLabelExtension)),
    ("a-b-c.eth", Ok("a-b-c.eth")),
    ("a\u{AD}b.eth", Ok("ab.eth")),
    ("abc\u{200D}.eth", Err(ErrorKind::DisallowedCharacter)),
    ("it's.eth", Ok("it\u{2019}s.eth")),
    ("'abc.eth", Err(ErrorKind::FencedLeading)),
    ("abc'.eth", Err(ErrorKind::FencedTrailing)),
    ("a''b.eth", Err(ErrorKind::FencedAdjacent)),
    ("a'.b.eth", Err(ErrorKind::FencedTrailing)),
    ("e\u{301}\u{301}.eth", Err(ErrorKind::NsmDuplicate)),
    ("a\u{300}\u{301}\u{302}\u{303}\u{304}.eth", Err(ErrorKind::NsmExcessive)),
    ("a\u{300}\u{301}\u{302}\u{303}.eth", Err(ErrorKind::IllegalMixture)),
    ("\u{5D0}\u{5B0}\u{5B1}\u{5B2}\u{5B3}.eth", Ok("\u{5D0}\u{5B0}\u{5B1}\u{5B2}\u{5B3}.eth")),
    ("", Err(ErrorKind::EmptyLabel)),
    (".", Err(ErrorKind::EmptyLabel)),
    ("eth.", Err(ErrorKind::EmptyLabel)),
    ("1\u{FE0F}\u{20E3}2\u{FE0F}\u{20E3}.eth", Ok("1\u{20E3}2\u{20E3}.eth")),
    ("1\u{20E3}.eth", Ok("1\u{20E3}.eth")),
    ("\u{1F1FA}\u{1F1F8}.eth", Ok("\u{1F1FA}\u{1F1F8}.eth")),
    ("\u{1F44D}\u{1F3FB}.eth", Ok("\u{1F44D}\u{1F3FB}.eth")),
    ("\u{FF21}\u{FF42}\u{FF43}.eth", Ok("abc.eth")),
    ("\u{130}stanbul.eth", Err(ErrorKind::IllegalMixture)),
    ("stra\u{DF}e.eth", Ok("stra\u{DF}e.eth")),
    ("STRASSE.eth", Ok("strasse.eth")),
    ("\u{1C5}.eth", Ok("d\u{17E}.eth")),
    ("\u{65E5}\u{672C}.eth", Ok("\u{65E5}\u{672C}.eth")),
    ("\u{3072}\u{3089}\u{304C}\u{306A}.eth", Ok("\u{3072}\u{3089}\u{304C}\u{306A}.eth")),
    ("\u{D55C}\u{AD6D}.eth", Ok("\u{D55C}\u{AD6D}.eth")),
    ("\u{D55C}\u{AD6D}\u{65E5}\u{672C}.eth", Ok("\u{D55C}\u{AD6D}\u{65E5}\u{672C}.eth")),
    ("\u{3072}\u{3089}\u{304C}\u{306A}\u{D55C}\u{AD6D}.eth", Err(ErrorKind::IllegalMixture)),
    ("\u{5DE}\u{5D6}\u{5DC}.eth", Ok("\u{5DE}\u{5D6}\u{5DC}.eth")),
    ("\u{645}\u{631}\u{62D}\u{628}\u{627}.eth", Ok("\u{645}\u{631}\u{62D}\u{628}\u{627}.eth")),
    (
        "\u{928}\u{92E}\u{938}\u{94D}\u{924}\u{947}.eth",
        Ok("\u{928}\u{92E}\u{938}\u{94D}\u{924}\u{947}.eth"),
    ),
    (
        "\u{E2A}\u{E27}\u{E31}\u{E2A}\u{E14}\u{E35}.eth",
        Ok("\u{E2A}\u{E27}\u{E31}\u{E2A}\u{E14}\u{E35}.eth"),
    ),
    ("\u{2764}.eth", Ok("\u{2764}.eth")),
    ("\u{2764}\u{FE0F}.eth", Ok("\u{2764}.eth")),
    ("a:b.eth", Err(ErrorKind::DisallowedCharacter)),
    ("a\u{2044}b.eth", Ok("a\u{2044}b.eth")),
    ("a\u{2044}\u{2044}b.eth", Err(ErrorKind::FencedAdjacent)),
    ("\u{30A2}\u{30FB}\u{30A4}.eth", Ok("\u{30A2}\u{30FB}\u{30A4}.eth")),
    ("\u{30FB}a.eth", Err(ErrorKind::FencedLeading)),
    ("$100.eth", Ok("$100.eth")),
    ("123.eth", Ok("123.eth")),
    ("-.eth", Ok("-.eth")),
    ("a\u{483}.eth", Err(ErrorKind::DisallowedCharacter)),
    ("x\u{200C}y.eth", Err(ErrorKind::DisallowedCharacter)),
    ("\u{FE0F}abc.eth", Ok("abc.eth")),
    ("ab\u{301}--c.eth", Err(ErrorKind::IllegalMixture)),
    ("l\u{B7}l.eth", Err(ErrorKind::DisallowedCharacter)),
    ("\u{1F4A9}.eth", Ok("\u{1F4A9}.eth")),
    ("_.eth", Ok("_.eth")),
    ("_a_.eth", Err(ErrorKind::LeadingUnderscore)),
    ("Ab\u{2010}c.eth", Ok("ab-c.eth")),
    ("\u{DF}.eth", Ok("\u{DF}.eth")),
    ("\u{1E9E}.eth", Ok("\u{DF}.eth")),
    ("\u{3C2}.eth", Ok("\u{3C2}.eth")),
    ("\u{3A3}.eth", Err(ErrorKind::WholeConfusable)),
    ("\u{430}\u{440}\u{440}\u{4CF}\u{435}.eth", Err(ErrorKind::WholeConfusable)),
    ("\u{430}\u{431}\u{432}.eth", Ok("\u{430}\u{431}\u{432}.eth")),
    ("abc.\u{415}\u{422}\u{41D}", Ok("abc.\u{435}\u{442}\u{43D}")),
    (
        "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}.eth",
        Ok("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}.eth"),
    ),
    ("\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}.eth", Ok("\u{1F3F3}\u{200D}\u{1F308}.eth")),
    ("\u{1F3F3}\u{200D}\u{1F308}.eth", Ok("\u{1F3F3}\u{200D}\u{1F308}.eth")),
    ("\u{300}.eth", Err(ErrorKind::CmLeading)),
    ("\u{E9}.eth", Ok("\u{E9}.eth")),
    ("\u{439}.eth", Ok("\u{439}.eth")),
    ("\u{3131}.eth", Ok("\u{1100}.eth")),
    ("\u{FF76}\u{FF9E}.eth", Ok("\u{30AC}.eth")),
    ("\u{FF9E}.eth", Err(ErrorKind::CmLeading)),
    ("a\u{5B0}.eth", Err(ErrorKind::IllegalMixture)),
    ("\u{5D0}\u{5B0}\u{5B0}.eth", Err(ErrorKind::NsmDuplicate)),
    ("\u{5D0}\u{5B0}\u{5B1}\u{5B2}\u{5B3}\u{5B4}.eth", Err(ErrorKind::NsmExcessive)),
    ("\u{5D0}\u{5B0}\u{5B1}\u{5B2}\u{5B3}\u{5B4}\u{5B0}.eth", Err(ErrorKind::NsmDuplicate)),
    ("ab\u{5B0}.eth", Err(ErrorKind::IllegalMixture)),
    ("a--b.eth", Ok("a--b.eth")),
    ("ab--.eth", Err(ErrorKind::InvalidLabelExtension)),
    ("ab-.eth", Ok("ab-.eth")),
    ("\u{E9}--a.eth", Ok("\u{E9}--a.eth")),
    ("a\u{1F680}_.eth", Err(ErrorKind::LeadingUnderscore)),
    ("\u{2177}.eth", Ok("viii.eth")),
    ("\u{24D0}\u{24D1}\u{24D2}.eth", Ok("abc.eth")),
    ("\u{6F0}\u{6F1}\u{6F2}.eth", Ok("\u{660}\u{661}\u{662}.eth")),
    ("\u{23E9}.eth", Ok("\u{23E9}.eth")),
    ("\u{2103}.eth", Ok("\u{B0}c.eth")),
    ("\u{3A9}.eth", Ok("\u{3C9}.eth")),
];

#[test]
fn normalize_cases() {
    let n = normalizer();
    for &(input, expected) in CASES {
        let actual = n.normalize(input);
        assert_eq!(actual.as_deref().map_err(NormalizeError::kind), expected, "input: {input:?}");
    }
}

#[test]
fn canonical_output_is_stable() {
    let n = normalizer();
    for &(input, expected) in CASES {
        let Ok(expected) = expected else { continue };
        assert_eq!(n.normalize(expected).as_deref(), Ok(expected), "input: {input:?}");
    }
}

#[test]
fn error_details() {
    let n = normalizer();
    assert_eq!(n.normalize("test@example.eth"), Err(NormalizeError::DisallowedCharacter('@')));
    assert_eq!(
        n.normalize("\u{430}pple.eth"),
        Err(NormalizeError::IllegalMixture { group: "Cyrillic".to_string(), cp: 'p' })
    );
    assert_eq!(
        n.normalize("\u{441}\u{43E}\u{441}\u{43E}.eth"),
        Err(NormalizeError::WholeConfusable {
            group: "Cyrillic".to_string(),
            other: "Latin".to_string()
        })
    );
    assert_eq!(
        n.normalize("a''b.eth"),
        Err(NormalizeError::FencedAdjacent('\u{2019}', '\u{2019}'))
    );
    assert_eq!(
        n.normalize("a\u{300}\u{301}\u{302}\u{303}\u{304}"),
        Err(NormalizeError::NsmExcessive { limit: 4 })
    );
    assert_eq!(n.normalize("\u{1F44D}\u{301}").unwrap_err().code(), -13);
}

#[test]
fn crate_level_helpers() {
    assert_eq!(ens_normalize::normalize("Nick.ETH").unwrap(), "nick.eth");
    assert_eq!(ens_normalize::beautify("\u{3BE}.eth").unwrap(), "\u{39E}.eth");
    assert_eq!(ens_normalize::normalize("a..b"), Err(NormalizeError::EmptyLabel));
}

#[test]
fn invalid_utf8() {
    let n = normalizer();
    assert_eq!(n.normalize_bytes(b"\xF0\x9F\x9A.eth"), Err(NormalizeError::InvalidUtf8));
    assert_eq!(n.normalize_bytes("Nick.ETH".as_bytes()).unwrap(), "nick.eth");
}
