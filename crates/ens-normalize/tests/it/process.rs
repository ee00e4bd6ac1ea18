use crate::normalizer;
use ens_normalize::{ErrorKind, TokenInfo};

#[test]
fn inspect_name() {
    let n = normalizer();
    let processed = n.process("\u{1F680}RaFFY.a\u{430}.eth");
    assert_eq!(processed.labels.len(), 3);

    let first = &processed.labels[0];
    assert_eq!(
        first.tokens,
        [TokenInfo::Emoji("\u{1F680}".into()), TokenInfo::Text("raffy".into())]
    );
    assert_eq!(first.output.as_deref(), Some("\u{1F680}raffy"));
    assert_eq!(first.label_type.as_deref(), Some("Latin"));

    let second = &processed.labels[1];
    assert_eq!(second.offset, "\u{1F680}RaFFY.".len());
    let error = second.error.as_ref().unwrap();
    assert_eq!(error.kind, ErrorKind::IllegalMixture);
    assert_eq!(error.code, -4);
    assert_eq!(error.message, "illegal mixture: Latin + '\u{430}' (U+0430)");

    assert_eq!(processed.labels[2].label_type.as_deref(), Some("ASCII"));
    assert_eq!(processed.first_error(), Some(second));
    assert_eq!(processed.normalized(), None);
}

#[test]
fn inspect_json() {
    let n = normalizer();
    let json = serde_json::to_value(n.process("1\u{20E3}")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "input": "1\u{20E3}",
            "labels": [{
                "offset": 0,
                "input": "1\u{20E3}",
                "tokens": [{ "type": "emoji", "value": "1\u{20E3}" }],
                "output": "1\u{20E3}",
                "beautified": "1\u{FE0F}\u{20E3}",
                "type": "Emoji"
            }]
        })
    );
}
