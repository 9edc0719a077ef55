//! Integration tests for the name classifier: the documented literal
//! scenarios, the furigana-precedence property and totality over
//! awkward inputs.

use meibo::name_index::{IndexBucket, PersonName, classify};

fn name(
    last: &str,
    first: &str,
    nick: &str,
    last_furi: Option<&str>,
    first_furi: Option<&str>,
) -> PersonName {
    PersonName {
        last_name: last.to_string(),
        first_name: first.to_string(),
        nickname: nick.to_string(),
        last_name_furigana: last_furi.map(str::to_string),
        first_name_furigana: first_furi.map(str::to_string),
    }
}

#[test]
fn test_literal_scenarios() {
    // (last, first, nick, last_furigana, first_furigana) -> bucket label
    let scenarios: Vec<(PersonName, &str)> = vec![
        (name("田中", "", "", Some("たなか"), None), "た"),
        (name("", "太郎", "", None, Some("たろう")), "た"),
        (name("田中", "", "", None, None), "その他"),
        (name("Tanaka", "", "", None, None), "T"),
        (name("", "Taro", "", None, None), "T"),
        (name("", "", "田中太郎", None, None), "その他"),
        (name("", "", "123Taro", None, None), "その他"),
        (name("", "", "!Taro", None, None), "!"),
        (name("", "", "Taro", None, None), "T"),
        (name("", "", "", None, None), "その他"),
    ];

    for (input, expected) in scenarios {
        assert_eq!(
            classify(&input).label(),
            expected,
            "classification mismatch for {input:?}"
        );
    }
}

#[test]
fn test_furigana_always_beats_other_fields() {
    // Furigana content is never re-validated, even when it starts with
    // a digit, symbol or kanji.
    for furigana in ["たなか", "タナカ", "1abc", "+x", "田"] {
        let expected = furigana.chars().next().unwrap();

        let n = name("田中", "太郎", "nick", Some(furigana), None);
        assert_eq!(classify(&n), IndexBucket::Initial(expected));

        let n = name("田中", "太郎", "nick", None, Some(furigana));
        assert_eq!(classify(&n), IndexBucket::Initial(expected));
    }
}

#[test]
fn test_last_name_furigana_beats_first_name_furigana() {
    let n = name("", "", "", Some("たなか"), Some("いちろう"));
    assert_eq!(classify(&n), IndexBucket::Initial('た'));
}

#[test]
fn test_name_fields_beat_nickname() {
    // A classifiable name field wins over any nickname
    let n = name("Suzuki", "", "Taro", None, None);
    assert_eq!(classify(&n), IndexBucket::Initial('S'));

    // An unclassifiable name field still shadows the nickname: a kanji
    // last name sends the contact to Other even with a latin nickname
    let n = name("鈴木", "", "Taro", None, None);
    assert_eq!(classify(&n), IndexBucket::Other);
}

#[test]
fn test_totality_over_awkward_inputs() {
    // classify must return a value for anything a form can produce
    let awkward = [
        " ",
        "\t",
        "\u{200b}",      // zero-width space
        "ー",            // prolonged sound mark
        "々",            // iteration mark (Han script)
        "🎉Taro",        // emoji (Symbol category)
        "ｱｲｳ",           // halfwidth katakana
        "Ａｂｃ",        // fullwidth latin
        "１２３",        // fullwidth digits
        "àéî",
        "한국",
    ];

    for field in awkward {
        // Exercise every slot the classifier reads
        let _ = classify(&name(field, "", "", None, None));
        let _ = classify(&name("", field, "", None, None));
        let _ = classify(&name("", "", field, None, None));
        let _ = classify(&name("", "", "", Some(field), None));
        let _ = classify(&name("", "", "", None, Some(field)));
    }
}

#[test]
fn test_digit_and_symbol_rules_apply_only_to_nicknames() {
    // As a name field, a digit initial is used verbatim
    let n = name("4real", "", "", None, None);
    assert_eq!(classify(&n), IndexBucket::Initial('4'));

    // As a nickname it is shunted to Other
    let n = name("", "", "4real", None, None);
    assert_eq!(classify(&n), IndexBucket::Other);

    // Same for symbols: verbatim as a name field, Other as a nickname
    let n = name("+81", "", "", None, None);
    assert_eq!(classify(&n), IndexBucket::Initial('+'));

    let n = name("", "", "+81", None, None);
    assert_eq!(classify(&n), IndexBucket::Other);
}

#[test]
fn test_emoji_nickname_goes_to_other() {
    // Emoji are Symbol (So) general category
    let n = name("", "", "🎉Taro", None, None);
    assert_eq!(classify(&n), IndexBucket::Other);
}

#[test]
fn test_fullwidth_digit_nickname_goes_to_other() {
    // The digit test is Unicode Decimal_Number, not ASCII-only
    let n = name("", "", "１２３Taro", None, None);
    assert_eq!(classify(&n), IndexBucket::Other);
}

#[test]
fn test_halfwidth_katakana_nickname_keeps_initial() {
    let n = name("", "", "ｱｲｳ", None, None);
    assert_eq!(classify(&n), IndexBucket::Initial('ｱ'));
}
