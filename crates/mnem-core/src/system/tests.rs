use proptest::prelude::*;

use super::*;

fn major(word: &str) -> String {
    encode(word, MnemonicSystem::Major)
}

fn german(word: &str) -> String {
    encode(word, MnemonicSystem::German)
}

#[test]
fn builtin_tables_are_valid() {
    for system in MnemonicSystem::ALL {
        let table = system.table();
        for d in 0..10 {
            assert!(!table.classes_for(d).is_empty(), "{system}: digit {d} unreachable");
        }
        assert_eq!(table.digit_for("t"), Some(1));
        assert_eq!(table.digit_for("x"), None);
    }
}

#[test]
fn single_consonants() {
    assert_eq!(major("time"), "13");
    assert_eq!(major("denim"), "123");
    assert_eq!(major("lamp"), "539");
    assert_eq!(major("rose"), "40");
}

#[test]
fn vowels_and_glides_emit_nothing() {
    assert_eq!(major("aeiou"), "");
    assert_eq!(major("why"), "");
    assert_eq!(major(""), "");
    assert_eq!(major("a-b c"), "97");
}

#[test]
fn geminates_collapse() {
    assert_eq!(major("butter"), "914");
    assert_eq!(major("comma"), "73");
    assert_eq!(major("ball"), "95");
}

#[test]
fn digraphs_take_precedence() {
    assert_eq!(major("shoe"), "6");
    assert_eq!(major("chair"), "64");
    assert_eq!(major("watch"), "6");
    assert_eq!(major("tuck"), "17");
    assert_eq!(major("phone"), "82");
    assert_eq!(major("thumb"), "139");
    assert_eq!(major("edge"), "6");
}

#[test]
fn soft_c_and_silent_letters() {
    assert_eq!(major("city"), "01");
    assert_eq!(major("cat"), "71");
    assert_eq!(major("knee"), "2");
    assert_eq!(major("sign"), "02");
    assert_eq!(major("write"), "41");
}

#[test]
fn uppercase_is_folded() {
    assert_eq!(major("DeNiM"), major("denim"));
}

#[test]
fn german_variant_differences() {
    assert_eq!(german("wine"), "82");
    assert_eq!(major("wine"), "2");
    assert_eq!(german("schule"), "65");
    assert_eq!(german("deutsch"), "16");
    assert_eq!(german("knie"), "72");
}

#[test]
fn encode_is_deterministic() {
    for word in ["mnemonic", "geography", "thistle", "quick"] {
        for system in MnemonicSystem::ALL {
            assert_eq!(encode(word, system), encode(word, system));
        }
    }
}

#[test]
fn encode_words_concatenates() {
    assert_eq!(encode_words(&["tie", "knee", "ma"], MnemonicSystem::Major), "123");
    let empty: [&str; 0] = [];
    assert_eq!(encode_words(&empty, MnemonicSystem::Major), "");
}

#[test]
fn system_ids_round_trip() {
    for system in MnemonicSystem::ALL {
        assert_eq!(system.id().parse::<MnemonicSystem>().unwrap(), system);
    }
    assert_eq!("MAJOR".parse::<MnemonicSystem>().unwrap(), MnemonicSystem::Major);
    assert!(matches!(
        "dominic".parse::<MnemonicSystem>(),
        Err(SystemError::UnknownSystem(_))
    ));
}

#[test]
fn system_serializes_as_id() {
    let json = serde_json::to_string(&MnemonicSystem::German).unwrap();
    assert_eq!(json, "\"german\"");
}

#[test]
fn bridge_translation() {
    let table = MnemonicSystem::Major.table();
    assert_eq!(table.code_to_digits("tnm").as_deref(), Some("123"));
    assert_eq!(table.code_to_digits("tx"), None);
    assert_eq!(table.digits_to_codes("123"), vec!["tnm".to_string()]);
    assert!(table.digits_to_codes("1a").is_empty());
    assert_eq!(table.digits_to_codes(""), vec![String::new()]);
}

#[test]
fn bridge_code_alphabet() {
    assert!(is_bridge_code("sjkfp"));
    assert!(!is_bridge_code(""));
    assert!(!is_bridge_code("_license"));
    assert_eq!(BridgeClass::from_symbol('k'), Some(BridgeClass::Velar));
}

#[test]
fn error_missing_digit() {
    let mut patterns = MAJOR_PATTERNS;
    patterns[4] = &[];
    let err = SystemTable::new(patterns, STANDARD_BRIDGE_DIGITS).unwrap_err();
    assert_eq!(err, SystemError::MissingDigit(4));
}

#[test]
fn error_duplicate_pattern() {
    let mut patterns = MAJOR_PATTERNS;
    patterns[9] = &["p", "b", "f"];
    let err = SystemTable::new(patterns, STANDARD_BRIDGE_DIGITS).unwrap_err();
    assert_eq!(
        err,
        SystemError::DuplicatePattern {
            pattern: "f".to_string(),
            first: 8,
            second: 9,
        }
    );
}

#[test]
fn error_invalid_pattern() {
    let mut patterns = MAJOR_PATTERNS;
    patterns[3] = &["m", "mmmmm"];
    assert!(matches!(
        SystemTable::new(patterns, STANDARD_BRIDGE_DIGITS),
        Err(SystemError::InvalidPattern(_))
    ));
    patterns[3] = &["M"];
    assert!(matches!(
        SystemTable::new(patterns, STANDARD_BRIDGE_DIGITS),
        Err(SystemError::InvalidPattern(_))
    ));
}

#[test]
fn many_to_one_bridge_yields_several_codes() {
    let mut bridge = STANDARD_BRIDGE_DIGITS;
    // Write velars and palatals both as 7.
    bridge[BridgeClass::Palatal.index()] = 7;
    let table = SystemTable::new(MAJOR_PATTERNS, bridge).unwrap();
    let mut codes = table.digits_to_codes("17");
    codes.sort();
    assert_eq!(codes, vec!["tj".to_string(), "tk".to_string()]);
    assert!(table.classes_for(6).is_empty());
}

proptest! {
    #[test]
    fn encode_is_deterministic_for_any_word(word in "[a-zA-Z' -]{0,16}") {
        for system in MnemonicSystem::ALL {
            let first = encode(&word, system);
            prop_assert_eq!(encode(&word, system), first.clone());
            prop_assert!(first.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn encode_words_concatenates_for_any_list(words in prop::collection::vec("[a-z]{1,8}", 0..4)) {
        let joined: String = words.iter().map(|w| encode(w, MnemonicSystem::Major)).collect();
        prop_assert_eq!(encode_words(&words, MnemonicSystem::Major), joined);
    }
}
