use super::*;

const MAJOR: MnemonicSystem = MnemonicSystem::Major;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

#[test]
fn consistent_peg_has_no_warning() {
    let peg = Peg::new("17", words(&["tuck"]), MAJOR);
    assert!(check_peg(&peg).is_none());
    let multi = Peg::new("123", words(&["tie", "knee", "ma"]), MAJOR);
    assert!(check_peg(&multi).is_none());
}

#[test]
fn inconsistent_peg_is_flagged() {
    let peg = Peg::new("17", words(&["tin"]), MAJOR);
    let warning = check_peg(&peg).unwrap();
    assert_eq!(warning.encoded, "12");
    assert!(warning.to_string().contains("encodes to \"12\""));
}

#[test]
fn peg_filters_respect_system_and_span() {
    let pegs = vec![
        Peg::new("17", words(&["tuck"]), MAJOR),
        Peg::new("17", words(&["dog"]), MnemonicSystem::German),
        Peg::new("1", words(&["tea"]), MAJOR),
        Peg::new("", words(&["nothing"]), MAJOR),
        Peg::new("1", vec![], MAJOR),
    ];
    let exact: Vec<&Peg> = exact_pegs(&pegs, MAJOR, "17").collect();
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].words, vec!["tuck"]);

    let prefix: Vec<&Peg> = prefix_pegs(&pegs, MAJOR, "170").collect();
    let spans: Vec<&str> = prefix.iter().map(|p| p.digits.as_str()).collect();
    assert_eq!(spans, vec!["17", "1"]);
}

#[test]
fn store_add_and_remove() {
    let mut store = PegStore::new();
    let id = store.add("17", words(&["tuck"]), MAJOR).unwrap().id;
    assert_eq!(id, 1);
    assert!(store.add("17", words(&["tuck"]), MAJOR).is_none());
    let second = store.add("12", words(&[" tin ", ""]), MAJOR).unwrap();
    assert_eq!(second.id, 2);
    assert_eq!(second.words, vec!["tin"]);

    let removed = store.remove(1).unwrap();
    assert_eq!(removed.digits, "17");
    assert!(matches!(store.remove(1), Err(PegStoreError::NotFound(1))));
    assert_eq!(store.len(), 1);
    // Ids are not reused while higher ids exist.
    assert_eq!(store.add("3", words(&["ma"]), MAJOR).unwrap().id, 3);
}

#[test]
fn store_json_uses_camel_case() {
    let mut store = PegStore::new();
    store.add("17", words(&["tuck"]), MAJOR);
    let json = store.to_json().unwrap();
    assert!(json.contains("\"createdAt\""));
    assert!(json.contains("\"system\": \"major\""));
    let back = PegStore::from_json(&json).unwrap();
    assert_eq!(back.records(), store.records());
}

#[test]
fn store_save_and_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("pegs.json");

    let empty = PegStore::open(&path).unwrap();
    assert!(empty.is_empty());

    let mut store = PegStore::new();
    store.add("17", words(&["tuck"]), MAJOR);
    store.add("82", words(&["wine"]), MnemonicSystem::German);
    store.save(&path).unwrap();
    assert!(!path.with_extension("tmp").exists());

    let loaded = PegStore::open(&path).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.pegs()[1].system, MnemonicSystem::German);
}

#[test]
fn store_rejects_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pegs.json");
    std::fs::write(&path, "{not json").unwrap();
    assert!(matches!(PegStore::open(&path), Err(PegStoreError::Json(_))));
}
