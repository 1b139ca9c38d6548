use crate::dict::BridgeDictionary;

/// Small corpus whose words all encode, under the Major system, to the
/// digits of their bridge code.
pub(crate) const TEST_CORPUS: &str = r#"{
  "_license": "Test corpus, public domain",
  "t": ["tie", "dew", "toe"],
  "n": ["knee", "new", "no", "wine"],
  "m": ["ma", "me", "home"],
  "r": ["ray", "row"],
  "l": ["law", "eel"],
  "s": ["sea", "zoo", "ice"],
  "j": ["shoe", "jay", "show"],
  "k": ["key", "cow", "go"],
  "f": ["fee", "ivy"],
  "p": ["pie", "bee", "bay"],
  "tn": ["tin", "den", "ton"],
  "nm": ["name", "gnome"],
  "tnm": ["denim"],
  "tk": ["tack", "duck", "dog"],
  "tj": ["dish", "touch"],
  "tr": ["tree", "tour", "door"],
  "rl": ["rail", "roll", "rule"],
  "trl": ["trail", "trial", "drill"],
  "ks": ["case", "kiss", "goose"],
  "kt": ["cat", "coat", "kite"],
  "kts": ["cats", "coats", "kites"]
}"#;

pub(crate) fn test_dict() -> BridgeDictionary {
    BridgeDictionary::from_json(TEST_CORPUS).unwrap()
}
