use std::path::Path;
use std::process;

use mnem_core::input::sanitize_digits;
use mnem_core::peg::{check_peg, Peg, PegStore};
use mnem_core::system::MnemonicSystem;
use tracing::warn;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn default_peg_store_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    format!("{home}/.config/mnem/pegs.json")
}

pub fn peg_add(path: &Path, digits: &str, words: Vec<String>, system: MnemonicSystem) {
    let digits = sanitize_digits(digits);
    if digits.is_empty() || words.is_empty() {
        eprintln!("Error: a peg needs digits and at least one word");
        process::exit(1);
    }
    // Inconsistent pegs are kept as entered.
    if let Some(warning) = check_peg(&Peg::new(digits.clone(), words.clone(), system)) {
        warn!(%warning, "peg does not match its digits");
    }

    let mut store = die!(PegStore::open(path), "Error opening peg store: {}");
    let added = store.add(&digits, words, system).map(|r| r.id);
    match added {
        Some(id) => {
            die!(store.save(path), "Error saving peg store: {}");
            println!("Added #{id}: {digits}");
        }
        None => println!("Already exists: {digits}"),
    }
}

pub fn peg_remove(path: &Path, id: u64) {
    let mut store = die!(PegStore::open(path), "Error opening peg store: {}");
    let removed = die!(store.remove(id), "Error: {}");
    die!(store.save(path), "Error saving peg store: {}");
    println!("Removed #{}: {} → {}", removed.id, removed.digits, removed.words.join(" "));
}

pub fn peg_list(path: &Path) {
    let store = die!(PegStore::open(path), "Error opening peg store: {}");
    if store.is_empty() {
        println!("(empty)");
        return;
    }
    for record in store.records() {
        let flag = if check_peg(&record.peg()).is_some() {
            "\t(mismatch)"
        } else {
            ""
        };
        println!(
            "#{}\t{}\t{}\t{}{flag}",
            record.id,
            record.system,
            record.digits,
            record.words.join(" ")
        );
    }
    println!("---");
    println!("{} pegs", store.len());
}
