use std::fs;
use std::path::Path;
use std::process;

use mnem_core::dict::{BridgeDictionary, Dictionary};
use mnem_core::input::sanitize_digits;
use mnem_core::system::MnemonicSystem;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn open_dict(dict_file: &str) -> BridgeDictionary {
    die!(
        BridgeDictionary::open(Path::new(dict_file)),
        "Error opening dictionary: {}"
    )
}

/// Compile a JSON artifact into the binary format.
pub fn compile(input_json: &str, output_file: &str) {
    let text = die!(
        fs::read_to_string(input_json),
        "Error reading {input_json}: {}"
    );
    let dict = die!(
        BridgeDictionary::from_json(&text),
        "Error parsing dictionary: {}"
    );
    let (code_count, word_count) = dict.stats();
    eprintln!("Parsed {code_count} codes ({word_count} words)");

    die!(
        dict.save(Path::new(output_file)),
        "Error writing dictionary: {}"
    );
    let file_size = fs::metadata(output_file).map(|m| m.len()).unwrap_or(0);
    eprintln!(
        "Wrote {output_file} ({:.1} KB)",
        file_size as f64 / 1024.0
    );
}

pub fn info(dict_file: &str) {
    let dict = open_dict(dict_file);
    let file_size = fs::metadata(dict_file).map(|m| m.len()).unwrap_or(0);
    let (code_count, word_count) = dict.stats();

    println!("Dictionary: {dict_file}");
    println!("File size:  {:.1} KB", file_size as f64 / 1024.0);
    println!("Codes:      {code_count}");
    println!("Words:      {word_count}");
    if let Some(license) = dict.license() {
        println!("License:    {license}");
    }

    let sample_digits = ["1", "12", "123", "314"];
    for system in MnemonicSystem::ALL {
        println!();
        println!("Sample lookups ({}):", system.name());
        for digits in &sample_digits {
            let words = dict.lookup_exact(digits, system);
            if words.is_empty() {
                println!("  {digits} → (not found)");
            } else {
                let shown: Vec<&str> = words.iter().take(5).map(String::as_str).collect();
                println!("  {digits} → {}", shown.join(", "));
            }
        }
    }
}

/// Words whose bridge code translates exactly to the digits.
pub fn lookup(dict_file: &str, digits: &str, system: MnemonicSystem) {
    let dict = open_dict(dict_file);
    let digits = sanitize_digits(digits);
    let words = dict.lookup_exact(&digits, system);
    if words.is_empty() {
        println!("(not found)");
    } else {
        for word in &words {
            println!("{word}");
        }
    }
}

/// Every code whose digits are a prefix of the query, longest first.
pub fn prefix(dict_file: &str, digits: &str, system: MnemonicSystem) {
    let dict = open_dict(dict_file);
    let digits = sanitize_digits(digits);
    let results = dict.lookup_prefixes(&digits, system);
    if results.is_empty() {
        println!("(not found)");
        return;
    }
    for result in &results {
        println!(
            "{}\t{}\t{}",
            result.digits,
            result.codes.join(","),
            result.words.join(", ")
        );
    }
}
