use std::path::Path;
use std::process;

use mnem_core::candidates::{match_full, match_segmented};
use mnem_core::input::sanitize_digits;
use mnem_core::peg::{Peg, PegStore};
use mnem_core::search::MatchCandidate;
use mnem_core::segment::segment;
use mnem_core::settings::settings;
use mnem_core::system::{encode, MnemonicSystem};
use tracing::warn;

use super::dict_ops::open_dict;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

fn load_pegs(pegs_file: Option<&str>) -> Vec<Peg> {
    let Some(path) = pegs_file else {
        return Vec::new();
    };
    let store = die!(PegStore::open(Path::new(path)), "Error opening pegs: {}");
    store.pegs()
}

fn digits_arg(raw: &str) -> String {
    let digits = sanitize_digits(raw);
    if digits != raw {
        warn!(input = raw, digits = %digits, "ignoring non-digit characters");
    }
    digits
}

fn format_candidate(c: &MatchCandidate) -> String {
    let mut flags = String::new();
    if c.is_peg_sourced {
        flags.push_str(" [peg]");
    }
    if !c.is_full_match {
        flags.push_str(&format!(
            " [partial {}..{}]",
            c.digits_covered.start, c.digits_covered.end
        ));
    }
    format!("{} (w={}){flags}", c.words.join(" "), c.weight)
}

pub fn encode_cmd(words: &[String], system: MnemonicSystem) {
    for word in words {
        println!("{word}\t{}", encode(word, system));
    }
}

pub fn match_cmd(
    dict_file: &str,
    digits: &str,
    system: MnemonicSystem,
    pegs_file: Option<&str>,
    json: bool,
) {
    let dict = open_dict(dict_file);
    let pegs = load_pegs(pegs_file);
    let digits = digits_arg(digits);
    let results = match_full(&dict, system, &pegs, &digits);

    if json {
        let out = die!(
            serde_json::to_string_pretty(&results),
            "Error encoding results: {}"
        );
        println!("{out}");
        return;
    }
    if results.is_empty() {
        println!("(no matches)");
        return;
    }
    for (i, c) in results.iter().enumerate() {
        println!("#{:>2}: {}", i + 1, format_candidate(c));
    }
}

/// Print segmentations; with a dictionary, also the matches for each part.
pub fn segment_cmd(
    digits: &str,
    max_parts: Option<usize>,
    dict_file: Option<&str>,
    system: MnemonicSystem,
    pegs_file: Option<&str>,
) {
    let digits = digits_arg(digits);
    let Some(dict_file) = dict_file else {
        let max_parts = max_parts.unwrap_or(settings().segment.max_parts);
        let limit = settings().segment.display_limit;
        for seg in segment(&digits, max_parts).take(limit) {
            println!("{}", seg.pattern());
        }
        return;
    };

    let dict = open_dict(dict_file);
    let pegs = load_pegs(pegs_file);
    let results = match_segmented(&dict, system, &pegs, &digits);
    if results.is_empty() {
        println!("(no matches)");
        return;
    }
    for r in &results {
        println!("{}", r.segmentation.pattern());
        for (part, matches) in r.segmentation.parts.iter().zip(&r.parts) {
            let shown: Vec<String> = matches.iter().take(3).map(|c| c.words.join(" ")).collect();
            println!("  {part}: {}", shown.join(" | "));
        }
    }
}
