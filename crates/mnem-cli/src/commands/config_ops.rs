use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Install a custom settings file before any query runs.
pub fn load_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        mnem_core::settings::init_custom(content),
        "Error in settings file {file}: {}"
    );
}

pub fn settings_export() {
    print!("{}", mnem_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        mnem_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: search.prune_slack={}, search.max_paths={}, candidates.max_results={}",
        s.search.prune_slack, s.search.max_paths, s.candidates.max_results
    );
}
