use std::path::Path;

use clap::{Parser, Subcommand};

use mnem_cli::commands::{config_ops, dict_ops, match_ops, peg_ops};
use mnem_cli::trace_init::init_tracing;
use mnem_core::system::MnemonicSystem;

#[derive(Parser)]
#[command(name = "mnemtool", about = "Digit-to-word mnemonic tool")]
struct Cli {
    /// Custom settings TOML (see `config export`)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write JSON trace logs into this directory
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode words to digits
    Encode {
        /// Words to encode
        #[arg(required = true)]
        words: Vec<String>,
        /// Mnemonic system (major, german)
        #[arg(long, default_value = "major")]
        system: MnemonicSystem,
    },
    /// Find ranked word matches for a digit string
    Match {
        /// Digits (non-digit characters are ignored)
        digits: String,
        /// Dictionary file (JSON or compiled)
        #[arg(long)]
        dict: String,
        /// Mnemonic system (major, german)
        #[arg(long, default_value = "major")]
        system: MnemonicSystem,
        /// Peg store file
        #[arg(long)]
        pegs: Option<String>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show ways to split a digit string, with per-part matches if a dictionary is given
    Segment {
        /// Digits (non-digit characters are ignored)
        digits: String,
        /// Maximum number of parts
        #[arg(long)]
        max_parts: Option<usize>,
        /// Dictionary file (JSON or compiled)
        #[arg(long)]
        dict: Option<String>,
        /// Mnemonic system (major, german)
        #[arg(long, default_value = "major")]
        system: MnemonicSystem,
        /// Peg store file
        #[arg(long)]
        pegs: Option<String>,
    },
    /// Manage pegs
    Peg {
        /// Peg store file (default: ~/.config/mnem/pegs.json)
        #[arg(long)]
        file: Option<String>,
        #[command(subcommand)]
        action: PegAction,
    },
    /// Dictionary artifact tools
    Dict {
        #[command(subcommand)]
        action: DictAction,
    },
    /// Settings tools
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum PegAction {
    /// Pin digits to words
    Add {
        /// Digits covered by the peg
        digits: String,
        /// Words, in order
        #[arg(required = true)]
        words: Vec<String>,
        /// Mnemonic system (major, german)
        #[arg(long, default_value = "major")]
        system: MnemonicSystem,
    },
    /// Remove a peg by id
    Remove {
        /// Peg id (see `peg list`)
        id: u64,
    },
    /// List all pegs
    List,
}

#[derive(Subcommand)]
enum DictAction {
    /// Compile a JSON dictionary into the binary format
    Compile {
        /// Input JSON file
        input_json: String,
        /// Output file
        output_file: String,
    },
    /// Show dictionary info
    Info {
        /// Dictionary file (JSON or compiled)
        file: String,
    },
    /// Words whose code translates exactly to the digits
    Lookup {
        /// Dictionary file
        dict_file: String,
        /// Digits
        digits: String,
        /// Mnemonic system (major, german)
        #[arg(long, default_value = "major")]
        system: MnemonicSystem,
    },
    /// Codes whose digits are a prefix of the query
    Prefix {
        /// Dictionary file
        dict_file: String,
        /// Digits
        digits: String,
        /// Mnemonic system (major, german)
        #[arg(long, default_value = "major")]
        system: MnemonicSystem,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Export default settings as TOML
    Export,
    /// Validate a custom settings TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.trace_dir.as_deref().map(Path::new));
    if let Some(file) = &cli.settings {
        config_ops::load_settings(file);
    }

    match cli.command {
        Command::Encode { words, system } => match_ops::encode_cmd(&words, system),
        Command::Match {
            digits,
            dict,
            system,
            pegs,
            json,
        } => match_ops::match_cmd(&dict, &digits, system, pegs.as_deref(), json),
        Command::Segment {
            digits,
            max_parts,
            dict,
            system,
            pegs,
        } => match_ops::segment_cmd(&digits, max_parts, dict.as_deref(), system, pegs.as_deref()),
        Command::Peg { file, action } => {
            let path_str = file.unwrap_or_else(peg_ops::default_peg_store_path);
            let path = Path::new(&path_str);
            match action {
                PegAction::Add {
                    digits,
                    words,
                    system,
                } => peg_ops::peg_add(path, &digits, words, system),
                PegAction::Remove { id } => peg_ops::peg_remove(path, id),
                PegAction::List => peg_ops::peg_list(path),
            }
        }
        Command::Dict { action } => match action {
            DictAction::Compile {
                input_json,
                output_file,
            } => dict_ops::compile(&input_json, &output_file),
            DictAction::Info { file } => dict_ops::info(&file),
            DictAction::Lookup {
                dict_file,
                digits,
                system,
            } => dict_ops::lookup(&dict_file, &digits, system),
            DictAction::Prefix {
                dict_file,
                digits,
                system,
            } => dict_ops::prefix(&dict_file, &digits, system),
        },
        Command::Config { action } => match action {
            ConfigAction::Export => config_ops::settings_export(),
            ConfigAction::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
