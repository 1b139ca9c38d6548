//! Engine settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! Settings hold tuning constants only. The dictionary is never stored here;
//! callers pass it into every query.

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub search: SearchSettings,
    pub candidates: CandidateSettings,
    pub segment: SegmentSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    pub one_digit_penalty: i64,
    pub two_digit_penalty: i64,
    pub base_weight: i64,
    pub peg_bonus: i64,
    pub prune_slack: i64,
    pub max_words_per_edge: usize,
    pub max_paths: usize,
    pub max_expansions: usize,
    pub max_partial_prefix: usize,
    pub max_partials: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateSettings {
    pub max_exact: usize,
    pub max_search: usize,
    pub min_full_matches: usize,
    pub max_results: usize,
    pub max_segment_results: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SegmentSettings {
    pub max_parts: usize,
    pub max_part_len: usize,
    pub display_limit: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_negative {
        ($section:ident . $field:ident) => {
            if s.$section.$field < 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be non-negative".to_string(),
                });
            }
        };
    }
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_non_negative!(search.one_digit_penalty);
    check_non_negative!(search.two_digit_penalty);
    check_non_negative!(search.base_weight);
    check_non_negative!(search.peg_bonus);
    check_non_negative!(search.prune_slack);
    check_positive_usize!(search.max_words_per_edge);
    check_positive_usize!(search.max_paths);
    check_positive_usize!(search.max_expansions);
    check_positive_usize!(search.max_partial_prefix);
    check_positive_usize!(search.max_partials);

    // Every edge must keep a strictly positive weight, otherwise best-first
    // order no longer implies completion order.
    let min_weight = s
        .search
        .base_weight
        .min(s.search.two_digit_penalty)
        .min(s.search.one_digit_penalty);
    if s.search.peg_bonus >= min_weight {
        return Err(SettingsError::InvalidValue {
            field: "search.peg_bonus".to_string(),
            reason: "must be smaller than every length weight".to_string(),
        });
    }

    check_positive_usize!(candidates.max_exact);
    check_positive_usize!(candidates.max_search);
    check_positive_usize!(candidates.max_results);
    check_positive_usize!(candidates.max_segment_results);

    check_positive_usize!(segment.max_parts);
    check_positive_usize!(segment.max_part_len);
    check_positive_usize!(segment.display_limit);

    Ok(())
}
