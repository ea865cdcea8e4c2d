use crate::config::model::{Config, MatcherConfig, MatcherContract, QueryDefaults};
use std::env;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_CITY: &str = "london";
const DEFAULT_TOP_N: u32 = 5;

pub fn load_config() -> Config {
    let base_url = load_string_config("MATCHER_BASE_URL", DEFAULT_BASE_URL);
    let contract = load_contract_config("MATCHER_CONTRACT");

    let city = load_string_config("DEFAULT_CITY", DEFAULT_CITY);
    let top_n = load_u32_config("MATCHER_TOP_N", DEFAULT_TOP_N);

    Config {
        matcher: MatcherConfig { base_url, contract },
        defaults: QueryDefaults { city, top_n },
    }
}

fn load_string_config(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn load_contract_config(name: &str) -> MatcherContract {
    match env::var(name) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected either 'unified' or 'split'",
                name
            )
        }),
        Err(_) => MatcherContract::default(),
    }
}

fn load_u32_config(name: &str, default: u32) -> u32 {
    match env::var(name) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            panic!("Invalid config '{}'. Expected a positive integer number.", name)
        }),
        Err(_) => default,
    }
}
