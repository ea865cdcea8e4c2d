use crate::input::Flow;

#[derive(Debug, Clone)]
pub struct Config {
    pub matcher: MatcherConfig,
    pub defaults: QueryDefaults,
}

#[derive(Debug, Clone)]
pub struct MatcherConfig {
    pub base_url: String,
    pub contract: MatcherContract,
}

/// Values sent when the form leaves them out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDefaults {
    pub city: String,
    pub top_n: u32,
}

/// Endpoint layout of the matching service
#[derive(
    strum::EnumString, strum::Display, Debug, Clone, Copy, Default, PartialEq, Eq,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MatcherContract {
    /// Both forms post to `/api/match`
    #[default]
    Unified,
    /// `/api/playlist` and `/api/preferences`
    Split,
}

impl MatcherContract {
    pub fn endpoint(&self, flow: Flow) -> &'static str {
        match (self, flow) {
            (MatcherContract::Unified, _) => "/api/match",
            (MatcherContract::Split, Flow::Playlist) => "/api/playlist",
            (MatcherContract::Split, Flow::Preferences) => "/api/preferences",
        }
    }
}

impl MatcherConfig {
    pub fn endpoint_url(&self, flow: Flow) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.contract.endpoint(flow)
        )
    }
}
