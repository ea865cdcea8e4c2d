use super::dto::{MatchResponse, QueryPayload};
use crate::config::model::MatcherConfig;
use crate::events::model::RawEventRecord;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{error, info};

pub struct MatcherAPI {
    client: Client,
    config: MatcherConfig,
}

impl MatcherAPI {
    pub fn new(config: MatcherConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /**
    Returns matched events in the order the matcher ranked them.
    A response without events is an empty list, not an error.
    */
    #[tracing::instrument(skip(self), fields(flow = %query.flow()))]
    pub async fn find_events(
        &self,
        query: &QueryPayload,
    ) -> Result<Vec<RawEventRecord>, MatcherError> {
        let url = self.config.endpoint_url(query.flow());

        info!("Requesting matches from {}", url);

        let response = self.client.post(&url).json(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            error!("Matcher answered with status {}", status);
            return Err(MatcherError::Status(status));
        }

        let json_response = response.text().await?;

        match serde_json::from_str::<MatchResponse>(&json_response) {
            Ok(parsed_response) => {
                let events = parsed_response.events.unwrap_or_default();

                info!("Got {} events", events.len());

                Ok(events)
            }
            Err(e) => {
                error!("Response parse failed: {:?}", e);
                Err(MatcherError::InvalidResponse(e))
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("request to matcher failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("matcher answered with status {0}")]
    Status(StatusCode),
    #[error("invalid matcher response: {0}")]
    InvalidResponse(serde_json::Error),
}
