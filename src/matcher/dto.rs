use crate::events::model::RawEventRecord;
use crate::input::Flow;
use serde::{Deserialize, Serialize};

/// Request body sent to the matcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryPayload {
    Playlist {
        playlist_id: String,
        city: String,
        top_n: u32,
    },
    Preferences {
        keywords: Vec<String>,
        city: String,
        top_n: u32,
        budget: String,
        when: String,
    },
}

impl QueryPayload {
    pub fn flow(&self) -> Flow {
        match self {
            QueryPayload::Playlist { .. } => Flow::Playlist,
            QueryPayload::Preferences { .. } => Flow::Preferences,
        }
    }
}

// Note: the matcher omits `events` (or sends null) when nothing was found
#[derive(Debug, Deserialize)]
pub struct MatchResponse {
    #[serde(default)]
    pub events: Option<Vec<RawEventRecord>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test_log::test]
    fn should_serialize_playlist_query_as_flat_object() {
        let query = QueryPayload::Playlist {
            playlist_id: "abc123".to_string(),
            city: "london".to_string(),
            top_n: 5,
        };

        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({ "playlist_id": "abc123", "city": "london", "top_n": 5 })
        );
    }

    #[test_log::test]
    fn should_serialize_preferences_query_with_filters() {
        let query = QueryPayload::Preferences {
            keywords: vec!["techno".to_string(), "house".to_string()],
            city: "bristol".to_string(),
            top_n: 5,
            budget: "free".to_string(),
            when: "any".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "keywords": ["techno", "house"],
                "city": "bristol",
                "top_n": 5,
                "budget": "free",
                "when": "any"
            })
        );
    }

    #[test_log::test]
    fn should_deserialize_events_from_mixed_sources() {
        let response = serde_json::from_str::<MatchResponse>(
            r##"
              {
                "events": [
                  {
                    "title": "Fabric presents: Techno All Nighter",
                    "date": "Sat 22 Nov, 11pm",
                    "venue": "Fabric, London",
                    "url": "https:\/\/www.fatsoma.com\/e\/abc\/techno",
                    "description": null
                  },
                  {
                    "name": "House Sessions",
                    "startDate": "2025-11-22T23:00:00",
                    "location": "Corsica Studios",
                    "ticketUrl": "https:\/\/www.eventbrite.co.uk\/e\/123",
                    "price": 12.5
                  }
                ]
              }"##,
        );

        assert!(response.is_ok(), "{:?}", response);

        let events = response.unwrap().events.unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1].text("ticketUrl"),
            Some("https://www.eventbrite.co.uk/e/123".to_string())
        );
        assert_eq!(events[1].text("price"), Some("12.5".to_string()));
    }

    #[test_log::test]
    fn when_events_are_missing_or_null_should_deserialize_as_none() {
        let missing = serde_json::from_str::<MatchResponse>("{}").unwrap();
        let null = serde_json::from_str::<MatchResponse>(r#"{ "events": null }"#).unwrap();

        assert!(missing.events.is_none());
        assert!(null.events.is_none());
    }

    #[test_log::test]
    fn when_events_is_not_a_list_should_fail() {
        let response = serde_json::from_str::<MatchResponse>(r#"{ "events": "soon" }"#);

        assert!(response.is_err());
    }
}
