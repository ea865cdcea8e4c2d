use crate::config::model::QueryDefaults;
use crate::matcher::dto::QueryPayload;
use thiserror::Error;

const ANY: &str = "any";

/// Which of the two forms started a submission
#[derive(strum::Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum Flow {
    Playlist,
    Preferences,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("No playlist given")]
    MissingPlaylist,
    #[error("Please select at least one genre.")]
    NoGenres,
}

/// Fields of `spotifyForm`, `None` when the element is missing
#[derive(Debug, Clone, Default)]
pub struct PlaylistForm {
    pub playlist_url: Option<String>,
    pub location: Option<String>,
}

/// Fields of `preferencesForm`, `None` when the element is missing
#[derive(Debug, Clone, Default)]
pub struct PreferencesForm {
    pub location: Option<String>,
    pub genre: Option<String>,
    pub budget: Option<String>,
    pub when: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Form {
    Playlist(PlaylistForm),
    Preferences(PreferencesForm),
}

impl Form {
    pub fn flow(&self) -> Flow {
        match self {
            Form::Playlist(_) => Flow::Playlist,
            Form::Preferences(_) => Flow::Preferences,
        }
    }

    pub fn to_query(&self, defaults: &QueryDefaults) -> Result<QueryPayload, InputError> {
        match self {
            Form::Playlist(form) => form.to_query(defaults),
            Form::Preferences(form) => form.to_query(defaults),
        }
    }
}

impl PlaylistForm {
    pub fn to_query(&self, defaults: &QueryDefaults) -> Result<QueryPayload, InputError> {
        let playlist_url = self
            .playlist_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(InputError::MissingPlaylist)?;

        Ok(QueryPayload::Playlist {
            playlist_id: extract_playlist_id(playlist_url),
            city: value_or(&self.location, &defaults.city),
            top_n: defaults.top_n,
        })
    }
}

impl PreferencesForm {
    pub fn to_query(&self, defaults: &QueryDefaults) -> Result<QueryPayload, InputError> {
        let keywords = split_keywords(self.genre.as_deref().unwrap_or_default());

        if keywords.is_empty() {
            return Err(InputError::NoGenres);
        }

        Ok(QueryPayload::Preferences {
            keywords,
            city: value_or(&self.location, &defaults.city),
            top_n: defaults.top_n,
            budget: value_or(&self.budget, ANY),
            when: value_or(&self.when, ANY),
        })
    }
}

/**
   Accepts either a bare playlist ID or a full Spotify URL
   (e.g. https://open.spotify.com/playlist/abc123?si=xyz)
*/
pub fn extract_playlist_id(url: &str) -> String {
    let last_segment = url.rsplit('/').next().unwrap_or(url);
    let id = last_segment.split('?').next().unwrap_or(last_segment).trim();

    if id.is_empty() {
        url.trim().to_string()
    } else {
        id.to_string()
    }
}

fn split_keywords(genres: &str) -> Vec<String> {
    genres
        .split(',')
        .map(str::trim)
        .filter(|genre| !genre.is_empty())
        .map(str::to_string)
        .collect()
}

fn value_or(value: &Option<String>, default: &str) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(default)
        .to_string()
}
