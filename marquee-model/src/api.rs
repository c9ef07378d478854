//! Request and response bodies of the HTTP surface.

use serde::{Deserialize, Serialize};
use serde_json::{Value, value::RawValue};

use crate::media_id::MediaId;
use crate::popularity::RawPopularity;

/// Query string of `GET /discover`.
///
/// Both fields stay untyped so that a bad value degrades to "no match" or
/// "no filter" instead of a query rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoverQuery {
    #[serde(rename = "type", default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}

impl DiscoverQuery {
    /// Builds the query from raw key/value pairs, keeping the first value
    /// of a repeated key and ignoring unknown keys.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "type" if query.media_type.is_none() => {
                    query.media_type = Some(value)
                }
                "genre" if query.genre.is_none() => query.genre = Some(value),
                _ => {}
            }
        }
        query
    }
}

/// Body of `POST /updatePopularity`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePopularityRequest {
    #[serde(rename = "movieId", default)]
    pub movie_id: Option<Value>,
    /// Kept verbatim so that any number literal, including one outside
    /// the `f64` range, reaches validation.
    #[serde(default)]
    pub popularity: Option<Box<RawValue>>,
}

impl UpdatePopularityRequest {
    pub fn media_id(&self) -> Option<MediaId> {
        self.movie_id.as_ref().and_then(MediaId::from_json)
    }

    pub fn popularity(&self) -> Option<RawPopularity> {
        self.popularity.as_deref().map(RawPopularity::from_raw)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePopularityResponse {
    pub message: String,
    pub new_popularity: f64,
}

impl UpdatePopularityResponse {
    pub const SUCCESS_MESSAGE: &'static str = "Popularity updated successfully";

    pub fn success(new_popularity: f64) -> Self {
        Self {
            message: Self::SUCCESS_MESSAGE.to_string(),
            new_popularity,
        }
    }
}

/// Error payload shared by every 4xx/5xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_tolerates_loose_shapes() {
        let request: UpdatePopularityRequest =
            serde_json::from_str(r#"{"movieId": "1", "popularity": 99.5}"#)
                .unwrap();
        assert_eq!(request.media_id(), Some(MediaId::from(1)));
        assert_eq!(request.popularity().and_then(|p| p.parse()), Some(99.5));

        let request: UpdatePopularityRequest =
            serde_json::from_str(r#"{"movieId": {"nested": 1}}"#).unwrap();
        assert_eq!(request.media_id(), None);
        assert!(request.popularity().is_none());

        let request: UpdatePopularityRequest =
            serde_json::from_str("{}").unwrap();
        assert_eq!(request.media_id(), None);
    }

    #[test]
    fn update_request_keeps_out_of_range_numbers() {
        let request: UpdatePopularityRequest =
            serde_json::from_str(r#"{"movieId": "1", "popularity": 1e400}"#)
                .unwrap();
        assert_eq!(request.media_id(), Some(MediaId::from(1)));
        let popularity = request.popularity().unwrap();
        assert!(matches!(popularity, RawPopularity::Unsupported(_)));
        assert_eq!(popularity.parse(), None);

        let request: UpdatePopularityRequest =
            serde_json::from_str(r#"{"movieId": 1, "popularity": null}"#)
                .unwrap();
        assert!(request.popularity().is_none());
    }

    #[test]
    fn discover_query_keeps_first_value_of_repeated_keys() {
        let pairs = [
            ("type", "movie"),
            ("genre", "28"),
            ("type", "tv"),
            ("page", "2"),
            ("genre", "12"),
        ]
        .map(|(k, v)| (k.to_string(), v.to_string()));

        assert_eq!(
            DiscoverQuery::from_pairs(pairs),
            DiscoverQuery {
                media_type: Some("movie".to_string()),
                genre: Some("28".to_string()),
            }
        );
        assert_eq!(DiscoverQuery::from_pairs(Vec::new()), DiscoverQuery::default());
    }
}
