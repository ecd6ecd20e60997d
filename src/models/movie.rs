use serde::{Deserialize, Deserializer, Serialize};

/// One entry in a page of search results
///
/// Keyed by IMDB ID; the remaining fields are carried through to the view
/// layer untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct MovieSummary {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    pub title: String,
    #[serde(default)]
    pub year: String,
    /// "movie", "series" or "episode"
    #[serde(rename = "Type", default)]
    pub kind: String,
    #[serde(default)]
    pub poster: String,
}

/// Full detail record for a single movie
///
/// Common OMDb fields are typed; everything else the upstream sends (Ratings,
/// box office, awards, ...) is kept verbatim in `extra` so the view layer can
/// render fields this crate does not know about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct MovieDetail {
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub actors: String,
    #[serde(default)]
    pub plot: String,
    #[serde(default)]
    pub poster: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One fixed-size batch of search results as reported by the service
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub results: Vec<MovieSummary>,
    pub total_results: u32,
}

/// Accepts `totalResults` as either a JSON number or a decimal string.
/// OMDb sends a string; other backends send a number.
pub(crate) fn deserialize_total_results<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_summary_deserialization() {
        let json = r#"{
            "Title": "Frozen",
            "Year": "2013",
            "imdbID": "tt2294629",
            "Type": "movie",
            "Poster": "https://m.media-amazon.com/images/frozen.jpg"
        }"#;

        let summary: MovieSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.imdb_id, "tt2294629");
        assert_eq!(summary.title, "Frozen");
        assert_eq!(summary.year, "2013");
        assert_eq!(summary.kind, "movie");
        assert_eq!(summary.poster, "https://m.media-amazon.com/images/frozen.jpg");
    }

    #[test]
    fn test_movie_detail_keeps_unknown_fields() {
        let json = r#"{
            "Title": "Frozen",
            "Year": "2013",
            "imdbID": "tt2294629",
            "imdbRating": "7.4",
            "Plot": "A fearless princess sets off on a journey.",
            "Ratings": [{"Source": "Internet Movie Database", "Value": "7.4/10"}],
            "BoxOffice": "$400,953,009"
        }"#;

        let detail: MovieDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.imdb_id, "tt2294629");
        assert_eq!(detail.imdb_rating, "7.4");
        assert!(detail.extra.contains_key("Ratings"));
        assert_eq!(
            detail.extra["BoxOffice"],
            serde_json::json!("$400,953,009")
        );
    }

    #[test]
    fn test_total_results_from_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(deserialize_with = "deserialize_total_results")]
            total: u32,
        }

        let parsed: Wrapper = serde_json::from_str(r#"{"total": "47"}"#).unwrap();
        assert_eq!(parsed.total, 47);
    }

    #[test]
    fn test_total_results_from_number() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(deserialize_with = "deserialize_total_results")]
            total: u32,
        }

        let parsed: Wrapper = serde_json::from_str(r#"{"total": 47}"#).unwrap();
        assert_eq!(parsed.total, 47);
    }

    #[test]
    fn test_total_results_rejects_garbage() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(deserialize_with = "deserialize_total_results")]
            #[allow(dead_code)]
            total: u32,
        }

        let result: Result<Wrapper, _> = serde_json::from_str(r#"{"total": "lots"}"#);
        assert!(result.is_err());
    }
}
