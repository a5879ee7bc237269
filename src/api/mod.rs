use crate::models::{Title, TitleDetail};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub(crate) enum ApiErrorKind {
    Network,
    Http,
    Parse,
    GraphQl,
    NotFound,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn http(status: reqwest::StatusCode, body: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: format!("Request failed ({status}): {body}"),
        }
    }

    fn graphql(message: String) -> Self {
        Self {
            kind: ApiErrorKind::GraphQl,
            message,
        }
    }

    fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::NotFound,
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ApiErrorKind::NotFound
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

const TRENDING_QUERY: &str = r#"
query ($perPage: Int) {
  Page(perPage: $perPage) {
    media(type: ANIME, sort: TRENDING_DESC) {
      id
      title {
        romaji
      }
      coverImage {
        large
      }
    }
  }
}
"#;

const TITLE_QUERY: &str = r#"
query ($animeId: Int!) {
  Media(id: $animeId, type: ANIME) {
    id
    title {
      romaji
    }
    coverImage {
      large
    }
    bannerImage
    description
    episodes
    genres
    averageScore
  }
}
"#;

#[derive(Serialize, Clone, Debug)]
pub(crate) struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: Value,
}

/// Read-only client for the AniList GraphQL endpoint.
#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    pub async fn fetch_trending(&self, per_page: u32) -> ApiResult<Vec<Title>> {
        let envelope = self
            .request(&GraphQlRequest {
                query: TRENDING_QUERY,
                variables: json!({ "perPage": per_page }),
            })
            .await?;
        Self::parse_trending_response(envelope)
    }

    pub async fn fetch_title(&self, id: i64) -> ApiResult<TitleDetail> {
        let envelope = self
            .request(&GraphQlRequest {
                query: TITLE_QUERY,
                variables: json!({ "animeId": id }),
            })
            .await?;
        Self::parse_title_response(envelope)
    }

    /// Posts one query and returns the raw response envelope.
    ///
    /// AniList reports missing media as HTTP 404 with a GraphQL error body, so a
    /// JSON body is handed back even for non-2xx statuses.
    async fn request(&self, body: &GraphQlRequest<'_>) -> ApiResult<Value> {
        let client = reqwest::Client::new();
        let res = client
            .post(&self.base_url)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(ApiError::network)?;

        let status = res.status();
        let text = res.text().await.map_err(ApiError::network)?;

        match serde_json::from_str::<Value>(&text) {
            Ok(v) if v.get("data").is_some() || v.get("errors").is_some() => Ok(v),
            Ok(_) | Err(_) if !status.is_success() => Err(ApiError::http(status, &text)),
            Ok(_) => Err(ApiError::parse("response is not a GraphQL envelope")),
            Err(e) => Err(ApiError::parse(e)),
        }
    }

    /// Extracts `data` from a GraphQL envelope, turning `errors` into an `ApiError`.
    pub(crate) fn envelope_data(envelope: Value) -> ApiResult<Value> {
        if let Some(errors) = envelope
            .get("errors")
            .and_then(|v| v.as_array())
            .filter(|errors| !errors.is_empty())
        {
            let not_found = errors
                .iter()
                .any(|e| e.get("status").and_then(|s| s.as_i64()) == Some(404));
            let message = errors
                .iter()
                .filter_map(|e| e.get("message").and_then(|m| m.as_str()))
                .collect::<Vec<_>>()
                .join(", ");

            return Err(if not_found {
                ApiError::not_found(message)
            } else {
                ApiError::graphql(message)
            });
        }

        envelope
            .get("data")
            .filter(|d| !d.is_null())
            .cloned()
            .ok_or_else(|| ApiError::parse("response has no data"))
    }

    pub(crate) fn parse_trending_response(envelope: Value) -> ApiResult<Vec<Title>> {
        let data = Self::envelope_data(envelope)?;
        let list = data
            .get("Page")
            .and_then(|p| p.get("media"))
            .and_then(|m| m.as_array())
            .ok_or_else(|| ApiError::parse("response is missing Page.media"))?;

        let mut out: Vec<Title> = Vec::with_capacity(list.len());
        for item in list {
            match serde_json::from_value::<Title>(item.clone()) {
                Ok(t) => out.push(t),
                Err(e) => log::debug!("skipping malformed media entry: {e}"),
            }
        }
        Ok(out)
    }

    pub(crate) fn parse_title_response(envelope: Value) -> ApiResult<TitleDetail> {
        let data = Self::envelope_data(envelope)?;
        match data.get("Media") {
            None | Some(Value::Null) => Err(ApiError::not_found("Anime not found.")),
            Some(media) => serde_json::from_value(media.clone()).map_err(ApiError::parse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_new() {
        let client = ApiClient::new("https://graphql.anilist.co".to_string());
        assert_eq!(client.base_url, "https://graphql.anilist.co");
    }

    #[test]
    fn test_graphql_request_serialization() {
        let req = GraphQlRequest {
            query: TRENDING_QUERY,
            variables: json!({ "perPage": 100 }),
        };
        let v = serde_json::to_value(req).expect("should serialize");
        assert_eq!(v["variables"]["perPage"], 100);
        assert!(v["query"].as_str().is_some_and(|q| q.contains("TRENDING_DESC")));
    }

    #[test]
    fn test_parse_trending_response() {
        let envelope = json!({
            "data": {
                "Page": {
                    "media": [
                        {"id": 1, "title": {"romaji": "A"}, "coverImage": {"large": "a.jpg"}},
                        {"id": "broken"},
                        {"id": 2, "title": {"romaji": "B"}, "coverImage": {"large": "b.jpg"}}
                    ]
                }
            }
        });
        let titles = ApiClient::parse_trending_response(envelope).expect("should parse");
        let ids: Vec<i64> = titles.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(titles[1].display_name(), "B");
    }

    #[test]
    fn test_parse_trending_missing_page_is_parse_error() {
        let err = ApiClient::parse_trending_response(json!({"data": {}}))
            .expect_err("missing Page should fail");
        assert_eq!(err.kind, ApiErrorKind::Parse);
    }

    #[test]
    fn test_parse_title_response() {
        let envelope = json!({
            "data": {
                "Media": {
                    "id": 21,
                    "title": {"romaji": "One Piece"},
                    "coverImage": {"large": "cover.jpg"},
                    "bannerImage": "banner.jpg",
                    "description": "Pirates.",
                    "episodes": null,
                    "genres": ["Action", "Adventure"],
                    "averageScore": 88
                }
            }
        });
        let d = ApiClient::parse_title_response(envelope).expect("should parse");
        assert_eq!(d.id, 21);
        assert_eq!(d.display_name(), "One Piece");
        assert_eq!(d.banner_image.as_deref(), Some("banner.jpg"));
        assert_eq!(d.episodes, None);
        assert_eq!(d.genres, vec!["Action".to_string(), "Adventure".to_string()]);
        assert_eq!(d.average_score, Some(88));
    }

    #[test]
    fn test_parse_title_not_found() {
        let envelope = json!({
            "errors": [{"message": "Not Found.", "status": 404}],
            "data": {"Media": null}
        });
        let err = ApiClient::parse_title_response(envelope).expect_err("should be not found");
        assert!(err.is_not_found());
        assert_eq!(err.message, "Not Found.");

        let err = ApiClient::parse_title_response(json!({"data": {"Media": null}}))
            .expect_err("null media should be not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_graphql_errors_are_reported() {
        let envelope = json!({
            "errors": [{"message": "Too Many Requests.", "status": 429}],
            "data": null
        });
        let err = ApiClient::parse_trending_response(envelope).expect_err("should fail");
        assert_eq!(err.kind, ApiErrorKind::GraphQl);
        assert_eq!(err.to_string(), "Too Many Requests.");
        assert_eq!(err.kind.to_string(), "GraphQl");
    }
}
