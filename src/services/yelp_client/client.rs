use std::{fmt, time::Duration};

use bytes::Bytes;
use reqwest::{header::AUTHORIZATION, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};
use url::Url;
use urlencoding::encode;

use super::{
    oauth::OAuthSigner,
    types::{yelp_business::Business, yelp_error::YelpError, yelp_search_response::SearchResult},
};
use crate::types::search_options::{LocationOptions, Parameters, QueryParameters, SearchOptions};

pub const ROOT_URI: &str = "https://api.yelp.com";
pub const SEARCH_AREA: &str = "/v2/search";
pub const BUSINESS_AREA: &str = "/v2/business";

/// Keys from the Yelp API access site, see
/// <http://www.yelp.com/developers/documentation>.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthOptions {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

impl fmt::Debug for AuthOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthOptions")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .field("access_token", &self.access_token)
            .field("access_token_secret", &"[REDACTED]")
            .finish()
    }
}

/// Entry point for searches and business lookups. Holds no per-call state,
/// so one instance can be shared and cloned freely.
#[derive(Clone, Debug)]
pub struct YelpClient {
    signer: OAuthSigner,
    host: String,
    timeout: Option<Duration>,
    client: reqwest::Client,
}

impl YelpClient {
    pub fn new(auth: AuthOptions) -> Self {
        Self {
            signer: OAuthSigner::new(auth),
            host: ROOT_URI.to_string(),
            timeout: None,
            client: reqwest::Client::new(),
        }
    }

    /// Sends requests to `host` instead of the public API root.
    pub fn with_base_url(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Deadline for each outbound request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Search by free-text term and location. The location is required.
    #[instrument(skip(self))]
    pub async fn do_simple_search(
        &self,
        term: &str,
        location: &str,
    ) -> Result<SearchResult, YelpError> {
        let mut params = LocationOptions::new(location).parameters()?;
        params.insert("term".to_string(), term.to_string());

        let (_, body) = self
            .make_request(SEARCH_AREA, None, &params)
            .await
            .inspect_err(|e| error!(error = %e, "Yelp search failed"))?;
        decode(&body)
    }

    #[instrument(skip_all)]
    pub async fn do_search(&self, options: &SearchOptions) -> Result<SearchResult, YelpError> {
        let params = options.parameters()?;

        let (_, body) = self
            .make_request(SEARCH_AREA, None, &params)
            .await
            .inspect_err(|e| error!(error = %e, "Yelp search failed"))?;
        decode(&body)
    }

    /// Look up a single business by its id, e.g. `yelp-san-francisco`.
    #[instrument(skip(self))]
    pub async fn get_business(&self, id: &str) -> Result<Business, YelpError> {
        let (_, body) = self
            .make_request(BUSINESS_AREA, Some(id), &Parameters::new())
            .await
            .map_err(|e| match e {
                YelpError::Status { status: 404, .. } => {
                    debug!("Business not found");
                    YelpError::BusinessNotFound
                }
                e => {
                    error!(error = %e, "Business lookup failed");
                    e
                }
            })?;

        decode(&body)
    }

    fn request_url(&self, area: &str, id: Option<&str>) -> Result<Url, YelpError> {
        let mut url = format!("{}{}", self.host.trim_end_matches('/'), area);
        if let Some(id) = id {
            url.push('/');
            url.push_str(&encode(id));
        }

        Ok(Url::parse(&url)?)
    }

    /// Signs and sends one GET. Anything but a 200 becomes `YelpError::Status`;
    /// logging severity for that is left to the caller.
    async fn make_request(
        &self,
        area: &str,
        id: Option<&str>,
        params: &Parameters,
    ) -> Result<(StatusCode, Bytes), YelpError> {
        let mut url = self.request_url(area, id)?;
        let authorization = self.signer.authorization("GET", &url, params);

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        debug!(url = %url, "Sending request to Yelp");

        let mut request = self
            .client
            .get(url)
            .header(AUTHORIZATION, authorization);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| {
            error!(error = %e, "Failed to send request to Yelp");
            YelpError::Network(e)
        })?;

        let status = response.status();
        debug!(status = %status, "Received response from Yelp");

        if status != StatusCode::OK {
            debug!(status = %status, "Yelp API returned non-success status");
            return Err(YelpError::Status {
                status: status.as_u16(),
                message: status_line(status),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            error!(error = %e, "Failed to read response body");
            YelpError::Network(e)
        })?;

        Ok((status, body))
    }
}

/// `404 Not Found`, or just the code when it has no canonical reason phrase.
fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, YelpError> {
    serde_json::from_slice(body).map_err(|e| {
        error!(error = %e, "Failed to decode Yelp response");
        YelpError::Decode(e)
    })
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;
    use tracing_test::traced_test;

    use super::*;
    use crate::types::{
        nullable::int_from,
        search_options::{CoordinateOptions, GeneralOptions},
    };

    fn auth() -> AuthOptions {
        AuthOptions {
            consumer_key: "consumer-key".to_string(),
            consumer_secret: "consumer-secret".to_string(),
            access_token: "token".to_string(),
            access_token_secret: "token-secret".to_string(),
        }
    }

    fn oauth_header() -> Matcher {
        Matcher::Regex(
            r#"^OAuth oauth_consumer_key="consumer-key", .*oauth_signature=".+".*oauth_token="token""#
                .to_string(),
        )
    }

    fn search_body() -> String {
        json!({
            "region": {
                "span": {"latitude_delta": 0.01, "longitude_delta": 0.02},
                "center": {"latitude": 37.9, "longitude": -122.5}
            },
            "total": 3,
            "businesses": [
                {"id": "first", "name": "First", "rating": 4.5},
                {"id": "second", "name": "Second", "rating": 4.0},
                {"id": "third", "name": "Third", "rating": 3.5}
            ]
        })
        .to_string()
    }

    #[test]
    fn test_client_creation() {
        let client = YelpClient::new(auth());
        assert_eq!(client.host, ROOT_URI);
        assert_eq!(client.timeout, None);

        let client = client
            .with_base_url("http://localhost:8080/")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(client.timeout, Some(Duration::from_secs(5)));
        assert_eq!(
            client.request_url(SEARCH_AREA, None).unwrap().as_str(),
            "http://localhost:8080/v2/search"
        );
    }

    #[test]
    fn test_request_url_encodes_id() {
        let client = YelpClient::new(auth());
        let url = client
            .request_url(BUSINESS_AREA, Some("joe's pizza"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.yelp.com/v2/business/joe%27s%20pizza"
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let debug = format!("{:?}", YelpClient::new(auth()));
        assert!(debug.contains("consumer-key"));
        assert!(!debug.contains("consumer-secret"));
        assert!(!debug.contains("token-secret"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_simple_search() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v2/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("term".to_string(), "coffee".to_string()),
                Matcher::UrlEncoded("location".to_string(), "San Francisco".to_string()),
            ]))
            .match_header("authorization", oauth_header())
            .with_header("content-type", "application/json")
            .with_body(search_body())
            .create_async()
            .await;

        let client = YelpClient::new(auth()).with_base_url(server.url());
        let result = client
            .do_simple_search("coffee", "San Francisco")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result.businesses.len(), 3);
        assert_eq!(result.businesses[2].id, "third");
        assert!(logs_contain("Sending request to Yelp"));
    }

    #[tokio::test]
    async fn test_simple_search_requires_location() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = YelpClient::new(auth()).with_base_url(server.url());
        let err = client.do_simple_search("coffee", "").await.unwrap_err();

        mock.assert_async().await;
        assert!(matches!(err, YelpError::UnspecifiedLocation));
    }

    #[tokio::test]
    async fn test_search_with_options() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v2/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("ll".to_string(), "37.9,-122.5,0,0,0".to_string()),
                Matcher::UrlEncoded("limit".to_string(), "3".to_string()),
            ]))
            .match_header("authorization", oauth_header())
            .with_body(search_body())
            .create_async()
            .await;

        let options = SearchOptions::new(
            CoordinateOptions::new(37.9, -122.5)
                .with_accuracy(0.0)
                .with_altitude(0.0)
                .with_altitude_accuracy(0.0),
        )
        .with_general(GeneralOptions {
            limit: int_from(3),
            ..Default::default()
        });

        let client = YelpClient::new(auth()).with_base_url(server.url());
        let result = client.do_search(&options).await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.total, 3);
        assert_eq!(result.businesses.len(), 3);
    }

    #[tokio::test]
    async fn test_search_builder_error_skips_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = YelpClient::new(auth()).with_base_url(server.url());
        let err = client
            .do_search(&SearchOptions::new(CoordinateOptions::default()))
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert!(matches!(err, YelpError::MissingCoordinates));
    }

    #[tokio::test]
    async fn test_get_business() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v2/business/yelp-san-francisco")
            .match_header("authorization", oauth_header())
            .with_body(
                json!({
                    "id": "yelp-san-francisco",
                    "name": "Yelp",
                    "review_count": 7140,
                    "location": {"city": "San Francisco", "neighborhoods": ["SoMa"]},
                    "reviews": [{"id": "r1", "rating": 5, "excerpt": "Great", "user": {"name": "Sam"}}]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = YelpClient::new(auth()).with_base_url(server.url());
        let business = client.get_business("yelp-san-francisco").await.unwrap();

        mock.assert_async().await;
        assert_eq!(business.name, "Yelp");
        assert_eq!(business.review_count, 7140);
        assert_eq!(business.location.neighborhoods, vec!["SoMa".to_string()]);
        assert_eq!(business.reviews[0].rating, Some(5.0));
    }

    #[tokio::test]
    async fn test_get_business_not_found() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v2/business/missing")
            .with_status(404)
            .with_body(r#"{"error": {"id": "BUSINESS_UNAVAILABLE"}}"#)
            .create_async()
            .await;

        let client = YelpClient::new(auth()).with_base_url(server.url());
        let err = client.get_business("missing").await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_get_business_server_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v2/business/broken")
            .with_status(500)
            .create_async()
            .await;

        let client = YelpClient::new(auth()).with_base_url(server.url());
        let err = client.get_business("broken").await.unwrap_err();

        assert!(!err.is_not_found());
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "500 Internal Server Error");
        assert!(logs_contain("Business lookup failed"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_business_not_found_is_not_logged_as_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v2/business/closed")
            .with_status(404)
            .create_async()
            .await;

        let client = YelpClient::new(auth()).with_base_url(server.url());
        let err = client.get_business("closed").await.unwrap_err();

        assert!(err.is_not_found());
        assert!(logs_contain("Business not found"));
        logs_assert(|lines: &[&str]| {
            match lines.iter().find(|line| line.contains("ERROR")) {
                Some(line) => Err(format!("unexpected error log: {}", line)),
                None => Ok(()),
            }
        });
    }

    #[tokio::test]
    async fn test_make_request_returns_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v2/business/yelp-san-francisco")
            .with_body("{}")
            .create_async()
            .await;

        let client = YelpClient::new(auth()).with_base_url(server.url());
        let (status, body) = client
            .make_request(BUSINESS_AREA, Some("yelp-san-francisco"), &Parameters::new())
            .await
            .unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"{}");
    }

    #[tokio::test]
    async fn test_unknown_status_keeps_code() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v2/business/odd")
            .with_status(599)
            .create_async()
            .await;

        let client = YelpClient::new(auth()).with_base_url(server.url());
        let err = client.get_business("odd").await.unwrap_err();

        assert_eq!(err.status(), Some(599));
        assert_eq!(err.to_string(), "599");
    }

    #[tokio::test]
    async fn test_search_not_found_is_plain_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v2/search")
            .match_query(Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let client = YelpClient::new(auth()).with_base_url(server.url());
        let err = client
            .do_simple_search("", "Nowhere")
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "404 Not Found");
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v2/search")
            .match_query(Matcher::Any)
            .with_body("not json")
            .create_async()
            .await;

        let client = YelpClient::new(auth()).with_base_url(server.url());
        let err = client
            .do_simple_search("coffee", "San Francisco")
            .await
            .unwrap_err();

        assert!(matches!(err, YelpError::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_failure() {
        let client = YelpClient::new(auth())
            .with_base_url("http://127.0.0.1:1")
            .with_timeout(Duration::from_secs(2));
        let err = client.get_business("anything").await.unwrap_err();

        assert!(matches!(err, YelpError::Network(_)));
    }
}
