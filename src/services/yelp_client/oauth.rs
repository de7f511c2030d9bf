//! OAuth 1.0 request signing (RFC 5849, HMAC-SHA1).
//!
//! Yelp issues the access token and secret directly, so there is no request
//! token or authorize step: every request is signed with all four credentials.

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use url::Url;
use urlencoding::encode;

use super::client::AuthOptions;
use crate::types::search_options::Parameters;

type HmacSha1 = Hmac<Sha1>;

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";
const NONCE_LENGTH: usize = 32;

#[derive(Clone, Debug)]
pub struct OAuthSigner {
    auth: AuthOptions,
}

impl OAuthSigner {
    pub fn new(auth: AuthOptions) -> Self {
        Self { auth }
    }

    /// `Authorization` header value for a request, using a fresh nonce and the current time.
    pub fn authorization(&self, method: &str, url: &Url, params: &Parameters) -> String {
        let nonce: String = std::iter::repeat_with(fastrand::alphanumeric)
            .take(NONCE_LENGTH)
            .collect();

        self.authorization_with(method, url, params, &nonce, Utc::now().timestamp())
    }

    pub fn authorization_with(
        &self,
        method: &str,
        url: &Url,
        params: &Parameters,
        nonce: &str,
        timestamp: i64,
    ) -> String {
        let mut oauth_params = self.protocol_parameters(nonce, timestamp);
        let signature = self.signature(method, url, params, &oauth_params);
        oauth_params.insert("oauth_signature".to_string(), signature);

        let fields = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
            .collect::<Vec<_>>()
            .join(", ");

        format!("OAuth {}", fields)
    }

    fn protocol_parameters(&self, nonce: &str, timestamp: i64) -> Parameters {
        Parameters::from([
            ("oauth_consumer_key".to_string(), self.auth.consumer_key.clone()),
            ("oauth_nonce".to_string(), nonce.to_string()),
            ("oauth_signature_method".to_string(), SIGNATURE_METHOD.to_string()),
            ("oauth_timestamp".to_string(), timestamp.to_string()),
            ("oauth_token".to_string(), self.auth.access_token.clone()),
            ("oauth_version".to_string(), OAUTH_VERSION.to_string()),
        ])
    }

    fn signature(
        &self,
        method: &str,
        url: &Url,
        params: &Parameters,
        oauth_params: &Parameters,
    ) -> String {
        let base = signature_base_string(method, url, params.iter().chain(oauth_params.iter()));
        let key = format!(
            "{}&{}",
            encode(&self.auth.consumer_secret),
            encode(&self.auth.access_token_secret)
        );

        let mut mac =
            HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");
        mac.update(base.as_bytes());
        STANDARD.encode(mac.finalize().into_bytes())
    }
}

fn signature_base_string<'a>(
    method: &str,
    url: &Url,
    params: impl Iterator<Item = (&'a String, &'a String)>,
) -> String {
    // Sorting happens after encoding.
    let mut pairs = params
        .map(|(k, v)| (encode(k).into_owned(), encode(v).into_owned()))
        .collect::<Vec<_>>();
    pairs.sort();

    let normalized = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        encode(&base_url(url)),
        encode(&normalized)
    )
}

/// Scheme, authority and path; default ports and the query are dropped.
fn base_url(url: &Url) -> String {
    let mut base = format!(
        "{}://{}",
        url.scheme(),
        url.host_str().unwrap_or_default().to_lowercase()
    );
    if let Some(port) = url.port() {
        base.push_str(&format!(":{}", port));
    }
    base.push_str(url.path());
    base
}
