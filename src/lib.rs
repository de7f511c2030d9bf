//! Client for the Yelp v2 Search and Business APIs, authenticated with OAuth 1.0.
//!
//! ```no_run
//! # async fn run() -> Result<(), yelp_api::YelpError> {
//! use yelp_api::{AuthOptions, YelpClient};
//!
//! let client = YelpClient::new(AuthOptions {
//!     consumer_key: "key".to_string(),
//!     consumer_secret: "secret".to_string(),
//!     access_token: "token".to_string(),
//!     access_token_secret: "token-secret".to_string(),
//! });
//! let result = client.do_simple_search("coffee", "San Francisco").await?;
//! println!("{} matches", result.total);
//! # Ok(())
//! # }
//! ```

pub mod services;
pub mod types;
pub mod utils;

pub use services::yelp_client::{
    client::{AuthOptions, YelpClient},
    types::{
        yelp_business::Business, yelp_error::YelpError, yelp_search_response::SearchResult,
    },
};
pub use types::{
    nullable::{Bool, Float, Int, Nullable},
    search_options::{
        BoundOptions, CoordinateOptions, GeneralOptions, LocaleOptions, LocationOptions,
        QueryParameters, SearchLocation, SearchOptions,
    },
};
