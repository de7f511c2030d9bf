use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::{
    services::yelp_client::client::{AuthOptions, YelpClient, ROOT_URI},
    types::{
        nullable::Int,
        search_options::{CoordinateOptions, GeneralOptions, SearchOptions},
    },
};

#[derive(Debug, Parser)]
#[command(name = "yelp", about = "Search Yelp businesses from the command line")]
pub struct Cli {
    #[command(flatten)]
    pub config: YelpConfig,

    #[command(subcommand)]
    pub command: Command,
}

/// Credentials and connection settings, read from flags or the environment.
#[derive(Debug, Args)]
pub struct YelpConfig {
    #[arg(long, env = "YELP_CONSUMER_KEY", hide_env_values = true)]
    pub consumer_key: String,

    #[arg(long, env = "YELP_CONSUMER_SECRET", hide_env_values = true)]
    pub consumer_secret: String,

    #[arg(long, env = "YELP_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: String,

    #[arg(long, env = "YELP_ACCESS_TOKEN_SECRET", hide_env_values = true)]
    pub access_token_secret: String,

    #[arg(long, env = "YELP_HOST", default_value = ROOT_URI)]
    pub host: String,

    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search by term and free-text location.
    Search {
        #[arg(long, default_value = "")]
        term: String,
        #[arg(long)]
        location: String,
    },
    /// Search around a coordinate.
    Near(NearArgs),
    /// Look up a single business by id.
    Business { id: String },
}

#[derive(Debug, Args)]
pub struct NearArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: f64,
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: f64,
    #[arg(long)]
    pub accuracy: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    pub altitude: Option<f64>,
    #[arg(long)]
    pub altitude_accuracy: Option<f64>,
    #[arg(long)]
    pub term: Option<String>,
    #[arg(long)]
    pub limit: Option<i64>,
}

impl YelpConfig {
    pub fn auth_options(&self) -> AuthOptions {
        AuthOptions {
            consumer_key: self.consumer_key.clone(),
            consumer_secret: self.consumer_secret.clone(),
            access_token: self.access_token.clone(),
            access_token_secret: self.access_token_secret.clone(),
        }
    }

    pub fn client(&self) -> YelpClient {
        let client = YelpClient::new(self.auth_options()).with_base_url(&self.host);
        match self.timeout_secs {
            Some(secs) => client.with_timeout(Duration::from_secs(secs)),
            None => client,
        }
    }
}

impl NearArgs {
    pub fn search_options(&self) -> SearchOptions {
        let coordinates = CoordinateOptions {
            latitude: self.latitude.into(),
            longitude: self.longitude.into(),
            accuracy: self.accuracy.into(),
            altitude: self.altitude.into(),
            altitude_accuracy: self.altitude_accuracy.into(),
        };

        SearchOptions::new(coordinates).with_general(GeneralOptions {
            term: self.term.clone(),
            limit: Int::from(self.limit),
            ..Default::default()
        })
    }
}
