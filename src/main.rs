use clap::Parser;
use serde::Serialize;
use tracing::{error, info};
use yelp_api::utils::config::{Cli, Command};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let client = cli.config.client();
    info!(host = %cli.config.host, "Starting yelp client");

    let output = match &cli.command {
        Command::Search { term, location } => client
            .do_simple_search(term, location)
            .await
            .map(|r| to_json(&r)),
        Command::Near(args) => client
            .do_search(&args.search_options())
            .await
            .map(|r| to_json(&r)),
        Command::Business { id } => client.get_business(id).await.map(|b| to_json(&b)),
    }
    .inspect_err(|e| error!("Request failed: {}", e))?;

    let output = output.inspect_err(|e| error!("Failed to encode output: {}", e))?;
    println!("{}", output);

    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
