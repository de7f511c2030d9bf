pub mod client;
pub mod oauth;
pub mod types;
