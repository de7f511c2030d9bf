pub mod yelp_client;
