pub mod yelp_business;
pub mod yelp_error;
pub mod yelp_search_response;
