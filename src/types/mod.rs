pub mod nullable;
pub mod search_options;
