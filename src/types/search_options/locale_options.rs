use crate::{services::yelp_client::types::yelp_error::YelpError, types::nullable::Bool};

use super::{Parameters, QueryParameters};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocaleOptions {
    /// ISO 3166-1 alpha-2 country code used to parse the location.
    pub cc: Option<String>,
    /// ISO 639 language code for business and review text.
    pub lang: Option<String>,
    /// Only return reviews in `lang`.
    pub lang_filter: Bool,
}

impl QueryParameters for LocaleOptions {
    fn parameters(&self) -> Result<Parameters, YelpError> {
        let mut params = Parameters::new();

        for (key, value) in [("cc", &self.cc), ("lang", &self.lang)] {
            if let Some(v) = value.as_ref().filter(|v| !v.is_empty()) {
                params.insert(key.to_string(), v.clone());
            }
        }
        if let Some(v) = self.lang_filter.to_param() {
            params.insert("lang_filter".to_string(), v);
        }

        Ok(params)
    }
}
