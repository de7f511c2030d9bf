use crate::{
    services::yelp_client::types::yelp_error::YelpError,
    types::nullable::{Bool, Float, Int},
};

use super::{Parameters, QueryParameters};

/// Search refinements that apply regardless of how the location is given.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeneralOptions {
    /// Search term, e.g. "food" or "Starbucks".
    pub term: Option<String>,
    pub limit: Int,
    pub offset: Int,
    /// 0 = best matched, 1 = distance, 2 = highest rated.
    pub sort: Int,
    /// Comma separated category aliases, e.g. "bars,french".
    pub category_filter: Option<String>,
    /// Meters, max 40000.
    pub radius_filter: Float,
    pub deals_filter: Bool,
}

impl QueryParameters for GeneralOptions {
    fn parameters(&self) -> Result<Parameters, YelpError> {
        let mut params = Parameters::new();

        let text = [
            ("term", self.term.as_ref()),
            ("category_filter", self.category_filter.as_ref()),
        ];
        for (key, value) in text {
            if let Some(v) = value.filter(|v| !v.is_empty()) {
                params.insert(key.to_string(), v.clone());
            }
        }

        let values = [
            ("limit", self.limit.to_param()),
            ("offset", self.offset.to_param()),
            ("sort", self.sort.to_param()),
            ("radius_filter", self.radius_filter.to_param()),
            ("deals_filter", self.deals_filter.to_param()),
        ];
        for (key, value) in values {
            if let Some(v) = value {
                params.insert(key.to_string(), v);
            }
        }

        Ok(params)
    }
}
