use serde::{Deserialize, Serialize};

use super::yelp_business::{Business, Coordinate};

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchResult {
    pub region: Option<Region>,
    /// Total matches, which may exceed `businesses.len()`.
    pub total: u32,
    pub businesses: Vec<Business>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Region {
    pub span: Span,
    pub center: Coordinate,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Span {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}
