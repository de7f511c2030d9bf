use crate::{
    services::yelp_client::types::yelp_error::YelpError,
    types::nullable::Float,
};

use super::{Parameters, QueryParameters};

/// Geographic bounding box, sent as
/// `bounds=sw_latitude,sw_longitude|ne_latitude,ne_longitude`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoundOptions {
    pub sw_latitude: Float,
    pub sw_longitude: Float,
    pub ne_latitude: Float,
    pub ne_longitude: Float,
}

impl BoundOptions {
    pub fn new(sw_latitude: f64, sw_longitude: f64, ne_latitude: f64, ne_longitude: f64) -> Self {
        Self {
            sw_latitude: sw_latitude.into(),
            sw_longitude: sw_longitude.into(),
            ne_latitude: ne_latitude.into(),
            ne_longitude: ne_longitude.into(),
        }
    }
}

impl QueryParameters for BoundOptions {
    fn parameters(&self) -> Result<Parameters, YelpError> {
        let corners = (
            self.sw_latitude.value(),
            self.sw_longitude.value(),
            self.ne_latitude.value(),
            self.ne_longitude.value(),
        );
        let (Some(sw_lat), Some(sw_lon), Some(ne_lat), Some(ne_lon)) = corners else {
            return Err(YelpError::MissingBounds);
        };

        Ok(Parameters::from([(
            "bounds".to_string(),
            format!("{},{}|{},{}", sw_lat, sw_lon, ne_lat, ne_lon),
        )]))
    }
}
