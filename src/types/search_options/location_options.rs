use validator::Validate;

use crate::{
    services::yelp_client::types::yelp_error::YelpError,
    types::nullable::Float,
};

use super::{Parameters, QueryParameters};

/// Free-text location search, e.g. a neighbourhood, address or city.
#[derive(Clone, Debug, Default, PartialEq, Validate)]
pub struct LocationOptions {
    #[validate(length(min = 1, message = "location must be specified"))]
    pub location: String,

    /// Hint used to disambiguate the text location.
    pub coordinates: Option<LocationCoordinateOptions>,
}

/// Sent as `cll=latitude,longitude` alongside a text location.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocationCoordinateOptions {
    pub latitude: Float,
    pub longitude: Float,
}

impl LocationOptions {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            coordinates: None,
        }
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinates = Some(LocationCoordinateOptions {
            latitude: latitude.into(),
            longitude: longitude.into(),
        });
        self
    }
}

impl QueryParameters for LocationOptions {
    fn parameters(&self) -> Result<Parameters, YelpError> {
        self.validate().map_err(|_| YelpError::UnspecifiedLocation)?;

        let mut params = Parameters::from([("location".to_string(), self.location.clone())]);

        if let Some(coordinates) = &self.coordinates {
            params.extend(coordinates.parameters()?);
        }

        Ok(params)
    }
}

impl QueryParameters for LocationCoordinateOptions {
    fn parameters(&self) -> Result<Parameters, YelpError> {
        let (Some(latitude), Some(longitude)) = (self.latitude.value(), self.longitude.value())
        else {
            return Err(YelpError::MissingCoordinates);
        };

        Ok(Parameters::from([(
            "cll".to_string(),
            format!("{},{}", latitude, longitude),
        )]))
    }
}
