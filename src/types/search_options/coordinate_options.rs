use crate::{
    services::yelp_client::types::yelp_error::YelpError,
    types::nullable::Float,
};

use super::{Parameters, QueryParameters};

/// Geographic search point, sent as
/// `ll=latitude,longitude,accuracy,altitude,altitude_accuracy`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoordinateOptions {
    pub latitude: Float,
    pub longitude: Float,
    pub accuracy: Float,
    pub altitude: Float,
    pub altitude_accuracy: Float,
}

impl CoordinateOptions {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
            ..Default::default()
        }
    }

    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = accuracy.into();
        self
    }

    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = altitude.into();
        self
    }

    pub fn with_altitude_accuracy(mut self, altitude_accuracy: f64) -> Self {
        self.altitude_accuracy = altitude_accuracy.into();
        self
    }
}

impl QueryParameters for CoordinateOptions {
    fn parameters(&self) -> Result<Parameters, YelpError> {
        let (Some(latitude), Some(longitude)) = (self.latitude.value(), self.longitude.value())
        else {
            return Err(YelpError::MissingCoordinates);
        };

        // Optional fields are appended only when present, so a skipped field
        // leaves no empty slot behind.
        let mut ll = format!("{},{}", latitude, longitude);
        for field in [&self.accuracy, &self.altitude, &self.altitude_accuracy] {
            if let Some(v) = field.to_param() {
                ll.push(',');
                ll.push_str(&v);
            }
        }

        Ok(Parameters::from([("ll".to_string(), ll)]))
    }
}
