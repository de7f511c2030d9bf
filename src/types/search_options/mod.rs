//! Structured search options and their conversion into query-string parameters.

use std::collections::BTreeMap;

use crate::services::yelp_client::types::yelp_error::YelpError;

pub mod bound_options;
pub mod coordinate_options;
pub mod general_options;
pub mod locale_options;
pub mod location_options;

pub use bound_options::BoundOptions;
pub use coordinate_options::CoordinateOptions;
pub use general_options::GeneralOptions;
pub use locale_options::LocaleOptions;
pub use location_options::{LocationCoordinateOptions, LocationOptions};

/// Query-string key/value pairs, kept sorted so requests are reproducible.
pub type Parameters = BTreeMap<String, String>;

pub trait QueryParameters {
    fn parameters(&self) -> Result<Parameters, YelpError>;
}

/// The single way a search is anchored geographically.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchLocation {
    Location(LocationOptions),
    Coordinate(CoordinateOptions),
    Bound(BoundOptions),
}

impl From<LocationOptions> for SearchLocation {
    fn from(options: LocationOptions) -> Self {
        SearchLocation::Location(options)
    }
}

impl From<CoordinateOptions> for SearchLocation {
    fn from(options: CoordinateOptions) -> Self {
        SearchLocation::Coordinate(options)
    }
}

impl From<BoundOptions> for SearchLocation {
    fn from(options: BoundOptions) -> Self {
        SearchLocation::Bound(options)
    }
}

impl QueryParameters for SearchLocation {
    fn parameters(&self) -> Result<Parameters, YelpError> {
        match self {
            SearchLocation::Location(o) => o.parameters(),
            SearchLocation::Coordinate(o) => o.parameters(),
            SearchLocation::Bound(o) => o.parameters(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchOptions {
    pub location: SearchLocation,
    pub general: Option<GeneralOptions>,
    pub locale: Option<LocaleOptions>,
}

impl SearchOptions {
    pub fn new(location: impl Into<SearchLocation>) -> Self {
        Self {
            location: location.into(),
            general: None,
            locale: None,
        }
    }

    pub fn with_general(mut self, general: GeneralOptions) -> Self {
        self.general = Some(general);
        self
    }

    pub fn with_locale(mut self, locale: LocaleOptions) -> Self {
        self.locale = Some(locale);
        self
    }
}

impl QueryParameters for SearchOptions {
    fn parameters(&self) -> Result<Parameters, YelpError> {
        let mut params = self.location.parameters()?;

        if let Some(general) = &self.general {
            params.extend(general.parameters()?);
        }
        if let Some(locale) = &self.locale {
            params.extend(locale.parameters()?);
        }

        Ok(params)
    }
}
