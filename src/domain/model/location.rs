use serde::{Deserialize, Serialize};

use crate::error::{MapsError, Result};

const MIN_LATITUDE: f64 = -90.0;
const MAX_LATITUDE: f64 = 90.0;
const MIN_LONGITUDE: f64 = -180.0;
const MAX_LONGITUDE: f64 = 180.0;

/// A validated coordinate. Accepts `lat`/`lng` as aliases when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLocation")]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawLocation {
    #[serde(alias = "lat")]
    latitude: f64,
    #[serde(alias = "lng")]
    longitude: f64,
}

impl TryFrom<RawLocation> for Location {
    type Error = MapsError;

    fn try_from(raw: RawLocation) -> Result<Self> {
        Location::new(raw.latitude, raw.longitude)
    }
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        validate_latitude_longitude(latitude, longitude)?;
        Ok(Self { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

pub(crate) fn validate_latitude_longitude(latitude: f64, longitude: f64) -> Result<()> {
    validate_coordinate(latitude, "latitude", MIN_LATITUDE, MAX_LATITUDE)?;
    validate_coordinate(longitude, "longitude", MIN_LONGITUDE, MAX_LONGITUDE)
}

fn validate_coordinate(value: f64, label: &str, minimum: f64, maximum: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(MapsError::invalid(format!("{} must be a finite value.", label)));
    }
    if value < minimum || value > maximum {
        return Err(MapsError::invalid(format!("{} must be between {:?} and {:?}.", label, minimum, maximum)));
    }
    Ok(())
}

/// Renders like `37.7796095,-122.4016725`; whole numbers keep a `.0`.
fn format_coordinate_pair(latitude: f64, longitude: f64) -> String {
    format!("{:?},{:?}", latitude, longitude)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRegion {
    pub north_latitude: f64,
    pub east_longitude: f64,
    pub south_latitude: f64,
    pub west_longitude: f64,
}

/// Bounding box hint sent as `searchRegion=n,e,s,w`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRegion(String);

impl SearchRegion {
    pub fn new(coordinate_bounds: impl Into<String>) -> Self {
        Self(coordinate_bounds.into())
    }

    pub fn from_bounds(north_latitude: f64, east_longitude: f64, south_latitude: f64, west_longitude: f64) -> Self {
        Self(format!(
            "{:?},{:?},{:?},{:?}",
            north_latitude, east_longitude, south_latitude, west_longitude
        ))
    }

    pub fn from_map_region(region: &MapRegion) -> Self {
        Self::from_bounds(
            region.north_latitude,
            region.east_longitude,
            region.south_latitude,
            region.west_longitude,
        )
    }

    pub fn to_query_string(&self) -> &str {
        &self.0
    }
}

macro_rules! coordinate_hint {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            pub fn new(coordinate_pair: impl Into<String>) -> Self {
                Self(coordinate_pair.into())
            }

            pub fn from_latitude_longitude(latitude: f64, longitude: f64) -> Result<Self> {
                validate_latitude_longitude(latitude, longitude)?;
                Ok(Self(format_coordinate_pair(latitude, longitude)))
            }

            pub fn to_query_string(&self) -> &str {
                &self.0
            }
        }
    };
}

coordinate_hint!(
    /// Location around which results are searched.
    SearchLocation
);
coordinate_hint!(
    /// Where the user is, used to rank results.
    UserLocation
);
coordinate_hint!(
    /// Coordinate used by the routing endpoints.
    RouteLocation
);

/// Directions origin or destination: an address or a coordinate pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionsEndpoint(String);

impl DirectionsEndpoint {
    pub fn from_address(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn from_latitude_longitude(latitude: f64, longitude: f64) -> Result<Self> {
        validate_latitude_longitude(latitude, longitude)?;
        Ok(Self(format_coordinate_pair(latitude, longitude)))
    }

    pub fn to_query_string(&self) -> &str {
        &self.0
    }
}
