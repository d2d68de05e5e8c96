//! Enumerations with their wire values.

use serde::{Deserialize, Serialize};

use crate::error::MapsError;

macro_rules! api_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $api:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $api)] $variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn api_value(&self) -> &'static str {
                match self {
                    $($name::$variant => $api,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.api_value())
            }
        }

        impl std::str::FromStr for $name {
            type Err = MapsError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.api_value().eq_ignore_ascii_case(value.trim()))
                    .ok_or_else(|| MapsError::invalid(format!("unknown {} '{}'", stringify!($name), value)))
            }
        }
    };
}

api_enum! {
    /// Point-of-interest categories used to filter searches.
    PoiCategory {
        Airport => "Airport",
        AirportGate => "AirportGate",
        AirportTerminal => "AirportTerminal",
        AmusementPark => "AmusementPark",
        Atm => "ATM",
        Aquarium => "Aquarium",
        Bakery => "Bakery",
        Bank => "Bank",
        Beach => "Beach",
        Brewery => "Brewery",
        Bowling => "Bowling",
        Cafe => "Cafe",
        Campground => "Campground",
        CarRental => "CarRental",
        EvCharger => "EVCharger",
        FireStation => "FireStation",
        FitnessCenter => "FitnessCenter",
        FoodMarket => "FoodMarket",
        GasStation => "GasStation",
        Hospital => "Hospital",
        Hotel => "Hotel",
        Laundry => "Laundry",
        Library => "Library",
        Marina => "Marina",
        MovieTheater => "MovieTheater",
        Museum => "Museum",
        NationalPark => "NationalPark",
        Nightlife => "Nightlife",
        Park => "Park",
        Parking => "Parking",
        Pharmacy => "Pharmacy",
        Playground => "Playground",
        Police => "Police",
        PostOffice => "PostOffice",
        PublicTransport => "PublicTransport",
        ReligiousSite => "ReligiousSite",
        Restaurant => "Restaurant",
        Restroom => "Restroom",
        School => "School",
        Stadium => "Stadium",
        Store => "Store",
        Theater => "Theater",
        University => "University",
        Winery => "Winery",
        Zoo => "Zoo",
        Landmark => "Landmark",
    }
}

api_enum! {
    AddressCategory {
        Country => "Country",
        AdministrativeArea => "AdministrativeArea",
        SubAdministrativeArea => "SubAdministrativeArea",
        Locality => "Locality",
        SubLocality => "SubLocality",
        PostalCode => "PostalCode",
    }
}

api_enum! {
    /// Result types accepted by `resultTypeFilter` on search.
    SearchResultType {
        Poi => "poi",
        Address => "address",
        PhysicalFeature => "physicalFeature",
        PointOfInterest => "pointOfInterest",
    }
}

api_enum! {
    /// Result types accepted by `resultTypeFilter` on autocomplete.
    SearchAcResultType {
        Poi => "poi",
        Address => "address",
        PhysicalFeature => "physicalFeature",
        PointOfInterest => "pointOfInterest",
        Query => "query",
    }
}

api_enum! {
    SearchRegionPriority {
        Default => "default",
        Required => "required",
    }
}

api_enum! {
    TransportType {
        Automobile => "Automobile",
        Transit => "Transit",
        Walking => "Walking",
        Cycling => "Cycling",
    }
}

api_enum! {
    DirectionsAvoid {
        Tolls => "Tolls",
    }
}

api_enum! {
    PlaceLookupErrorCode {
        FailedInvalidId => "FAILED_INVALID_ID",
        FailedNotFound => "FAILED_NOT_FOUND",
        FailedInternalError => "FAILED_INTERNAL_ERROR",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_values_round_through_from_str() {
        assert_eq!("EVCharger".parse::<PoiCategory>().unwrap(), PoiCategory::EvCharger);
        assert_eq!("evcharger".parse::<PoiCategory>().unwrap(), PoiCategory::EvCharger);
        assert_eq!(TransportType::Walking.to_string(), "Walking");
        assert!("Hovercraft".parse::<TransportType>().is_err());
    }

    #[test]
    fn serde_uses_api_values() {
        assert_eq!(serde_json::to_string(&PoiCategory::Atm).unwrap(), "\"ATM\"");
        let code: PlaceLookupErrorCode = serde_json::from_str("\"FAILED_NOT_FOUND\"").unwrap();
        assert_eq!(code, PlaceLookupErrorCode::FailedNotFound);
    }
}
