use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use crate::airport::AirportCode;

pub const SEPARATOR: char = '-';

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteKey {
    pub departure: AirportCode,
    pub arrival: AirportCode,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RouteKeyError {
    #[error("route key is missing the '-' separator")]
    MissingSeparator,
    #[error("route key has more than one '-' separator")]
    ExtraSeparator,
    #[error("route key has an empty airport code")]
    EmptyEndpoint,
}

impl RouteKey {
    pub fn new(departure: AirportCode, arrival: AirportCode) -> RouteKey {
        RouteKey { departure, arrival }
    }

    pub fn reverse(&self) -> RouteKey {
        RouteKey {
            departure: self.arrival.clone(),
            arrival: self.departure.clone(),
        }
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.departure, SEPARATOR, self.arrival)
    }
}

impl FromStr for RouteKey {
    type Err = RouteKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (departure, arrival) = s
            .split_once(SEPARATOR)
            .ok_or(RouteKeyError::MissingSeparator)?;
        if arrival.contains(SEPARATOR) {
            return Err(RouteKeyError::ExtraSeparator);
        }
        if departure.is_empty() || arrival.is_empty() {
            return Err(RouteKeyError::EmptyEndpoint);
        }
        Ok(RouteKey::new(Arc::from(departure), Arc::from(arrival)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> RouteKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_reverse_swaps_endpoints() {
        assert_eq!(key("ORD-SEA").reverse(), key("SEA-ORD"));
    }

    #[test]
    fn test_reverse_twice_is_identity() {
        let k = key("JFK-LAX");
        assert_eq!(k.reverse().reverse(), k);
    }

    #[test]
    fn test_display_round_trips() {
        let k = RouteKey::new(Arc::from("JFK"), Arc::from("LAX"));
        assert_eq!(k.to_string(), "JFK-LAX");
        assert_eq!(key("JFK-LAX"), k);
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        assert_eq!(
            "malformed".parse::<RouteKey>(),
            Err(RouteKeyError::MissingSeparator)
        );
    }

    #[test]
    fn test_parse_rejects_extra_separator() {
        assert_eq!(
            "JFK-LAX-SFO".parse::<RouteKey>(),
            Err(RouteKeyError::ExtraSeparator)
        );
    }

    #[test]
    fn test_parse_rejects_empty_endpoints() {
        assert_eq!("-LAX".parse::<RouteKey>(), Err(RouteKeyError::EmptyEndpoint));
        assert_eq!("JFK-".parse::<RouteKey>(), Err(RouteKeyError::EmptyEndpoint));
        assert_eq!("-".parse::<RouteKey>(), Err(RouteKeyError::EmptyEndpoint));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_reverse_is_an_involution(dep in "[A-Z]{3}", arr in "[A-Z]{3}") {
            let k = RouteKey::new(Arc::from(dep.as_str()), Arc::from(arr.as_str()));
            prop_assert_eq!(k.reverse().reverse(), k);
        }

        #[test]
        fn test_display_parse_round_trip(dep in "[A-Z]{3}", arr in "[A-Z]{3}") {
            let k = RouteKey::new(Arc::from(dep.as_str()), Arc::from(arr.as_str()));
            prop_assert_eq!(k.to_string().parse::<RouteKey>(), Ok(k));
        }
    }
}
