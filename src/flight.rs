use std::fmt;
use std::fmt::Formatter;
use serde::{Deserialize, Serialize};
use tabled::Tabled;
use crate::airport::AirportCode;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub airline: String,
    pub number: String,
    pub departure_airport: AirportCode,
    pub arrival_airport: AirportCode,
    #[serde(default)]
    #[tabled(display("display_plane"))]
    pub plane: Option<String>,
}

fn display_plane(plane: &Option<String>) -> String {
    plane.clone().unwrap_or_default()
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} to {}",
            self.airline, self.number, self.departure_airport, self.arrival_airport
        )?;
        if let Some(plane) = &self.plane {
            write!(f, " on a {}", plane)?;
        }
        Ok(())
    }
}
