use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

pub type AirportCode = Arc<str>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Airport {
    pub code: AirportCode,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code, self.name)
    }
}
