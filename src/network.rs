use crate::airport::{Airport, AirportCode};
use crate::flight::Flight;
use crate::route::RouteKey;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::Path;

pub struct Network {
    airports: HashMap<AirportCode, Airport>,
    routes: HashMap<RouteKey, Vec<Flight>>,
    visited: HashSet<AirportCode>,
}

impl Network {
    pub fn new() -> Network {
        Network {
            airports: HashMap::new(),
            routes: HashMap::new(),
            visited: HashSet::new(),
        }
    }

    pub fn load_from_files(airports_path: &Path, flights_path: &Path) -> io::Result<Network> {
        let airports: Vec<Airport> =
            serde_json::from_str(&std::fs::read_to_string(airports_path)?)?;
        let flights: Vec<Flight> = serde_json::from_str(&std::fs::read_to_string(flights_path)?)?;
        log::debug!("{} airport records from {}", airports.len(), airports_path.display());
        log::debug!("{} flight records from {}", flights.len(), flights_path.display());

        let mut network = Network::new();
        network.ingest_airports(airports);
        network.ingest_flights(flights);
        Ok(network)
    }

    pub fn ingest_airports(&mut self, airports: Vec<Airport>) {
        for airport in airports {
            // Duplicate codes: the later record replaces the earlier one
            if let Some(previous) = self.airports.insert(airport.code.clone(), airport) {
                log::warn!(
                    "airport {} appears more than once, keeping the later record",
                    previous.code
                );
            }
        }
    }

    pub fn ingest_flights(&mut self, flights: Vec<Flight>) {
        for flight in flights {
            self.visited.insert(flight.departure_airport.clone());
            self.visited.insert(flight.arrival_airport.clone());

            // Flights are stored under their own direction only; the reverse
            // bucket is consulted at query time, never on ingest
            let key = RouteKey::new(
                flight.departure_airport.clone(),
                flight.arrival_airport.clone(),
            );
            self.routes.entry(key).or_default().push(flight);
        }
    }

    pub fn route_count(&self, key: &RouteKey) -> usize {
        let one_way = |k: &RouteKey| self.routes.get(k).map_or(0, Vec::len);
        one_way(key) + one_way(&key.reverse())
    }

    pub fn flights_for_route(&self, key: &RouteKey) -> Vec<&Flight> {
        self.routes
            .get(&key.reverse())
            .into_iter()
            .chain(self.routes.get(key))
            .flatten()
            .collect()
    }

    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.airports.get(code)
    }

    pub fn visited_airports(&self) -> Vec<&AirportCode> {
        let mut codes = self.visited.iter().collect::<Vec<_>>();
        codes.sort();
        codes
    }

    pub fn routes(&self) -> impl Iterator<Item = (&RouteKey, &[Flight])> {
        self.routes.iter().map(|(key, bucket)| (key, bucket.as_slice()))
    }
}
