use std::collections::HashMap;

use crate::domain::flight::flight::Flight;
use crate::domain::flight::seat_map::TOTAL_SEATS;
use crate::domain::network::graph::FlightNetwork;
use crate::domain::pricing;
use crate::domain::reservation::record::{CodeSequence, ReservationRecord, Section};
use crate::error::{Error, Result};

/// One confirmed leg of a booked itinerary.
#[derive(Debug, Clone)]
pub struct LegReservation {
    pub flight_code: String,
    pub origin: String,
    pub destination: String,
    pub seat: String,
    pub reservation_code: String,
}

/// The outcome of a successful multi-leg booking.
#[derive(Debug, Clone)]
pub struct BookingReceipt {
    /// Ordered city sequence, origin first.
    pub itinerary: Vec<String>,
    pub legs: Vec<LegReservation>,
    pub is_direct: bool,
    /// Total flight time in hours across all legs.
    pub total_time: f64,
    /// True average of per-leg occupancy, measured after seat assignment.
    pub average_occupancy: f64,
    pub final_price: f64,
}

/// Occupancy snapshot of one flight, with its reservations listed in
/// ascending code order.
#[derive(Debug, Clone)]
pub struct OccupancyReport {
    pub flight_code: String,
    pub occupied: usize,
    pub total: usize,
    pub occupancy_percent: f64,
    pub high_occupancy: bool,
    pub per_section: Vec<(Section, usize)>,
    pub reservations: Vec<ReservationRecord>,
}

/// The airline front desk: owns the flight network, the active flights and
/// the session-wide reservation code sequence.
#[derive(Debug)]
pub struct BookingDesk {
    network: FlightNetwork,
    /// Active flights by flight code.
    flights: HashMap<String, Flight>,
    codes: CodeSequence,
    /// When set, flights created by this desk assign seats deterministically.
    seat_seed: Option<u64>,
}

impl BookingDesk {
    pub fn new(network: FlightNetwork) -> Self {
        Self { network, flights: HashMap::new(), codes: CodeSequence::new(), seat_seed: None }
    }

    /// Deterministic variant for tests and reproducible runs.
    pub fn with_seat_seed(network: FlightNetwork, seed: u64) -> Self {
        Self { seat_seed: Some(seed), ..Self::new(network) }
    }

    pub fn network(&self) -> &FlightNetwork {
        &self.network
    }

    pub fn flight(&self, code: &str) -> Option<&Flight> {
        self.flights.get(code)
    }

    pub fn flights(&self) -> impl Iterator<Item = &Flight> {
        self.flights.values()
    }

    /// Explicitly registers a direct flight under a caller-chosen code.
    pub fn register_flight(&mut self, code: &str, origin: &str, destination: &str) -> Result<()> {
        if self.flights.contains_key(code) {
            return Err(Error::DuplicateFlight(code.to_string()));
        }
        let flight = self.new_flight(code, origin, destination);
        self.flights.insert(code.to_string(), flight);
        log::info!("Registered flight {}: {} -> {}", code, origin, destination);
        Ok(())
    }

    /// Books the fastest itinerary between two cities, assigning one
    /// balanced seat per leg and indexing the resulting reservations.
    ///
    /// A full flight on any leg aborts the whole booking: reservations
    /// already committed for earlier legs are cancelled again, so a partial
    /// itinerary never survives.
    pub fn book_itinerary(&mut self, origin: &str, destination: &str) -> Result<BookingReceipt> {
        let route = self.network.shortest_route(origin, destination);
        if route.len() < 2 {
            return Err(Error::RouteNotFound { origin: origin.to_string(), destination: destination.to_string() });
        }
        let is_direct = route.len() == 2;
        log::info!("Booking itinerary {} ({})", route.join(" -> "), if is_direct { "direct" } else { "with transfer" });

        let mut legs: Vec<LegReservation> = Vec::new();
        for pair in route.windows(2) {
            let (from, to) = (pair[0].as_str(), pair[1].as_str());
            let flight_code = leg_flight_code(from, to);

            let seed = self.seat_seed;
            let flight = self
                .flights
                .entry(flight_code.clone())
                .or_insert_with(|| match seed {
                    Some(seed) => Flight::with_seed(flight_code.as_str(), from, to, seed),
                    None => Flight::new(flight_code.as_str(), from, to),
                });

            let Some(seat) = flight.assign_balanced_seat() else {
                log::warn!("Flight {} is full; rolling back {} committed leg(s)", flight_code, legs.len());
                self.rollback(&legs);
                return Err(Error::FlightFull(flight_code));
            };

            let record = ReservationRecord::new(self.codes.next_code(), &seat, from, to, flight_code.as_str());
            let leg = LegReservation {
                flight_code: flight_code.clone(),
                origin: from.to_string(),
                destination: to.to_string(),
                seat,
                reservation_code: record.code().to_string(),
            };
            if let Some(flight) = self.flights.get_mut(&flight_code) {
                flight.confirm(record);
            }
            legs.push(leg);
        }

        let mut occupancy_sum = 0.0;
        let mut leg_base_prices = Vec::with_capacity(legs.len());
        let mut total_time = 0.0;
        for leg in &legs {
            let flight = self.flights.get(&leg.flight_code).expect("leg flight was just created");
            occupancy_sum += flight.occupancy_percent();

            let edge = self
                .network
                .leg_between(&leg.origin, &leg.destination)
                .expect("route legs follow existing edges");
            leg_base_prices.push(edge.base_price);
            total_time += edge.time;
        }
        let average_occupancy = occupancy_sum / legs.len() as f64;
        let final_price = pricing::final_price(&leg_base_prices, is_direct, average_occupancy);

        log::info!(
            "Itinerary booked: {} leg(s), {:.1} h, avg occupancy {:.1}%, final price {:.2}",
            legs.len(),
            total_time,
            average_occupancy,
            final_price
        );

        Ok(BookingReceipt { itinerary: route, legs, is_direct, total_time, average_occupancy, final_price })
    }

    /// Cancels one reservation on one flight, freeing its seat. `false` when
    /// the flight or the reservation code is unknown.
    pub fn cancel_reservation(&mut self, flight_code: &str, reservation_code: &str) -> bool {
        self.flights
            .get_mut(flight_code)
            .and_then(|flight| flight.cancel(reservation_code))
            .is_some()
    }

    /// Per-section occupancy plus the in-order reservation listing of a
    /// flight. `None` when the flight code is unknown.
    pub fn occupancy_report(&self, flight_code: &str) -> Option<OccupancyReport> {
        let flight = self.flights.get(flight_code)?;
        Some(OccupancyReport {
            flight_code: flight.code().to_string(),
            occupied: flight.seats().occupied_count(),
            total: TOTAL_SEATS,
            occupancy_percent: flight.occupancy_percent(),
            high_occupancy: flight.is_high_occupancy(),
            per_section: Section::ALL.iter().map(|s| (*s, flight.seats().section_occupancy(*s))).collect(),
            reservations: flight.reservations().in_order().into_iter().cloned().collect(),
        })
    }

    fn new_flight(&self, code: &str, origin: &str, destination: &str) -> Flight {
        match self.seat_seed {
            Some(seed) => Flight::with_seed(code, origin, destination, seed),
            None => Flight::new(code, origin, destination),
        }
    }

    fn rollback(&mut self, legs: &[LegReservation]) {
        for leg in legs {
            if let Some(flight) = self.flights.get_mut(&leg.flight_code) {
                flight.cancel(&leg.reservation_code);
            }
        }
    }
}

/// Derives the implicit flight code of a route leg from the city pair:
/// "V" plus the first three letters of each city, uppercased
/// (Buenos Aires -> Bariloche gives "VBUEBAR").
pub fn leg_flight_code(origin: &str, destination: &str) -> String {
    let prefix = |name: &str| name.chars().take(3).flat_map(char::to_uppercase).collect::<String>();
    format!("V{}{}", prefix(origin), prefix(destination))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leg_flight_codes_use_city_prefixes() {
        assert_eq!(leg_flight_code("Buenos Aires", "Bariloche"), "VBUEBAR");
        assert_eq!(leg_flight_code("Bariloche", "Santa Cruz"), "VBARSAN");
        assert_eq!(leg_flight_code("Córdoba", "Mendoza"), "VCÓRMEN");
    }
}
