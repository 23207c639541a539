use crate::domain::flight::seat_map::SeatMap;
use crate::domain::reservation::index::ReservationIndex;
use crate::domain::reservation::record::ReservationRecord;

/// A flight between two cities, aggregating its reservation index and seat
/// map. Flights are created on demand (explicitly or per itinerary leg) and
/// live for the whole session.
#[derive(Debug)]
pub struct Flight {
    code: String,
    origin: String,
    destination: String,
    reservations: ReservationIndex,
    seats: SeatMap,
}

impl Flight {
    pub fn new(code: impl Into<String>, origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self::with_seat_map(code, origin, destination, SeatMap::new())
    }

    /// Deterministic-seat variant for tests and reproducible runs.
    pub fn with_seed(code: impl Into<String>, origin: impl Into<String>, destination: impl Into<String>, seed: u64) -> Self {
        Self::with_seat_map(code, origin, destination, SeatMap::with_seed(seed))
    }

    fn with_seat_map(code: impl Into<String>, origin: impl Into<String>, destination: impl Into<String>, seats: SeatMap) -> Self {
        Self {
            code: code.into(),
            origin: origin.into(),
            destination: destination.into(),
            reservations: ReservationIndex::new(),
            seats,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn reservations(&self) -> &ReservationIndex {
        &self.reservations
    }

    pub fn seats(&self) -> &SeatMap {
        &self.seats
    }

    pub fn assign_balanced_seat(&mut self) -> Option<String> {
        self.seats.assign_balanced_seat()
    }

    /// Stores a confirmed reservation in the flight's index.
    pub fn confirm(&mut self, record: ReservationRecord) {
        log::debug!("Flight {}: confirmed {}", self.code, record);
        self.reservations.insert(record);
    }

    /// Removes a reservation and frees its seat. `None` when the code is
    /// unknown on this flight.
    pub fn cancel(&mut self, reservation_code: &str) -> Option<ReservationRecord> {
        let record = self.reservations.remove(reservation_code)?;
        self.seats.release(record.seat());
        log::debug!("Flight {}: cancelled {}", self.code, record.code());
        Some(record)
    }

    pub fn occupancy_percent(&self) -> f64 {
        self.seats.occupancy_percent()
    }

    pub fn is_high_occupancy(&self) -> bool {
        self.seats.is_high_occupancy()
    }
}
