use std::fmt;

/// One of the three seating zones of the aircraft, each holding ten seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    A,
    B,
    C,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::A, Section::B, Section::C];

    pub fn as_char(self) -> char {
        match self {
            Section::A => 'A',
            Section::B => 'B',
            Section::C => 'C',
        }
    }

    pub fn from_char(c: char) -> Option<Section> {
        match c {
            'A' => Some(Section::A),
            'B' => Some(Section::B),
            'C' => Some(Section::C),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Issues the monotonically increasing reservation codes ("RES-1000",
/// "RES-1001", ...) used as sort keys by the reservation index.
///
/// One sequence serves every flight of a session and never resets while the
/// process lives. It is owned by the booking desk and injected into record
/// construction, so tests can run with predictable codes.
#[derive(Debug)]
pub struct CodeSequence {
    next: u32,
}

impl CodeSequence {
    pub fn new() -> Self {
        Self::starting_at(1000)
    }

    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    pub fn next_code(&mut self) -> String {
        let code = format!("RES-{:04}", self.next);
        self.next += 1;
        code
    }
}

impl Default for CodeSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// A confirmed seat reservation for one leg of an itinerary.
///
/// Immutable once constructed. `code` is unique and strictly increasing
/// across the session, which makes it the natural index key.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationRecord {
    code: String,
    seat: String,
    section: Section,
    seat_number: u8,
    origin: String,
    destination: String,
    flight_code: String,
}

impl ReservationRecord {
    /// Builds a record from a seat string such as "A5".
    ///
    /// The seat string is always produced by the seat map, never by a user.
    /// A malformed string is a precondition violation and panics.
    pub fn new(
        code: String,
        seat: &str,
        origin: impl Into<String>,
        destination: impl Into<String>,
        flight_code: impl Into<String>,
    ) -> Self {
        let section = seat
            .chars()
            .next()
            .and_then(Section::from_char)
            .expect("seat string must start with a section letter");
        let seat_number: u8 = seat[1..].parse().expect("seat string must end with a seat number");
        debug_assert!((1..=10u8).contains(&seat_number), "seat number out of range: {}", seat_number);

        Self {
            code,
            seat: seat.to_string(),
            section,
            seat_number,
            origin: origin.into(),
            destination: destination.into(),
            flight_code: flight_code.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn seat(&self) -> &str {
        &self.seat
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn seat_number(&self) -> u8 {
        self.seat_number
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn flight_code(&self) -> &str {
        &self.flight_code
    }
}

impl fmt::Display for ReservationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Flight {} | {} -> {} | Seat {}",
            self.code, self.flight_code, self.origin, self.destination, self.seat
        )
    }
}
