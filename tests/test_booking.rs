use aerolineas::domain::booking::{BookingDesk, leg_flight_code};
use aerolineas::domain::network::graph::default_network;
use aerolineas::error::Error;
use approx::assert_relative_eq;

fn desk() -> BookingDesk {
    BookingDesk::with_seat_seed(default_network(), 42)
}

#[test]
fn transfer_booking_produces_a_two_leg_receipt() {
    let mut desk = desk();
    let receipt = desk.book_itinerary("Buenos Aires", "Santa Cruz").expect("route exists");

    assert_eq!(receipt.itinerary, vec!["Buenos Aires", "Bariloche", "Santa Cruz"]);
    assert!(!receipt.is_direct);
    assert_eq!(receipt.legs.len(), 2);
    assert_eq!(receipt.legs[0].flight_code, "VBUEBAR");
    assert_eq!(receipt.legs[1].flight_code, "VBARSAN");
    assert_eq!(receipt.legs[0].reservation_code, "RES-1000");
    assert_eq!(receipt.legs[1].reservation_code, "RES-1001");

    assert_relative_eq!(receipt.total_time, 4.2);
    // No direct surcharge, occupancy far below the threshold.
    assert_relative_eq!(receipt.final_price, 380_000.0);
    assert_relative_eq!(receipt.average_occupancy, 1.0 / 30.0 * 100.0);
}

#[test]
fn direct_booking_carries_the_twenty_percent_surcharge() {
    let mut desk = desk();
    let receipt = desk.book_itinerary("Buenos Aires", "Córdoba").expect("direct flight exists");

    assert!(receipt.is_direct);
    assert_eq!(receipt.legs.len(), 1);
    assert_relative_eq!(receipt.final_price, 144_000.0);
}

#[test]
fn reservation_codes_grow_monotonically_across_flights() {
    let mut desk = desk();
    let first = desk.book_itinerary("Buenos Aires", "Santa Cruz").expect("route exists");
    let second = desk.book_itinerary("Buenos Aires", "Córdoba").expect("route exists");

    assert_eq!(first.legs[0].reservation_code, "RES-1000");
    assert_eq!(first.legs[1].reservation_code, "RES-1001");
    assert_eq!(second.legs[0].reservation_code, "RES-1002");
}

#[test]
fn unknown_city_is_route_not_found() {
    let mut desk = desk();
    let result = desk.book_itinerary("Buenos Aires", "Atlantis");
    assert!(matches!(result, Err(Error::RouteNotFound { .. })));
}

#[test]
fn booking_to_the_origin_itself_is_route_not_found() {
    let mut desk = desk();
    let result = desk.book_itinerary("Buenos Aires", "Buenos Aires");
    assert!(matches!(result, Err(Error::RouteNotFound { .. })));
}

#[test]
fn a_full_leg_aborts_the_whole_booking_without_partial_commit() {
    let mut desk = desk();

    // Fill the Bariloche - Santa Cruz flight with thirty direct bookings.
    for _ in 0..30 {
        desk.book_itinerary("Bariloche", "Santa Cruz").expect("seats left");
    }
    let full_code = leg_flight_code("Bariloche", "Santa Cruz");
    assert_eq!(desk.flight(&full_code).map(|f| f.seats().occupied_count()), Some(30));

    // The transfer itinerary needs that full flight for its second leg.
    let result = desk.book_itinerary("Buenos Aires", "Santa Cruz");
    match result {
        Err(Error::FlightFull(code)) => assert_eq!(code, full_code),
        other => panic!("expected FlightFull, got {:?}", other.map(|r| r.itinerary)),
    }

    // The first leg must have been rolled back.
    let first_leg = desk.flight(&leg_flight_code("Buenos Aires", "Bariloche")).expect("flight was created");
    assert_eq!(first_leg.seats().occupied_count(), 0);
    assert_eq!(first_leg.reservations().len(), 0);
}

#[test]
fn cancelling_a_reservation_frees_its_seat() {
    let mut desk = desk();
    let receipt = desk.book_itinerary("Buenos Aires", "Bariloche").expect("direct flight exists");
    let leg = &receipt.legs[0];

    assert!(desk.cancel_reservation(&leg.flight_code, &leg.reservation_code));

    let flight = desk.flight(&leg.flight_code).expect("flight still registered");
    assert_eq!(flight.seats().occupied_count(), 0);
    assert!(flight.reservations().find(&leg.reservation_code).is_none());

    // A second cancellation of the same code is a miss.
    assert!(!desk.cancel_reservation(&leg.flight_code, &leg.reservation_code));
    assert!(!desk.cancel_reservation("VXXXYYY", "RES-1000"));
}

#[test]
fn occupancy_report_lists_reservations_in_code_order() {
    let mut desk = desk();
    for _ in 0..5 {
        desk.book_itinerary("Buenos Aires", "Mendoza").expect("seats left");
    }

    let code = leg_flight_code("Buenos Aires", "Mendoza");
    let report = desk.occupancy_report(&code).expect("flight exists");

    assert_eq!(report.occupied, 5);
    assert_eq!(report.total, 30);
    assert!(!report.high_occupancy);
    assert_eq!(report.per_section.iter().map(|(_, n)| n).sum::<usize>(), 5);

    let codes: Vec<&str> = report.reservations.iter().map(|r| r.code()).collect();
    let mut sorted = codes.clone();
    sorted.sort();
    assert_eq!(codes, sorted, "reservations are not in code order");

    assert!(desk.occupancy_report("VXXXYYY").is_none());
}

#[test]
fn explicit_flight_registration_rejects_duplicates() {
    let mut desk = desk();
    desk.register_flight("AR101", "Buenos Aires", "Córdoba").expect("fresh code");

    let result = desk.register_flight("AR101", "Buenos Aires", "Mendoza");
    assert!(matches!(result, Err(Error::DuplicateFlight(_))));

    let flight = desk.flight("AR101").expect("flight registered");
    assert_eq!(flight.origin(), "Buenos Aires");
    assert_eq!(flight.destination(), "Córdoba");
}
