pub mod flight;
pub mod seat_map;
