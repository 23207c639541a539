pub mod booking;
pub mod flight;
pub mod network;
pub mod pricing;
pub mod reservation;
