/// A directional flight connection between two cities.
///
/// Bidirectional connectivity is modeled as two opposing `Edge`s created
/// together (see `FlightNetwork::add_bidirectional_connection`).
#[derive(Debug, Clone)]
pub struct Edge {
    /// Key into `FlightNetwork.nodes`.
    pub to: String,

    /// Flight time in hours. Always > 0.
    pub time: f64,

    /// Base ticket price for this leg, before any surcharge.
    pub base_price: f64,
}

impl Edge {
    pub fn new(to: impl Into<String>, time: f64, base_price: f64) -> Self {
        Self { to: to.into(), time, base_price }
    }
}
