use crate::domain::network::edge::Edge;

/// A vertex of the flight network: a city and its outgoing connections.
///
/// The node carries static structure only. Per-query search state lives in a
/// scratch map owned by the query (see `graph.rs`), so no transient fields
/// have to be reset between searches.
#[derive(Debug, Clone)]
pub struct CityNode {
    /// Unique, case-sensitive city name.
    pub name: String,

    /// Outgoing connections in insertion order. Targets are keys into
    /// `FlightNetwork.nodes`.
    pub adjacency: Vec<Edge>,
}

impl CityNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), adjacency: Vec::new() }
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.adjacency.push(edge);
    }
}
