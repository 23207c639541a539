use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use crate::api::network_dto::NetworkDto;
use crate::domain::network::city::CityNode;
use crate::domain::network::edge::Edge;
use crate::error::{Error, Result};

/// Tolerance used when deciding whether two cumulative times tie, in which
/// case the cheaper path wins.
const TIME_EPSILON: f64 = 1e-6;

/// Per-city working state of one shortest-route query.
///
/// Kept in a map owned by the query rather than on the `CityNode` itself, so
/// concurrent or repeated queries can never observe stale state.
#[derive(Debug, Clone)]
struct SearchState {
    cumulative_time: f64,
    cumulative_price: f64,
    predecessor: Option<String>,
    visited: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self { cumulative_time: f64::INFINITY, cumulative_price: 0.0, predecessor: None, visited: false }
    }
}

/// Priority-queue entry ordered lexicographically by (time, price).
///
/// Stale duplicates are tolerated in the heap; the visited check filters
/// them out when popped.
#[derive(Debug, Clone)]
struct QueueEntry {
    time: f64,
    price: f64,
    city: String,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time
            .total_cmp(&other.time)
            .then_with(|| self.price.total_cmp(&other.price))
            .then_with(|| self.city.cmp(&other.city))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

/// The flight network graph. Owns every `CityNode` and `Edge`.
#[derive(Debug, Clone, Default)]
pub struct FlightNetwork {
    /// All cities, indexed by their unique name.
    nodes: HashMap<String, CityNode>,
}

impl FlightNetwork {
    pub fn new() -> Self {
        Self { nodes: HashMap::new() }
    }

    /// Seeds the network with city names. Must run before any connection is
    /// added or any query is issued.
    pub fn load_initial_cities<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            self.nodes.entry(name.clone()).or_insert_with(|| CityNode::new(name));
        }
    }

    pub fn city(&self, name: &str) -> Option<&CityNode> {
        self.nodes.get(name)
    }

    pub fn city_count(&self) -> usize {
        self.nodes.len()
    }

    /// Creates the two opposing directional edges between `a` and `b` with
    /// identical time and price. A no-op when either city is unknown;
    /// callers seed valid cities first.
    pub fn add_bidirectional_connection(&mut self, a: &str, b: &str, time: f64, base_price: f64) {
        if !self.nodes.contains_key(a) || !self.nodes.contains_key(b) {
            log::warn!("Skipping connection '{}' <-> '{}': unknown city", a, b);
            return;
        }
        if let Some(node) = self.nodes.get_mut(a) {
            node.add_edge(Edge::new(b, time, base_price));
        }
        if let Some(node) = self.nodes.get_mut(b) {
            node.add_edge(Edge::new(a, time, base_price));
        }
    }

    /// The direct edge from `from` to `to`, if one exists.
    pub fn leg_between(&self, from: &str, to: &str) -> Option<&Edge> {
        self.nodes.get(from)?.adjacency.iter().find(|edge| edge.to == to)
    }

    /// Classic queue-based breadth-first traversal. Returns every reachable
    /// city exactly once, in visitation order starting with `start`; empty
    /// when `start` is unknown.
    pub fn breadth_first_reachable(&self, start: &str) -> Vec<String> {
        let mut result = Vec::new();
        let Some((start_key, _)) = self.nodes.get_key_value(start) else {
            return result;
        };

        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        visited.insert(start_key);
        queue.push_back(start_key);

        while let Some(current) = queue.pop_front() {
            result.push(current.to_string());
            if let Some(node) = self.nodes.get(current) {
                for edge in &node.adjacency {
                    if visited.insert(edge.to.as_str()) {
                        queue.push_back(edge.to.as_str());
                    }
                }
            }
        }
        result
    }

    /// Recursive depth-first traversal following adjacency insertion order.
    /// Empty when `start` is unknown.
    pub fn depth_first_reachable(&self, start: &str) -> Vec<String> {
        let mut result = Vec::new();
        let Some((start_key, _)) = self.nodes.get_key_value(start) else {
            return result;
        };

        let mut visited: HashSet<&str> = HashSet::new();
        self.dfs_visit(start_key, &mut visited, &mut result);
        result
    }

    fn dfs_visit<'a>(&'a self, current: &'a str, visited: &mut HashSet<&'a str>, result: &mut Vec<String>) {
        visited.insert(current);
        result.push(current.to_string());
        if let Some(node) = self.nodes.get(current) {
            for edge in &node.adjacency {
                if !visited.contains(edge.to.as_str()) {
                    self.dfs_visit(&edge.to, visited, result);
                }
            }
        }
    }

    /// Dual-criterion Dijkstra: minimizes cumulative time, breaking ties
    /// (within `TIME_EPSILON`) by cumulative price.
    ///
    /// Returns the ordered city sequence from `origin` to `destination`, or
    /// an empty vector when either city is unknown or the destination is
    /// unreachable.
    pub fn shortest_route(&self, origin: &str, destination: &str) -> Vec<String> {
        if !self.nodes.contains_key(origin) || !self.nodes.contains_key(destination) {
            return Vec::new();
        }

        let mut states: HashMap<String, SearchState> = HashMap::new();
        states.entry(origin.to_string()).or_default().cumulative_time = 0.0;

        let mut queue: BinaryHeap<Reverse<QueueEntry>> = BinaryHeap::new();
        queue.push(Reverse(QueueEntry { time: 0.0, price: 0.0, city: origin.to_string() }));

        while let Some(Reverse(entry)) = queue.pop() {
            let city = entry.city;
            {
                let state = states.entry(city.clone()).or_default();
                if state.visited {
                    // Stale duplicate left over from an earlier relaxation.
                    continue;
                }
                state.visited = true;
            }
            if city == destination {
                break;
            }

            let Some(node) = self.nodes.get(&city) else {
                continue;
            };
            let (current_time, current_price) = {
                let state = &states[&city];
                (state.cumulative_time, state.cumulative_price)
            };

            for edge in &node.adjacency {
                let new_time = current_time + edge.time;
                let new_price = current_price + edge.base_price;

                let neighbor = states.entry(edge.to.clone()).or_default();
                if neighbor.visited {
                    continue;
                }
                let improves = new_time < neighbor.cumulative_time
                    || ((new_time - neighbor.cumulative_time).abs() < TIME_EPSILON
                        && new_price < neighbor.cumulative_price);
                if improves {
                    neighbor.cumulative_time = new_time;
                    neighbor.cumulative_price = new_price;
                    neighbor.predecessor = Some(city.clone());
                    queue.push(Reverse(QueueEntry { time: new_time, price: new_price, city: edge.to.clone() }));
                }
            }
        }

        // Walk the predecessor chain back from the destination.
        let mut route: VecDeque<String> = VecDeque::new();
        let mut cursor = Some(destination.to_string());
        while let Some(name) = cursor {
            cursor = states.get(&name).and_then(|state| state.predecessor.clone());
            route.push_front(name);
        }
        if route.front().map(String::as_str) != Some(origin) {
            // The destination was never reached.
            return Vec::new();
        }
        route.into()
    }

    /// Builds a network from a parsed definition file. Unlike the in-memory
    /// seeding calls, a definition file is external input, so a connection
    /// naming an unknown city is an error rather than a silent no-op.
    pub fn from_dto(dto: NetworkDto) -> Result<Self> {
        let mut network = FlightNetwork::new();
        network.load_initial_cities(dto.cities);
        for connection in dto.connections {
            if !network.nodes.contains_key(&connection.from) {
                return Err(Error::InvalidNetwork(format!("connection references unknown city '{}'", connection.from)));
            }
            if !network.nodes.contains_key(&connection.to) {
                return Err(Error::InvalidNetwork(format!("connection references unknown city '{}'", connection.to)));
            }
            network.add_bidirectional_connection(&connection.from, &connection.to, connection.time, connection.base_price);
        }
        log::info!("Network built: {} cities, {} connections", network.city_count(), network.nodes.values().map(|n| n.adjacency.len()).sum::<usize>() / 2);
        Ok(network)
    }
}

/// Seeds the seven-city reference network: Buenos Aires as the hub plus the
/// transfer connections. There is no direct Buenos Aires - Santa Cruz flight.
pub fn default_network() -> FlightNetwork {
    let mut network = FlightNetwork::new();
    network.load_initial_cities([
        "Buenos Aires",
        "Córdoba",
        "Mendoza",
        "Bariloche",
        "Santa Cruz",
        "Santa Fe",
        "Posadas",
    ]);

    network.add_bidirectional_connection("Buenos Aires", "Córdoba", 1.2, 120_000.0);
    network.add_bidirectional_connection("Buenos Aires", "Mendoza", 1.7, 150_000.0);
    network.add_bidirectional_connection("Buenos Aires", "Bariloche", 2.2, 220_000.0);
    network.add_bidirectional_connection("Buenos Aires", "Santa Fe", 1.0, 100_000.0);
    network.add_bidirectional_connection("Buenos Aires", "Posadas", 1.5, 140_000.0);

    network.add_bidirectional_connection("Córdoba", "Mendoza", 1.1, 90_000.0);
    network.add_bidirectional_connection("Córdoba", "Santa Fe", 0.8, 70_000.0);
    network.add_bidirectional_connection("Mendoza", "Bariloche", 1.6, 120_000.0);
    network.add_bidirectional_connection("Bariloche", "Santa Cruz", 2.0, 160_000.0);
    network.add_bidirectional_connection("Mendoza", "Santa Cruz", 2.6, 170_000.0);
    network.add_bidirectional_connection("Santa Fe", "Posadas", 1.2, 80_000.0);

    network
}
