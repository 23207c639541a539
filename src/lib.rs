use crate::api::network_dto::NetworkDto;
use crate::domain::network::graph::FlightNetwork;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Builds a flight network from a JSON definition file.
pub fn network_from_file(file_path: &str) -> Result<FlightNetwork> {
    let dto: NetworkDto = parse_json_file::<NetworkDto>(file_path)?;
    log::info!("Network definition parsed successfully.");

    let network = FlightNetwork::from_dto(dto)?;
    Ok(network)
}
