use serde::{Deserialize, Serialize};

/// External definition of a flight network: the city list plus the
/// bidirectional connections between them.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDto {
    pub cities: Vec<String>,

    pub connections: Vec<ConnectionDto>,
}

/// One bidirectional connection; both cities must appear in `cities`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionDto {
    pub from: String,
    pub to: String,

    /// Flight time in hours.
    pub time: f64,

    pub base_price: f64,
}
