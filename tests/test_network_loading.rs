use std::fs;
use std::path::PathBuf;

use aerolineas::error::Error;
use aerolineas::network_from_file;

fn write_temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("aerolineas-{}-{}", std::process::id(), name));
    fs::write(&path, contents).expect("temp file is writable");
    path
}

const VALID_NETWORK: &str = r#"{
    "cities": ["Buenos Aires", "Rosario", "Salta"],
    "connections": [
        { "from": "Buenos Aires", "to": "Rosario", "time": 0.8, "basePrice": 60000.0 },
        { "from": "Rosario", "to": "Salta", "time": 1.9, "basePrice": 110000.0 }
    ]
}"#;

#[test]
fn a_valid_definition_builds_a_queryable_network() {
    let path = write_temp_file("valid.json", VALID_NETWORK);
    let network = network_from_file(path.to_str().expect("utf-8 path")).expect("definition is valid");
    let _ = fs::remove_file(&path);

    assert_eq!(network.city_count(), 3);
    let route = network.shortest_route("Buenos Aires", "Salta");
    assert_eq!(route, vec!["Buenos Aires", "Rosario", "Salta"]);

    // Connections are bidirectional.
    assert!(network.leg_between("Rosario", "Buenos Aires").is_some());
}

#[test]
fn a_connection_naming_an_unknown_city_is_rejected() {
    let definition = r#"{
        "cities": ["Buenos Aires"],
        "connections": [
            { "from": "Buenos Aires", "to": "Rosario", "time": 0.8, "basePrice": 60000.0 }
        ]
    }"#;
    let path = write_temp_file("unknown-city.json", definition);
    let result = network_from_file(path.to_str().expect("utf-8 path"));
    let _ = fs::remove_file(&path);

    assert!(matches!(result, Err(Error::InvalidNetwork(_))));
}

#[test]
fn malformed_json_is_a_deserialization_error() {
    let path = write_temp_file("malformed.json", "{ not json");
    let result = network_from_file(path.to_str().expect("utf-8 path"));
    let _ = fs::remove_file(&path);

    assert!(matches!(result, Err(Error::DeserializationError(_))));
}

#[test]
fn a_missing_file_is_an_io_error() {
    let result = network_from_file("/nonexistent/aerolineas-network.json");
    assert!(matches!(result, Err(Error::IoError(_))));
}
