use clap::Parser;

use aerolineas::domain::booking::BookingDesk;
use aerolineas::domain::network::graph::default_network;
use aerolineas::{logger, network_from_file};

/// Books a seat on the fastest itinerary between two cities of the flight
/// network.
#[derive(Parser, Debug)]
#[command(name = "aerolineas", about = "Flight network queries and balanced seat reservations")]
struct Args {
    /// Origin city
    #[arg(default_value = "Buenos Aires")]
    origin: String,

    /// Destination city
    #[arg(default_value = "Santa Cruz")]
    destination: String,

    /// Network definition JSON; the built-in seven-city dataset is used when omitted
    #[arg(long)]
    network: Option<String>,

    /// Seed for deterministic seat assignment
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    logger::init();
    let args = Args::parse();

    let network = match &args.network {
        Some(path) => {
            log::info!("Loading network from '{}'...", path);
            match network_from_file(path) {
                Ok(network) => network,
                Err(e) => {
                    log::error!("Failed to build network: {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => default_network(),
    };

    let mut desk = match args.seed {
        Some(seed) => BookingDesk::with_seat_seed(network, seed),
        None => BookingDesk::new(network),
    };

    let reachable = desk.network().breadth_first_reachable(&args.origin);
    if reachable.is_empty() {
        log::error!("Unknown origin city '{}'.", args.origin);
        std::process::exit(1);
    }
    log::info!("{} cities reachable from '{}': {}", reachable.len(), args.origin, reachable.join(", "));

    match desk.book_itinerary(&args.origin, &args.destination) {
        Ok(receipt) => {
            log::info!("Itinerary: {}", receipt.itinerary.join(" -> "));
            for leg in &receipt.legs {
                log::info!(
                    "  {} | {} -> {} | seat {} | {}",
                    leg.flight_code,
                    leg.origin,
                    leg.destination,
                    leg.seat,
                    leg.reservation_code
                );
            }
            log::info!(
                "Total time {:.1} h | average occupancy {:.1}% | final price ARS {:.2}",
                receipt.total_time,
                receipt.average_occupancy,
                receipt.final_price
            );
        }
        Err(e) => {
            log::error!("Booking failed: {}", e);
            std::process::exit(1);
        }
    }
}
