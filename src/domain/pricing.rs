//! Final-price rules for booked itineraries.
//!
//! Order matters: the direct surcharge applies first, the high-occupancy
//! surcharge compounds on top, per leg.

/// Occupancy percentage at which the high-demand surcharge kicks in.
pub const HIGH_OCCUPANCY_THRESHOLD: f64 = 95.0;

/// Multiplier for direct (single-leg) itineraries.
pub const DIRECT_SURCHARGE: f64 = 1.20;

/// Multiplier applied on top when occupancy reaches the threshold.
pub const HIGH_OCCUPANCY_SURCHARGE: f64 = 1.10;

/// Sums the adjusted price of every leg of an itinerary.
pub fn final_price(leg_base_prices: &[f64], is_direct: bool, occupancy_percent: f64) -> f64 {
    leg_base_prices
        .iter()
        .map(|&base| apply_occupancy_rule(apply_direct_rule(base, is_direct), occupancy_percent))
        .sum()
}

pub fn apply_direct_rule(price: f64, is_direct: bool) -> f64 {
    if is_direct { price * DIRECT_SURCHARGE } else { price }
}

pub fn apply_occupancy_rule(price: f64, occupancy_percent: f64) -> f64 {
    if occupancy_percent >= HIGH_OCCUPANCY_THRESHOLD { price * HIGH_OCCUPANCY_SURCHARGE } else { price }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn direct_single_leg_gets_twenty_percent() {
        assert_relative_eq!(final_price(&[120_000.0], true, 0.0), 144_000.0);
    }

    #[test]
    fn high_occupancy_transfer_gets_ten_percent_per_leg() {
        assert_relative_eq!(final_price(&[220_000.0, 160_000.0], false, 96.0), 418_000.0);
    }

    #[test]
    fn surcharges_compound_multiplicatively() {
        // Direct and nearly full: 1.20 then 1.10.
        assert_relative_eq!(final_price(&[100_000.0], true, 95.0), 132_000.0);
    }

    #[test]
    fn no_surcharge_below_the_threshold() {
        assert_relative_eq!(final_price(&[100_000.0, 50_000.0], false, 94.9), 150_000.0);
        assert_relative_eq!(apply_occupancy_rule(100.0, 0.0), 100.0);
        assert_relative_eq!(apply_direct_rule(100.0, false), 100.0);
    }
}
