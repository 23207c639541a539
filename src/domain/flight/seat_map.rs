use std::collections::{HashMap, HashSet};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::domain::pricing::HIGH_OCCUPANCY_THRESHOLD;
use crate::domain::reservation::record::Section;

pub const SEATS_PER_SECTION: usize = 10;
pub const TOTAL_SEATS: usize = 30; // 3 sections x 10 seats

/// Per-flight seat occupancy implementing balanced random assignment.
///
/// Invariant: the occupied-seat counts of any two sections never differ by
/// more than 1, and each section counter equals the number of occupied seats
/// carrying that section letter.
#[derive(Debug)]
pub struct SeatMap {
    /// Occupied seats per section, all starting at 0.
    occupancy: HashMap<Section, usize>,

    /// Occupied seat strings ("B7"), for O(1) membership checks.
    occupied: HashSet<String>,

    rng: StdRng,
}

impl SeatMap {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Fixed-seed constructor, for deterministic assignment in tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        let occupancy = Section::ALL.iter().map(|section| (*section, 0)).collect();
        Self { occupancy, occupied: HashSet::new(), rng }
    }

    /// Assigns a random seat while keeping sections balanced:
    /// the least-occupied section wins, ties are broken uniformly at random,
    /// and within the chosen section a free seat is drawn uniformly.
    ///
    /// Returns `None` when all 30 seats are taken.
    pub fn assign_balanced_seat(&mut self) -> Option<String> {
        if self.occupied.len() >= TOTAL_SEATS {
            return None;
        }

        let min_occupancy = self.occupancy.values().copied().min().expect("occupancy map is never empty");

        // Only minimum sections are candidates, so the post-assignment
        // spread stays <= 1.
        let candidates: Vec<Section> = Section::ALL
            .iter()
            .copied()
            .filter(|section| self.occupancy[section] == min_occupancy)
            .collect();
        let section = *candidates.choose(&mut self.rng).expect("at least one section sits at the minimum");

        let free_seats: Vec<String> = (1..=SEATS_PER_SECTION)
            .map(|number| format!("{}{}", section, number))
            .filter(|seat| !self.occupied.contains(seat))
            .collect();
        let seat = free_seats.choose(&mut self.rng)?.clone();

        self.occupied.insert(seat.clone());
        *self.occupancy.get_mut(&section).expect("all sections are initialized") += 1;

        Some(seat)
    }

    /// Frees a previously assigned seat (booking rollback or cancellation).
    /// Returns `false` when the seat was not occupied.
    pub fn release(&mut self, seat: &str) -> bool {
        if !self.occupied.remove(seat) {
            return false;
        }
        if let Some(section) = seat.chars().next().and_then(Section::from_char) {
            if let Some(count) = self.occupancy.get_mut(&section) {
                *count = count.saturating_sub(1);
            }
        }
        true
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    pub fn section_occupancy(&self, section: Section) -> usize {
        self.occupancy.get(&section).copied().unwrap_or(0)
    }

    pub fn is_full(&self) -> bool {
        self.occupied.len() >= TOTAL_SEATS
    }

    pub fn occupancy_percent(&self) -> f64 {
        self.occupied.len() as f64 / TOTAL_SEATS as f64 * 100.0
    }

    /// Whether the high-demand surcharge applies (>= 95% occupied).
    pub fn is_high_occupancy(&self) -> bool {
        self.occupancy_percent() >= HIGH_OCCUPANCY_THRESHOLD
    }
}

impl Default for SeatMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_restores_the_section_counter() {
        let mut seats = SeatMap::with_seed(7);
        let seat = seats.assign_balanced_seat().expect("empty map has room");
        let section = seat.chars().next().and_then(Section::from_char).expect("system-generated seat");

        assert_eq!(seats.occupied_count(), 1);
        assert_eq!(seats.section_occupancy(section), 1);

        assert!(seats.release(&seat));
        assert_eq!(seats.occupied_count(), 0);
        assert_eq!(seats.section_occupancy(section), 0);

        // Releasing twice has no effect.
        assert!(!seats.release(&seat));
    }

    #[test]
    fn same_seed_yields_the_same_assignment_sequence() {
        let mut first = SeatMap::with_seed(42);
        let mut second = SeatMap::with_seed(42);
        for _ in 0..TOTAL_SEATS {
            assert_eq!(first.assign_balanced_seat(), second.assign_balanced_seat());
        }
    }
}
