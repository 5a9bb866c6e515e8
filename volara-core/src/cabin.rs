use rand::seq::SliceRandom;
use serde::Deserialize;
use std::collections::HashSet;

/// Physical cabin geometry. Loaded from the `[cabin]` configuration section
/// so an alternate layout is a config change, not a code change.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CabinLayout {
    pub total_seats: u32,
    pub seats_per_row: u32,
}

impl CabinLayout {
    /// Whether `seat` is a valid seat number for this cabin.
    pub fn contains(&self, seat: i32) -> bool {
        seat >= 1 && seat <= self.total_seats as i32
    }

    /// Display label for a seat number: row plus seat letter, e.g. 8 -> "2B"
    /// in a six-per-row cabin. `None` for out-of-range seats.
    pub fn label(&self, seat: i32) -> Option<String> {
        if !self.contains(seat) {
            return None;
        }
        let idx = (seat - 1) as u32;
        let row = idx / self.seats_per_row + 1;
        let letter = (b'A' + (idx % self.seats_per_row) as u8) as char;
        Some(format!("{row}{letter}"))
    }

    /// Seat numbers not present in `taken`, ascending.
    pub fn free_seats(&self, taken: &[i32]) -> Vec<i32> {
        let taken: HashSet<i32> = taken.iter().copied().collect();
        (1..=self.total_seats as i32)
            .filter(|s| !taken.contains(s))
            .collect()
    }

    /// Uniform random pick over the seats currently free. `None` when the
    /// cabin is full.
    pub fn pick_free_seat(&self, taken: &[i32]) -> Option<i32> {
        self.free_seats(taken)
            .choose(&mut rand::thread_rng())
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cabin() -> CabinLayout {
        CabinLayout {
            total_seats: 60,
            seats_per_row: 6,
        }
    }

    #[test]
    fn seat_bounds() {
        let c = cabin();
        assert!(!c.contains(0));
        assert!(c.contains(1));
        assert!(c.contains(60));
        assert!(!c.contains(61));
        assert!(!c.contains(-3));
    }

    #[test]
    fn seat_labels() {
        let c = cabin();
        assert_eq!(c.label(1).as_deref(), Some("1A"));
        assert_eq!(c.label(6).as_deref(), Some("1F"));
        assert_eq!(c.label(7).as_deref(), Some("2A"));
        assert_eq!(c.label(8).as_deref(), Some("2B"));
        assert_eq!(c.label(60).as_deref(), Some("10F"));
        assert_eq!(c.label(61), None);
    }

    #[test]
    fn free_seats_excludes_taken() {
        let c = cabin();
        let free = c.free_seats(&[1, 2, 3]);
        assert_eq!(free.len(), 57);
        assert_eq!(free[0], 4);
        assert!(!free.contains(&2));
    }

    #[test]
    fn pick_is_always_a_free_seat() {
        let c = cabin();
        let taken: Vec<i32> = (1..=59).collect();
        for _ in 0..20 {
            assert_eq!(c.pick_free_seat(&taken), Some(60));
        }

        let taken: Vec<i32> = (1..=30).collect();
        for _ in 0..100 {
            let seat = c.pick_free_seat(&taken).unwrap();
            assert!(seat > 30 && seat <= 60);
        }
    }

    #[test]
    fn pick_on_full_cabin_is_none() {
        let c = cabin();
        let taken: Vec<i32> = (1..=60).collect();
        assert_eq!(c.pick_free_seat(&taken), None);
    }
}
