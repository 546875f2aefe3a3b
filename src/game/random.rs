use log::debug;
use rand::RngCore;

use super::field::{Cell, Field};

/// Rejection draws per field cell before falling back to enumeration.
const ATTEMPTS_PER_CELL: usize = 4;

/// Draw from `[lo, hi)` by reducing a raw 32-bit value. The modulo bias is
/// negligible at field sizes up to 255. An empty range yields `lo`.
pub fn random_range<R: RngCore + ?Sized>(rng: &mut R, lo: u32, hi: u32) -> u32 {
    if hi <= lo {
        return lo;
    }
    rng.next_u32() % (hi - lo) + lo
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreeCell {
    Found(Cell),
    BoardFull,
}

/// Pick a cell that is neither on the trail nor the current food cell.
///
/// Rejection sampling first; once that runs out of attempts the free cells are
/// enumerated and one is drawn uniformly, so this always terminates.
pub fn random_free_cell<R: RngCore + ?Sized>(
    field: &Field,
    food: Option<Cell>,
    rng: &mut R,
) -> FreeCell {
    let is_free = |cell: Cell| Some(cell) != food && !field.is_occupied(cell);

    for _ in 0..field.cell_count() * ATTEMPTS_PER_CELL {
        let x = random_range(rng, 0, field.width());
        let y = random_range(rng, 0, field.height());
        let cell = Cell::new(x, y);
        if is_free(cell) {
            return FreeCell::Found(cell);
        }
    }

    let free: Vec<Cell> = field.free_cells().filter(|&c| is_free(c)).collect();
    debug!("Rejection sampling exhausted, {} free cells left", free.len());
    if free.is_empty() {
        return FreeCell::BoardFull;
    }
    let pick = random_range(rng, 0, free.len() as u32) as usize;
    FreeCell::Found(free[pick])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_random_range_bounds() {
        let mut rng = SmallRng::seed_from_u64(7);
        for (lo, hi) in [(0, 1), (0, 10), (3, 4), (5, 255), (100, 1000)] {
            for _ in 0..200 {
                let v = random_range(&mut rng, lo, hi);
                assert!((lo..hi).contains(&v), "{v} not in {lo}..{hi}");
            }
        }
    }

    #[test]
    fn test_random_range_is_modulo_reduction() {
        let mut rng = StepRng::new(13, 0);
        assert_eq!(random_range(&mut rng, 2, 7), 13 % 5 + 2);
        assert_eq!(random_range(&mut rng, 4, 4), 4);
    }

    #[test]
    fn test_free_cell_avoids_trail_and_food() {
        let mut field = Field::new(4, 4).unwrap();
        for x in 0..4 {
            for y in 0..4 {
                if (x, y) != (2, 3) && (x, y) != (1, 1) {
                    field.set(Cell::new(x, y), 1);
                }
            }
        }
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..50 {
            assert_eq!(
                random_free_cell(&field, Some(Cell::new(1, 1)), &mut rng),
                FreeCell::Found(Cell::new(2, 3))
            );
        }
    }

    #[test]
    fn test_fallback_when_sampling_keeps_missing() {
        // A constant source always lands on (0, 0), which is taken.
        let mut field = Field::new(3, 3).unwrap();
        field.set(Cell::new(0, 0), 5);
        let mut rng = StepRng::new(0, 0);
        assert_eq!(
            random_free_cell(&field, None, &mut rng),
            FreeCell::Found(Cell::new(1, 0))
        );
    }

    #[test]
    fn test_board_full() {
        let mut field = Field::new(2, 1).unwrap();
        field.set(Cell::new(0, 0), 2);
        let mut rng = SmallRng::seed_from_u64(3);
        assert_eq!(
            random_free_cell(&field, Some(Cell::new(1, 0)), &mut rng),
            FreeCell::BoardFull
        );
    }
}
