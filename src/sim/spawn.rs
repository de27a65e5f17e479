//! Food placement
//!
//! Picks uniformly among free cells in one row-major pass (reservoir sampling
//! with a reservoir of one), so no candidate list is ever built.

use rand::Rng;

use super::collision::is_occupied;
use super::state::{Coord, Dimension, Food, Snake};

/// Choose a free cell for new food, or `None` when every cell is taken.
///
/// The `i`-th free cell seen replaces the current pick with probability `1/i`.
pub fn place_food<R: Rng + ?Sized>(
    dim: Dimension,
    snakes: &[Snake],
    food: &[Food],
    rng: &mut R,
) -> Option<Coord> {
    let mut chosen = None;
    let mut seen: u64 = 0;

    for cell in dim.cells() {
        if is_occupied(cell, snakes, food) {
            continue;
        }
        seen += 1;
        if rng.random_range(0..seen) == 0 {
            chosen = Some(cell);
        }
    }

    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Direction;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_full_grid_yields_none() {
        // 1x3 grid entirely covered by one snake
        let dim = Dimension::new(1, 3);
        let snakes = vec![Snake::new(Coord::new(0, 0), 3, Direction::Up).unwrap()];
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(place_food(dim, &snakes, &[], &mut rng), None);
    }

    #[test]
    fn test_single_free_cell_is_always_chosen() {
        let dim = Dimension::new(2, 2);
        let snakes = vec![Snake::new(Coord::new(0, 0), 2, Direction::Up).unwrap()];
        let food = vec![Food::new(Coord::new(1, 0))];
        for seed in 0..20 {
            let mut rng = Pcg32::seed_from_u64(seed);
            assert_eq!(
                place_food(dim, &snakes, &food, &mut rng),
                Some(Coord::new(1, 1))
            );
        }
    }

    #[test]
    fn test_same_seed_same_cell() {
        let dim = Dimension::new(20, 20);
        let snakes = vec![Snake::new(Coord::new(10, 10), 3, Direction::Up).unwrap()];
        let a = place_food(dim, &snakes, &[], &mut Pcg32::seed_from_u64(42));
        let b = place_food(dim, &snakes, &[], &mut Pcg32::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_free_cell_is_reachable() {
        let dim = Dimension::new(3, 3);
        let snakes = vec![Snake::new(Coord::new(1, 1), 1, Direction::Up).unwrap()];
        let mut rng = Pcg32::seed_from_u64(7);
        let mut hits = [0u32; 9];
        for _ in 0..4000 {
            let c = place_food(dim, &snakes, &[], &mut rng).unwrap();
            hits[(c.row * 3 + c.col) as usize] += 1;
        }
        assert_eq!(hits[4], 0);
        // 8 free cells, ~500 each
        for (i, &n) in hits.iter().enumerate() {
            if i != 4 {
                assert!((300..700).contains(&n), "cell {i} chosen {n} times");
            }
        }
    }

    proptest! {
        #[test]
        fn proptest_placement_avoids_snakes_and_food(
            seed in any::<u64>(),
            head_col in 0i32..12,
            head_row in 0i32..12,
            length in 1usize..20,
            food_cells in proptest::collection::vec((0i32..12, 0i32..12), 0..3),
        ) {
            let dim = Dimension::new(12, 12);
            let snakes = vec![Snake::new(Coord::new(head_col, head_row), length, Direction::Up).unwrap()];
            let food: Vec<Food> = food_cells
                .into_iter()
                .map(|(c, r)| Food::new(Coord::new(c, r)))
                .collect();
            let mut rng = Pcg32::seed_from_u64(seed);

            if let Some(cell) = place_food(dim, &snakes, &food, &mut rng) {
                prop_assert!(dim.contains(cell));
                prop_assert!(!snakes[0].contains(cell, false));
                prop_assert!(food.iter().all(|f| f.pos != cell));
            }
        }
    }
}
