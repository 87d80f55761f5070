use rand::Rng;

use crate::grid::TileGrid;
use crate::lurker::{self, Lurker};
use crate::rooms::{self, GenerationError};
use crate::tile::Tile;

/// The simulation aggregate: the tile grid plus every lurker inhabiting it.
/// Grid dimensions never change after generation.
pub struct Arena {
    pub grid: TileGrid,
    pub lurkers: Vec<Lurker>,
}

impl Arena {
    /// Run the full generation pipeline: seed placement, simultaneous
    /// growth, rasterization, then spawn-marker conversion. Deterministic
    /// for a fixed RNG seed. The seed list is transient and dropped here.
    pub fn generate(
        width: usize,
        height: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, GenerationError> {
        let mut grid = TileGrid::filled(width, height, Tile::Wall);

        let count = rooms::seed_count(width, height);
        let mut seeds = rooms::place_seeds(width, height, count, rng)?;
        rooms::grow_seeds(&mut seeds, width, height)?;
        rooms::rasterize(&seeds, &mut grid);

        let lurkers = lurker::spawn_from_markers(&mut grid);
        Ok(Self { grid, lurkers })
    }

    /// First walkable cell in scan order, used to drop the player in.
    pub fn first_open_cell(&self) -> Option<(usize, usize)> {
        for y in 0..self.grid.height {
            for x in 0..self.grid.width {
                if self.grid.walkable(x, y) {
                    return Some((x, y));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn generation_is_bit_identical_for_a_fixed_seed() {
        let mut rng_a = ChaCha8Rng::seed_from_u64(4242);
        let mut rng_b = ChaCha8Rng::seed_from_u64(4242);
        let a = Arena::generate(config::ARENA_SIZE, config::ARENA_SIZE, &mut rng_a).unwrap();
        let b = Arena::generate(config::ARENA_SIZE, config::ARENA_SIZE, &mut rng_b).unwrap();

        assert_eq!(a.grid.tiles(), b.grid.tiles());
        assert_eq!(a.lurkers.len(), b.lurkers.len());
        for (la, lb) in a.lurkers.iter().zip(&b.lurkers) {
            assert_eq!((la.pos_x, la.pos_y), (lb.pos_x, lb.pos_y));
        }
    }

    #[test]
    fn a_generated_arena_has_one_lurker_per_room() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let arena = Arena::generate(config::ARENA_SIZE, config::ARENA_SIZE, &mut rng).unwrap();
        assert_eq!(
            arena.lurkers.len(),
            rooms::seed_count(config::ARENA_SIZE, config::ARENA_SIZE)
        );
        assert!(!arena.grid.tiles().contains(&Tile::LurkerSpawn));
        for lurker in &arena.lurkers {
            assert!(arena.grid.walkable_at(lurker.pos_x, lurker.pos_y));
        }
    }

    #[test]
    fn the_reference_layout_generates_without_exhaustion() {
        // 60x60, padding 10, room side 12, wall ratio 0.35 => 9 rooms.
        for seed in 0..16u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let arena = Arena::generate(60, 60, &mut rng).unwrap();
            assert_eq!(arena.lurkers.len(), 9);
        }
    }

    #[test]
    fn first_open_cell_lands_on_floor() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let arena = Arena::generate(60, 60, &mut rng).unwrap();
        let (x, y) = arena.first_open_cell().unwrap();
        assert!(arena.grid.walkable(x, y));
    }
}
