use rand::Rng;
use thiserror::Error;

use crate::config;
use crate::grid::TileGrid;
use crate::tile::Tile;

/// A growth center expanding into a rectangular room. Radii only ever
/// grow; a block flag, once set, is never cleared.
#[derive(Clone, Copy, Debug)]
pub struct RoomSeed {
    pub center_x: u32,
    pub center_y: u32,
    pub growth_vel_x: f32,
    pub growth_vel_y: f32,
    pub radius_l: f32,
    pub radius_r: f32,
    pub radius_t: f32,
    pub radius_b: f32,
    pub block_l: bool,
    pub block_r: bool,
    pub block_t: bool,
    pub block_b: bool,
    pub finished: bool,
}

impl RoomSeed {
    fn at(center_x: u32, center_y: u32, rng: &mut impl Rng) -> Self {
        Self {
            center_x,
            center_y,
            growth_vel_x: rng.gen_range(config::GROWTH_VEL_MIN..config::GROWTH_VEL_MAX),
            growth_vel_y: rng.gen_range(config::GROWTH_VEL_MIN..config::GROWTH_VEL_MAX),
            radius_l: 1.0,
            radius_r: 1.0,
            radius_t: 1.0,
            radius_b: 1.0,
            block_l: false,
            block_r: false,
            block_t: false,
            block_b: false,
            finished: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(
        "grid {width}x{height} leaves no seed placement area inside edge padding {padding}"
    )]
    GridTooSmall {
        width: usize,
        height: usize,
        padding: usize,
    },
    #[error(
        "placed {placed} of {requested} seeds, then exhausted {retries} retries; \
         grid {width}x{height} is too crowded for the requested room density"
    )]
    PlacementExhausted {
        placed: usize,
        requested: usize,
        retries: u32,
        width: usize,
        height: usize,
    },
    #[error("room growth did not converge within {passes} passes")]
    GrowthStalled { passes: usize },
}

/// Target seed count for a grid: how many average-sized rooms fit once the
/// assumed wall share is taken out.
pub fn seed_count(width: usize, height: usize) -> usize {
    let total = (width * height) as f32;
    let avg_room = (config::AVG_ROOM_SIDE * config::AVG_ROOM_SIDE) as f32;
    (total / avg_room * config::ASSUMED_WALL_RATIO).round() as usize
}

/// Sample seed centers in the edge-padded sub-rectangle, rejecting any
/// candidate within `SEED_MIN_SEPARATION` cells of an accepted seed on
/// either axis. Retries are bounded per seed.
pub fn place_seeds(
    width: usize,
    height: usize,
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<RoomSeed>, GenerationError> {
    let padding = config::EDGE_PADDING;
    if width <= padding * 2 || height <= padding * 2 {
        return Err(GenerationError::GridTooSmall {
            width,
            height,
            padding,
        });
    }

    let mut seeds: Vec<RoomSeed> = Vec::with_capacity(count);
    for _ in 0..count {
        let mut retries = 0;
        loop {
            let pos_x = rng.gen_range(padding..width - padding) as u32;
            let pos_y = rng.gen_range(padding..height - padding) as u32;

            let separated = seeds.iter().all(|seed| {
                let dist_x = seed.center_x.abs_diff(pos_x);
                let dist_y = seed.center_y.abs_diff(pos_y);
                dist_x >= config::SEED_MIN_SEPARATION && dist_y >= config::SEED_MIN_SEPARATION
            });
            if separated {
                seeds.push(RoomSeed::at(pos_x, pos_y, rng));
                break;
            }

            retries += 1;
            if retries >= config::SEED_MAX_RETRIES {
                return Err(GenerationError::PlacementExhausted {
                    placed: seeds.len(),
                    requested: count,
                    retries,
                    width,
                    height,
                });
            }
        }
    }
    Ok(seeds)
}

/// Separating-axis test between `a` padded per direction and `b` unpadded.
/// Any separated axis proves the padded rectangles do not overlap.
fn overlaps(a: &RoomSeed, b: &RoomSeed, pad_t: f32, pad_r: f32, pad_b: f32, pad_l: f32) -> bool {
    let a_r = a.center_x as f32 + a.radius_r + pad_r;
    let a_l = a.center_x as f32 - a.radius_l - pad_l;
    let a_t = a.center_y as f32 + a.radius_t + pad_t;
    let a_b = a.center_y as f32 - a.radius_b - pad_b;
    let b_r = b.center_x as f32 + b.radius_r;
    let b_l = b.center_x as f32 - b.radius_l;
    let b_t = b.center_y as f32 + b.radius_t;
    let b_b = b.center_y as f32 - b.radius_b;

    !(a_r < b_l || a_l > b_r || a_t < b_b || a_b > b_t)
}

/// Would the seed's rectangle, padded by the directed pad, leave the grid?
fn exceeds_bounds(seed: &RoomSeed, width: usize, height: usize) -> bool {
    let pad = config::GROWTH_PAD_DIRECTED;
    seed.center_x as f32 + seed.radius_r + pad >= width as f32
        || seed.center_x as f32 - seed.radius_l - pad <= 0.0
        || seed.center_y as f32 + seed.radius_t + pad >= height as f32
        || seed.center_y as f32 - seed.radius_b - pad <= 0.0
}

/// Grow all seeds simultaneously until every one is blocked on all four
/// sides. Returns the number of full passes taken.
pub fn grow_seeds(
    seeds: &mut [RoomSeed],
    width: usize,
    height: usize,
) -> Result<usize, GenerationError> {
    let dir = config::GROWTH_PAD_DIRECTED;
    let base = config::GROWTH_PAD_BASE;

    // Radii grow by at least GROWTH_VEL_MIN per unblocked pass and are
    // bounded by the grid, so convergence is far inside this cap.
    let max_passes = (width + height) * 4;

    let mut finished = seeds.iter().filter(|s| s.finished).count();
    let mut passes = 0;
    while finished < seeds.len() {
        if passes >= max_passes {
            return Err(GenerationError::GrowthStalled { passes });
        }
        passes += 1;

        for i in 0..seeds.len() {
            let mut seed = seeds[i];
            if seed.finished {
                continue;
            }

            if exceeds_bounds(&seed, width, height) {
                seed.block_l = true;
                seed.block_r = true;
                seed.block_t = true;
                seed.block_b = true;
            }

            for j in 0..seeds.len() {
                if j == i {
                    continue;
                }
                let other = seeds[j];

                if overlaps(&seed, &other, dir, base, base, base) {
                    seed.block_t = true;
                }
                if overlaps(&seed, &other, base, dir, base, base) {
                    seed.block_r = true;
                }
                if overlaps(&seed, &other, base, base, dir, base) {
                    seed.block_b = true;
                }
                if overlaps(&seed, &other, base, base, base, dir) {
                    seed.block_l = true;
                }
            }

            if !seed.block_t {
                seed.radius_t += seed.growth_vel_y;
            }
            if !seed.block_b {
                seed.radius_b += seed.growth_vel_y;
            }
            if !seed.block_l {
                seed.radius_l += seed.growth_vel_x;
            }
            if !seed.block_r {
                seed.radius_r += seed.growth_vel_x;
            }

            if seed.block_t && seed.block_b && seed.block_l && seed.block_r {
                seed.finished = true;
                finished += 1;
            }

            seeds[i] = seed;
        }
    }
    Ok(passes)
}

/// Integer cell rectangle of a finished seed: the interior integer points
/// of the open float rectangle, shrunk by one cell on every side. The same
/// rule on both axes keeps blocked neighbors at least one wall cell apart.
/// Returned as inclusive (x0, y0, x1, y1).
pub fn room_rect(seed: &RoomSeed) -> (i32, i32, i32, i32) {
    let x0 = (seed.center_x as f32 - seed.radius_l).floor() as i32 + 1;
    let x1 = (seed.center_x as f32 + seed.radius_r).floor() as i32 - 1;
    let y0 = (seed.center_y as f32 - seed.radius_b).floor() as i32 + 1;
    let y1 = (seed.center_y as f32 + seed.radius_t).floor() as i32 - 1;
    (x0, y0, x1, y1)
}

/// Fill each room's interior with floor and stamp one spawn marker at its
/// exact center. A seed blocked before any growth still yields a minimal
/// one-cell room.
pub fn rasterize(seeds: &[RoomSeed], grid: &mut TileGrid) {
    for seed in seeds {
        let (x0, y0, x1, y1) = room_rect(seed);
        for y in y0.max(0)..=y1.min(grid.height as i32 - 1) {
            for x in x0.max(0)..=x1.min(grid.width as i32 - 1) {
                grid.set(x as usize, y as usize, Tile::Floor);
            }
        }
        grid.set(seed.center_x as usize, seed.center_y as usize, Tile::LurkerSpawn);
    }
}
