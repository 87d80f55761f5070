use std::f32::consts::{FRAC_PI_4, TAU};

use rand::Rng;

use crate::angles;
use crate::config;
use crate::grid::TileGrid;
use crate::lurker::{Lurker, PatrolStyle};

/// Advance every lurker by one tick. Turning and walking trade off against
/// a fixed energy budget: the harder a lurker turns, the slower it moves.
pub fn update_lurkers(lurkers: &mut [Lurker], grid: &TileGrid, rng: &mut impl Rng, dt: f32) {
    for lurker in lurkers.iter_mut() {
        step_lurker(lurker, grid, rng, dt);
    }
}

fn step_lurker(lurker: &mut Lurker, grid: &TileGrid, rng: &mut impl Rng, dt: f32) {
    let delta = angles::signed_delta(lurker.azimuth_current, lurker.azimuth_target);
    let mut turn_rate = delta.clamp(-config::MAX_TURN_RATE, config::MAX_TURN_RATE);

    // Near-aligned lurkers get random jitter instead, so they never freeze.
    if delta.abs() < config::TURN_JITTER_EPSILON {
        turn_rate = rng.gen_range(-config::TURN_JITTER_RADIUS..config::TURN_JITTER_RADIUS);
    }

    // Whatever the turn leaves of the budget goes into walking speed.
    let energy_left = 1.0 - turn_rate.abs() / config::MAX_TURN_RATE;
    let speed = lurker.min_speed + energy_left * (lurker.max_speed - lurker.min_speed);

    // Advance along the current heading, hard-stopping at anything that is
    // not walkable floor. Outside the grid counts as blocked.
    let step = speed * dt;
    let next_x = lurker.pos_x + lurker.azimuth_current.cos() * step;
    let next_y = lurker.pos_y + lurker.azimuth_current.sin() * step;
    if grid.walkable_at(next_x, next_y) {
        lurker.pos_x = next_x;
        lurker.pos_y = next_y;
    }

    lurker.azimuth_current = angles::wrap_heading(lurker.azimuth_current + turn_rate * dt);

    lurker.patrol_timer += dt;
    if lurker.patrol_timer >= lurker.style.retarget_interval() {
        lurker.azimuth_target = pick_target(lurker.style, rng);
        lurker.patrol_timer = 0.0;
    }
}

fn pick_target(style: PatrolStyle, rng: &mut impl Rng) -> f32 {
    match style {
        PatrolStyle::Cave => rng.gen_range(0.0..TAU),
        PatrolStyle::Office => FRAC_PI_4 * rng.gen_range(0..8) as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Tile;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::f32::consts::PI;

    fn open_grid(size: usize) -> TileGrid {
        TileGrid::filled(size, size, Tile::Floor)
    }

    #[test]
    fn zero_dt_changes_neither_position_nor_heading() {
        let grid = open_grid(20);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut lurkers = vec![Lurker::at(10.0, 10.0)];
        lurkers[0].azimuth_current = 1.25;
        lurkers[0].azimuth_target = 1.3; // inside the jitter band

        for _ in 0..50 {
            update_lurkers(&mut lurkers, &grid, &mut rng, 0.0);
        }
        assert_eq!(lurkers[0].pos_x, 10.0);
        assert_eq!(lurkers[0].pos_y, 10.0);
        assert_eq!(lurkers[0].azimuth_current, 1.25);
    }

    #[test]
    fn a_lurker_never_ends_a_tick_off_floor() {
        let mut grid = TileGrid::filled(9, 9, Tile::Wall);
        grid.set(4, 4, Tile::Floor);
        grid.set(5, 4, Tile::Floor);

        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let mut lurkers = vec![Lurker::at(4.0, 4.0)];
        for _ in 0..2_000 {
            update_lurkers(&mut lurkers, &grid, &mut rng, 0.1);
            assert!(
                grid.walkable_at(lurkers[0].pos_x, lurkers[0].pos_y),
                "lurker escaped to ({}, {})",
                lurkers[0].pos_x,
                lurkers[0].pos_y
            );
        }
    }

    #[test]
    fn heading_stays_normalized_over_many_ticks() {
        let grid = open_grid(40);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut lurkers = vec![Lurker::at(20.0, 20.0), Lurker::at(25.0, 25.0)];
        lurkers[1].azimuth_current = 6.2;
        lurkers[1].azimuth_target = 0.1;

        for _ in 0..3_000 {
            update_lurkers(&mut lurkers, &grid, &mut rng, 1.0 / 60.0);
            for lurker in &lurkers {
                assert!(
                    (0.0..TAU).contains(&lurker.azimuth_current),
                    "heading {} out of range",
                    lurker.azimuth_current
                );
            }
        }
    }

    #[test]
    fn turning_hard_costs_walking_speed() {
        let grid = open_grid(60);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        // Target is opposite the heading, so the full turn budget is spent
        // and speed collapses to the minimum.
        let mut lurkers = vec![Lurker::at(30.0, 30.0)];
        lurkers[0].azimuth_current = 0.0;
        lurkers[0].azimuth_target = PI;

        let dt = 0.5;
        update_lurkers(&mut lurkers, &grid, &mut rng, dt);
        let moved = ((lurkers[0].pos_x - 30.0).powi(2) + (lurkers[0].pos_y - 30.0).powi(2)).sqrt();
        assert!(
            (moved - config::LURKER_MIN_SPEED * dt).abs() < 1e-4,
            "moved {moved}"
        );
    }

    #[test]
    fn aligned_lurker_walks_near_full_speed() {
        let grid = open_grid(60);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let mut lurkers = vec![Lurker::at(30.0, 30.0)];
        lurkers[0].azimuth_current = 0.0;
        lurkers[0].azimuth_target = 0.0; // jitter band: tiny turn, near-max speed

        let dt = 0.1;
        update_lurkers(&mut lurkers, &grid, &mut rng, dt);
        let moved = ((lurkers[0].pos_x - 30.0).powi(2) + (lurkers[0].pos_y - 30.0).powi(2)).sqrt();
        let floor_speed = config::LURKER_MAX_SPEED
            - (config::TURN_JITTER_RADIUS / config::MAX_TURN_RATE)
                * (config::LURKER_MAX_SPEED - config::LURKER_MIN_SPEED);
        assert!(moved >= floor_speed * dt - 1e-4, "moved only {moved}");
    }

    #[test]
    fn office_retargets_snap_to_45_degree_multiples() {
        let grid = open_grid(40);
        let mut rng = ChaCha8Rng::seed_from_u64(77);
        let mut lurkers = vec![Lurker::at(20.0, 20.0)];

        // Step past several retarget intervals.
        for _ in 0..1_200 {
            update_lurkers(&mut lurkers, &grid, &mut rng, 1.0 / 60.0);
        }
        let ratio = lurkers[0].azimuth_target / FRAC_PI_4;
        assert!(
            (ratio - ratio.round()).abs() < 1e-4,
            "target {} is not a 45-degree multiple",
            lurkers[0].azimuth_target
        );
    }
}
