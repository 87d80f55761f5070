use std::f32::consts::PI;

use crate::config;
use crate::grid::TileGrid;
use crate::tile::Tile;

/// Patrol flavor assigned at spawn. Pure configuration; a lurker never
/// switches styles during a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatrolStyle {
    /// Wanders on unaligned headings, retargeting often.
    Cave,
    /// Prefers headings snapped to 45-degree multiples, retargeting rarely.
    Office,
}

impl PatrolStyle {
    pub fn retarget_interval(self) -> f32 {
        match self {
            PatrolStyle::Cave => config::PATROL_RETARGET_CAVE,
            PatrolStyle::Office => config::PATROL_RETARGET_OFFICE,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Lurker {
    pub pos_x: f32,
    pub pos_y: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub cone_halfangle: f32,
    pub azimuth_target: f32,
    pub azimuth_current: f32,
    pub style: PatrolStyle,
    pub patrol_timer: f32,
}

impl Lurker {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            pos_x: x,
            pos_y: y,
            min_speed: config::LURKER_MIN_SPEED,
            max_speed: config::LURKER_MAX_SPEED,
            cone_halfangle: config::LURKER_CONE_HALFANGLE,
            azimuth_target: PI,
            azimuth_current: 0.0,
            style: PatrolStyle::Office,
            patrol_timer: 0.0,
        }
    }
}

/// Convert every spawn marker in the grid into a lurker standing on floor.
pub fn spawn_from_markers(grid: &mut TileGrid) -> Vec<Lurker> {
    let mut lurkers = Vec::with_capacity(16);
    for y in 0..grid.height {
        for x in 0..grid.width {
            if grid.get(x, y) == Some(Tile::LurkerSpawn) {
                grid.set(x, y, Tile::Floor);
                lurkers.push(Lurker::at(x as f32, y as f32));
            }
        }
    }
    lurkers
}
