// All tunable simulation constants in one place.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

// Arena
pub const ARENA_SIZE: usize = 60;
pub const AVG_ROOM_SIDE: usize = 12;
pub const ASSUMED_WALL_RATIO: f32 = 0.35;

// Room generation
pub const EDGE_PADDING: usize = 10;
pub const SEED_MIN_SEPARATION: u32 = 3;
pub const SEED_MAX_RETRIES: u32 = 1_000;
pub const GROWTH_VEL_MIN: f32 = 0.2;
pub const GROWTH_VEL_MAX: f32 = 0.5;
pub const GROWTH_PAD_DIRECTED: f32 = 1.5;
pub const GROWTH_PAD_BASE: f32 = 1.1;

// Lurkers
pub const LURKER_MIN_SPEED: f32 = 1.5;
pub const LURKER_MAX_SPEED: f32 = 3.0;
pub const LURKER_CONE_HALFANGLE: f32 = FRAC_PI_4;
pub const MAX_TURN_RATE: f32 = FRAC_PI_2; // rad/s
pub const TURN_JITTER_EPSILON: f32 = PI / 18.0;
pub const TURN_JITTER_RADIUS: f32 = PI / 12.0;
pub const PATROL_RETARGET_CAVE: f32 = 1.0; // seconds
pub const PATROL_RETARGET_OFFICE: f32 = 3.0;

// Detection rays
pub const DETECTION_RAYS: usize = 50;
pub const RAY_STEP: f32 = 0.4;

// Presentation
pub const CANVAS_SCALE_X: f32 = 2.0;
pub const CANVAS_SCALE_Y: f32 = 1.0;

// Simulation
pub const FIXED_DT: f32 = 1.0 / 60.0;
