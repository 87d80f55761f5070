use crate::canvas::Canvas;
use crate::config;
use crate::lurker::Lurker;
use crate::tile::ColorClass;

/// Paint every lurker's detection cone onto the canvas: a fan of rays
/// evenly spaced across [heading - halfangle, heading + halfangle].
pub fn draw_detection_cones(canvas: &mut Canvas, lurkers: &[Lurker]) {
    for lurker in lurkers {
        let min = lurker.azimuth_current - lurker.cone_halfangle;
        let delta = lurker.cone_halfangle * 2.0 / config::DETECTION_RAYS as f32;
        for i in 0..config::DETECTION_RAYS {
            let angle = min + delta * i as f32;
            cast_ray(canvas, lurker.pos_x, lurker.pos_y, angle);
        }
    }
}

/// March one ray across the canvas, painting transparent cells until the
/// first occluder or the canvas edge. The origin is given in tile
/// coordinates; stepping happens on the scaled surface so collisions match
/// what is drawn. Returns the number of cells painted.
pub fn cast_ray(canvas: &mut Canvas, origin_x: f32, origin_y: f32, angle: f32) -> usize {
    let step_x = angle.cos() * config::RAY_STEP * canvas.scale_x;
    let step_y = angle.sin() * config::RAY_STEP * canvas.scale_y;
    let start_x = origin_x * canvas.scale_x;
    let start_y = origin_y * canvas.scale_y;

    // Nothing useful lies past the canvas diagonal; cap the march there
    // instead of trusting the walls to terminate it.
    let diagonal = ((canvas.width * canvas.width + canvas.height * canvas.height) as f32).sqrt();
    let max_steps = (diagonal / config::RAY_STEP).ceil() as usize;

    let mut painted = 0;
    for step in 0..max_steps {
        // Positions come from one multiply per step; accumulating additions
        // drifts enough to smear cells across opacity boundaries.
        let x = start_x + step_x * step as f32;
        let y = start_y + step_y * step as f32;
        if x < 0.0 || y < 0.0 {
            break;
        }
        let Some(cell) = canvas.cell_mut(x as usize, y as usize) else {
            break;
        };
        if !cell.light_pass {
            break;
        }
        cell.glyph = '+';
        cell.color = ColorClass::Ray;
        painted += 1;
    }
    painted
}
