use std::f32::consts::{PI, TAU};

/// Signed angular difference `to - from`, wrapped into (-PI, PI].
pub fn signed_delta(from: f32, to: f32) -> f32 {
    let d = (to - from + PI).rem_euclid(TAU) - PI;
    if d == -PI {
        PI
    } else {
        d
    }
}

/// Wrap an absolute heading into [0, TAU). `rem_euclid` alone can round
/// up to exactly TAU for tiny negative inputs, so that case folds to zero.
pub fn wrap_heading(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        wrapped - TAU
    } else {
        wrapped
    }
}
