//! Per-pixel color resolution.

use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::ray::Ray;
use crate::vec3::{unit_vector, Color};

/// Color at the bottom of the background gradient.
pub const HORIZON_WHITE: Color = Color::new(1.0, 1.0, 1.0);

/// Color at the top of the background gradient.
pub const SKY_BLUE: Color = Color::new(0.5, 0.7, 1.0);

/// Color seen along `r`.
///
/// A hit is shaded by its normal, mapped from [-1, 1] into [0, 1] per
/// channel. A miss blends white into sky blue by the ray's vertical
/// direction.
pub fn ray_color(r: &Ray, world: &dyn Hittable) -> Color {
    if let Some(rec) = world.hit(r, Interval::new(0.0, f32::INFINITY)) {
        return 0.5 * (rec.normal + Color::ONE);
    }

    // Y = -1 (down) gives a = 0, Y = 1 (up) gives a = 1
    let unit_direction = unit_vector(r.direction);
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * HORIZON_WHITE + a * SKY_BLUE
}
