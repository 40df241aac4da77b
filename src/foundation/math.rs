use crate::foundation::core::Vec2;

/// Convert a polar tangent handle (radius, angle in degrees) to a Cartesian offset.
pub fn polar_to_cartesian(radius: f64, angle_deg: f64) -> Vec2 {
    Vec2::from_angle(angle_deg.to_radians()) * radius
}

/// Map a pair of host tangents onto the Lottie vertex-tangent convention.
///
/// Host tangents are full-length Hermite handles with the in-tangent pointing
/// forward along the curve and the y axis pointing up. Lottie stores Bezier
/// control offsets (one third of the Hermite length), points the in-tangent
/// backwards, and uses a y-down axis.
pub fn to_lottie_tangents(tangent_in: Vec2, tangent_out: Vec2) -> (Vec2, Vec2) {
    let tangent_in = -(tangent_in / 3.0);
    let tangent_out = tangent_out / 3.0;
    (flip_y(tangent_in), flip_y(tangent_out))
}

fn flip_y(v: Vec2) -> Vec2 {
    Vec2::new(v.x, -v.y)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
