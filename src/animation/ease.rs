/// Interpolation applied from one waypoint toward the next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    /// Straight-line blend between the two waypoint values.
    #[default]
    Linear,
    /// Hold this waypoint's value until the next waypoint.
    Constant,
    /// Smooth cubic with zero slope at both waypoints.
    Ease,
}

impl Interpolation {
    /// Map normalized segment time `t` in `[0, 1]` to a blend factor.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Constant => {
                if t >= 1.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Ease => t * t * (3.0 - 2.0 * t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
