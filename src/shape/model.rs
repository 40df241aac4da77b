use crate::{
    animation::channel::{Channel, ValueKind},
    animation::normalize::{Normalized, normalize},
    foundation::core::Vec2,
    foundation::error::ExportResult,
};

/// A tangent handle in polar form.
#[derive(Clone, Debug, PartialEq)]
pub struct TangentHandle {
    /// Handle length.
    pub radius: Channel<f64>,
    /// Handle direction in degrees.
    pub angle: Channel<f64>,
}

impl TangentHandle {
    /// Unanimated handle.
    pub fn constant(radius: f64, angle: f64) -> Self {
        Self {
            radius: Channel::Constant(radius),
            angle: Channel::Constant(angle),
        }
    }

    /// Normalize both polar channels.
    pub fn normalize(&self) -> ExportResult<NormalizedHandle> {
        Ok(NormalizedHandle {
            radius: normalize(&self.radius, ValueKind::Real).map_err(|e| e.within("radius"))?,
            angle: normalize(&self.angle, ValueKind::Angle).map_err(|e| e.within("theta"))?,
        })
    }
}

/// One vertex of a spline with its two tangent handles.
///
/// `tangent2` inherits `tangent1`'s radius on frames where `split_radius`
/// is false, and its angle on frames where `split_angle` is false.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlPoint {
    /// Vertex position.
    pub position: Channel<Vec2>,
    /// Incoming tangent.
    pub tangent1: TangentHandle,
    /// Outgoing tangent.
    pub tangent2: TangentHandle,
    /// Whether `tangent2` has its own radius.
    pub split_radius: Channel<bool>,
    /// Whether `tangent2` has its own angle.
    pub split_angle: Channel<bool>,
}

impl ControlPoint {
    /// Control point with fixed position and tangents and both handles split.
    pub fn fixed(position: Vec2, tangent1: TangentHandle, tangent2: TangentHandle) -> Self {
        Self {
            position: Channel::Constant(position),
            tangent1,
            tangent2,
            split_radius: Channel::Constant(true),
            split_angle: Channel::Constant(true),
        }
    }

    /// Normalize every channel of this point.
    pub fn normalize(&self) -> ExportResult<NormalizedPoint> {
        Ok(NormalizedPoint {
            position: normalize(&self.position, ValueKind::Vector)
                .map_err(|e| e.within("point"))?,
            tangent1: self.tangent1.normalize().map_err(|e| e.within("t1"))?,
            tangent2: self.tangent2.normalize().map_err(|e| e.within("t2"))?,
            split_radius: normalize(&self.split_radius, ValueKind::Bool)
                .map_err(|e| e.within("split_radius"))?,
            split_angle: normalize(&self.split_angle, ValueKind::Bool)
                .map_err(|e| e.within("split_angle"))?,
        })
    }
}

/// Tangent-bearing spline shape.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spline {
    /// Control points in vertex order.
    pub points: Vec<ControlPoint>,
    /// Whether the last vertex connects back to the first.
    pub closed: bool,
}

impl Spline {
    /// Normalize every control point; errors name the failing point.
    pub fn normalize_points(&self) -> ExportResult<Vec<NormalizedPoint>> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                point
                    .normalize()
                    .map_err(|e| e.within(format_args!("control point {i}")))
            })
            .collect()
    }
}

/// Tangent-free list of points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointList {
    /// Point positions in vertex order.
    pub points: Vec<Channel<Vec2>>,
    /// Whether the last vertex connects back to the first.
    pub closed: bool,
}

impl PointList {
    /// Normalize every position; errors name the failing entry.
    pub fn normalize_points(&self) -> ExportResult<Vec<Normalized<Vec2>>> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, position)| {
                normalize(position, ValueKind::Vector)
                    .map_err(|e| e.within(format_args!("entry {i}")))
            })
            .collect()
    }
}

/// A shape whose path property is exported.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Spline with polar tangent handles.
    Spline(Spline),
    /// Plain point list (straight segments).
    DynamicList(PointList),
}

impl Shape {
    /// Number of vertices every exported frame carries.
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Spline(spline) => spline.points.len(),
            Self::DynamicList(list) => list.points.len(),
        }
    }

    /// Check every channel the way export does, without sampling.
    pub fn validate(&self) -> ExportResult<()> {
        match self {
            Self::Spline(spline) => spline.normalize_points().map(drop),
            Self::DynamicList(list) => list.normalize_points().map(drop),
        }
    }
}

/// [`TangentHandle`] with both channels normalized.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedHandle {
    /// Handle length.
    pub radius: Normalized<f64>,
    /// Handle direction in degrees.
    pub angle: Normalized<f64>,
}

/// [`ControlPoint`] with every channel normalized.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedPoint {
    /// Vertex position.
    pub position: Normalized<Vec2>,
    /// Incoming tangent.
    pub tangent1: NormalizedHandle,
    /// Outgoing tangent.
    pub tangent2: NormalizedHandle,
    /// Whether `tangent2` has its own radius.
    pub split_radius: Normalized<bool>,
    /// Whether `tangent2` has its own angle.
    pub split_angle: Normalized<bool>,
}

#[cfg(test)]
#[path = "../../tests/unit/shape/model.rs"]
mod tests;
