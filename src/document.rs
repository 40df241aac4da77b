use crate::{
    animation::channel::{Channel, Waypoint},
    animation::ease::Interpolation,
    foundation::core::{FrameIndex, Fps, Vec2},
    foundation::error::{ExportError, ExportResult},
    shape::model::{ControlPoint, PointList, Shape, Spline, TangentHandle},
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// JSON form of one host shape parameter.
///
/// Parameters keep their host role names (`point`, `t1`, `split_radius`, ...).
/// Roles are resolved once into typed fields by [`Document::to_shape`].
pub struct Document {
    /// Frame rate used to convert waypoint times given in seconds.
    #[serde(default)]
    pub fps: Option<Fps>,
    /// The shape parameter.
    pub shape: ShapeNode,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// Shape parameter, tagged by host type.
pub enum ShapeNode {
    /// Spline whose entries are composites of position and tangent handles.
    Bline {
        /// Whether the spline is closed.
        #[serde(default, rename = "loop")]
        closed: bool,
        /// One composite per control point.
        entries: Vec<CompositeNode>,
    },
    /// Plain list of positions.
    DynamicList {
        /// Whether the list is closed.
        #[serde(default, rename = "loop")]
        closed: bool,
        /// One position parameter per point.
        entries: Vec<ParamNode<Vec2>>,
    },
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Spline control point as stored by the host. Extra host parameters are ignored.
pub struct CompositeNode {
    /// Vertex position.
    pub point: Option<ParamNode<Vec2>>,
    /// Incoming tangent.
    pub t1: Option<RadialNode>,
    /// Outgoing tangent.
    pub t2: Option<RadialNode>,
    /// Split-radius flag.
    pub split_radius: Option<ParamNode<bool>>,
    /// Split-angle flag.
    pub split_angle: Option<ParamNode<bool>>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Tangent handle in polar form.
pub struct RadialNode {
    /// Handle length.
    pub radius: Option<ParamNode<f64>>,
    /// Handle angle in degrees.
    pub theta: Option<ParamNode<f64>>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Constant or animated parameter value.
pub enum ParamNode<T> {
    /// Fixed value.
    Constant(T),
    /// Waypoints with frame or second timestamps.
    Animated(Vec<WaypointNode<T>>),
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Waypoint timed either by `frame` or by `time` in seconds.
pub struct WaypointNode<T> {
    /// Integer frame.
    #[serde(default)]
    pub frame: Option<i64>,
    /// Time in seconds; needs the document fps.
    #[serde(default)]
    pub time: Option<f64>,
    /// Value at this waypoint.
    pub value: T,
    /// Interpolation toward the next waypoint.
    #[serde(default)]
    pub interpolation: Interpolation,
}

impl Document {
    /// Parse a document from JSON.
    pub fn from_json_str(s: &str) -> ExportResult<Self> {
        let doc: Self = serde_json::from_str(s)?;
        if let Some(fps) = doc.fps {
            fps.validate()?;
        }
        Ok(doc)
    }

    /// Resolve parameter roles into a typed [`Shape`].
    pub fn to_shape(&self) -> ExportResult<Shape> {
        let fps = self.fps;
        match &self.shape {
            ShapeNode::Bline { closed, entries } => {
                let points = entries
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| {
                        entry
                            .to_control_point(fps)
                            .map_err(|e| e.within(format_args!("control point {i}")))
                    })
                    .collect::<ExportResult<Vec<_>>>()?;
                Ok(Shape::Spline(Spline {
                    points,
                    closed: *closed,
                }))
            }
            ShapeNode::DynamicList { closed, entries } => {
                let points = entries
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| {
                        entry
                            .to_channel(fps)
                            .map_err(|e| e.within(format_args!("entry {i}")))
                    })
                    .collect::<ExportResult<Vec<_>>>()?;
                Ok(Shape::DynamicList(PointList {
                    points,
                    closed: *closed,
                }))
            }
        }
    }
}

impl CompositeNode {
    fn to_control_point(&self, fps: Option<Fps>) -> ExportResult<ControlPoint> {
        Ok(ControlPoint {
            position: required(&self.point, "point")?.to_channel(fps)?,
            tangent1: required(&self.t1, "t1")?
                .to_handle(fps)
                .map_err(|e| e.within("t1"))?,
            tangent2: required(&self.t2, "t2")?
                .to_handle(fps)
                .map_err(|e| e.within("t2"))?,
            split_radius: required(&self.split_radius, "split_radius")?.to_channel(fps)?,
            split_angle: required(&self.split_angle, "split_angle")?.to_channel(fps)?,
        })
    }
}

impl RadialNode {
    fn to_handle(&self, fps: Option<Fps>) -> ExportResult<TangentHandle> {
        Ok(TangentHandle {
            radius: required(&self.radius, "radius")?.to_channel(fps)?,
            angle: required(&self.theta, "theta")?.to_channel(fps)?,
        })
    }
}

impl<T: Clone> ParamNode<T> {
    fn to_channel(&self, fps: Option<Fps>) -> ExportResult<Channel<T>> {
        match self {
            Self::Constant(value) => Ok(Channel::Constant(value.clone())),
            Self::Animated(waypoints) => waypoints
                .iter()
                .map(|w| -> ExportResult<Waypoint<T>> {
                    Ok(Waypoint {
                        frame: w.frame(fps)?,
                        value: w.value.clone(),
                        interpolation: w.interpolation,
                    })
                })
                .collect::<ExportResult<Vec<_>>>()
                .map(Channel::Animated),
        }
    }
}

impl<T> WaypointNode<T> {
    fn frame(&self, fps: Option<Fps>) -> ExportResult<FrameIndex> {
        match (self.frame, self.time) {
            (Some(frame), None) => Ok(FrameIndex(frame)),
            (None, Some(secs)) => fps
                .ok_or_else(|| {
                    ExportError::validation("waypoint time in seconds needs a document fps")
                })?
                .secs_to_frame_round(secs),
            (Some(_), Some(_)) => Err(ExportError::malformed(
                "waypoint has both `frame` and `time`",
            )),
            (None, None) => Err(ExportError::malformed("waypoint has no `frame` or `time`")),
        }
    }
}

fn required<'a, T>(param: &'a Option<T>, role: &str) -> ExportResult<&'a T> {
    param
        .as_ref()
        .ok_or_else(|| ExportError::malformed(format!("missing `{role}` parameter")))
}

#[cfg(test)]
#[path = "../tests/unit/document.rs"]
mod tests;
