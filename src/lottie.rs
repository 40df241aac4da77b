//! Lottie JSON encoding of exported shape keyframes.
//!
//! A segment encodes as
//! `{"i":{"x":0.5,"y":0.5},"o":{..},"t":F,"s":[shape],"e":[shape]}` where each
//! shape is `{"i":[[x,y],..],"o":[..],"v":[..],"c":closed}`; the sentinel
//! encodes as `{"t":F}`.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{
    foundation::core::Vec2,
    foundation::error::ExportResult,
    shape::sampler::{ShapeKeyframe, ShapeValue},
};

fn point(v: Vec2) -> [f64; 2] {
    [v.x, v.y]
}

impl Serialize for ShapeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tangents_in: Vec<[f64; 2]> =
            self.vertices.iter().map(|v| point(v.tangent_in)).collect();
        let tangents_out: Vec<[f64; 2]> =
            self.vertices.iter().map(|v| point(v.tangent_out)).collect();
        let vertices: Vec<[f64; 2]> = self.vertices.iter().map(|v| point(v.vertex)).collect();

        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("i", &tangents_in)?;
        map.serialize_entry("o", &tangents_out)?;
        map.serialize_entry("v", &vertices)?;
        map.serialize_entry("c", &self.closed)?;
        map.end()
    }
}

impl Serialize for ShapeKeyframe {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Segment(segment) => {
                let mut map = serializer.serialize_map(Some(5))?;
                map.serialize_entry("i", &segment.easing_in)?;
                map.serialize_entry("o", &segment.easing_out)?;
                map.serialize_entry("t", &segment.time.0)?;
                map.serialize_entry("s", std::slice::from_ref(&segment.start))?;
                map.serialize_entry("e", std::slice::from_ref(&segment.end))?;
                map.end()
            }
            Self::End { time } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("t", &time.0)?;
                map.end()
            }
        }
    }
}

/// Animated Lottie shape property (`{"a":1,"k":[...]}`) over a keyframe sequence.
#[derive(Clone, Copy, Debug)]
pub struct ShapeProperty<'a> {
    /// Keyframes including the trailing sentinel.
    pub keyframes: &'a [ShapeKeyframe],
}

impl Serialize for ShapeProperty<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("a", &1)?;
        map.serialize_entry("k", self.keyframes)?;
        map.end()
    }
}

/// Encode a keyframe sequence as a Lottie shape property value.
pub fn shape_property_json(keyframes: &[ShapeKeyframe]) -> ExportResult<serde_json::Value> {
    Ok(serde_json::to_value(ShapeProperty { keyframes })?)
}

#[cfg(test)]
#[path = "../tests/unit/lottie.rs"]
mod tests;
