use crate::{
    config::ExportConfig,
    foundation::error::ExportResult,
    shape::model::{PointList, Shape, Spline},
    shape::sampler::{ShapeKeyframe, sample_shape},
    shape::window::{Window, point_list_window, spline_window},
};

/// Export a spline's path property as per-frame keyframes appended to `out`.
///
/// Nothing is appended when any control point is malformed.
#[tracing::instrument(skip(spline, config, out), fields(points = spline.points.len()))]
pub fn export_spline(
    spline: &Spline,
    config: &ExportConfig,
    out: &mut Vec<ShapeKeyframe>,
) -> ExportResult<Window> {
    config.validate()?;
    let window = spline_window(spline);
    config.check_window(window)?;

    let points = spline.normalize_points()?;

    let records = sample_shape(&points, spline.closed, window, config.end_tangents);
    tracing::debug!(
        first = window.first.0,
        last = window.last.0,
        records = records.len(),
        "exported spline"
    );
    out.extend(records);
    Ok(window)
}

/// Export a point list's path property as per-frame keyframes appended to `out`.
#[tracing::instrument(skip(list, config, out), fields(points = list.points.len()))]
pub fn export_dynamic_list(
    list: &PointList,
    config: &ExportConfig,
    out: &mut Vec<ShapeKeyframe>,
) -> ExportResult<Window> {
    config.validate()?;
    let window = point_list_window(list);
    config.check_window(window)?;

    let points = list.normalize_points()?;

    let records = sample_shape(&points, list.closed, window, config.end_tangents);
    tracing::debug!(
        first = window.first.0,
        last = window.last.0,
        records = records.len(),
        "exported dynamic list"
    );
    out.extend(records);
    Ok(window)
}

/// Export any shape; returns the window that was sampled.
#[tracing::instrument(skip(shape, config, out))]
pub fn export_shape(
    shape: &Shape,
    config: &ExportConfig,
    out: &mut Vec<ShapeKeyframe>,
) -> ExportResult<Window> {
    match shape {
        Shape::Spline(spline) => export_spline(spline, config, out),
        Shape::DynamicList(list) => export_dynamic_list(list, config, out),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/pipeline.rs"]
mod tests;
