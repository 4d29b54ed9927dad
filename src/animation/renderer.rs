//! Frame drawing and export on top of plotters.
//!
//! The look follows the original hand-drawn style: no real chart axes, a dark
//! background, a faint pseudo-grid, a gray axis cross through the origin, the
//! white curve revealed sample by sample and a red marker with a coordinate
//! label at the tip.

use crate::animation::sampler::SampledCurve;
use crate::animation::viewport::{CameraWindow, ViewportPlanner};
use crate::symbolic::utils::linspace;
use itertools::Itertools;
use log::{info, warn};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// a GIF longer than this gets subsampled; the camera arithmetic is unchanged
pub const MAX_GIF_FRAMES: usize = 250;

/// Colors and geometry of the rendered frames.
#[derive(Debug, Clone)]
pub struct RenderStyle {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub line: RGBColor,
    pub tip: RGBColor,
    pub axis: RGBColor,
    pub grid: RGBColor,
    /// grid lines per direction
    pub n_grid: usize,
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle {
            width: 800,
            height: 600,
            background: BLACK,
            line: WHITE,
            tip: RED,
            axis: RGBColor(128, 128, 128),
            grid: RGBColor(128, 128, 128),
            n_grid: 10,
        }
    }
}

/// Renders the whole animation into an animated GIF.
///
/// Frame 0 is blank (the original clears everything before the first sample
/// appears), then the curve is revealed prefix by prefix with the camera
/// window supplied by the planner. `frame_delay_ms` is the per-frame delay.
pub fn render_gif<P: AsRef<Path>>(
    path: P,
    curve: &SampledCurve,
    planner: &ViewportPlanner,
    frame_delay_ms: u32,
    style: &RenderStyle,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::gif(
        &path,
        (style.width, style.height),
        frame_delay_ms,
    )?
    .into_drawing_area();

    // blank opening frame
    root.fill(&style.background)?;
    root.present()?;

    let n = curve.len();
    let stride = n.div_ceil(MAX_GIF_FRAMES).max(1);
    let mut frames: Vec<usize> = (1..=n).step_by(stride).collect();
    if frames.last() != Some(&n) {
        frames.push(n);
    }
    for frame in frames {
        draw_frame(&root, curve, &planner.window_for(frame), frame, style)?;
        root.present()?;
    }
    info!(
        "animation rendered to {} ({} samples, stride {})",
        path.as_ref().display(),
        n,
        stride
    );
    Ok(())
}

/// Renders a static snapshot of the full curve, camera pulled all the way out.
pub fn render_png<P: AsRef<Path>>(
    path: P,
    curve: &SampledCurve,
    planner: &ViewportPlanner,
    style: &RenderStyle,
) -> Result<(), Box<dyn std::error::Error>> {
    let root =
        BitMapBackend::new(&path, (style.width, style.height)).into_drawing_area();
    draw_frame(&root, curve, &planner.full_window(), curve.len(), style)?;
    root.present()?;
    info!("snapshot rendered to {}", path.as_ref().display());
    Ok(())
}

fn draw_frame(
    area: &DrawingArea<BitMapBackend, Shift>,
    curve: &SampledCurve,
    win: &CameraWindow,
    frame: usize,
    style: &RenderStyle,
) -> Result<(), Box<dyn std::error::Error>> {
    area.fill(&style.background)?;
    let mut chart = ChartBuilder::on(area)
        .build_cartesian_2d(win.x_left..win.x_right, win.y_lower..win.y_upper)?;

    // faint pseudo-grid instead of a chart mesh
    for gx in linspace(win.x_left, win.x_right, style.n_grid) {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(gx, win.y_lower), (gx, win.y_upper)],
            style.grid.mix(0.2),
        )))?;
    }
    for gy in linspace(win.y_lower, win.y_upper, style.n_grid) {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(win.x_left, gy), (win.x_right, gy)],
            style.grid.mix(0.2),
        )))?;
    }

    // axis cross through the origin, clipped by the chart to the window
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(win.x_left, 0.0), (win.x_right, 0.0)],
        style.axis.mix(0.5).stroke_width(2),
    )))?;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(0.0, win.y_lower), (0.0, win.y_upper)],
        style.axis.mix(0.5).stroke_width(2),
    )))?;

    // the revealed prefix of the curve, broken at poles and domain gaps
    let k = frame.clamp(1, curve.len());
    let prefix = curve.x[..k].iter().zip(curve.y[..k].iter());
    for (finite, run) in &prefix.chunk_by(|(_, y)| y.is_finite()) {
        if !finite {
            continue;
        }
        let segment: Vec<(f64, f64)> = run.map(|(&x, &y)| (x, y)).collect();
        if segment.len() > 1 {
            chart.draw_series(LineSeries::new(segment, style.line.stroke_width(2)))?;
        }
    }

    // tip marker with its coordinates
    let (tip_x, tip_y) = curve.tip(frame);
    if tip_y.is_finite() {
        chart.draw_series(std::iter::once(Circle::new(
            (tip_x, tip_y),
            4,
            style.tip.filled(),
        )))?;
        let label = format!("({:.2}, {:.2})", tip_x, tip_y);
        let label_style = ("sans-serif", 14).into_font().color(&style.line);
        // the frame is still useful when the system has no fonts to rasterize
        if let Err(e) = chart.draw_series(std::iter::once(Text::new(
            label,
            (tip_x, tip_y),
            label_style,
        ))) {
            warn!("tip label not drawn: {}", e);
        }
    }
    Ok(())
}
