//! Time-series chart rendering
//!
//! Draws the interpolated series as a single black line on a 9x5 inch figure
//! and writes it as PNG. The chart is drawn into an in-memory RGB buffer first
//! so the saved image can be cropped to its content plus a small pad.

use crate::errors::{Result, ZonalPlotError};
use crate::pipeline::ZonalSeries;
use image::{imageops, ImageFormat, RgbImage};
use ndarray::Array1;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};
use std::path::Path;
use tracing::{debug, info};

/// Data range shown on each axis, as (min, max)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisExtents {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

/// Figure geometry and typography. Sizes are in typographic points unless
/// the field name says otherwise.
#[derive(Debug, Clone)]
pub struct FigureStyle {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: f64,
    /// Axes rectangle as [left, bottom, width, height] in figure fractions
    pub axes_rect: [f64; 4],
    pub line_color: RGBColor,
    pub line_width: f64,
    pub tick_length: f64,
    pub tick_width: f64,
    pub tick_label_size: f64,
    pub axis_label_size: f64,
    pub title_size: f64,
    /// Gap between the top of the axes and the title baseline
    pub title_pad: f64,
    /// Padding kept around the content when cropping, in inches
    pub pad_in: f64,
    pub background: RGBColor,
    pub x_label: String,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            width_in: 9.0,
            height_in: 5.0,
            dpi: 100.0,
            axes_rect: [0.1, 0.1, 0.8, 0.8],
            line_color: BLACK,
            line_width: 3.0,
            tick_length: 5.0,
            tick_width: 1.0,
            tick_label_size: 10.0,
            axis_label_size: 10.0,
            title_size: 12.0,
            title_pad: 6.0,
            pad_in: 0.1,
            background: WHITE,
            x_label: "time".to_string(),
        }
    }
}

/// Pixel margins around the axes area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxesMargins {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl FigureStyle {
    /// Converts a size in points to pixels at this figure's dpi.
    pub fn pixels(&self, points: f64) -> f64 {
        points * self.dpi / 72.0
    }

    /// Canvas size in pixels
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            (self.width_in * self.dpi).round() as u32,
            (self.height_in * self.dpi).round() as u32,
        )
    }

    /// Margins that leave exactly `axes_rect` for the plotting area.
    pub fn axes_margins(&self) -> AxesMargins {
        let (width, height) = self.canvas_size();
        let (w, h) = (width as f64, height as f64);
        let [left, bottom, aw, ah] = self.axes_rect;
        AxesMargins {
            left: (left * w).round() as u32,
            right: ((1.0 - left - aw) * w).round() as u32,
            top: ((1.0 - bottom - ah) * h).round() as u32,
            bottom: (bottom * h).round() as u32,
        }
    }

    fn font(&self, points: f64) -> FontDesc<'static> {
        FontDesc::new(FontFamily::SansSerif, self.pixels(points), FontStyle::Normal)
    }
}

/// Axis extents clamped exactly to the data: [min(time), max(time)] x [min(series), max(series)].
///
/// A constant series gives a zero-height y range; that is passed through.
pub fn axis_extents(time: &Array1<f64>, values: &Array1<f64>) -> Result<AxisExtents> {
    if time.len() != values.len() {
        return Err(ZonalPlotError::LengthMismatch {
            expected: time.len(),
            found: values.len(),
        });
    }
    Ok(AxisExtents {
        x: finite_range(time, "time")?,
        y: finite_range(values, "series")?,
    })
}

fn finite_range(data: &Array1<f64>, what: &str) -> Result<(f64, f64)> {
    if data.is_empty() {
        return Err(ZonalPlotError::PlotError(format!("{what} is empty")));
    }
    if let Some(bad) = data.iter().find(|v| !v.is_finite()) {
        return Err(ZonalPlotError::PlotError(format!(
            "axis limits cannot be NaN or Inf ({what} contains {bad})"
        )));
    }
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok((min, max))
}

fn plot_error<E: std::fmt::Display>(e: E) -> ZonalPlotError {
    ZonalPlotError::PlotError(e.to_string())
}

/// Renders `series` and saves it as PNG at `path`, replacing any existing file.
pub fn render_time_series(
    series: &ZonalSeries,
    path: &Path,
    style: &FigureStyle,
) -> Result<AxisExtents> {
    let extents = axis_extents(&series.time, &series.values)?;
    let (width, height) = style.canvas_size();

    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        draw_chart(&root, series, &extents, style)?;
        root.present().map_err(plot_error)?;
    }

    let image = RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| plot_error("render buffer does not match canvas size"))?;
    let pad = style.pixels(style.pad_in * 72.0).round() as u32;
    let background = [style.background.0, style.background.1, style.background.2];
    let image = crop_to_content(&image, background, pad);

    image.save_with_format(path, ImageFormat::Png)?;
    info!(
        "🖼 Wrote {}x{} figure to {}",
        image.width(),
        image.height(),
        path.display()
    );

    Ok(extents)
}

/// Draws the titled line chart onto `root`.
pub fn draw_chart<DB>(
    root: &DrawingArea<DB, Shift>,
    series: &ZonalSeries,
    extents: &AxisExtents,
    style: &FigureStyle,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&style.background).map_err(plot_error)?;

    let margins = style.axes_margins();
    let tick_width = style.pixels(style.tick_width).round().max(1.0) as u32;
    let line_width = style.pixels(style.line_width).round().max(1.0) as u32;

    // Only the left and bottom label areas exist, so only those spines are drawn.
    let mut chart = ChartBuilder::on(root)
        .margin_top(margins.top)
        .margin_right(margins.right)
        .set_label_area_size(LabelAreaPosition::Left, margins.left)
        .set_label_area_size(LabelAreaPosition::Bottom, margins.bottom)
        .build_cartesian_2d(extents.x.0..extents.x.1, extents.y.0..extents.y.1)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .set_all_tick_mark_size(style.pixels(style.tick_length))
        .axis_style(style.line_color.stroke_width(tick_width))
        .label_style(style.font(style.tick_label_size))
        .axis_desc_style(style.font(style.axis_label_size))
        .x_desc(style.x_label.as_str())
        // left-side descriptions are drawn rotated 270 degrees
        .y_desc(series.variable_name.as_str())
        .draw()
        .map_err(plot_error)?;

    chart
        .draw_series(LineSeries::new(
            series
                .time
                .iter()
                .copied()
                .zip(series.values.iter().copied()),
            style.line_color.stroke_width(line_width),
        ))
        .map_err(plot_error)?;

    let (width, _) = style.canvas_size();
    let axes_center = margins.left + (width - margins.left - margins.right) / 2;
    let title_style =
        TextStyle::from(style.font(style.title_size)).pos(Pos::new(HPos::Center, VPos::Bottom));
    let baseline = margins.top as i32 - style.pixels(style.title_pad).round() as i32;
    root.draw_text(
        &series.title(),
        &title_style,
        (axes_center as i32, baseline),
    )
    .map_err(plot_error)?;

    debug!(
        "📐 Axes at {:?} with extents {:?}",
        margins, extents
    );
    Ok(())
}

/// Bounding box `(x, y, width, height)` of pixels that differ from `background`.
pub fn content_bounds(image: &RgbImage, background: [u8; 3]) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0 == background {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    bounds.map(|(x0, y0, x1, y1)| (x0, y0, x1 - x0 + 1, y1 - y0 + 1))
}

/// Crops to the content bounding box grown by `pad` pixels on every side.
///
/// A blank image is returned unchanged.
pub fn crop_to_content(image: &RgbImage, background: [u8; 3], pad: u32) -> RgbImage {
    let Some((x, y, w, h)) = content_bounds(image, background) else {
        return image.clone();
    };
    let left = x.saturating_sub(pad);
    let top = y.saturating_sub(pad);
    let right = (x + w + pad).min(image.width());
    let bottom = (y + h + pad).min(image.height());
    imageops::crop_imm(image, left, top, right - left, bottom - top).to_image()
}
