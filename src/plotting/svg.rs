use super::{ChartPresenter, ChartSpec};
use crate::constants::CHART_DPI;
use crate::error::RenderError;
use log::{debug, info};
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

const SERIES_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Writes each chart as an SVG image under `output_dir`.
pub struct SvgPresenter {
    output_dir: PathBuf,
    presented: Vec<PathBuf>,
}

impl SvgPresenter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            presented: Vec::new(),
        }
    }

    /// Files written so far, in presentation order.
    pub fn presented(&self) -> &[PathBuf] {
        &self.presented
    }

    pub fn chart_path(&self, chart: &ChartSpec) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}.svg", chart.moon_name, chart.kind.slug()))
    }
}

impl ChartPresenter for SvgPresenter {
    fn present(&mut self, chart: &ChartSpec) -> Result<(), RenderError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| RenderError::Io {
            path: self.output_dir.clone(),
            source,
        })?;

        let path = self.chart_path(chart);
        draw_chart(chart, &path, chart.size.pixels(CHART_DPI)).map_err(|message| {
            RenderError::Draw {
                title: chart.title.clone(),
                message,
            }
        })?;

        info!("{} -> {}", chart.title, path.display());
        self.presented.push(path);
        Ok(())
    }
}

fn draw_chart(chart: &ChartSpec, path: &Path, size: (u32, u32)) -> Result<(), String> {
    let x_range = chart.x_range();
    let y_range = chart.y_range();
    debug!(
        "Drawing \"{}\": {} points, x {:?}, y {:?}",
        chart.title,
        chart.values.len(),
        x_range,
        y_range
    );

    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 28).into_font().color(&BLACK))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| e.to_string())?;

    let x_formatter = |x: &f64| chart.timestamp_label(*x);
    let y_formatter = |y: &f64| format!("{:.4e}", y);
    {
        let mut mesh = ctx.configure_mesh();
        mesh.x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .x_labels(chart.timestamps.len().clamp(1, 8))
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter)
            .axis_desc_style(("sans-serif", 18))
            .label_style(("sans-serif", 14));
        if !chart.grid {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(|e| e.to_string())?;
    }

    let series = ctx
        .draw_series(LineSeries::new(chart.points(), SERIES_COLOR.stroke_width(2)).point_size(2))
        .map_err(|e| e.to_string())?;

    if chart.legend {
        series
            .label(chart.series_label.as_str())
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], SERIES_COLOR.stroke_width(2)));

        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.9))
            .border_style(BLACK)
            .label_font(("sans-serif", 16))
            .draw()
            .map_err(|e| e.to_string())?;
    }

    root.present().map_err(|e| e.to_string())?;
    Ok(())
}
