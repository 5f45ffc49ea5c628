use crate::constants::{CHART_HEIGHT_IN, CHART_WIDTH_IN, SIMULATION_SPAN_YEARS};
use crate::models::MoonSeries;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Eccentricity,
    OrbitalDistance,
}

impl ChartKind {
    /// Presentation order for one moon.
    pub const ALL: [ChartKind; 2] = [ChartKind::Eccentricity, ChartKind::OrbitalDistance];

    pub fn slug(self) -> &'static str {
        match self {
            ChartKind::Eccentricity => "eccentricity",
            ChartKind::OrbitalDistance => "orbital_distance",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Eccentricity => write!(f, "Eccentricity"),
            ChartKind::OrbitalDistance => write!(f, "Orbital Distance"),
        }
    }
}

/// Canvas size in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub const DEFAULT: CanvasSize = CanvasSize {
        width: CHART_WIDTH_IN,
        height: CHART_HEIGHT_IN,
    };

    pub fn pixels(&self, dpi: f64) -> (u32, u32) {
        ((self.width * dpi).round() as u32, (self.height * dpi).round() as u32)
    }
}

/// Everything needed to draw one single-series time chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub moon_name: String,
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series_label: String,
    pub timestamps: Vec<String>,
    pub values: Vec<f64>,
    pub size: CanvasSize,
    pub legend: bool,
    pub grid: bool,
}

impl ChartSpec {
    pub fn for_series(series: &MoonSeries, kind: ChartKind) -> Self {
        match kind {
            ChartKind::Eccentricity => Self::eccentricity(series),
            ChartKind::OrbitalDistance => Self::orbital_distance(series),
        }
    }

    pub fn eccentricity(series: &MoonSeries) -> Self {
        Self::new(series, ChartKind::Eccentricity, "Eccentricity", series.eccentricities())
    }

    pub fn orbital_distance(series: &MoonSeries) -> Self {
        Self::new(series, ChartKind::OrbitalDistance, "Distance (m)", series.distances_m())
    }

    fn new(series: &MoonSeries, kind: ChartKind, y_label: &str, values: Vec<f64>) -> Self {
        let moon = &series.moon_name;
        Self {
            moon_name: moon.clone(),
            kind,
            title: format!("{kind} of {moon} Over {SIMULATION_SPAN_YEARS} Years"),
            x_label: "Time".to_string(),
            y_label: y_label.to_string(),
            series_label: format!("{moon} {kind}"),
            timestamps: series.timestamps(),
            values,
            size: CanvasSize::DEFAULT,
            legend: true,
            grid: true,
        }
    }

    /// Data points with the row index as x, one position per timestamp.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect()
    }

    pub fn x_range(&self) -> Range<f64> {
        match self.values.len() {
            0 => 0.0..1.0,
            1 => -0.5..0.5,
            n => 0.0..(n - 1) as f64,
        }
    }

    /// Value range with 5% headroom, widened when all finite values are equal.
    pub fn y_range(&self) -> Range<f64> {
        let (min, max) = self
            .values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });

        if min > max {
            return 0.0..1.0;
        }

        let span = max - min;
        let pad = if span > 0.0 {
            span * 0.05
        } else if min != 0.0 {
            min.abs() * 0.05
        } else {
            1.0
        };
        (min - pad)..(max + pad)
    }

    /// Timestamp shown at axis position `x`; blank between rows.
    pub fn timestamp_label(&self, x: f64) -> String {
        let idx = x.round();
        if (x - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        self.timestamps
            .get(idx as usize)
            .cloned()
            .unwrap_or_default()
    }
}
