pub mod chart;
pub mod svg;

pub use chart::{CanvasSize, ChartKind, ChartSpec};
pub use svg::SvgPresenter;

use crate::error::RenderError;
use crate::models::MoonSeries;

/// Something that shows a finished chart to the user.
///
/// `present` returns only once the chart has been shown; the renderer does
/// not build the next chart before that.
pub trait ChartPresenter {
    fn present(&mut self, chart: &ChartSpec) -> Result<(), RenderError>;
}

/// Presents the eccentricity chart, then the orbital distance chart.
pub fn render_moon<P: ChartPresenter + ?Sized>(
    series: &MoonSeries,
    presenter: &mut P,
) -> Result<(), RenderError> {
    for kind in ChartKind::ALL {
        let chart = ChartSpec::for_series(series, kind);
        presenter.present(&chart)?;
    }
    Ok(())
}
