use crate::config::moons::MoonCatalog;
use crate::error::DriverError;
use crate::loader::load_moon_series;
use crate::plotting::{render_moon, ChartKind, ChartPresenter};
use log::{info, warn};

/// Loads and renders every moon in catalog order, one at a time.
///
/// The first load or render failure aborts the run. Returns the number of
/// charts presented.
pub fn run<P: ChartPresenter + ?Sized>(
    catalog: &MoonCatalog,
    presenter: &mut P,
) -> Result<usize, DriverError> {
    if catalog.is_empty() {
        warn!("Moon catalog is empty, nothing to render");
    } else {
        info!("Rendering {} moons", catalog.len());
    }

    let mut presented = 0;

    for source in catalog.sources() {
        info!("Processing {} ({})", source.name, source.path.display());

        let series =
            load_moon_series(&source.name, &source.path).map_err(|source_err| DriverError::Load {
                moon: source.name.clone(),
                source: source_err,
            })?;

        render_moon(&series, presenter).map_err(|source_err| DriverError::Render {
            moon: source.name.clone(),
            source: source_err,
        })?;
        presented += ChartKind::ALL.len();
    }

    Ok(presented)
}
