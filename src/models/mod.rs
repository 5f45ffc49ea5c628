pub mod moon_series;

pub use moon_series::{MoonSeries, OrbitRecord};
