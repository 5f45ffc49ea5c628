pub mod dataset;

pub use dataset::{au_to_meters, load_moon_series, read_moon_series};
