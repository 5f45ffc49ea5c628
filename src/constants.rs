pub const METERS_PER_AU: f64 = 1.496e11; // Astronomical unit (m)

// Source columns
pub const TIME_COLUMN: &str = "datetime_str";
pub const ECCENTRICITY_COLUMN: &str = "e";
pub const SEMI_MAJOR_AXIS_COLUMN: &str = "a"; // AU
pub const REQUIRED_COLUMNS: [&str; 3] = [TIME_COLUMN, ECCENTRICITY_COLUMN, SEMI_MAJOR_AXIS_COLUMN];

// Charts
pub const CHART_WIDTH_IN: f64 = 12.0;
pub const CHART_HEIGHT_IN: f64 = 6.0;
pub const CHART_DPI: f64 = 100.0;
pub const SIMULATION_SPAN_YEARS: u32 = 1000;
