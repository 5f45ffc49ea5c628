/// One sample of a moon's orbit.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitRecord {
    pub timestamp: String,
    pub eccentricity: f64,
    pub semi_major_axis_m: f64, // meters
}

/// A moon's orbital time series, rows in source file order.
#[derive(Debug, Clone, PartialEq)]
pub struct MoonSeries {
    pub moon_name: String,
    pub rows: Vec<OrbitRecord>,
}

impl MoonSeries {
    pub fn new(moon_name: impl Into<String>, rows: Vec<OrbitRecord>) -> Self {
        Self {
            moon_name: moon_name.into(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn timestamps(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.timestamp.clone()).collect()
    }

    pub fn eccentricities(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.eccentricity).collect()
    }

    pub fn distances_m(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.semi_major_axis_m).collect()
    }
}
