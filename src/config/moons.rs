use std::path::{Path, PathBuf};

/// One moon and the CSV file holding its orbital time series.
#[derive(Debug, Clone, PartialEq)]
pub struct MoonSource {
    pub name: String,
    pub path: PathBuf,
}

impl MoonSource {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Ordered moon -> file mapping consumed by the driver.
#[derive(Debug, Clone, PartialEq)]
pub struct MoonCatalog {
    sources: Vec<MoonSource>,
}

impl MoonCatalog {
    pub const GALILEAN_MOONS: [&'static str; 4] = ["Io", "Europa", "Ganymede", "Callisto"];

    pub fn new(sources: Vec<MoonSource>) -> Self {
        Self { sources }
    }

    /// The four Galilean moons, files resolved against the working directory.
    pub fn galilean() -> Self {
        Self::galilean_in(Path::new(""))
    }

    /// The four Galilean moons with their data files under `data_dir`.
    pub fn galilean_in(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        let sources = Self::GALILEAN_MOONS
            .iter()
            .map(|name| MoonSource::new(*name, data_dir.join(Self::data_file_name(name))))
            .collect();
        Self { sources }
    }

    pub fn data_file_name(moon_name: &str) -> String {
        format!("{moon_name}_1000_years_data.csv")
    }

    pub fn sources(&self) -> &[MoonSource] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
