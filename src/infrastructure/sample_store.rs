use crate::domain::battery::BatterySample;
use crate::domain::ports::SampleSource;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// File-backed battery history, the Rust side of the mobile client's
/// key-value storage shim. One pretty-printed JSON array per install,
/// under `~/.voltrover` by default.
pub struct JsonSampleStore {
    file_path: PathBuf,
}

impl JsonSampleStore {
    pub fn new() -> Result<Self> {
        let home = std::env::var("HOME").context("Could not find HOME directory")?;
        Self::with_dir(PathBuf::from(home).join(".voltrover"))
    }

    /// Use an explicit data directory (configuration override and tests).
    pub fn with_dir(data_dir: PathBuf) -> Result<Self> {
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir).context("Failed to create data directory")?;
        }

        Ok(Self {
            file_path: data_dir.join("battery_history.json"),
        })
    }

    pub fn load(&self) -> Result<Option<Vec<BatterySample>>> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&self.file_path).context("Failed to read battery history file")?;
        let samples: Vec<BatterySample> =
            serde_json::from_str(&content).context("Failed to parse battery history JSON")?;

        info!(
            "Loaded {} samples from {:?}",
            samples.len(),
            self.file_path
        );
        Ok(Some(samples))
    }

    pub fn save(&self, samples: &[BatterySample]) -> Result<()> {
        let content =
            serde_json::to_string_pretty(samples).context("Failed to serialize battery history")?;

        // Atomic write: write to temp file then rename
        let temp_path = self.file_path.with_extension("tmp");
        fs::write(&temp_path, content).context("Failed to write temp history file")?;
        fs::rename(&temp_path, &self.file_path).context("Failed to rename history file")?;

        info!("Saved {} samples to {:?}", samples.len(), self.file_path);
        Ok(())
    }
}

impl SampleSource for JsonSampleStore {
    fn fetch(&self) -> Result<Vec<BatterySample>> {
        self.load()?.with_context(|| {
            format!(
                "No stored battery history at {:?}; run `voltrover generate` first",
                self.file_path
            )
        })
    }
}
