use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::renderer::DEFAULT_BAND_ROWS;
use crate::scene::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    PPM,
    PNG,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::PPM => "ppm",
            OutputFormat::PNG => "png",
        }
    }

    pub fn from_path(path: &str) -> Option<OutputFormat> {
        let extension = Path::new(path).extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "ppm" => Some(OutputFormat::PPM),
            "png" => Some(OutputFormat::PNG),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RenderSettings {
    pub filename: Option<String>,
    pub resolution: Resolution,
    pub threads: Option<u16>,
    pub output_format: OutputFormat,
    pub band_rows: Option<usize>,
    pub silenced: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            filename: None,
            resolution: Resolution::default(),
            threads: None,
            output_format: OutputFormat::PPM,
            band_rows: None,
            silenced: false,
        }
    }
}

impl RenderSettings {
    /// `output/render.<ext>` unless a filename was given.
    pub fn output_path(&self) -> String {
        self.filename
            .clone()
            .unwrap_or_else(|| format!("output/render.{}", self.output_format.extension()))
    }

    /// Sets the output file. A `.ppm` or `.png` extension also picks the format, so the file
    /// contents always match the name.
    pub fn set_output(&mut self, filename: String) {
        if let Some(format) = OutputFormat::from_path(&filename) {
            self.output_format = format;
        }
        self.filename = Some(filename);
    }

    pub fn threads(&self) -> usize {
        self.threads
            .map(|t| t as usize)
            .unwrap_or_else(num_cpus::get)
            .max(1)
    }

    pub fn band_rows(&self) -> usize {
        self.band_rows.unwrap_or(DEFAULT_BAND_ROWS).max(1)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub scene_file: Option<String>,
    pub render_settings: RenderSettings,
}
