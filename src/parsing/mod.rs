pub mod config;
mod primitives;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub use config::{Config, OutputFormat, RenderSettings, Resolution};
pub use primitives::{LightData, PrimitiveData};

use crate::scene::{Scene, BACKGROUND};

pub type Vec3Data = [f64; 3];

fn default_background() -> Vec3Data {
    BACKGROUND.into()
}

fn default_light() -> LightData {
    LightData {
        origin: [1000.0, -1000.0, 0.0],
        radius: 100.0,
        color: [0.0; 3],
    }
}

/// On-disk scene description. `primitives` is in draw order, later entries paint over earlier ones.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneData {
    pub resolution: Option<Resolution>,
    #[serde(default = "default_background")]
    pub background: Vec3Data,
    #[serde(default = "default_light")]
    pub light: LightData,
    pub primitives: Vec<PrimitiveData>,
}

impl SceneData {
    /// Resolves the scene, using `fallback` when the file does not pin a resolution.
    pub fn transform(self, fallback: Resolution) -> Result<Scene> {
        let resolution = self.resolution.unwrap_or(fallback);
        check_resolution(resolution)?;

        let primitives = self
            .primitives
            .into_iter()
            .enumerate()
            .map(|(index, data)| data.transform(index))
            .collect::<Result<Vec<_>>>()?;

        Ok(Scene::new(
            resolution.width,
            resolution.height,
            self.background.into(),
            self.light.into(),
            primitives,
        ))
    }
}

fn check_resolution(resolution: Resolution) -> Result<()> {
    if resolution.width == 0 || resolution.height == 0 {
        bail!(
            "resolution must be non-empty, got {}x{}",
            resolution.width,
            resolution.height
        );
    }
    Ok(())
}

fn read_to_string(path: &Path) -> Result<String> {
    info!("loading file at {}", path.display());
    let mut input = String::new();
    let read_count = File::open(path)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("failed to read {}", path.display()))?;
    debug!("done: {} bytes", read_count);
    Ok(input)
}

pub fn load_json<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    let input = read_to_string(path)?;
    let data: T = serde_json::from_str(&input)
        .with_context(|| format!("failed to parse {} as json", path.display()))?;
    Ok(data)
}

pub fn load_toml<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    let input = read_to_string(path)?;
    let data: T = toml::from_str(&input)
        .with_context(|| format!("failed to parse {} as toml", path.display()))?;
    Ok(data)
}

/// Picks the format from the extension, `.toml` or anything else as json.
pub fn load_scene(path: &Path) -> Result<SceneData> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => load_toml(path),
        _ => load_json(path),
    }
}

pub fn get_settings(path: &Path) -> Result<Config> {
    load_toml(path)
}

/// Scene from `scene_file` when given, otherwise the built-in three sphere scene.
pub fn construct_scene(scene_file: Option<&Path>, settings: &RenderSettings) -> Result<Scene> {
    match scene_file {
        Some(path) => load_scene(path)?
            .transform(settings.resolution)
            .with_context(|| format!("invalid scene in {}", path.display())),
        None => {
            check_resolution(settings.resolution)?;
            info!("no scene file given, using the reference scene");
            Ok(Scene::reference(
                settings.resolution.width,
                settings.resolution.height,
            ))
        }
    }
}
