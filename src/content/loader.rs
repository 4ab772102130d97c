//! Loader for RON content files.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{GameplayDefaults, SceneDef};

pub const SCENE_FILE: &str = "scene.ron";
pub const GAMEPLAY_DEFAULTS_FILE: &str = "gameplay_defaults.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse RON text that came from `file_name`.
pub fn parse_ron<T>(file_name: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct from disk.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_ron(&file_name, &contents)
}

/// Content for one session. Files that fail to load are replaced by the
/// built-in defaults and reported in `errors`.
#[derive(Debug, Default)]
pub struct LoadedContent {
    pub scene: SceneDef,
    pub defaults: GameplayDefaults,
    pub errors: Vec<ContentLoadError>,
}

/// Load assets/data/*.ron, falling back per file.
pub fn load_all_content(base_path: &Path) -> LoadedContent {
    let mut content = LoadedContent::default();

    match load_single_file::<SceneDef>(&base_path.join(SCENE_FILE)) {
        Ok(scene) => content.scene = scene,
        Err(e) => content.errors.push(e),
    }

    match load_single_file::<GameplayDefaults>(&base_path.join(GAMEPLAY_DEFAULTS_FILE)) {
        Ok(defaults) => content.defaults = defaults,
        Err(e) => content.errors.push(e),
    }

    content
}
