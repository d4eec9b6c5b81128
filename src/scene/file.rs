//! Scene loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable scene files.

use std::fs;
use std::path::Path;

use super::Scene;
use crate::rasterizer::RasterError;

/// Error type for scene files and frame export
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Render error: {0}")]
    Raster(#[from] RasterError),
}

/// Load a scene from a RON file
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, SceneError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let scene = load_scene_from_str(&contents)?;
    log::info!(
        "loaded scene {} ({}x{}, {} triangles)",
        path.display(),
        scene.width,
        scene.height,
        scene.triangles.len()
    );
    Ok(scene)
}

/// Load a scene from a RON string (for embedded scenes or testing)
///
/// The frame size must be non-empty and within
/// [`MAX_SCENE_PIXELS`](super::MAX_SCENE_PIXELS).
pub fn load_scene_from_str(s: &str) -> Result<Scene, SceneError> {
    let scene: Scene = ron::from_str(s)?;
    scene.check_size()?;
    Ok(scene)
}

/// Save a scene to a RON file
pub fn save_scene<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<(), SceneError> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(scene, config)?;
    fs::write(path.as_ref(), contents)?;
    log::debug!("saved scene to {}", path.as_ref().display());
    Ok(())
}

/// Render a scene and write the frame as a PNG
pub fn export_png<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<(), SceneError> {
    let fb = scene.render()?;
    fb.save_png(path)?;
    Ok(())
}
