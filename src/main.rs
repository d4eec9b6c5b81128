//! softraster viewer
//!
//! Renders a scene into the software framebuffer every frame and shows it
//! in a window, scaled up with nearest filtering.
//!
//! Usage: `softraster-viewer [scene.ron]`
//! Keys: `P` saves a PNG screenshot, `Escape` quits.

use std::path::PathBuf;
use std::sync::OnceLock;

use macroquad::prelude::*;
use softraster::rasterizer::Framebuffer;
use softraster::scene::{load_scene, Scene};
use softraster::VERSION;

static SCENE: OnceLock<Scene> = OnceLock::new();

/// Scene named on the command line, or the built-in demo.
/// Also sets up logging, since the window config is needed before `main` runs.
fn startup_scene() -> &'static Scene {
    SCENE.get_or_init(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();

        match std::env::args_os().nth(1).map(PathBuf::from) {
            Some(path) => match load_scene(&path) {
                Ok(scene) => scene,
                Err(e) => {
                    log::error!("failed to load {}: {}, using demo scene", path.display(), e);
                    Scene::default()
                }
            },
            None => Scene::default(),
        }
    })
}

fn window_conf() -> Conf {
    let scene = startup_scene();
    let scale = scene.scale.max(1);
    Conf {
        window_title: format!("softraster v{}", VERSION),
        window_width: (scene.width.saturating_mul(scale)).min(i32::MAX as u32) as i32,
        window_height: (scene.height.saturating_mul(scale)).min(i32::MAX as u32) as i32,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let scene = startup_scene();

    let mut fb = match Framebuffer::new(scene.width, scene.height) {
        Ok(fb) => fb,
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };

    // Texture2D::from_rgba8 takes u16 dimensions
    let (Ok(tex_w), Ok(tex_h)) = (u16::try_from(fb.width()), u16::try_from(fb.height())) else {
        log::error!("{}x{} is too large for a window texture", fb.width(), fb.height());
        return;
    };

    scene.render_into(&mut fb);
    let texture = Texture2D::from_rgba8(tex_w, tex_h, fb.data());
    texture.set_filter(FilterMode::Nearest);

    log::info!(
        "=== softraster === {}x{}, {} triangles",
        fb.width(),
        fb.height(),
        scene.triangles.len()
    );

    let mut screenshots = 0u32;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        scene.render_into(&mut fb);
        texture.update_from_bytes(fb.width(), fb.height(), fb.data());

        if is_key_pressed(KeyCode::P) {
            let path = PathBuf::from(format!("softraster-{:03}.png", screenshots));
            match fb.save_png(&path) {
                Ok(()) => screenshots += 1,
                Err(e) => log::error!("screenshot failed: {}", e),
            }
        }

        // Letterbox to keep square pixels
        let fb_w = fb.width() as f32;
        let fb_h = fb.height() as f32;
        let scale = (screen_width() / fb_w).min(screen_height() / fb_h);
        let (dest_w, dest_h) = (fb_w * scale, fb_h * scale);

        clear_background(BLACK);
        draw_texture_ex(
            &texture,
            (screen_width() - dest_w) / 2.0,
            (screen_height() - dest_h) / 2.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(dest_w, dest_h)),
                ..Default::default()
            },
        );

        next_frame().await;
    }
}
