use softraster::rasterizer::{draw_colored_triangle, draw_triangle, Color, Framebuffer, Vec2};
use softraster::scene::{export_png, load_scene_from_str, Scene};

const QUAD: &str = include_str!("../assets/scenes/quad.ron");

const YELLOW: Color = Color::YELLOW;
const SKY: Color = Color::new(0, 128, 255);
const BACKDROP: Color = Color::new(30, 30, 40);

fn quad_scene() -> Scene {
    load_scene_from_str(QUAD).unwrap()
}

#[test]
fn quad_scene_parses() {
    let scene = quad_scene();
    assert_eq!((scene.width, scene.height, scene.scale), (64, 48, 8));
    assert_eq!(scene.clear, BACKDROP);
    assert_eq!(scene.triangles.len(), 3);
}

#[test]
fn shared_diagonal_is_drawn_by_both_halves() {
    let fb = quad_scene().render().unwrap();

    assert_eq!(fb.pixel(8, 8), Some(YELLOW));
    assert_eq!(fb.pixel(39, 39), Some(SKY));
    // Centers on the diagonal satisfy both edge tests; the later triangle wins
    assert_eq!(fb.pixel(20, 27), Some(SKY));
    assert_eq!(fb.pixel(20, 26), Some(YELLOW));

    assert_eq!(fb.pixel(7, 7), Some(BACKDROP));
    assert_eq!(fb.pixel(40, 20), Some(BACKDROP));

    let square = (8..40)
        .flat_map(|y| (8..40).map(move |x| (x, y)))
        .filter(|&(x, y)| fb.pixel(x, y) == Some(BACKDROP))
        .count();
    assert_eq!(square, 0, "the two halves leave no gap");
}

#[test]
fn gouraud_vertex_on_pixel_center_keeps_its_color() {
    let fb = quad_scene().render().unwrap();
    assert_eq!(fb.pixel(48, 4), Some(Color::RED));
    assert_eq!(fb.pixel(60, 44), Some(Color::GREEN));
    assert_eq!(fb.pixel(44, 44), Some(Color::BLUE));
}

#[test]
fn data_is_row_major_rgba() {
    let mut fb = Framebuffer::new(3, 2).unwrap();
    fb.clear(Color::BLACK);
    draw_triangle(
        &mut fb,
        Vec2::new(2.5, 1.5),
        Vec2::new(2.5, 1.5),
        Vec2::new(2.5, 1.5),
        Color::WHITE,
    );
    fb.set_pixel(2, 1, Color::with_alpha(1, 2, 3, 4));
    let data = fb.data();
    assert_eq!(data.len(), 3 * 2 * 4);
    assert_eq!(&data[20..24], &[1, 2, 3, 4]);
    assert!(data[..20].chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
}

#[test]
fn frame_reuse_overwrites_previous_contents() {
    let mut fb = Framebuffer::new(8, 8).unwrap();
    for frame in 0..3u8 {
        fb.clear(Color::new(frame, frame, frame));
        draw_colored_triangle(
            &mut fb,
            Vec2::new(0.5, 0.5),
            Vec2::new(7.5, 0.5),
            Vec2::new(0.5, 7.5),
            Color::RED,
            Color::GREEN,
            Color::BLUE,
        );
        assert_eq!(fb.pixel(7, 7), Some(Color::new(frame, frame, frame)));
        assert_eq!(fb.pixel(0, 0), Some(Color::RED));
    }
}

#[test]
fn export_writes_png() {
    let path = std::env::temp_dir().join("softraster_quad_export.png");
    export_png(&quad_scene(), &path).unwrap();
    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (64, 48));
    assert_eq!(img.get_pixel(8, 8).0, YELLOW.to_bytes());
    let _ = std::fs::remove_file(&path);
}
