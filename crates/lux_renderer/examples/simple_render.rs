//! Simple ray tracer example.
//!
//! Builds a small scene in code and saves it to PPM format.
//!
//! Run with: cargo run --example simple_render

use lux_renderer::{
    Camera, Color, Light, Material, Plane, RayTracer, RenderConfig, Scene, ShadowTest, Sphere,
    Vec3,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Lux Ray Tracer - Simple Example");
    println!("===============================");

    let start = std::time::Instant::now();
    let scene = build_scene()?;
    println!("Scene built in {:?}", start.elapsed());

    let camera = Camera::new(
        Vec3::new(0.0, 1.5, 8.0),  // position
        Vec3::new(0.0, -0.1, -1.0), // direction
        Vec3::new(0.0, 1.0, 0.0),   // up
    )?
    .with_view_plane(1.0, 1.6, 0.9)?
    .with_clipping(0.5, 100.0)?;

    // A tighter shadow test than the default per-axis tolerance
    let config = RenderConfig {
        shadow_test: ShadowTest::Distance { epsilon: 0.01 },
        ..RenderConfig::default()
    };

    let (width, height) = (800, 450);
    println!("Rendering {}x{}...", width, height);

    let start = std::time::Instant::now();
    let image = RayTracer::new(&scene).with_config(config).render(&camera, width, height)?;
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    image.store(filename)?;
    println!("Saved to {}", filename);

    Ok(())
}

fn build_scene() -> Result<Scene, lux_renderer::RenderError> {
    let mut scene = Scene::new();

    // Ground
    let grey = Color::new(0.5, 0.5, 0.5);
    scene.add(Box::new(Plane::new(
        Vec3::ZERO,
        Vec3::Y,
        Material::from_color(grey, 4.0),
        grey,
    )?));

    // Three spheres
    let spheres = [
        (Vec3::new(-2.2, 1.0, 0.0), Color::new(0.4, 0.2, 0.1), 8.0),
        (Vec3::new(0.0, 1.0, 0.0), Color::new(0.1, 0.3, 0.7), 64.0),
        (Vec3::new(2.2, 1.0, 0.0), Color::new(0.7, 0.6, 0.5), 256.0),
    ];
    for (center, color, shininess) in spheres {
        scene.add(Box::new(Sphere::new(
            center,
            1.0,
            Material::from_color(color, shininess),
            color,
        )));
    }

    scene.add_light(Light::white(Vec3::new(-6.0, 8.0, 6.0), 0.9));
    scene.add_light(Light::white(Vec3::new(6.0, 4.0, 8.0), 0.4));

    println!("Created {} objects", scene.len());
    Ok(scene)
}
