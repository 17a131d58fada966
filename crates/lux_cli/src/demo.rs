//! Built-in demo scene: a ground plane, three large spheres and a field of
//! small randomly colored ones.

use lux_core::{
    CameraDescription, Color, ImageSettings, Light, Material, PrimitiveDescription,
    SceneDescription,
};
use lux_math::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_SEED: u64 = 42;

fn sphere(center: Vec3, radius: f32, material: &str, color: Color) -> PrimitiveDescription {
    PrimitiveDescription::Sphere {
        center,
        radius,
        material: material.to_string(),
        color,
    }
}

/// Build the demo scene. The same seed always produces the same scene.
pub fn build_demo_scene(seed: u64) -> SceneDescription {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut scene = SceneDescription {
        image: ImageSettings {
            width: 800,
            height: 450,
            output: Some("demo.png".to_string()),
        },
        camera: CameraDescription {
            position: Vec3::new(0.0, 3.0, 14.0),
            direction: Vec3::new(0.0, -0.15, -1.0),
            up: Vec3::Y,
            view_plane_distance: 1.0,
            view_plane_width: 1.6,
            view_plane_height: 0.9,
            front_plane_distance: 0.0,
            back_plane_distance: 1000.0,
        },
        ..Default::default()
    };

    // Ground
    let ground = Color::new(0.5, 0.5, 0.5);
    scene
        .materials
        .insert("ground".to_string(), Material::from_color(ground, 4.0));
    scene.primitives.push(PrimitiveDescription::Plane {
        point: Vec3::ZERO,
        normal: Vec3::Y,
        material: "ground".to_string(),
        color: ground,
    });

    // Three main spheres
    let large = [
        (Vec3::new(-4.0, 1.0, 0.0), Color::new(0.4, 0.2, 0.1), 8.0),
        (Vec3::new(0.0, 1.0, 0.0), Color::new(0.2, 0.4, 0.8), 64.0),
        (Vec3::new(4.0, 1.0, 0.0), Color::new(0.7, 0.6, 0.5), 256.0),
    ];
    for (i, (center, color, shininess)) in large.into_iter().enumerate() {
        let name = format!("main_{}", i);
        scene
            .materials
            .insert(name.clone(), Material::from_color(color, shininess));
        scene.primitives.push(sphere(center, 1.0, &name, color));
    }

    // Small random spheres
    for a in -5..5 {
        for b in -5..5 {
            let center = Vec3::new(
                a as f32 + 0.9 * rng.gen::<f32>(),
                0.2,
                b as f32 + 0.9 * rng.gen::<f32>(),
            );

            if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let color = Color::new(
                rng.gen::<f32>() * rng.gen::<f32>(),
                rng.gen::<f32>() * rng.gen::<f32>(),
                rng.gen::<f32>() * rng.gen::<f32>(),
            );
            let name = format!("small_{}_{}", a, b);
            let shininess = rng.gen_range(1.0..128.0);
            scene
                .materials
                .insert(name.clone(), Material::from_color(color, shininess));
            scene.primitives.push(sphere(center, 0.2, &name, color));
        }
    }

    scene.lights.push(Light::white(Vec3::new(-10.0, 10.0, 10.0), 0.8));
    scene.lights.push(Light::new(
        Vec3::new(10.0, 6.0, 6.0),
        Color::splat(0.05),
        Color::new(0.6, 0.6, 0.8),
        Color::ONE,
        0.6,
    ));

    log::info!(
        "Built demo scene with {} primitives (seed {})",
        scene.primitives.len(),
        seed
    );

    scene
}
