//! Small scenes shared by the unit tests.

use crate::hittable::TraceLimits;
use lumen_core::{
    Attenuation, Camera, Color, Geometry, Material, PointLight, Scene, Transform,
};
use lumen_math::Vec3;

/// Default trace limits.
pub fn limits() -> TraceLimits {
    TraceLimits {
        slop: 1e-6,
        max_local_distance: 100.0,
    }
}

/// A scene with one grey material and nothing else.
pub fn material_scene() -> Scene {
    let mut scene = Scene::new("material");
    scene.add_material(Material::new("grey", Color::splat(0.5)));
    scene
}

/// Unit sphere at the origin lit by one white light straight above it.
///
/// Ambient light is black so only the diffuse term shows.
pub fn lit_sphere_scene() -> Scene {
    let mut scene = Scene::new("lit sphere");
    scene.background_color = Color::new(0.1, 0.2, 0.3);
    scene.ambient_light = Color::ZERO;

    let white = scene.add_material(Material::new("white", Color::ONE));
    scene.add_geometry(Geometry::sphere(Transform::default(), 1.0, white));
    scene.add_light(PointLight::new(Vec3::new(0.0, 5.0, 0.0), Color::ONE));
    scene
}

/// A small but complete scene for whole-image renders: a mirror sphere, a
/// matte sphere, a floor made of two triangles and two lights.
pub fn render_scene() -> Scene {
    let mut scene = Scene::new("render");
    scene.camera = Camera::new()
        .with_position(Vec3::new(0.0, 1.0, 6.0), Vec3::ZERO, Vec3::Y)
        .with_lens(50.0, 4.0 / 3.0, 1.0);
    scene.background_color = Color::new(0.05, 0.05, 0.1);
    scene.ambient_light = Color::splat(0.2);

    let mirror = scene.add_material(
        Material::new("mirror", Color::splat(0.1)).with_specular(Color::splat(0.8)),
    );
    let red = scene.add_material(Material::new("red", Color::new(0.8, 0.2, 0.2)));
    let floor = scene.add_material(Material::new("floor", Color::splat(0.6)));

    scene.add_geometry(Geometry::sphere(
        Transform::from_position(Vec3::new(-1.0, 0.0, 0.0)),
        1.0,
        mirror,
    ));
    scene.add_geometry(Geometry::sphere(
        Transform::from_position(Vec3::new(1.5, 0.0, -1.0)),
        1.0,
        red,
    ));

    let corners = [
        Vec3::new(-5.0, -1.0, 5.0),
        Vec3::new(5.0, -1.0, 5.0),
        Vec3::new(5.0, -1.0, -5.0),
        Vec3::new(-5.0, -1.0, -5.0),
    ];
    scene.add_geometry(Geometry::flat_triangle(
        Transform::default(),
        [corners[0], corners[1], corners[2]],
        floor,
    ));
    scene.add_geometry(Geometry::flat_triangle(
        Transform::default(),
        [corners[0], corners[2], corners[3]],
        floor,
    ));

    scene.add_light(
        PointLight::new(Vec3::new(3.0, 5.0, 4.0), Color::splat(20.0))
            .with_attenuation(Attenuation::new(1.0, 0.0, 1.0)),
    );
    scene.add_light(PointLight::new(Vec3::new(-4.0, 3.0, 2.0), Color::splat(0.3)));
    scene
}
