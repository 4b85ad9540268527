//! The built-in demo scene.

use std::sync::Arc;

use lumen_core::{
    Attenuation, Camera, Color, Geometry, Material, Mesh, PointLight, Scene, Texture, Transform,
};
use lumen_math::{Quat, Vec2, Vec3};

/// A square pyramid with its base on y=0 and apex at y=1.
fn pyramid() -> Mesh {
    let positions = vec![
        Vec3::new(-1.0, 0.0, 1.0),
        Vec3::new(1.0, 0.0, 1.0),
        Vec3::new(1.0, 0.0, -1.0),
        Vec3::new(-1.0, 0.0, -1.0),
        Vec3::new(0.0, 1.0, 0.0), // apex
    ];
    let tex_coords = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(0.5, 0.5),
    ];
    // Counter-clockwise seen from outside
    let indices = vec![0, 1, 4, 1, 2, 4, 2, 3, 4, 3, 0, 4, 0, 3, 2, 0, 2, 1];

    let mut mesh = Mesh::new(positions, indices, None).with_tex_coords(tex_coords);
    mesh.ensure_normals();
    mesh
}

/// Two mirror-ish spheres, a pyramid and a textured floor under two lights.
pub fn demo_scene(floor_texture: Arc<Texture>, aspect_ratio: f32) -> Scene {
    let mut scene = Scene::new("demo");
    scene.camera = Camera::new()
        .with_position(Vec3::new(0.0, 2.0, 8.0), Vec3::new(0.0, 0.5, 0.0), Vec3::Y)
        .with_lens(45.0, aspect_ratio, 1.0);
    scene.background_color = Color::new(0.05, 0.07, 0.12);
    scene.ambient_light = Color::splat(0.25);

    let chrome = scene.add_material(
        Material::new("chrome", Color::splat(0.05))
            .with_ambient(Color::splat(0.1))
            .with_specular(Color::splat(0.85)),
    );
    let clay = scene.add_material(
        Material::new("clay", Color::new(0.8, 0.35, 0.2)).with_specular(Color::splat(0.1)),
    );
    let jade = scene.add_material(Material::new("jade", Color::new(0.2, 0.6, 0.4)));
    let floor = scene.add_material(
        Material::new("floor", Color::splat(0.9))
            .with_specular(Color::splat(0.15))
            .with_texture(floor_texture),
    );

    scene.add_geometry(Geometry::sphere(
        Transform::from_position(Vec3::new(-1.3, 1.0, 0.0)),
        1.0,
        chrome,
    ));
    scene.add_geometry(Geometry::sphere(
        Transform::from_position(Vec3::new(1.6, 0.6, 1.0)),
        0.6,
        clay,
    ));

    let pyramid = scene.add_mesh(pyramid());
    scene.add_geometry(Geometry::model(
        Transform::from_position(Vec3::new(1.8, 0.0, -1.8))
            .with_orientation(Quat::from_rotation_y(0.6))
            .with_uniform_scale(1.2),
        pyramid,
        jade,
    ));

    // Floor quad as two triangles, 12 units wide
    let corners = [
        Vec3::new(-6.0, 0.0, 6.0),
        Vec3::new(6.0, 0.0, 6.0),
        Vec3::new(6.0, 0.0, -6.0),
        Vec3::new(-6.0, 0.0, -6.0),
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
        PointLight::new(Vec3::new(4.0, 6.0, 5.0), Color::splat(60.0))
            .with_attenuation(Attenuation::new(1.0, 0.0, 1.0)),
    );
    scene.add_light(
        PointLight::new(Vec3::new(-5.0, 3.0, 2.0), Color::new(0.3, 0.3, 0.45))
            .with_attenuation(Attenuation::new(1.0, 0.05, 0.0)),
    );

    scene
}
