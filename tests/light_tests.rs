// Host-side tests for light definitions and shading.

use glam::DVec3;
use std::cell::Cell;
use std::rc::Rc;
use surface_core::{
    CallbackError, Color, Coordinate, Light, LightDef, LightPosition, Material, Mesh, Plane, Scene,
    SurfaceError,
};

#[test]
fn literal_and_computed_coordinates() {
    let position = LightPosition::new(
        Coordinate::computed(|w, _| Ok(w / 2.0)),
        Coordinate::computed(|_, h| Ok(-h / 4.0)),
        150.0,
    );
    assert_eq!(
        position.resolve(800.0, 400.0).unwrap(),
        DVec3::new(400.0, -100.0, 150.0)
    );
    // resolved fresh every time
    assert_eq!(
        position.resolve(200.0, 100.0).unwrap(),
        DVec3::new(100.0, -25.0, 150.0)
    );
}

#[test]
fn computed_coordinates_are_not_cached() {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let x = Coordinate::computed(move |_, _| {
        counter.set(counter.get() + 1);
        Ok(1.0)
    });
    for _ in 0..3 {
        x.resolve(10.0, 10.0).unwrap();
    }
    assert_eq!(calls.get(), 3);
}

#[test]
fn failing_coordinate_surfaces_callback_error() {
    let position = LightPosition::new(
        0.0,
        Coordinate::computed(|_, _| Err(CallbackError::new("no y for you"))),
        0.0,
    );
    match position.resolve(1.0, 1.0) {
        Err(SurfaceError::Callback(e)) => assert_eq!(e.to_string(), "no y for you"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn start_defaults_to_origin() {
    let def = LightDef::from_hex("#111", "#eee", LightPosition::fixed(10.0, 20.0, 30.0)).unwrap();
    assert_eq!(def.resolve_start(800.0, 400.0).unwrap(), DVec3::ZERO);

    let def = def.with_start(LightPosition::fixed(-5.0, 0.0, 5.0));
    assert_eq!(
        def.resolve_start(800.0, 400.0).unwrap(),
        DVec3::new(-5.0, 0.0, 5.0)
    );
}

#[test]
fn light_takes_colors_from_definition() {
    let def = LightDef::from_hex("#ff0000", "#00ff00", LightPosition::fixed(0.0, 0.0, 1.0)).unwrap();
    let light = Light::from(&def);
    assert_eq!(light.ambient, Color::new(1.0, 0.0, 0.0, 1.0));
    assert_eq!(light.diffuse, Color::new(0.0, 1.0, 0.0, 1.0));
    assert_eq!(light.position, DVec3::ZERO);
}

fn flat_scene(ambient: Color, diffuse: Color) -> Scene {
    let material = Material::new(ambient, diffuse, 1.0, 1.0, 1.0);
    Scene::new(Mesh::new(Plane::new(200.0, 200.0, 2, 2), material))
}

#[test]
fn shading_without_lights_is_transparent() {
    let scene = flat_scene(Color::WHITE, Color::WHITE);
    let shaded = scene.shade();
    assert_eq!(shaded.len(), 8);
    assert!(shaded.iter().all(|t| t.color == Color::TRANSPARENT));
}

#[test]
fn black_material_shades_black() {
    let mut scene = flat_scene(Color::BLACK, Color::BLACK);
    let mut light = Light::new(Color::WHITE, Color::WHITE);
    light.set_position(0.0, 0.0, 100.0);
    scene.add_light(light);
    for tri in scene.shade() {
        assert_eq!(tri.color.r(), 0.0);
        assert_eq!(tri.color.g(), 0.0);
        assert_eq!(tri.color.b(), 0.0);
    }
}

#[test]
fn light_facing_the_plane_brightens_it() {
    let ambient = Color::new(0.1, 0.1, 0.1, 1.0);
    let mut scene = flat_scene(Color::WHITE, Color::WHITE);
    let mut light = Light::new(ambient, Color::WHITE);

    light.set_position(0.0, 0.0, 500.0);
    scene.add_light(light.clone());
    let lit: Vec<f64> = scene.shade().iter().map(|t| t.color.r()).collect();

    scene.lights[0].set_position(0.0, 0.0, -500.0);
    let behind: Vec<f64> = scene.shade().iter().map(|t| t.color.r()).collect();

    for (front, back) in lit.iter().zip(&behind) {
        assert!(front > back);
    }
}

#[test]
fn shaded_colors_are_clamped() {
    let mut scene = flat_scene(Color::WHITE, Color::WHITE);
    for _ in 0..4 {
        let mut light = Light::new(Color::WHITE, Color::WHITE);
        light.set_position(0.0, 0.0, 100.0);
        scene.add_light(light);
    }
    for tri in scene.shade() {
        assert!(tri.color.rgba.iter().all(|c| (0.0..=1.0).contains(c)));
    }
}
