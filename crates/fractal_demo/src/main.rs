//! Interactive fractal cube viewer.
//!
//! Controls:
//! - Left mouse drag: orbit around the fractal
//! - Scroll wheel: zoom
//! - "iterations" slider: subdivision depth (0..=5)
//! - "size" slider: edge length of the cubes in the next rebuild

mod orbit_camera;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin, EguiPrimaryContextPass};
use fractal_bevy::{FractalBevyPlugin, FractalParams, FractalState};
use orbit_camera::OrbitCamera;

fn main() {
  App::new()
    .add_plugins(DefaultPlugins.set(WindowPlugin {
      primary_window: Some(Window {
        title: "Fractal Cubes".into(),
        resolution: (1280, 720).into(),
        ..default()
      }),
      ..default()
    }))
    .add_plugins(EguiPlugin::default())
    .add_plugins(FractalBevyPlugin)
    .add_systems(Startup, setup_scene)
    .add_systems(Update, orbit_camera::orbit_camera)
    .add_systems(EguiPrimaryContextPass, ui_controls)
    .run();
}

/// Camera and lights. The fractal root itself is spawned by [`FractalBevyPlugin`].
fn setup_scene(mut commands: Commands) {
  // Narrow field of view from far away keeps perspective distortion low.
  let camera_start = Vec3::new(45.0, 45.0, 45.0);
  commands.spawn((
    Camera3d::default(),
    Projection::from(PerspectiveProjection {
      fov: 10.0_f32.to_radians(),
      ..default()
    }),
    Transform::from_translation(camera_start).looking_at(Vec3::ZERO, Vec3::Y),
    OrbitCamera::looking_from(camera_start, Vec3::ZERO),
  ));

  // Directional light
  commands.spawn((
    DirectionalLight {
      illuminance: 10000.0,
      shadows_enabled: true,
      ..default()
    },
    Transform::from_xyz(2.0, 5.0, 5.0).looking_at(Vec3::new(-1.0, -1.0, 0.0), Vec3::Y),
  ));

  // Ambient fill so the shadowed faces stay readable
  commands.insert_resource(AmbientLight {
    color: Color::WHITE,
    brightness: 200.0,
    affects_lightmapped_meshes: false,
  });
}

/// Parameter panel. Writes straight into [`FractalParams`]; the rebuild
/// happens in the plugin's update system once the depth actually changes.
fn ui_controls(
  mut contexts: EguiContexts,
  mut params: ResMut<FractalParams>,
  state: Res<FractalState>,
) {
  let Ok(ctx) = contexts.ctx_mut() else {
    return;
  };

  egui::Window::new("Parameters")
    .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
    .resizable(false)
    .show(ctx, |ui| {
      ui.add(egui::Slider::new(&mut params.iterations, 0..=5).text("iterations"));
      ui.add(
        egui::Slider::new(&mut params.cube_size, 1.0..=5.0)
          .step_by(0.1)
          .text("size"),
      );
      ui.separator();
      ui.label(format!("cubes: {}", state.world.registry().len()));
    });
}
