use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::pbr::ShadowFilteringMethod;
use bevy::prelude::*;
use constants::camera::*;

/// Arc-rotate camera: orbits `target` at `radius`, with `alpha` around the
/// vertical axis and `beta` measured down from +Y.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub alpha: f32,
    pub beta: f32,
    pub radius: f32,
    pub lower_radius_limit: f32,
    pub upper_radius_limit: f32,
    pub wheel_precision: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            alpha: CAMERA_ALPHA,
            beta: CAMERA_BETA,
            radius: CAMERA_RADIUS,
            lower_radius_limit: CAMERA_LOWER_RADIUS_LIMIT,
            upper_radius_limit: CAMERA_UPPER_RADIUS_LIMIT,
            wheel_precision: CAMERA_WHEEL_PRECISION,
        }
    }
}

impl OrbitCamera {
    /// Camera position relative to the target.
    pub fn offset(&self) -> Vec3 {
        let (sin_alpha, cos_alpha) = self.alpha.sin_cos();
        let (sin_beta, cos_beta) = self.beta.sin_cos();
        self.radius * Vec3::new(cos_alpha * sin_beta, cos_beta, sin_alpha * sin_beta)
    }

    pub fn position(&self) -> Vec3 {
        self.target + self.offset()
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.target, Vec3::Y)
    }

    /// Orbit by a pointer drag in pixels.
    pub fn rotate(&mut self, drag: Vec2) {
        self.alpha -= drag.x / CAMERA_ANGULAR_SENSIBILITY;
        self.beta = (self.beta - drag.y / CAMERA_ANGULAR_SENSIBILITY)
            .clamp(CAMERA_LOWER_BETA_LIMIT, CAMERA_UPPER_BETA_LIMIT);
    }

    /// Dolly by a browser-style wheel delta (120 per notch, positive zooms in).
    pub fn zoom(&mut self, wheel_delta: f32) {
        let step = wheel_delta / (self.wheel_precision * 40.0);
        self.radius = (self.radius - step).clamp(self.lower_radius_limit, self.upper_radius_limit);
    }

    /// Slide the target in the view plane by a pointer drag in pixels.
    pub fn pan(&mut self, drag: Vec2) {
        let rotation = self.transform().rotation;
        let right = rotation * Vec3::X;
        let up = rotation * Vec3::Y;
        let scale = self.radius / CAMERA_PANNING_SENSIBILITY;
        self.target += (-right * drag.x + up * drag.y) * scale;
    }
}

pub fn spawn_camera(mut commands: Commands, orbit_camera: Res<OrbitCamera>) {
    commands.spawn((
        Camera3d::default(),
        orbit_camera.transform(),
        ShadowFilteringMethod::Gaussian,
    ));
}

/// Left drag orbits, right or middle drag pans, the wheel zooms.
pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit_camera: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if mouse_delta != Vec2::ZERO {
        if mouse_button.pressed(MouseButton::Left) {
            orbit_camera.rotate(mouse_delta);
        } else if mouse_button.any_pressed([MouseButton::Right, MouseButton::Middle]) {
            orbit_camera.pan(mouse_delta);
        }
    }

    let mut wheel_delta = 0.0;
    for ev in scroll_events.read() {
        wheel_delta += match ev.unit {
            MouseScrollUnit::Line => ev.y * WHEEL_DELTA_PER_LINE,
            MouseScrollUnit::Pixel => ev.y,
        };
    }
    if wheel_delta.abs() > f32::EPSILON {
        orbit_camera.zoom(wheel_delta);
    }

    if let Ok(mut camera_transform) = camera_query.single_mut() {
        *camera_transform = orbit_camera.transform();
    }
}
