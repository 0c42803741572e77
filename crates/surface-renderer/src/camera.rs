//! Orbit camera for the surface viewer.

use glam::{Mat4, Vec3};

const MIN_DISTANCE: f32 = 0.2;
const MAX_DISTANCE: f32 = 50.0;
const ORBIT_SENSITIVITY: f32 = 0.008;
const ZOOM_STEP: f32 = 0.1;

/// Camera orbiting a target point at a yaw/pitch/distance.
///
/// The world is Z-up: the surface lies in the XY plane with elevation
/// along +Z.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target: Vec3,
    pub fov_y_deg: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: -std::f32::consts::FRAC_PI_4,
            pitch: 0.6,
            distance: 3.5,
            target: Vec3::ZERO,
            fov_y_deg: 45.0,
            znear: 0.01,
            zfar: 100.0,
        }
    }
}

impl OrbitCamera {
    /// Rotate by a mouse drag delta in pixels.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * ORBIT_SENSITIVITY;
        self.pitch = (self.pitch + dy * ORBIT_SENSITIVITY).clamp(-1.5, 1.5);
    }

    /// Zoom by scroll steps; positive steps move closer.
    pub fn zoom(&mut self, steps: f32) {
        self.distance =
            (self.distance * (1.0 - steps * ZOOM_STEP)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// The camera position in world space.
    pub fn eye(&self) -> Vec3 {
        let horizontal = self.distance * self.pitch.cos();
        self.target
            + Vec3::new(
                horizontal * self.yaw.cos(),
                horizontal * self.yaw.sin(),
                self.distance * self.pitch.sin(),
            )
    }

    /// Combined view-projection matrix for the given aspect ratio.
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(self.fov_y_deg.to_radians(), aspect, self.znear, self.zfar);
        let view = Mat4::look_at_rh(self.eye(), self.target, Vec3::Z);
        proj * view
    }
}
