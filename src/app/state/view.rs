use crate::core::FirstPersonCamera;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// First-Person-Kamera
    pub camera: FirstPersonCamera,
    /// Noch nicht simulierte Zeit (s) für den festen Physik-Schritt
    pub physics_accumulator: f32,
}

impl ViewState {
    /// Erstellt den View-Zustand mit Kamera an `position`.
    pub fn new(position: glam::Vec3) -> Self {
        Self {
            camera: FirstPersonCamera::new(position),
            physics_accumulator: 0.0,
        }
    }
}
