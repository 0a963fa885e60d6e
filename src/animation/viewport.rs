//! Viewport size tracking

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::visualization::camera::MainCamera;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, `None` for a collapsed viewport
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.width > 0 && self.height > 0).then(|| self.width as f32 / self.height as f32)
    }
}

/// Last observed viewport size
#[derive(Resource, Debug, Default)]
pub struct ViewportTracker {
    last: Option<Dimensions>,
    resize_count: u64,
}

impl ViewportTracker {
    /// Record `dims`; returns true only when they differ from the last observation
    pub fn observe(&mut self, dims: Dimensions) -> bool {
        if self.last() == Some(dims) {
            return false;
        }
        self.last = Some(dims);
        self.resize_count += 1;
        true
    }

    pub fn last(&self) -> Option<Dimensions> {
        self.last
    }

    pub fn resize_count(&self) -> u64 {
        self.resize_count
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Update the camera aspect ratio when the window size changed since the last frame
///
/// The render surface itself is resized by Bevy's window handling.
pub fn track_viewport_size_system(
    window: Query<&Window, With<PrimaryWindow>>,
    mut tracker: ResMut<ViewportTracker>,
    mut projections: Query<&mut Projection, With<MainCamera>>,
) {
    let Ok(window) = window.single() else {
        return;
    };
    let dims = Dimensions::new(window.physical_width(), window.physical_height());
    if !tracker.observe(dims) {
        return;
    }
    let Some(aspect_ratio) = dims.aspect_ratio() else {
        return;
    };
    for mut projection in &mut projections {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = aspect_ratio;
        }
    }
    debug!(
        "Viewport resized to {}x{} (resize {})",
        dims.width,
        dims.height,
        tracker.resize_count()
    );
}
