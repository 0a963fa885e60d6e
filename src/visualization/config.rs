//! Visualization configuration

use bevy::prelude::*;

/// Visual constants for the globe, the satellites and the camera
#[derive(Resource, Debug, Clone)]
pub struct VisualizationConfig {
    pub clear_color: Color,
    pub light_color: Color,
    pub light_illuminance: f32,
    pub light_distance: f32,
    pub ambient_brightness: f32,
    pub earth_radius: f32,
    pub earth_width_segments: u32,
    pub earth_height_segments: u32,
    pub earth_color: Color,
    /// Radius of both the orbit path and the marker track
    pub orbit_radius: f32,
    pub orbit_divisions: u32,
    pub dash_size: f32,
    pub gap_size: f32,
    pub marker_scale: f32,
    pub marker_color: Color,
    pub marker_selected_color: Color,
    pub path_color: Color,
    pub path_selected_color: Color,
    pub icon_size: u32,
    /// Vertical field of view in degrees
    pub camera_fov_deg: f32,
    pub camera_near: f32,
    pub camera_far: f32,
    pub camera_distance: f32,
    /// Roll about the viewing axis in radians
    pub camera_roll: f32,
    /// Earth spin in radians per elapsed millisecond
    pub earth_spin_rate: f32,
    /// Marker advance in radians per elapsed millisecond
    pub orbit_rate: f32,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        Self {
            clear_color: Color::srgb_u8(0x20, 0x21, 0x2c),
            light_color: Color::WHITE,
            light_illuminance: 12_800.0,
            light_distance: 10.0,
            ambient_brightness: 150.0,
            earth_radius: 1.08,
            earth_width_segments: 16,
            earth_height_segments: 12,
            earth_color: Color::srgb_u8(0xcc, 0xcd, 0xda),
            orbit_radius: 1.32,
            orbit_divisions: 64,
            dash_size: 0.05,
            gap_size: 0.02,
            marker_scale: 0.08,
            marker_color: Color::srgb_u8(0xcc, 0xcd, 0xda),
            marker_selected_color: Color::srgb_u8(0x1e, 0x95, 0xff),
            path_color: Color::srgb_u8(0x42, 0x44, 0x5b),
            path_selected_color: Color::srgb_u8(0x00, 0x86, 0xff),
            icon_size: 64,
            camera_fov_deg: 2.0,
            camera_near: 0.1,
            camera_far: 1000.0,
            camera_distance: 100.0,
            camera_roll: 0.4101,
            earth_spin_rate: 2e-4,
            orbit_rate: 6e-4,
        }
    }
}

impl VisualizationConfig {
    pub fn marker_color_for(&self, selected: bool) -> Color {
        if selected {
            self.marker_selected_color
        } else {
            self.marker_color
        }
    }

    pub fn path_color_for(&self, selected: bool) -> Color {
        if selected {
            self.path_selected_color
        } else {
            self.path_color
        }
    }
}
