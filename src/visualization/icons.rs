//! Procedural satellite icons
//!
//! Each satellite type gets a white glyph on a transparent background. The
//! glyph is tinted by the marker material, so one texture per type serves both
//! the selected and the neutral color scheme.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use std::collections::HashMap;

use crate::feed::SatelliteKind;

/// One texture per satellite type, rasterized once per mount
#[derive(Resource, Debug, Clone)]
pub struct IconTextures {
    handles: HashMap<SatelliteKind, Handle<Image>>,
}

impl IconTextures {
    pub fn rasterize_all(images: &mut Assets<Image>, size: u32) -> Self {
        let handles = SatelliteKind::ALL
            .iter()
            .map(|&kind| (kind, images.add(icon_image(kind, size))))
            .collect();
        Self { handles }
    }

    pub fn get(&self, kind: SatelliteKind) -> Option<&Handle<Image>> {
        self.handles.get(&kind)
    }
}

/// Wrap the RGBA pixels of an icon into a texture
pub fn icon_image(kind: SatelliteKind, size: u32) -> Image {
    Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        rasterize_icon(kind, size),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}

/// Rasterize the glyph for `kind` into `size * size` RGBA8 pixels, rows top to bottom
pub fn rasterize_icon(kind: SatelliteKind, size: u32) -> Vec<u8> {
    let size = size.max(1);
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for row in 0..size {
        for col in 0..size {
            // pixel center mapped to [-1, 1], y up
            let x = (col as f32 + 0.5) / size as f32 * 2.0 - 1.0;
            let y = 1.0 - (row as f32 + 0.5) / size as f32 * 2.0;
            let alpha = if glyph_contains(kind, x, y) { 255 } else { 0 };
            pixels.extend_from_slice(&[255, 255, 255, alpha]);
        }
    }
    pixels
}

fn glyph_contains(kind: SatelliteKind, x: f32, y: f32) -> bool {
    match kind {
        SatelliteKind::Communication => antenna(x, y),
        SatelliteKind::Military => jet(x, y),
        SatelliteKind::Science => flask(x, y),
    }
}

/// Dish emitter with two broadcast arcs above it
fn antenna(x: f32, y: f32) -> bool {
    let origin = Vec2::new(0.0, -0.35);
    let p = Vec2::new(x, y) - origin;
    let r = p.length();
    let upward = p.y > p.x.abs() * 0.6;

    let hub = r < 0.2;
    let inner_arc = upward && (0.38..0.52).contains(&r);
    let outer_arc = upward && (0.68..0.82).contains(&r);
    let mast = x.abs() < 0.07 && (-0.9..-0.35).contains(&y);
    let base = y > -0.95 && y < -0.8 && x.abs() < 0.35;
    hub || inner_arc || outer_arc || mast || base
}

/// Delta-wing jet seen from above, nose up
fn jet(x: f32, y: f32) -> bool {
    let fuselage = x.abs() < 0.12 && (-0.85..0.75).contains(&y);
    let nose = (0.75..0.95).contains(&y) && x.abs() < 0.12 * (0.95 - y) / 0.2;
    // swept wings: triangle from the fuselage out to the tips
    let wing = (-0.35..0.35).contains(&y) && x.abs() < 0.85 * (0.35 - y) / 0.7;
    let tail = (-0.85..-0.6).contains(&y) && x.abs() < 0.4 * (-0.6 - y) / 0.25 + 0.1;
    fuselage || nose || wing || tail
}

/// Laboratory flask: narrow neck over a widening body
fn flask(x: f32, y: f32) -> bool {
    let rim = (0.7..0.85).contains(&y) && x.abs() < 0.32;
    let neck = (0.15..0.7).contains(&y) && x.abs() < 0.18;
    // body widens linearly from the neck down to the base
    let body = (-0.85..0.15).contains(&y) && x.abs() < 0.18 + (0.15 - y) * 0.62;
    rim || neck || body
}
