//! Offscreen-PNG-Export der 2D-Szene.
//!
//! Rastert die Szene in ein Bild, das auf die Inhalts-Bounds plus
//! festes Padding zugeschnitten ist. Keine Abhängigkeit vom UI-Layer.

use std::io::Cursor;

use anyhow::{Context, Result};
use glam::Vec2;
use image::{ImageFormat, Rgba, RgbaImage};

use crate::core::{Component, Scene};
use crate::shared::options::{PNG_EMPTY_SIZE, PNG_PADDING};

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const GRID_COLOR: Rgba<u8> = Rgba([224, 224, 224, 255]);

/// Rastert die Szene in ein RGBA-Bild.
///
/// Leere Szenen ergeben eine weiße Fläche fester Größe; sonst wird das
/// Bild auf die Vereinigung aller rotierten Footprints plus Padding
/// zugeschnitten. Rasterlinien erscheinen nur bei sichtbarem Raster.
pub fn render_png(scene: &Scene, grid_visible: bool, grid_size: f32) -> RgbaImage {
    let Some((min, max)) = content_bounds(scene) else {
        return RgbaImage::from_pixel(PNG_EMPTY_SIZE[0], PNG_EMPTY_SIZE[1], BACKGROUND);
    };

    let padding = PNG_PADDING as f32;
    let origin = min - Vec2::splat(padding);
    let extent = max - min + Vec2::splat(2.0 * padding);
    let width = extent.x.ceil().max(1.0) as u32;
    let height = extent.y.ceil().max(1.0) as u32;
    let mut image = RgbaImage::from_pixel(width, height, BACKGROUND);

    if grid_visible && grid_size > 1.0 {
        draw_grid(&mut image, origin, grid_size);
    }
    for component in scene.iter() {
        draw_component(&mut image, origin, component);
    }
    image
}

/// Kodiert ein Bild als PNG-Bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .context("PNG-Kodierung fehlgeschlagen")?;
    Ok(bytes)
}

/// Achsenparallele Bounds über alle rotierten Footprints.
fn content_bounds(scene: &Scene) -> Option<(Vec2, Vec2)> {
    let mut bounds: Option<(Vec2, Vec2)> = None;
    for component in scene.iter() {
        for corner in footprint_corners(component) {
            bounds = Some(match bounds {
                None => (corner, corner),
                Some((min, max)) => (min.min(corner), max.max(corner)),
            });
        }
    }
    bounds
}

/// Die vier Footprint-Ecken, rotiert um das Footprint-Zentrum.
fn footprint_corners(component: &Component) -> [Vec2; 4] {
    let size = component.footprint();
    let center = component.position + size / 2.0;
    let half = size / 2.0;
    let rad = (component.rotation_deg as f32).to_radians();
    let (sin, cos) = rad.sin_cos();

    [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ]
    .map(|c| center + Vec2::new(c.x * cos - c.y * sin, c.x * sin + c.y * cos))
}

fn draw_grid(image: &mut RgbaImage, origin: Vec2, grid_size: f32) {
    let (width, height) = image.dimensions();
    for px in 0..width {
        if (origin.x + px as f32).rem_euclid(grid_size) < 1.0 {
            for py in 0..height {
                image.put_pixel(px, py, GRID_COLOR);
            }
        }
    }
    for py in 0..height {
        if (origin.y + py as f32).rem_euclid(grid_size) < 1.0 {
            for px in 0..width {
                image.put_pixel(px, py, GRID_COLOR);
            }
        }
    }
}

fn draw_component(image: &mut RgbaImage, origin: Vec2, component: &Component) {
    let [r, g, b] = component.kind.spec().color;
    let fill = Rgba([r, g, b, 255]);
    let corners = footprint_corners(component);

    let min = corners.iter().fold(corners[0], |a, &c| a.min(c)) - origin;
    let max = corners.iter().fold(corners[0], |a, &c| a.max(c)) - origin;
    let (width, height) = image.dimensions();
    let x0 = min.x.floor().max(0.0) as u32;
    let y0 = min.y.floor().max(0.0) as u32;
    let x1 = (max.x.ceil() as u32).min(width.saturating_sub(1));
    let y1 = (max.y.ceil() as u32).min(height.saturating_sub(1));

    for py in y0..=y1 {
        for px in x0..=x1 {
            let p = Vec2::new(px as f32 + 0.5, py as f32 + 0.5) + origin;
            if point_in_quad(p, &corners) {
                image.put_pixel(px, py, fill);
            }
        }
    }
}

/// Punkt-im-konvexen-Viereck über Kreuzprodukt-Vorzeichen.
fn point_in_quad(p: Vec2, corners: &[Vec2; 4]) -> bool {
    let mut sign = 0.0f32;
    for i in 0..4 {
        let a = corners[i];
        let b = corners[(i + 1) % 4];
        let cross = (b - a).perp_dot(p - a);
        if cross.abs() < f32::EPSILON {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PartKind;

    #[test]
    fn test_empty_scene_renders_fixed_size() {
        let image = render_png(&Scene::new(), true, 20.0);
        assert_eq!(image.dimensions(), (PNG_EMPTY_SIZE[0], PNG_EMPTY_SIZE[1]));
        assert_eq!(*image.get_pixel(0, 0), BACKGROUND);
    }

    #[test]
    fn test_image_is_content_bounds_plus_padding() {
        let mut scene = Scene::new();
        // Wandhalter: 30×30 Footprint, unrotiert
        scene.spawn(PartKind::WallMount, Vec2::new(100.0, 100.0));
        let image = render_png(&scene, false, 20.0);
        assert_eq!(image.dimensions(), (130, 130));
    }

    #[test]
    fn test_component_center_gets_kind_color() {
        let mut scene = Scene::new();
        scene.spawn(PartKind::ElbowJoint, Vec2::new(0.0, 0.0));
        let image = render_png(&scene, false, 20.0);
        // Footprint 40×40, Bildmitte liegt im Fill
        let (w, h) = image.dimensions();
        let [r, g, b] = PartKind::ElbowJoint.spec().color;
        assert_eq!(*image.get_pixel(w / 2, h / 2), Rgba([r, g, b, 255]));
    }

    #[test]
    fn test_grid_only_when_visible() {
        let mut scene = Scene::new();
        scene.spawn(PartKind::WallMount, Vec2::new(40.0, 40.0));

        let with_grid = render_png(&scene, true, 20.0);
        let without = render_png(&scene, false, 20.0);
        let count_grid = |img: &RgbaImage| img.pixels().filter(|&p| *p == GRID_COLOR).count();
        assert!(count_grid(&with_grid) > 0);
        assert_eq!(count_grid(&without), 0);
    }

    #[test]
    fn test_encode_produces_png_signature() {
        let image = render_png(&Scene::new(), false, 20.0);
        let bytes = encode_png(&image).expect("Kodierung erwartet");
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }
}
