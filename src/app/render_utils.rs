use std::f32::consts::TAU;

use eframe::egui::{Color32, Mesh, Painter, Rect, Shape, vec2};

pub(super) const WEB_RGB: [u8; 3] = [59, 130, 246];
pub(super) const BRAND: Color32 = Color32::from_rgb(96, 165, 250);
pub(super) const BRAND_SOFT: Color32 = Color32::from_rgb(147, 197, 253);
pub(super) const HEADLINE: Color32 = Color32::from_rgb(229, 231, 235);
pub(super) const TEXT_MUTED: Color32 = Color32::from_rgb(156, 163, 175);
pub(super) const TEXT_FAINT: Color32 = Color32::from_rgb(107, 114, 128);
pub(super) const CARD_FILL: Color32 = Color32::from_rgba_premultiplied(5, 7, 12, 77);
pub(super) const CARD_BORDER: Color32 = Color32::from_rgb(55, 65, 81);
pub(super) const CARD_BORDER_HOVER: Color32 = Color32::from_rgb(45, 86, 150);
pub(super) const ICON_FILL: Color32 = Color32::from_rgba_premultiplied(6, 13, 25, 26);
pub(super) const INPUT_FILL: Color32 = Color32::from_rgba_premultiplied(9, 12, 20, 128);
pub(super) const DIVIDER: Color32 = Color32::from_rgb(31, 41, 55);

const BACKDROP_CENTER: Color32 = Color32::from_rgb(15, 15, 35);
const BACKDROP_EDGE: Color32 = Color32::BLACK;
const BACKDROP_SEGMENTS: u32 = 72;

pub(super) fn web_color(opacity: f32) -> Color32 {
    let [r, g, b] = WEB_RGB;
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(r, g, b, alpha)
}

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

/// Radial fade from the viewport centre to its farthest corner.
pub(super) fn draw_backdrop(painter: &Painter, rect: Rect) {
    painter.rect_filled(rect, 0.0, BACKDROP_EDGE);

    let center = rect.center();
    let radius = rect.size().length() * 0.5;

    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, BACKDROP_CENTER);
    for segment in 0..=BACKDROP_SEGMENTS {
        let angle = (segment as f32 / BACKDROP_SEGMENTS as f32) * TAU;
        mesh.colored_vertex(
            center + vec2(angle.cos(), angle.sin()) * radius,
            BACKDROP_EDGE,
        );
    }
    for segment in 1..=BACKDROP_SEGMENTS {
        mesh.add_triangle(0, segment, segment + 1);
    }

    painter.add(Shape::mesh(mesh));
}

pub(super) fn grid_columns(available_width: f32) -> usize {
    if available_width < 768.0 {
        1
    } else if available_width < 1024.0 {
        2
    } else {
        3
    }
}
