use eframe::egui::{Color32, Painter, Pos2, Stroke, Vec2};

use super::super::render_utils::draw_backdrop;

pub(in crate::app) trait Surface {
    fn size(&self) -> Vec2;
    fn clear(&mut self);
    fn stroke_line(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32);
    fn fill_disk(&mut self, center: Pos2, radius: f32, color: Color32);
}

/// Full-viewport surface backed by the background layer painter.
pub(in crate::app) struct PainterSurface<'a> {
    painter: &'a Painter,
}

impl<'a> PainterSurface<'a> {
    pub(in crate::app) fn new(painter: &'a Painter) -> Self {
        Self { painter }
    }
}

impl Surface for PainterSurface<'_> {
    fn size(&self) -> Vec2 {
        self.painter.clip_rect().size()
    }

    fn clear(&mut self) {
        draw_backdrop(self.painter, self.painter.clip_rect());
    }

    fn stroke_line(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32) {
        self.painter
            .line_segment([from, to], Stroke::new(width, color));
    }

    fn fill_disk(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter.circle_filled(center, radius, color);
    }
}
