use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, Stroke, Ui};

use crate::catalog::ServiceRecord;

use super::super::ViewModel;
use super::super::render_utils::{
    BRAND, BRAND_SOFT, CARD_BORDER, CARD_BORDER_HOVER, CARD_FILL, ICON_FILL, TEXT_FAINT,
    TEXT_MUTED, blend_color, grid_columns,
};
use super::centered_column;

const GRID_WIDTH: f32 = 1152.0;
const GRID_GAP: f32 = 24.0;
const HOVER_FADE_SECS: f32 = 0.3;

impl ViewModel {
    pub(in crate::app) fn draw_results(&mut self, ui: &mut Ui) {
        let mut clear_requested = false;

        centered_column(ui, GRID_WIDTH, |ui| {
            if self.view.is_empty_state() {
                clear_requested = self.draw_empty_state(ui);
                return;
            }

            let columns = grid_columns(ui.available_width());
            let services = self.view.services(&self.catalog).collect::<Vec<_>>();
            ui.spacing_mut().item_spacing.x = GRID_GAP;

            for row in services.chunks(columns) {
                ui.columns(columns, |cells| {
                    for (cell, service) in cells.iter_mut().zip(row) {
                        draw_card(cell, service);
                    }
                });
                ui.add_space(GRID_GAP);
            }
        });

        if clear_requested {
            self.clear_search();
        }
    }

    fn draw_empty_state(&self, ui: &mut Ui) -> bool {
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.label(
                RichText::new(format!("Aucun service trouvé pour \"{}\"", self.query))
                    .size(18.0)
                    .color(TEXT_MUTED),
            );
            ui.add_space(16.0);
            let clicked = ui
                .add(egui::Button::new(RichText::new("Voir tous les services").color(BRAND)).frame(false))
                .clicked();
            ui.add_space(48.0);
            clicked
        })
        .inner
    }
}

fn draw_card(ui: &mut Ui, service: &ServiceRecord) {
    let id = ui.make_persistent_id(("service-card", service.id.as_str()));
    let was_hovered = ui
        .ctx()
        .data(|data| data.get_temp::<bool>(id.with("hovered")))
        .unwrap_or(false);
    let hover = ui
        .ctx()
        .animate_bool_with_time(id, was_hovered, HOVER_FADE_SECS);

    let frame = egui::Frame::new()
        .fill(CARD_FILL)
        .stroke(Stroke::new(1.0, blend_color(CARD_BORDER, CARD_BORDER_HOVER, hover)))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::same(20));

    let response = frame.show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            egui::Frame::new()
                .fill(blend_color(ICON_FILL, CARD_BORDER_HOVER, hover * 0.35))
                .corner_radius(CornerRadius::same(8))
                .inner_margin(Margin::same(8))
                .show(ui, |ui| {
                    ui.label(RichText::new(service.icon.glyph()).size(20.0).color(BRAND));
                });
            ui.label(
                RichText::new(&service.title)
                    .size(16.0)
                    .strong()
                    .color(blend_color(Color32::WHITE, BRAND_SOFT, hover)),
            );
        });

        ui.add_space(12.0);
        ui.label(RichText::new(&service.description).size(13.0).color(TEXT_MUTED));

        if service.price.is_some() || service.duration.is_some() {
            ui.add_space(10.0);
            if let Some(price) = &service.price {
                ui.label(RichText::new(price).size(12.0).strong().color(BRAND));
            }
            if let Some(duration) = &service.duration {
                ui.label(RichText::new(format!("Durée: {duration}")).size(12.0).color(TEXT_FAINT));
            }
        }

        ui.add_space(12.0);
        ui.add_sized(
            [ui.available_width(), 28.0],
            egui::Button::new(RichText::new("En savoir plus   →").color(BRAND)).frame(false),
        );
    });

    let hovered_now = ui.rect_contains_pointer(response.response.rect);
    if hovered_now != was_hovered {
        ui.ctx().request_repaint();
    }
    ui.ctx()
        .data_mut(|data| data.insert_temp(id.with("hovered"), hovered_now));
}
