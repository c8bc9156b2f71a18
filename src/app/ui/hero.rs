use eframe::egui::{self, CornerRadius, FontId, Margin, RichText, Stroke, Ui};

use super::super::ViewModel;
use super::super::render_utils::{BRAND, CARD_BORDER, HEADLINE, INPUT_FILL, TEXT_MUTED};

const SEARCH_WIDTH: f32 = 672.0;
const SEARCH_HINT: &str = "Ex: modifier site web, application mobile...";

impl ViewModel {
    pub(in crate::app) fn draw_hero(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(64.0);
            ui.label(RichText::new("Trouvez le service").size(48.0).strong().color(HEADLINE));
            ui.label(RichText::new("qu'il vous faut").size(48.0).strong().color(BRAND));
            ui.add_space(20.0);
            ui.label(
                RichText::new("Recherchez parmi nos services digitaux pour donner vie à vos projets")
                    .size(19.0)
                    .color(TEXT_MUTED),
            );
            ui.add_space(44.0);

            if self.draw_search_bar(ui).changed() {
                self.refresh_view();
            }
            ui.add_space(32.0);
        });
    }

    fn draw_search_bar(&mut self, ui: &mut Ui) -> egui::Response {
        let width = ui.available_width().min(SEARCH_WIDTH);

        egui::Frame::new()
            .fill(INPUT_FILL)
            .stroke(Stroke::new(1.0, CARD_BORDER))
            .corner_radius(CornerRadius::same(12))
            .inner_margin(Margin::symmetric(16, 14))
            .show(ui, |ui| {
                ui.set_width(width - 32.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new("🔍").size(18.0).color(TEXT_MUTED));
                    ui.add(
                        egui::TextEdit::singleline(&mut self.query)
                            .hint_text(SEARCH_HINT)
                            .font(FontId::proportional(18.0))
                            .frame(false)
                            .desired_width(f32::INFINITY),
                    )
                })
                .inner
            })
            .inner
    }
}
