use eframe::egui::{self, Context, Margin, RichText, Stroke, Ui};

use crate::catalog::Catalog;
use crate::search::{FilteredView, search};

use super::super::ViewModel;
use super::super::render_utils::{BRAND, DIVIDER, TEXT_MUTED};
use super::centered_column;

const PAGE_WIDTH: f32 = 1280.0;

impl ViewModel {
    pub(in crate::app) fn new(catalog: Catalog) -> Self {
        let view = FilteredView::full(&catalog);
        Self {
            catalog,
            query: String::new(),
            view,
        }
    }

    pub(in crate::app) fn refresh_view(&mut self) {
        self.view = search(&self.catalog, &self.query);
        log::debug!(
            "search {:?}: {} of {} services",
            self.query,
            self.view.len(),
            self.catalog.len()
        );
    }

    pub(in crate::app) fn clear_search(&mut self) {
        self.query.clear();
        self.refresh_view();
    }

    pub(in crate::app) fn show(&mut self, ctx: &Context, reduced_motion: &mut bool) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.draw_header(ui);
                        self.draw_hero(ui);
                        self.draw_results(ui);
                        Self::draw_footer(ui, reduced_motion);
                    });
            });
    }

    fn draw_header(&self, ui: &mut Ui) {
        egui::Frame::NONE
            .inner_margin(Margin::same(28))
            .show(ui, |ui| {
                centered_column(ui, PAGE_WIDTH, |ui| {
                    ui.label(RichText::new("ANACOD").size(34.0).strong().color(BRAND));
                    ui.add_space(4.0);
                    ui.label(RichText::new("Solutions digitales innovantes").color(TEXT_MUTED));
                });
            });
    }

    fn draw_footer(ui: &mut Ui, reduced_motion: &mut bool) {
        ui.add_space(80.0);
        let (divider, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), 1.0),
            egui::Sense::hover(),
        );
        ui.painter()
            .hline(divider.x_range(), divider.center().y, Stroke::new(1.0, DIVIDER));

        egui::Frame::NONE
            .inner_margin(Margin::same(28))
            .show(ui, |ui| {
                centered_column(ui, PAGE_WIDTH, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("© 2024 ANACOD. Tous droits réservés.").color(TEXT_MUTED),
                        );
                        ui.add_space(6.0);
                        ui.checkbox(reduced_motion, "Réduire les animations")
                            .on_hover_text("Remplace le fond animé par un fond statique.");
                    });
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{CatalogSource, load_catalog};

    use super::*;

    #[test]
    fn show_all_action_restores_full_catalog() {
        let catalog = load_catalog(&CatalogSource::Embedded).unwrap();
        let mut model = ViewModel::new(catalog);

        model.query = "xyz".to_owned();
        model.refresh_view();
        assert!(model.view.is_empty_state());

        model.clear_search();
        assert!(model.query.is_empty());
        assert!(!model.view.results_mode);
        assert_eq!(model.view, FilteredView::full(&model.catalog));
    }

    #[test]
    fn typing_narrows_then_widens() {
        let catalog = load_catalog(&CatalogSource::Embedded).unwrap();
        let total = catalog.len();
        let mut model = ViewModel::new(catalog);
        assert_eq!(model.view.len(), total);

        model.query = "mobile".to_owned();
        model.refresh_view();
        assert!(model.view.results_mode);
        assert!(model.view.len() < total);

        model.query = "   ".to_owned();
        model.refresh_view();
        assert_eq!(model.view, FilteredView::full(&model.catalog));
    }
}
