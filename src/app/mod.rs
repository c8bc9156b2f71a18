use eframe::egui::{self, Context, RichText};

use crate::catalog::{Catalog, CatalogSource, load_catalog};
use crate::search::FilteredView;

mod background;
mod render_utils;
mod ui;
mod web;

use background::Background;
use render_utils::TEXT_MUTED;

pub struct LandingOptions {
    pub catalog: CatalogSource,
    pub seed: Option<u64>,
    pub reduced_motion: bool,
}

pub struct LandingApp {
    catalog_source: CatalogSource,
    state: AppState,
    background: Background,
    reduced_motion: bool,
}

enum AppState {
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    catalog: Catalog,
    query: String,
    view: FilteredView,
}

impl LandingApp {
    pub fn new(cc: &eframe::CreationContext<'_>, options: LandingOptions) -> Self {
        ui::install_style(&cc.egui_ctx);
        let state = Self::load(&options.catalog);
        Self {
            catalog_source: options.catalog,
            state,
            background: Background::new(cc.egui_ctx.clone(), options.seed),
            reduced_motion: options.reduced_motion,
        }
    }

    fn load(source: &CatalogSource) -> AppState {
        match load_catalog(source) {
            Ok(catalog) => AppState::Ready(Box::new(ViewModel::new(catalog))),
            Err(error) => {
                log::error!("failed to load catalog: {error:#}");
                AppState::Error(format!("{error:#}"))
            }
        }
    }
}

impl eframe::App for LandingApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.background.show(ctx, !self.reduced_motion);

        let mut transition = None;

        match &mut self.state {
            AppState::Ready(model) => model.show(ctx, &mut self.reduced_motion),
            AppState::Error(error) => {
                egui::CentralPanel::default()
                    .frame(egui::Frame::NONE.inner_margin(egui::Margin::same(32)))
                    .show(ctx, |ui| {
                        ui.heading("Impossible de charger le catalogue de services");
                        ui.add_space(6.0);
                        ui.label(RichText::new(error.as_str()).color(TEXT_MUTED));
                        ui.add_space(10.0);
                        if ui.button("Réessayer").clicked() {
                            transition = Some(Self::load(&self.catalog_source));
                        }
                    });
            }
        }

        if let Some(next_state) = transition {
            self.state = next_state;
        }
    }
}
