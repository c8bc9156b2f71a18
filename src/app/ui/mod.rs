use eframe::egui::{Color32, Context, Ui, Visuals};

mod cards;
mod hero;
mod panels;

pub(in crate::app) fn install_style(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = Color32::TRANSPARENT;
    ctx.set_visuals(visuals);
}

fn centered_column<R>(ui: &mut Ui, max_width: f32, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    let available = ui.available_width();
    let width = available.min(max_width);
    let margin = ((available - width) * 0.5).max(0.0);

    ui.horizontal(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_width(width);
            add_contents(ui)
        })
        .inner
    })
    .inner
}
