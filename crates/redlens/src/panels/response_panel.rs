use egui::Ui;

use redlens_core::data::response::AnalysisResponse;

#[derive(Default)]
pub struct ResponsePanel {}

impl ResponsePanel {
    pub fn set_and_render(&mut self, ui: &mut Ui, response: &AnalysisResponse) {
        ui.horizontal(|ui| {
            ui.strong(response.status_text.clone());
            ui.label(format!("{} ms", response.elapsed_ms));
        });
        ui.label("Headers");
        egui::Grid::new("response_headers_grid")
            .striped(true)
            .min_col_width(100.0)
            .max_col_width(ui.available_width())
            .num_columns(2)
            .show(ui, |ui| {
                ui.strong("Key");
                ui.strong("Value");
                ui.end_row();
                for header in response.headers.iter() {
                    ui.label(header.name.clone());
                    ui.label(header.value.clone());
                    ui.end_row();
                }
            });
        egui::CollapsingHeader::new("Body").show(ui, |ui| {
            egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                ui.monospace(response.body.clone());
            });
        });
    }
}
