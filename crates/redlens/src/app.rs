use egui::Context;

use redlens_core::data::header::HeaderEditor;
use redlens_core::data::response::AnalysisResponse;

use crate::data::config_data::ConfigData;
use crate::operation::operation::Operation;
use crate::panels::request_panel::RequestPanel;
use crate::panels::VERTICAL_GAP;

pub struct App {
    config_data: ConfigData,
    operation: Operation,
    editor: HeaderEditor,
    response: Option<AnalysisResponse>,
    request_panel: RequestPanel,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.style_mut(|s| {
            s.spacing.item_spacing.x = 7.0;
            s.spacing.item_spacing.y = 7.0;
        });
        let config_data = ConfigData::load();
        let editor = HeaderEditor::new(config_data.prepopulated_headers());
        App {
            config_data,
            operation: Operation::default(),
            editor,
            response: None,
            request_panel: Default::default(),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.add_space(VERTICAL_GAP);
                egui::widgets::global_dark_light_mode_buttons(ui);
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.request_panel.set_and_render(
                    ui,
                    &self.operation,
                    &self.config_data,
                    &mut self.editor,
                    &mut self.response,
                );
            });
        });
        self.operation.show(ctx);
    }
}
