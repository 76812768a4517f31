use egui::{Button, TextEdit, Ui, Widget};
use log::info;
use poll_promise::Promise;

use redlens_core::data::header::HeaderEditor;
use redlens_core::data::response::AnalysisResponse;
use redlens_core::runner::Runner;

use crate::data::config_data::ConfigData;
use crate::operation::operation::Operation;
use crate::panels::request_headers_panel::RequestHeadersPanel;
use crate::panels::response_panel::ResponsePanel;
use crate::panels::VERTICAL_GAP;

#[derive(Default)]
pub struct RequestPanel {
    uri: String,
    runner: Runner,
    send_promise: Option<Promise<anyhow::Result<AnalysisResponse>>>,
    request_headers_panel: RequestHeadersPanel,
    response_panel: ResponsePanel,
}

impl RequestPanel {
    pub fn set_and_render(
        &mut self,
        ui: &mut Ui,
        operation: &Operation,
        config_data: &ConfigData,
        editor: &mut HeaderEditor,
        response: &mut Option<AnalysisResponse>,
    ) {
        self.poll_promise(operation, response);
        let mut submit = false;
        ui.horizontal(|ui| {
            ui.label(config_data.strings().uri_label.clone());
            let uri_response = TextEdit::singleline(&mut self.uri)
                .desired_width(ui.available_width() - 100.0)
                .ui(ui);
            if uri_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }
            if self.send_promise.is_some() {
                ui.add_enabled(false, Button::new(config_data.strings().analyze.clone()));
            } else if Button::new(config_data.strings().analyze.clone())
                .ui(ui)
                .clicked()
            {
                submit = true;
            }
        });
        ui.add_space(VERTICAL_GAP);
        if self
            .request_headers_panel
            .set_and_render(ui, operation, config_data, editor, response.as_ref())
        {
            submit = true;
        }
        if submit {
            self.send(operation, config_data, editor);
        }
        if let Some(response) = response {
            ui.separator();
            self.response_panel.set_and_render(ui, response);
        }
    }

    fn poll_promise(&mut self, operation: &Operation, response: &mut Option<AnalysisResponse>) {
        let mut done = false;
        if let Some(promise) = &self.send_promise {
            if let Some(result) = promise.ready() {
                match result {
                    Ok(analysis) => {
                        info!("analysis returned {}", analysis.status_text);
                        *response = Some(analysis.clone());
                    }
                    Err(e) => {
                        operation.add_error_toast(format!("Analysis request failed: {}", e))
                    }
                }
                done = true;
            }
        }
        if done {
            self.send_promise = None;
        }
    }

    fn send(&mut self, operation: &Operation, config_data: &ConfigData, editor: &HeaderEditor) {
        if self.send_promise.is_some() {
            return;
        }
        if self.uri.trim().is_empty() {
            operation.add_error_toast("A resource URI is required.");
            return;
        }
        self.send_promise = Some(self.runner.analyze(
            config_data.endpoint().to_string(),
            self.uri.trim().to_string(),
            editor.form_values(),
        ));
    }
}
