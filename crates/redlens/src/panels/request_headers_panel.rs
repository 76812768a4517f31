use eframe::emath::Align;
use egui::{Button, Layout, TextEdit, Ui, Widget};
use egui_extras::{Column, TableBuilder};

use redlens_core::data::header::{HeaderEditor, HeaderEntry, NameEditor, ValueEditor};
use redlens_core::data::registry::{self, ValueShape, OTHER};
use redlens_core::data::response::AnalysisResponse;

use crate::data::config_data::ConfigData;
use crate::operation::operation::Operation;
use crate::panels::credential_panel::CredentialPanel;

/// The request header list editor: one row per entry, a trailing
/// "add a request header" action, and a cookie-copy action when the
/// last response carried `Set-Cookie` headers.
#[derive(Default)]
pub struct RequestHeadersPanel {
    credential_panel: CredentialPanel,
    submit_requested: bool,
}

impl RequestHeadersPanel {
    /// Returns true when a committed value edit asked for the form to
    /// be submitted (Enter in a value text field).
    pub fn set_and_render(
        &mut self,
        ui: &mut Ui,
        operation: &Operation,
        config_data: &ConfigData,
        editor: &mut HeaderEditor,
        response: Option<&AnalysisResponse>,
    ) -> bool {
        self.submit_requested = false;
        ui.label("Request Headers");
        let mut delete_index = None;
        ui.push_id("request_headers_table", |ui| {
            let table = TableBuilder::new(ui)
                .resizable(false)
                .cell_layout(Layout::left_to_right(Align::Center))
                .column(Column::exact(20.0))
                .column(Column::initial(200.0).range(40.0..=300.0))
                .column(Column::remainder())
                .max_scroll_height(200.0);
            table
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("");
                    });
                    header.col(|ui| {
                        ui.strong("NAME");
                    });
                    header.col(|ui| {
                        ui.strong("VALUE");
                    });
                })
                .body(|mut body| {
                    for (index, entry) in editor.entries.iter_mut().enumerate() {
                        body.row(22.0, |mut row| {
                            row.col(|ui| {
                                if Button::new("x").ui(ui).clicked() {
                                    delete_index = Some(index);
                                }
                            });
                            row.col(|ui| {
                                self.render_name(ui, operation, config_data, entry, index);
                            });
                            row.col(|ui| {
                                self.render_value(ui, entry, index);
                            });
                        });
                    }
                });
        });
        if let Some(index) = delete_index {
            editor.delete_entry(index);
        }
        ui.horizontal(|ui| {
            if ui.link(config_data.strings().add_header.clone()).clicked() {
                editor.add_entry(None, None);
            }
            let set_cookie_lines = response
                .map(AnalysisResponse::set_cookie_lines)
                .unwrap_or_default();
            if !set_cookie_lines.is_empty()
                && ui.link(config_data.strings().copy_cookies.clone()).clicked()
            {
                editor.copy_cookies_from_response(&set_cookie_lines);
            }
        });
        self.submit_requested
    }

    fn render_name(
        &mut self,
        ui: &mut Ui,
        operation: &Operation,
        config_data: &ConfigData,
        entry: &mut HeaderEntry,
        index: usize,
    ) {
        let mut picked: Option<String> = None;
        let mut typed_changed = false;
        let mut typed_committed = false;
        match &mut entry.name_editor {
            NameEditor::Select { selected } => {
                let current = selected.clone().unwrap_or_default();
                egui::ComboBox::from_id_source(format!("hdr_name_{}", index))
                    .selected_text(current.clone())
                    .show_ui(ui, |ui| {
                        ui.style_mut().wrap = Some(false);
                        ui.set_min_width(160.0);
                        for (name, _) in registry::KNOWN_HEADERS.iter() {
                            if ui.selectable_label(current == *name, *name).clicked() {
                                picked = Some(name.to_string());
                            }
                        }
                        if ui.selectable_label(false, OTHER).clicked() {
                            picked = Some(OTHER.to_string());
                        }
                    });
            }
            NameEditor::Text(name) => {
                let text_response = TextEdit::singleline(name)
                    .desired_width(f32::INFINITY)
                    .ui(ui);
                typed_changed = text_response.changed();
                typed_committed = text_response.lost_focus();
            }
        }
        if let Some(name) = picked {
            entry.select_name(name.as_str());
        }
        if typed_changed || typed_committed {
            let name = entry.name().to_string();
            let protected = entry.set_name_text(name.as_str());
            if typed_committed && protected {
                operation.add_warn_toast(config_data.protected_warning(name.as_str()));
            }
        }
    }

    fn render_value(&mut self, ui: &mut Ui, entry: &mut HeaderEntry, index: usize) {
        let name = entry.name().to_string();
        let options: &'static [&'static str] = match registry::lookup(name.as_str()) {
            Some(ValueShape::BoundedChoice(options)) => options,
            _ => &[],
        };
        let mut picked: Option<String> = None;
        let mut text_changed = false;
        let mut text_committed = false;
        let mut credential = false;
        match &mut entry.value_editor {
            ValueEditor::Unset => {}
            ValueEditor::Select(current) => {
                egui::ComboBox::from_id_source(format!("hdr_val_{}", index))
                    .selected_text(current.clone())
                    .show_ui(ui, |ui| {
                        ui.style_mut().wrap = Some(false);
                        ui.set_min_width(160.0);
                        for value in options.iter() {
                            if ui.selectable_label(current.as_str() == *value, *value).clicked() {
                                picked = Some(value.to_string());
                            }
                        }
                        if ui.selectable_label(false, OTHER).clicked() {
                            picked = Some(OTHER.to_string());
                        }
                    });
            }
            ValueEditor::Text(value) => {
                let text_response = TextEdit::singleline(value)
                    .desired_width(f32::INFINITY)
                    .ui(ui);
                text_changed = text_response.changed();
                text_committed = text_response.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter));
            }
            ValueEditor::Credential(_) => credential = true,
        }
        if credential {
            self.credential_panel.set_and_render(ui, entry, index);
        }
        if let Some(value) = picked {
            entry.select_value(value.as_str());
        }
        if text_changed {
            let value = entry.value();
            entry.set_value_text(value.as_str());
        }
        if text_committed {
            self.submit_requested = true;
        }
    }
}
