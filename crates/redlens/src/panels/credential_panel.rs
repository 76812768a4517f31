use egui::{TextEdit, Ui, Widget};
use strum::IntoEnumIterator;

use redlens_core::data::credential::CredentialScheme;
use redlens_core::data::header::HeaderEntry;
use redlens_core::data::registry::OTHER;

use crate::panels::HORIZONTAL_GAP;

/// Structured credential sub-form shown in place of a plain value
/// field. Sub-field edits rewrite the serialized form field on every
/// keystroke, unlike plain values which update on committed changes.
#[derive(Default)]
pub struct CredentialPanel {}

impl CredentialPanel {
    pub fn set_and_render(&mut self, ui: &mut Ui, entry: &mut HeaderEntry, index: usize) {
        // `Some(None)` means the `other...` escape back to free text.
        let mut picked: Option<Option<CredentialScheme>> = None;
        let mut edited = false;
        if let Some(credential) = entry.credential_mut() {
            let current = credential.scheme;
            egui::ComboBox::from_id_source(format!("credential_scheme_{}", index))
                .selected_text(current.to_string())
                .show_ui(ui, |ui| {
                    ui.style_mut().wrap = Some(false);
                    ui.set_min_width(60.0);
                    for scheme in CredentialScheme::iter() {
                        if ui
                            .selectable_label(scheme == current, scheme.to_string())
                            .clicked()
                        {
                            picked = Some(Some(scheme));
                        }
                    }
                    if ui.selectable_label(false, OTHER).clicked() {
                        picked = Some(None);
                    }
                });
            match current {
                CredentialScheme::BasicAuth => {
                    ui.add_space(HORIZONTAL_GAP);
                    ui.label("Username:");
                    edited |= TextEdit::singleline(&mut credential.basic_username)
                        .desired_width(120.0)
                        .ui(ui)
                        .changed();
                    ui.label("Password:");
                    edited |= TextEdit::singleline(&mut credential.basic_password)
                        .desired_width(120.0)
                        .ui(ui)
                        .changed();
                }
                CredentialScheme::BearerToken => {
                    ui.add_space(HORIZONTAL_GAP);
                    ui.label("Token:");
                    edited |= TextEdit::singleline(&mut credential.bearer_token)
                        .desired_width(240.0)
                        .ui(ui)
                        .changed();
                }
            }
        }
        match picked {
            Some(Some(scheme)) => entry.select_credential_scheme(scheme),
            Some(None) => entry.discard_credential(),
            None => {}
        }
        if edited {
            entry.recompute_credential();
        }
    }
}
