use serde::{Deserialize, Serialize};

use crate::data::cookie::parse_set_cookie;
use crate::data::credential::{Credential, CredentialScheme};
use crate::data::registry::{self, ValueShape, OTHER};

/// Editing state of a header's name field. `Select` → `Text` is the
/// one-way `other...` conversion; a row never goes back to a dropdown.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum NameEditor {
    Select { selected: Option<String> },
    Text(String),
}

/// Editing state of a header's value field.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ValueEditor {
    /// No name resolved yet, so no value field is shown.
    Unset,
    Select(String),
    Text(String),
    Credential(Credential),
}

/// One editable header row. `serialized` is the `"<name>:<value>"`
/// form-field text and is resynced by every mutating operation, so it
/// is never stale when the surrounding form reads it.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct HeaderEntry {
    pub name_editor: NameEditor,
    pub value_editor: ValueEditor,
    serialized: String,
}

impl HeaderEntry {
    pub fn new(name: Option<&str>, value: Option<&str>) -> Self {
        let name_editor = match name {
            None => NameEditor::Select { selected: None },
            Some(n) if registry::is_known(n) => NameEditor::Select {
                selected: Some(n.to_string()),
            },
            Some(n) => NameEditor::Text(n.to_string()),
        };
        let value_editor = match name {
            None => ValueEditor::Unset,
            Some(n) => match registry::lookup(n) {
                Some(ValueShape::FreeText) => {
                    ValueEditor::Text(value.unwrap_or_default().to_string())
                }
                Some(ValueShape::BoundedChoice(options)) => match value {
                    Some(v) if options.contains(&v) => ValueEditor::Select(v.to_string()),
                    Some(v) => ValueEditor::Text(v.to_string()),
                    None => ValueEditor::Select(String::new()),
                },
                Some(ValueShape::Credential) => ValueEditor::Credential(Credential::default()),
                None => ValueEditor::Text(value.unwrap_or_default().to_string()),
            },
        };
        let mut entry = HeaderEntry {
            name_editor,
            value_editor,
            serialized: String::new(),
        };
        entry.resync();
        entry
    }

    /// The effective header name, empty while unresolved.
    pub fn name(&self) -> &str {
        match &self.name_editor {
            NameEditor::Select { selected: Some(n) } => n,
            NameEditor::Select { selected: None } => "",
            NameEditor::Text(n) => n,
        }
    }

    /// The effective header value; for a credential row this is
    /// computed from the sub-fields, never typed directly.
    pub fn value(&self) -> String {
        match &self.value_editor {
            ValueEditor::Unset => String::new(),
            ValueEditor::Select(v) | ValueEditor::Text(v) => v.clone(),
            ValueEditor::Credential(credential) => credential.header_value(),
        }
    }

    pub fn serialized(&self) -> &str {
        &self.serialized
    }

    fn resync(&mut self) {
        self.serialized = format!("{}:{}", self.name(), self.value());
    }

    /// Dropdown selection on the name field. `other...` irreversibly
    /// converts both fields to empty free text; a registry key resets
    /// the value field to that header's fresh default shape.
    pub fn select_name(&mut self, name: &str) {
        if name == OTHER {
            self.name_editor = NameEditor::Text(String::new());
            self.value_editor = ValueEditor::Text(String::new());
            self.resync();
            return;
        }
        self.name_editor = NameEditor::Select {
            selected: Some(name.to_string()),
        };
        match registry::lookup(name) {
            Some(ValueShape::FreeText) => self.value_editor = ValueEditor::Text(String::new()),
            Some(ValueShape::BoundedChoice(_)) => {
                self.value_editor = ValueEditor::Select(String::new())
            }
            Some(ValueShape::Credential) => {
                self.value_editor = ValueEditor::Credential(Credential::default())
            }
            None => {}
        }
        self.resync();
    }

    /// Free-text edit of the name field. The edit always takes effect;
    /// the return value flags a protected name so the caller can show
    /// a non-blocking advisory.
    pub fn set_name_text(&mut self, name: &str) -> bool {
        self.name_editor = NameEditor::Text(name.to_string());
        self.resync();
        registry::is_protected(name)
    }

    /// Dropdown selection on the value field. `other...` converts the
    /// value field to empty free text.
    pub fn select_value(&mut self, value: &str) {
        if value == OTHER {
            self.value_editor = ValueEditor::Text(String::new());
        } else {
            self.value_editor = ValueEditor::Select(value.to_string());
        }
        self.resync();
    }

    pub fn set_value_text(&mut self, value: &str) {
        self.value_editor = ValueEditor::Text(value.to_string());
        self.resync();
    }

    /// Switches the credential sub-form to another scheme, keeping the
    /// already-typed sub-fields.
    pub fn select_credential_scheme(&mut self, scheme: CredentialScheme) {
        if let ValueEditor::Credential(credential) = &mut self.value_editor {
            credential.scheme = scheme;
        }
        self.resync();
    }

    /// `other...` on the scheme selector: the sub-form is discarded
    /// and the value field reverts to plain free text.
    pub fn discard_credential(&mut self) {
        self.value_editor = ValueEditor::Text(String::new());
        self.resync();
    }

    pub fn credential_mut(&mut self) -> Option<&mut Credential> {
        match &mut self.value_editor {
            ValueEditor::Credential(credential) => Some(credential),
            _ => None,
        }
    }

    /// Rewrites the serialized field from the credential sub-fields.
    /// A no-op when the value editor is not in the credential state.
    pub fn recompute_credential(&mut self) {
        if matches!(self.value_editor, ValueEditor::Credential(_)) {
            self.resync();
        }
    }
}

/// The header list editor: an owned, ordered collection of entries.
/// Row order is submission order.
#[derive(Default, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderEditor {
    pub entries: Vec<HeaderEntry>,
}

impl HeaderEditor {
    pub fn new(prepopulated: &[(String, String)]) -> Self {
        let mut editor = HeaderEditor::default();
        for (name, value) in prepopulated {
            editor.add_entry(Some(name), Some(value));
        }
        editor
    }

    pub fn add_entry(&mut self, name: Option<&str>, value: Option<&str>) {
        self.entries.push(HeaderEntry::new(name, value));
    }

    pub fn delete_entry(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    /// Fans one `Set-Cookie` line out into one request `Cookie` entry
    /// each, deleting every existing `Cookie` row first. Malformed
    /// lines are skipped without comment. Returns the number of
    /// entries added.
    pub fn copy_cookies_from_response(&mut self, set_cookie_lines: &[String]) -> usize {
        self.entries
            .retain(|entry| !entry.name().eq_ignore_ascii_case("Cookie"));
        let mut added = 0;
        for line in set_cookie_lines {
            if let Some(pair) = parse_set_cookie(line) {
                self.add_entry(Some("Cookie"), Some(&pair));
                added += 1;
            }
        }
        added
    }

    /// The serialized form-field values, one per row, in row order.
    pub fn form_values(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.serialized().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose;
    use base64::Engine;

    #[test]
    fn known_name_gets_dropdown_and_declared_value_shape() {
        let entry = HeaderEntry::new(Some("Referer"), None);
        assert_eq!(
            entry.name_editor,
            NameEditor::Select {
                selected: Some("Referer".to_string())
            }
        );
        assert_eq!(entry.value_editor, ValueEditor::Text(String::new()));

        let entry = HeaderEntry::new(Some("Accept-Language"), Some("en"));
        assert_eq!(entry.value_editor, ValueEditor::Select("en".to_string()));
        assert_eq!(entry.serialized(), "Accept-Language:en");

        let entry = HeaderEntry::new(Some("Authorization"), None);
        assert!(matches!(entry.value_editor, ValueEditor::Credential(_)));
    }

    #[test]
    fn unknown_name_gets_free_text_fields() {
        let entry = HeaderEntry::new(Some("X-Custom"), Some("42"));
        assert_eq!(entry.name_editor, NameEditor::Text("X-Custom".to_string()));
        assert_eq!(entry.value_editor, ValueEditor::Text("42".to_string()));
        assert_eq!(entry.serialized(), "X-Custom:42");
    }

    #[test]
    fn known_name_with_value_outside_choice_set_gets_free_text_value() {
        let entry = HeaderEntry::new(Some("Accept-Language"), Some("sv"));
        assert_eq!(entry.value_editor, ValueEditor::Text("sv".to_string()));
        assert_eq!(entry.serialized(), "Accept-Language:sv");
    }

    #[test]
    fn blank_entry_has_no_value_field() {
        let entry = HeaderEntry::new(None, None);
        assert_eq!(entry.name_editor, NameEditor::Select { selected: None });
        assert_eq!(entry.value_editor, ValueEditor::Unset);
        assert_eq!(entry.serialized(), ":");
    }

    #[test]
    fn other_on_name_converts_both_fields_once() {
        let mut entry = HeaderEntry::new(None, None);
        entry.select_name(crate::data::registry::OTHER);
        assert_eq!(entry.name_editor, NameEditor::Text(String::new()));
        assert_eq!(entry.value_editor, ValueEditor::Text(String::new()));
        // The dropdown no longer exists; only free-text edits remain.
        assert!(!entry.set_name_text("X-Debug"));
        assert_eq!(entry.serialized(), "X-Debug:");
    }

    #[test]
    fn selecting_a_registry_key_resets_the_value_to_its_default_shape() {
        let mut entry = HeaderEntry::new(None, None);
        entry.select_name("Cache-Control");
        assert_eq!(entry.value_editor, ValueEditor::Select(String::new()));
        entry.select_value("no-cache");
        assert_eq!(entry.serialized(), "Cache-Control:no-cache");

        entry.select_name("Authorization");
        match &entry.value_editor {
            ValueEditor::Credential(credential) => {
                assert_eq!(credential.scheme, CredentialScheme::BasicAuth)
            }
            other => panic!("expected credential sub-form, got {:?}", other),
        }
    }

    #[test]
    fn other_on_value_converts_to_empty_free_text() {
        let mut entry = HeaderEntry::new(Some("Accept-Language"), Some("en"));
        entry.select_value(crate::data::registry::OTHER);
        assert_eq!(entry.value_editor, ValueEditor::Text(String::new()));
        assert_eq!(entry.serialized(), "Accept-Language:");
        entry.set_value_text("sv-fi");
        assert_eq!(entry.serialized(), "Accept-Language:sv-fi");
    }

    #[test]
    fn protected_name_warns_but_takes_effect() {
        let mut entry = HeaderEntry::new(Some("X-Custom"), None);
        assert!(entry.set_name_text("Content-Length"));
        assert_eq!(entry.serialized(), "Content-Length:");
        assert!(!entry.set_name_text("X-Other"));
    }

    #[test]
    fn credential_serialization_tracks_every_sub_field_edit() {
        let mut entry = HeaderEntry::new(Some("Authorization"), None);
        {
            let credential = entry.credential_mut().unwrap();
            credential.basic_username = "alice".to_string();
            credential.basic_password = "wonder".to_string();
        }
        entry.recompute_credential();
        let encoded = general_purpose::STANDARD.encode("alice:wonder");
        assert_eq!(entry.serialized(), format!("Authorization:Basic {}", encoded));

        entry.select_credential_scheme(CredentialScheme::BearerToken);
        entry.credential_mut().unwrap().bearer_token = "abc123".to_string();
        entry.recompute_credential();
        assert_eq!(entry.serialized(), "Authorization:Bearer abc123");

        entry.discard_credential();
        assert_eq!(entry.value_editor, ValueEditor::Text(String::new()));
        assert_eq!(entry.serialized(), "Authorization:");
    }

    #[test]
    fn credential_recompute_is_a_no_op_for_other_value_states() {
        let mut entry = HeaderEntry::new(Some("Referer"), Some("https://example.net/"));
        entry.recompute_credential();
        assert_eq!(entry.serialized(), "Referer:https://example.net/");
    }

    #[test]
    fn initialize_preserves_input_order() {
        let editor = HeaderEditor::new(&[
            ("User-Agent".to_string(), "curl/8".to_string()),
            ("Accept-Language".to_string(), "en".to_string()),
        ]);
        assert_eq!(
            editor.form_values(),
            vec!["User-Agent:curl/8".to_string(), "Accept-Language:en".to_string()]
        );
    }

    #[test]
    fn delete_removes_exactly_one_row() {
        let mut editor = HeaderEditor::new(&[
            ("Accept-Language".to_string(), "en".to_string()),
            ("Referer".to_string(), "https://example.net/".to_string()),
        ]);
        editor.delete_entry(0);
        assert_eq!(
            editor.form_values(),
            vec!["Referer:https://example.net/".to_string()]
        );
        // Out-of-range delete leaves the list alone.
        editor.delete_entry(9);
        assert_eq!(editor.entries.len(), 1);
    }

    #[test]
    fn cookie_copy_replaces_existing_cookie_rows() {
        let mut editor = HeaderEditor::new(&[
            ("Cookie".to_string(), "old=1".to_string()),
            ("Referer".to_string(), "https://example.net/".to_string()),
        ]);
        let added = editor.copy_cookies_from_response(&[
            "Set-Cookie: session=xyz; Path=/; HttpOnly".to_string(),
        ]);
        assert_eq!(added, 1);
        assert_eq!(
            editor.form_values(),
            vec![
                "Referer:https://example.net/".to_string(),
                "Cookie:session=xyz".to_string()
            ]
        );
    }

    #[test]
    fn cookie_copy_skips_malformed_lines() {
        let mut editor = HeaderEditor::default();
        let added = editor.copy_cookies_from_response(&[
            "Set-Cookie: ;Path=/".to_string(),
            "not a header".to_string(),
        ]);
        assert_eq!(added, 0);
        assert!(editor.entries.is_empty());
    }

    #[test]
    fn end_to_end_add_and_edit() {
        let mut editor = HeaderEditor::new(&[("Accept-Language".to_string(), "en".to_string())]);
        assert_eq!(editor.form_values(), vec!["Accept-Language:en".to_string()]);

        editor.add_entry(None, None);
        let entry = &mut editor.entries[1];
        entry.select_name(crate::data::registry::OTHER);
        entry.set_name_text("X-Custom");
        entry.set_value_text("42");
        assert_eq!(
            editor.form_values(),
            vec!["Accept-Language:en".to_string(), "X-Custom:42".to_string()]
        );
    }
}
