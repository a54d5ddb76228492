//! Session state: one explicit struct, one reducer.
//!
//! Everything the studio mutates during a session lives here and changes
//! only through [`SessionState::apply`]. State is per-session, in-memory,
//! and vanishes on session end; the library store is the only persistence
//! path and it is reached through explicit API calls, not through this
//! module.

use chrono::{DateTime, Utc};
use imaginary_types::models::{
    AspectRatio, HistoryImage, ImageModel, ReferenceElement, ReferenceImage,
};
use uuid::Uuid;

use crate::catalog;
use crate::compose::{self, PromptInput};

/// Every action the studio UI can dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    SetBasePrompt(String),
    /// Select the option if absent, deselect it if present.
    ToggleEdit(String),
    /// Reset prompt, edits, and both reference slots.
    ClearSelections,
    AttachSubject(ReferenceImage),
    ClearSubject,
    AttachStyle(ReferenceImage),
    ClearStyle,
    ToggleSubjectElement(ReferenceElement),
    ToggleStyleElement(ReferenceElement),
    SelectModel(String),
    SelectAspectRatio(String),
    ToggleSettingsPanel,
    ToggleEffectsPanel,
    /// A generation succeeded; becomes the newest, selected history entry.
    RecordGeneration { url: String, prompt: String, created_at: DateTime<Utc> },
    SelectHistory(Uuid),
    DeleteHistory(Uuid),
    SetLanguage(String),
}

/// The whole mutable session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub language: String,
    pub base_prompt: String,
    /// Insertion order, for the "active effects" display only.
    pub selected_edit_ids: Vec<String>,
    pub subject: Option<ReferenceImage>,
    pub style: Option<ReferenceImage>,
    pub model_id: String,
    pub aspect_ratio_id: String,
    /// Newest-first.
    pub history: Vec<HistoryImage>,
    pub selected_history_id: Option<Uuid>,
    pub settings_panel_open: bool,
    pub effects_panel_open: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            base_prompt: String::new(),
            selected_edit_ids: Vec::new(),
            subject: None,
            style: None,
            model_id: catalog::default_model().id.to_string(),
            aspect_ratio_id: catalog::default_aspect_ratio().id.to_string(),
            history: Vec::new(),
            selected_history_id: None,
            settings_panel_open: true,
            effects_panel_open: true,
        }
    }
}

impl SessionState {
    /// The single mutation path.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::SetBasePrompt(text) => self.base_prompt = text,
            SessionEvent::ToggleEdit(id) => {
                if let Some(pos) = self.selected_edit_ids.iter().position(|s| *s == id) {
                    self.selected_edit_ids.remove(pos);
                } else if catalog::edit_option_by_id(&id).is_some() {
                    self.selected_edit_ids.push(id);
                }
            }
            SessionEvent::ClearSelections => {
                self.base_prompt.clear();
                self.selected_edit_ids.clear();
                self.subject = None;
                self.style = None;
            }
            SessionEvent::AttachSubject(image) => self.subject = Some(image),
            SessionEvent::ClearSubject => self.subject = None,
            SessionEvent::AttachStyle(image) => self.style = Some(image),
            SessionEvent::ClearStyle => self.style = None,
            SessionEvent::ToggleSubjectElement(element) => {
                if let Some(subject) = self.subject.as_mut() {
                    toggle_element(subject, element);
                }
            }
            SessionEvent::ToggleStyleElement(element) => {
                if let Some(style) = self.style.as_mut() {
                    toggle_element(style, element);
                }
            }
            SessionEvent::SelectModel(id) => {
                if catalog::model_by_id(&id).is_some() {
                    self.model_id = id;
                }
            }
            SessionEvent::SelectAspectRatio(id) => {
                if catalog::aspect_ratio_by_id(&id).is_some() {
                    self.aspect_ratio_id = id;
                }
            }
            SessionEvent::ToggleSettingsPanel => {
                self.settings_panel_open = !self.settings_panel_open;
            }
            SessionEvent::ToggleEffectsPanel => {
                self.effects_panel_open = !self.effects_panel_open;
            }
            SessionEvent::RecordGeneration { url, prompt, created_at } => {
                let image = HistoryImage { id: Uuid::new_v4(), url, prompt, created_at };
                self.selected_history_id = Some(image.id);
                self.history.insert(0, image);
            }
            SessionEvent::SelectHistory(id) => {
                if self.history.iter().any(|h| h.id == id) {
                    self.selected_history_id = Some(id);
                }
            }
            SessionEvent::DeleteHistory(id) => {
                self.history.retain(|h| h.id != id);
                if self.selected_history_id == Some(id) {
                    self.selected_history_id = self.history.first().map(|h| h.id);
                }
            }
            SessionEvent::SetLanguage(lang) => self.language = lang,
        }
    }

    /// The currently selected model, falling back to the catalog default.
    pub fn model(&self) -> &'static ImageModel {
        catalog::model_by_id(&self.model_id).unwrap_or_else(catalog::default_model)
    }

    /// The currently selected ratio, falling back to the catalog default.
    pub fn aspect_ratio(&self) -> &'static AspectRatio {
        catalog::aspect_ratio_by_id(&self.aspect_ratio_id)
            .unwrap_or_else(catalog::default_aspect_ratio)
    }

    /// The currently selected history entry, if any.
    pub fn selected_history(&self) -> Option<&HistoryImage> {
        let id = self.selected_history_id?;
        self.history.iter().find(|h| h.id == id)
    }

    /// Assemble the final prompt from the current state.
    pub fn compose_prompt(&self) -> String {
        compose::compose(&PromptInput {
            base_prompt: &self.base_prompt,
            selected_edit_ids: &self.selected_edit_ids,
            subject: self.subject.as_ref(),
            style: self.style.as_ref(),
            aspect_ratio: self.aspect_ratio(),
        })
    }
}

fn toggle_element(image: &mut ReferenceImage, element: ReferenceElement) {
    if !image.elements.remove(&element) {
        image.elements.insert(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imaginary_types::models::ElementSet;

    fn record(state: &mut SessionState, url: &str) -> Uuid {
        state.apply(SessionEvent::RecordGeneration {
            url: url.to_string(),
            prompt: "a dragon".to_string(),
            created_at: Utc::now(),
        });
        state.history[0].id
    }

    #[test]
    fn test_history_is_newest_first_and_selected() {
        let mut state = SessionState::default();
        let first = record(&mut state, "one");
        let second = record(&mut state, "two");

        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history[0].id, second);
        assert_eq!(state.history[1].id, first);
        assert_eq!(state.selected_history_id, Some(second));
    }

    #[test]
    fn test_deleting_selected_falls_back_to_newest_remaining() {
        let mut state = SessionState::default();
        let oldest = record(&mut state, "one");
        let middle = record(&mut state, "two");
        let newest = record(&mut state, "three");

        state.apply(SessionEvent::SelectHistory(middle));
        state.apply(SessionEvent::DeleteHistory(middle));

        // Two others remain; the newest of them becomes the selection.
        assert_eq!(state.selected_history_id, Some(newest));
        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history[1].id, oldest);
    }

    #[test]
    fn test_deleting_last_entry_clears_selection() {
        let mut state = SessionState::default();
        let only = record(&mut state, "one");

        state.apply(SessionEvent::DeleteHistory(only));

        assert!(state.history.is_empty());
        assert_eq!(state.selected_history_id, None);
    }

    #[test]
    fn test_deleting_unselected_keeps_selection() {
        let mut state = SessionState::default();
        let first = record(&mut state, "one");
        let second = record(&mut state, "two");

        state.apply(SessionEvent::DeleteHistory(first));

        assert_eq!(state.selected_history_id, Some(second));
    }

    #[test]
    fn test_toggle_edit_selects_and_deselects() {
        let mut state = SessionState::default();
        state.apply(SessionEvent::ToggleEdit("cyberpunk".to_string()));
        state.apply(SessionEvent::ToggleEdit("bokeh".to_string()));
        assert_eq!(state.selected_edit_ids, vec!["cyberpunk", "bokeh"]);

        state.apply(SessionEvent::ToggleEdit("cyberpunk".to_string()));
        assert_eq!(state.selected_edit_ids, vec!["bokeh"]);

        // Unknown ids never enter the selection.
        state.apply(SessionEvent::ToggleEdit("nonexistent".to_string()));
        assert_eq!(state.selected_edit_ids, vec!["bokeh"]);
    }

    #[test]
    fn test_unknown_model_and_ratio_are_ignored() {
        let mut state = SessionState::default();
        state.apply(SessionEvent::SelectModel("not-a-model".to_string()));
        state.apply(SessionEvent::SelectAspectRatio("7:5".to_string()));
        assert_eq!(state.model().id, "nano-banana");
        assert_eq!(state.aspect_ratio().id, "1:1");
    }

    #[test]
    fn test_clear_selections_resets_inputs() {
        let mut state = SessionState::default();
        state.apply(SessionEvent::SetBasePrompt("a dragon".to_string()));
        state.apply(SessionEvent::ToggleEdit("fog".to_string()));
        state.apply(SessionEvent::AttachSubject(ReferenceImage {
            data_url: "data:image/png;base64,AAAA".to_string(),
            elements: ElementSet::new(),
        }));

        state.apply(SessionEvent::ClearSelections);

        assert!(state.base_prompt.is_empty());
        assert!(state.selected_edit_ids.is_empty());
        assert!(state.subject.is_none());
        assert_eq!(state.compose_prompt(), "");
    }

    #[test]
    fn test_toggle_subject_element() {
        let mut state = SessionState::default();
        state.apply(SessionEvent::AttachSubject(ReferenceImage {
            data_url: "data:image/png;base64,AAAA".to_string(),
            elements: ElementSet::new(),
        }));

        state.apply(SessionEvent::ToggleSubjectElement(ReferenceElement::Face));
        assert!(state.subject.as_ref().is_some_and(|s| s.has_element(ReferenceElement::Face)));

        state.apply(SessionEvent::ToggleSubjectElement(ReferenceElement::Face));
        assert!(state.subject.as_ref().is_some_and(|s| s.elements.is_empty()));
    }

    #[test]
    fn test_compose_prompt_uses_current_state() {
        let mut state = SessionState::default();
        state.apply(SessionEvent::SetBasePrompt("a dragon".to_string()));
        state.apply(SessionEvent::ToggleEdit("cyberpunk".to_string()));
        state.apply(SessionEvent::SelectAspectRatio("16:9".to_string()));

        let prompt = state.compose_prompt();
        assert!(prompt.starts_with("a dragon, cyberpunk style"));
        assert!(prompt.contains("Widescreen cinematic format (16:9 aspect ratio)"));
    }
}
