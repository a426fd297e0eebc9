// SPDX-License-Identifier: PMPL-1.0-or-later

//! Admin console flow for registering translations.
//!
//! The console is a small state machine driven by whatever UI the host has
//! (forms, chat prompts, a terminal). Each call to [`RegistrarSession::handle`]
//! consumes one operator response and returns the next thing to show. The
//! session never blocks; a dismissed prompt simply ends it.
//!
//! ```text
//! AwaitingMenuChoice ─ register ──────────────► AwaitingKeyAndLabelInput ─► Applied
//!        │           ─ restore ───────────────► Applied
//!        │           ─ failures ─► AwaitingFailurePick ─► AwaitingKeyAndLabelInput
//!        └─ dismiss (from any waiting state) ─► Cancelled
//! ```

use crate::i18n::{format_message, t, Lang};
use crate::resolver::ItemNameService;
use crate::types::NetworkId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    RestoreDefaults,
    ListFailures,
}

impl MenuChoice {
    pub fn all() -> &'static [MenuChoice] {
        &[
            MenuChoice::Register,
            MenuChoice::RestoreDefaults,
            MenuChoice::ListFailures,
        ]
    }

    pub fn from_index(index: usize) -> Option<MenuChoice> {
        Self::all().get(index).copied()
    }

    fn message_key(&self) -> &'static str {
        match self {
            MenuChoice::Register => "admin.menu.register",
            MenuChoice::RestoreDefaults => "admin.menu.restore",
            MenuChoice::ListFailures => "admin.menu.failures",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrarState {
    AwaitingMenuChoice,
    AwaitingFailurePick { net_ids: Vec<NetworkId> },
    AwaitingKeyAndLabelInput { default_key: String },
    Applied { notice: String },
    Cancelled { notice: String },
}

/// One operator response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrarInput {
    /// A button, by index.
    Choose(usize),
    Submit { key: String, label: String },
    Dismiss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: String,
    pub placeholder: String,
    pub default: String,
}

/// What the UI should show next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    Menu {
        title: String,
        content: String,
        buttons: Vec<String>,
    },
    Form {
        title: String,
        fields: Vec<FormField>,
    },
    Notice(String),
}

pub struct RegistrarSession<'a> {
    service: &'a ItemNameService,
    lang: Lang,
    state: RegistrarState,
}

impl<'a> RegistrarSession<'a> {
    pub fn new(service: &'a ItemNameService, lang: Lang) -> Self {
        Self {
            service,
            lang,
            state: RegistrarState::AwaitingMenuChoice,
        }
    }

    /// Session that skips the menu and opens the form directly.
    pub fn register_form(service: &'a ItemNameService, lang: Lang, default_key: &str) -> Self {
        Self {
            service,
            lang,
            state: RegistrarState::AwaitingKeyAndLabelInput {
                default_key: default_key.to_string(),
            },
        }
    }

    pub fn state(&self) -> &RegistrarState {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        matches!(
            self.state,
            RegistrarState::Applied { .. } | RegistrarState::Cancelled { .. }
        )
    }

    /// Prompt for the current state.
    pub fn prompt(&self) -> Prompt {
        match &self.state {
            RegistrarState::AwaitingMenuChoice => Prompt::Menu {
                title: self.text("admin.title"),
                content: String::new(),
                buttons: MenuChoice::all()
                    .iter()
                    .map(|choice| self.text(choice.message_key()))
                    .collect(),
            },
            RegistrarState::AwaitingFailurePick { net_ids } => {
                let diagnostics: Vec<String> = net_ids
                    .iter()
                    .map(|id| {
                        self.service
                            .failure(*id)
                            .map(|record| record.to_string())
                            .unwrap_or_default()
                    })
                    .collect();
                Prompt::Menu {
                    title: self.text("failures.title"),
                    content: format!("{}\n{}", self.text("failures.content"), diagnostics.join("\n")),
                    buttons: diagnostics,
                }
            }
            RegistrarState::AwaitingKeyAndLabelInput { default_key } => Prompt::Form {
                title: self.text("form.title"),
                fields: vec![
                    FormField {
                        label: self.text("form.key"),
                        placeholder: self.text("form.key.placeholder"),
                        default: default_key.clone(),
                    },
                    FormField {
                        label: self.text("form.label"),
                        placeholder: self.text("form.label.placeholder"),
                        default: String::new(),
                    },
                ],
            },
            RegistrarState::Applied { notice } | RegistrarState::Cancelled { notice } => {
                Prompt::Notice(notice.clone())
            }
        }
    }

    /// Feed one operator response and return the next prompt. Responses that
    /// do not fit the current state leave it unchanged; finished sessions
    /// ignore further input.
    pub fn handle(&mut self, input: RegistrarInput) -> Prompt {
        if self.is_finished() {
            return self.prompt();
        }
        if input == RegistrarInput::Dismiss {
            self.state = self.cancelled();
            return self.prompt();
        }

        let next = match (&self.state, input) {
            (RegistrarState::AwaitingMenuChoice, RegistrarInput::Choose(index)) => {
                match MenuChoice::from_index(index) {
                    Some(choice) => self.choose(choice),
                    None => {
                        let choice = index.to_string();
                        RegistrarState::Cancelled {
                            notice: format_message(
                                t(self.lang, "notice.invalid_choice"),
                                &[("choice", choice.as_str())],
                            ),
                        }
                    }
                }
            }
            (RegistrarState::AwaitingFailurePick { net_ids }, RegistrarInput::Choose(index)) => {
                match net_ids.get(index) {
                    Some(id) => RegistrarState::AwaitingKeyAndLabelInput {
                        default_key: self
                            .service
                            .failure(*id)
                            .map(|record| record.key)
                            .unwrap_or_default(),
                    },
                    None => self.cancelled(),
                }
            }
            (RegistrarState::AwaitingKeyAndLabelInput { .. }, RegistrarInput::Submit { key, label }) => {
                self.submit(&key, &label)
            }
            (state, input) => {
                tracing::debug!(?state, ?input, "input does not fit the current prompt");
                return self.prompt();
            }
        };
        self.state = next;
        self.prompt()
    }

    fn choose(&self, choice: MenuChoice) -> RegistrarState {
        match choice {
            MenuChoice::Register => RegistrarState::AwaitingKeyAndLabelInput {
                default_key: String::new(),
            },
            MenuChoice::RestoreDefaults => {
                self.service.restore_defaults();
                RegistrarState::Applied {
                    notice: self.text("notice.restored"),
                }
            }
            MenuChoice::ListFailures => {
                let failures = self.service.list_failures();
                if failures.is_empty() {
                    RegistrarState::Applied {
                        notice: self.text("notice.no_failures"),
                    }
                } else {
                    RegistrarState::AwaitingFailurePick {
                        net_ids: failures.into_iter().map(|(id, _)| id).collect(),
                    }
                }
            }
        }
    }

    fn submit(&self, key: &str, label: &str) -> RegistrarState {
        if key.trim().is_empty() || label.is_empty() {
            return self.cancelled();
        }
        let key = self.service.register(key, label);
        RegistrarState::Applied {
            notice: format_message(
                t(self.lang, "notice.registered"),
                &[("key", key.as_str()), ("label", label)],
            ),
        }
    }

    fn cancelled(&self) -> RegistrarState {
        RegistrarState::Cancelled {
            notice: self.text("notice.cancelled"),
        }
    }

    fn text(&self, key: &str) -> String {
        t(self.lang, key).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::StaticDictionary;
    use crate::table::LabelMap;
    use crate::types::ItemDescriptor;
    use std::sync::Arc;

    fn service() -> ItemNameService {
        let mut defaults = LabelMap::new();
        defaults.insert("stone".to_string(), "돌".to_string());
        ItemNameService::initialize(defaults, LabelMap::new(), Arc::new(StaticDictionary::default()))
    }

    #[test]
    fn register_through_menu() {
        let svc = service();
        let mut session = RegistrarSession::new(&svc, Lang::En);
        assert!(matches!(session.prompt(), Prompt::Menu { ref buttons, .. } if buttons.len() == 3));

        let form = session.handle(RegistrarInput::Choose(0));
        assert!(matches!(form, Prompt::Form { ref fields, .. } if fields.len() == 2));

        let done = session.handle(RegistrarInput::Submit {
            key: "Magic Stick".to_string(),
            label: "마법 막대기".to_string(),
        });
        assert_eq!(done, Prompt::Notice("Registered [magic_stick => 마법 막대기]".to_string()));
        assert!(session.is_finished());
        assert_eq!(svc.label("magic_stick").as_deref(), Some("마법 막대기"));
    }

    #[test]
    fn dismissing_the_form_changes_nothing() {
        let svc = service();
        let mut session = RegistrarSession::new(&svc, Lang::Ko);
        session.handle(RegistrarInput::Choose(0));
        let notice = session.handle(RegistrarInput::Dismiss);
        assert_eq!(notice, Prompt::Notice("한글 이름 등록을 취소하였습니다".to_string()));
        assert!(matches!(session.state(), RegistrarState::Cancelled { .. }));
        assert!(!svc.is_dirty());
    }

    #[test]
    fn empty_fields_cancel() {
        let svc = service();
        let mut session = RegistrarSession::register_form(&svc, Lang::En, "");
        session.handle(RegistrarInput::Submit {
            key: "  ".to_string(),
            label: "x".to_string(),
        });
        assert!(matches!(session.state(), RegistrarState::Cancelled { .. }));
        assert!(!svc.is_dirty());
    }

    #[test]
    fn restore_from_menu() {
        let svc = service();
        svc.register("stone", "바위");
        let mut session = RegistrarSession::new(&svc, Lang::En);
        session.handle(RegistrarInput::Choose(1));
        assert!(matches!(session.state(), RegistrarState::Applied { .. }));
        assert_eq!(svc.label("stone").as_deref(), Some("돌"));
    }

    #[test]
    fn failure_pick_prefills_derived_key() {
        let svc = service();
        let item = ItemDescriptor::new("Strange Thing", 5).with_network_id(77);
        svc.translate(&item, false);

        let mut session = RegistrarSession::new(&svc, Lang::En);
        let list = session.handle(RegistrarInput::Choose(2));
        match list {
            Prompt::Menu { buttons, content, .. } => {
                assert_eq!(buttons, vec!["Strange Thing : unknown_77 (strange_thing)".to_string()]);
                assert!(content.contains("unknown_77"));
            }
            other => panic!("expected failure list, got {:?}", other),
        }

        let form = session.handle(RegistrarInput::Choose(0));
        match form {
            Prompt::Form { fields, .. } => assert_eq!(fields[0].default, "strange_thing"),
            other => panic!("expected form, got {:?}", other),
        }
    }

    #[test]
    fn empty_failure_list_is_a_notice() {
        let svc = service();
        let mut session = RegistrarSession::new(&svc, Lang::En);
        let notice = session.handle(RegistrarInput::Choose(2));
        assert_eq!(notice, Prompt::Notice("No items have failed to translate".to_string()));
    }

    #[test]
    fn mismatched_input_keeps_state() {
        let svc = service();
        let mut session = RegistrarSession::new(&svc, Lang::En);
        session.handle(RegistrarInput::Submit {
            key: "a".to_string(),
            label: "b".to_string(),
        });
        assert_eq!(session.state(), &RegistrarState::AwaitingMenuChoice);
        assert!(!svc.is_dirty());
    }

    #[test]
    fn finished_session_ignores_input() {
        let svc = service();
        let mut session = RegistrarSession::new(&svc, Lang::En);
        session.handle(RegistrarInput::Dismiss);
        session.handle(RegistrarInput::Choose(1));
        assert!(matches!(session.state(), RegistrarState::Cancelled { .. }));
        assert!(!svc.is_dirty());
    }
}
