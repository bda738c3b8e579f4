//! Overlay state: the acknowledgement notice, the WhatsApp choice menu and
//! the name prompt.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Draft held by the name-prompt modal while it is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamePrompt {
    pub draft: String,
}

/// Which overlays are currently shown. A notice can sit on top of the name
/// prompt (blank-name warning); nothing else stacks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub notice: Option<String>,
    pub whatsapp_choice: bool,
    pub name_prompt: Option<NamePrompt>,
}

impl ModalState {
    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn open_whatsapp_choice(&mut self) {
        self.whatsapp_choice = true;
    }

    pub fn close_whatsapp_choice(&mut self) {
        self.whatsapp_choice = false;
    }

    pub fn open_name_prompt(&mut self, prefill: &str) {
        self.name_prompt = Some(NamePrompt { draft: prefill.to_owned() });
    }

    pub fn close_name_prompt(&mut self) {
        self.name_prompt = None;
    }

    pub fn set_name_draft(&mut self, value: impl Into<String>) {
        if let Some(prompt) = self.name_prompt.as_mut() {
            prompt.draft = value.into();
        }
    }

    #[must_use]
    pub fn is_any_open(&self) -> bool {
        self.notice.is_some() || self.whatsapp_choice || self.name_prompt.is_some()
    }
}
