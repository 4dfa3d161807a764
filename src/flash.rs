//! Flash Messages
//!
//! Short-lived success/error messages shown above the board and the form.

/// Validation messages
pub const VALIDATION_HIDE_MS: u32 = 3000;
/// Create-activity results
pub const CREATE_HIDE_MS: u32 = 4000;
/// Signup and unregister results
pub const SIGNUP_HIDE_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    /// CSS class on the message element
    pub fn class(&self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Error => "error",
        }
    }
}

/// Which message area a flash belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashChannel {
    /// Shared area for signup/unregister
    Board,
    /// Area under the create-activity form
    CreateForm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub text: String,
    pub kind: FlashKind,
    pub hide_after_ms: u32,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>, hide_after_ms: u32) -> Self {
        Self { text: text.into(), kind: FlashKind::Success, hide_after_ms }
    }

    pub fn error(text: impl Into<String>, hide_after_ms: u32) -> Self {
        Self { text: text.into(), kind: FlashKind::Error, hide_after_ms }
    }
}

/// One message area. Each `show` bumps the generation so a pending
/// auto-hide for an older message leaves a newer one alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashSlot {
    current: Option<FlashMessage>,
    generation: u64,
}

impl FlashSlot {
    pub fn show(&mut self, message: FlashMessage) -> u64 {
        self.generation += 1;
        self.current = Some(message);
        self.generation
    }

    /// Hide the message if it is still the one shown at `generation`
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&FlashMessage> {
        self.current.as_ref()
    }
}
