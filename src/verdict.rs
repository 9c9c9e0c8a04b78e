//! Verdict rule and dialog payloads.
//!
//! The "detection" here is a fixed rule: only the literal message `okay`
//! is considered safe. Everything else, including the empty message, is
//! reported as fraud.

/// The message that yields a safe verdict.
pub const SAFE_MESSAGE: &str = "okay";

/// Visual variant of the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerdictKind {
    #[default]
    Safe,
    Fraud,
    Feedback,
}

impl VerdictKind {
    /// Whether this kind is the result of a check (as opposed to the feedback prompt).
    pub fn is_verdict(self) -> bool {
        matches!(self, Self::Safe | Self::Fraud)
    }
}

/// Content shown by the dialog for a single render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogPayload {
    pub kind: VerdictKind,
    pub title: String,
    pub description: String,
}

impl Default for DialogPayload {
    fn default() -> Self {
        Self {
            kind: VerdictKind::Safe,
            title: "No title".to_string(),
            description: "No description".to_string(),
        }
    }
}

impl DialogPayload {
    pub fn safe() -> Self {
        Self {
            kind: VerdictKind::Safe,
            title: "SAFE MESSAGE!".to_string(),
            description: "No fraud detected. Stay cautious and verify sender details if unsure."
                .to_string(),
        }
    }

    pub fn fraud() -> Self {
        Self {
            kind: VerdictKind::Fraud,
            title: "FRAUD DETECTED!".to_string(),
            description: "This message appears to be fraudulent. Do not respond or share personal details!"
                .to_string(),
        }
    }

    /// The data-sharing prompt shown after a verdict is dismissed.
    pub fn feedback() -> Self {
        Self {
            kind: VerdictKind::Feedback,
            title: "Help Improve FraudShield!".to_string(),
            description: "Would you like to allow us to use this message to improve our fraud detection system? Your data will be anonymized and used only for training purposes."
                .to_string(),
        }
    }
}

/// Classify a message. Exact, case-sensitive comparison with no trimming.
pub fn classify(message: &str) -> VerdictKind {
    if message == SAFE_MESSAGE {
        VerdictKind::Safe
    } else {
        VerdictKind::Fraud
    }
}

/// Build the payload for the verdict produced by `message`.
pub fn evaluate(message: &str) -> DialogPayload {
    match classify(message) {
        VerdictKind::Safe => DialogPayload::safe(),
        _ => DialogPayload::fraud(),
    }
}
