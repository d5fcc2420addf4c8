/// A yes/no question put to the user before a destructive action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub header: String,
    pub message: String,
}

/// Asks the user to confirm.
///
/// Implementations call `on_accept` synchronously, and only when the user explicitly
/// accepts. Rejecting or dismissing the prompt must leave `on_accept` uncalled.
pub trait Confirmer {
    fn confirm(&self, request: &ConfirmationRequest, on_accept: &mut dyn FnMut());
}

/// Confirmer that accepts everything. Used by non-interactive runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl Confirmer for AutoConfirm {
    fn confirm(&self, request: &ConfirmationRequest, on_accept: &mut dyn FnMut()) {
        tracing::debug!(header = %request.header, message = %request.message, "Auto-confirming");
        on_accept();
    }
}
