use alloy_primitives::TxHash;

pub const UNAUTHORIZED_TITLE: &str = "Unauthorized";
pub const SUCCESS_TITLE: &str = "Success";
pub const REVERTED_MESSAGE: &str = "Transaction has been reverted by the EVM";

/// Modal feedback surface.
///
/// An implementation is bound to one function form, so `show_pending`
/// targets that form's pending-transaction container.
pub trait Notifier {
    fn show_error(&self, title: &str, message: &str);
    fn show_warning(&self, title: &str, message: &str);
    /// Confirmation for `method`, linking to the transaction. `method` is
    /// plain text and must not be rendered as markup.
    fn show_success(&self, title: &str, hash: &TxHash, method: &str);
    fn show_pending(&self, visible: bool, hash: &TxHash);
}
