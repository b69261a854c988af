/// Blocking browser alert used for confirmations and validation messages
pub fn alert(message: &str) {
    gloo::dialogs::alert(message);
}
