/// Installs the console panic hook so a panic shows up as a readable error
/// in the browser console instead of an opaque `unreachable` trap. Safe to
/// call more than once.
pub fn initialize_panic_handler() {
    console_error_panic_hook::set_once();
}
