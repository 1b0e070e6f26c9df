use uuid::Uuid;

/// Generates a fresh random debug token.
///
/// The value is opaque to the rest of the system; UUID v4 keeps it easy for
/// a developer to read off a log line and register in the console.
pub(crate) fn generate_debug_token() -> String {
    Uuid::new_v4().to_string()
}
