use std::sync::OnceLock;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Diagnostic printing is opt-in: set QRGEN_DEBUG in a debug build to
/// see the intermediate codeword blocks on stderr.
pub(crate) fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("QRGEN_DEBUG").is_ok())
}
