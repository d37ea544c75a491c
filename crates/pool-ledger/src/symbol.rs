//! Display-name sanitization for vault labels
//!
//! Pools carry a free-form display name; the custody vault only gets a short
//! uppercase symbol derived from it. The symbol is purely cosmetic and has no
//! effect on accounting.

/// Maximum characters considered from the display name.
pub const SYMBOL_MAX_CHARS: usize = 11;

/// Symbol used when sanitization strips every character.
pub const SYMBOL_FALLBACK: &str = "FV";

/// Derive a vault symbol from a pool display name.
///
/// Takes up to the first [`SYMBOL_MAX_CHARS`] characters, maps lowercase
/// ASCII letters to uppercase, and drops everything outside `A-Z` / `0-9`.
/// Falls back to [`SYMBOL_FALLBACK`] when nothing survives.
pub fn sanitize_vault_symbol(name: &str) -> String {
    let symbol: String = name
        .chars()
        .take(SYMBOL_MAX_CHARS)
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect();

    if symbol.is_empty() {
        SYMBOL_FALLBACK.to_string()
    } else {
        symbol
    }
}
