//! Name normalization
//!
//! Every dedup decision and catalog lookup keys on the normalized form of an
//! item's display name, so all layers must agree on exactly one transform:
//! lowercase, collapse each maximal run of non-word characters to a single
//! space, trim. The normalized form is derived on demand and never stored as
//! authoritative state.

/// Canonicalize a display name into its identity key.
///
/// Total: empty input yields `""`, and the function never panics. Idempotent:
/// `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());

    for ch in name.chars() {
        for lower in ch.to_lowercase() {
            if lower.is_alphanumeric() || lower == '_' {
                out.push(lower);
            } else if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
        }
    }

    // A trailing run of non-word characters leaves one space behind
    while out.ends_with(' ') {
        out.pop();
    }

    out
}
