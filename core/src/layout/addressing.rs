//! Target resolver — translates C-notation shorthand into component keys.
//!
//! Supports two addressing schemes:
//!
//! - **C-notation:** `C1` (first component of the active tab), `C12`.
//!   Expands to `<activeTab>_comp_<M>`.
//! - **Full key:** `tab_2_comp_3` passes through after a syntax check.

use crate::error::{LayoutError, Result};


/// Resolve a target string to a component key within the active tab.
pub fn resolve(target: &str, active_tab: &str) -> Result<String> {
    let trimmed = target.trim();
    if trimmed.is_empty() {
        return Err(LayoutError::bad_target("empty target string"));
    }

    if is_c_notation(trimmed) {
        let index: u32 = trimmed[1..]
            .parse()
            .map_err(|_| LayoutError::bad_target(format!("invalid component number: '{}'", trimmed)))?;
        if index == 0 {
            return Err(LayoutError::bad_target("component numbers start at 1"));
        }
        return Ok(format!("{}_comp_{}", active_tab, index));
    }

    validate_key(trimmed)?;
    Ok(trimmed.to_string())
}


/// Check if a target string looks like C-notation (C/c followed by a digit).
fn is_c_notation(s: &str) -> bool {
    (s.starts_with('C') || s.starts_with('c'))
        && s.len() > 1
        && s.as_bytes()[1].is_ascii_digit()
}


/// Validate a full `tab_<N>_comp_<M>` key without consulting live state.
fn validate_key(key: &str) -> Result<()> {
    let parts: Vec<&str> = key.split("_comp_").collect();
    if parts.len() != 2 {
        return Err(LayoutError::bad_target(format!(
            "expected C-notation or a tab_<N>_comp_<M> key, got '{}'",
            key
        )));
    }
    let tab_ok = parts[0]
        .strip_prefix("tab_")
        .map(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
        .unwrap_or(false);
    let comp_ok = !parts[1].is_empty() && parts[1].bytes().all(|b| b.is_ascii_digit());
    if !tab_ok || !comp_ok {
        return Err(LayoutError::bad_target(format!(
            "malformed component key: '{}'",
            key
        )));
    }
    Ok(())
}


/// Validate that a target string is syntactically usable without resolving it.
pub fn validate_format(target: &str) -> Result<()> {
    let trimmed = target.trim();
    if trimmed.is_empty() {
        return Err(LayoutError::bad_target("empty target"));
    }
    // Bare "C" or "c" is ambiguous — reject it.
    if trimmed == "C" || trimmed == "c" {
        return Err(LayoutError::bad_target("bare 'C' is ambiguous; use C1, C2, etc."));
    }
    if is_c_notation(trimmed) {
        if trimmed[1..].parse::<u32>().map(|n| n >= 1).unwrap_or(false) {
            return Ok(());
        }
        return Err(LayoutError::bad_target(format!(
            "invalid component number in '{}'",
            trimmed
        )));
    }
    validate_key(trimmed)
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
