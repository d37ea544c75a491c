//! WASM bindings for frontend pre-validation
//!
//! Lets a frontend run the same checks the program runs before submitting a
//! transaction: plan validation against the participant list, dues math, and
//! the vault-symbol derivation shown in pool-creation previews.

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{check_join, sanitize_vault_symbol, total_dues, validate_plan};

/// Derive the vault symbol a display name will produce.
#[wasm_bindgen]
pub fn derive_vault_symbol(display_name: &str) -> String {
    sanitize_vault_symbol(display_name)
}

/// Compute the exact dues for a join, or throw on overflow.
#[wasm_bindgen]
pub fn join_dues(dues_per_entry: u64, num_entries: u32) -> Result<u64, JsError> {
    total_dues(dues_per_entry, num_entries).map_err(|e| JsError::new(&e.to_string()))
}

/// Validate a payout plan before submission.
///
/// # Arguments
/// * `winners_json` - JSON array of winner addresses (strings)
/// * `amounts_json` - JSON array of amounts (u64)
/// * `participants_json` - JSON array of the pool's participant addresses
/// * `max_recipients` - the program's configured recipient cap
///
/// # Returns
/// The plan total on success.
#[wasm_bindgen]
pub fn validate_payout_plan(
    winners_json: &str,
    amounts_json: &str,
    participants_json: &str,
    max_recipients: usize,
) -> Result<u64, JsError> {
    let winners: Vec<String> = serde_json::from_str(winners_json)
        .map_err(|e| JsError::new(&format!("Invalid winners: {}", e)))?;
    let amounts: Vec<u64> = serde_json::from_str(amounts_json)
        .map_err(|e| JsError::new(&format!("Invalid amounts: {}", e)))?;
    let participants: Vec<String> = serde_json::from_str(participants_json)
        .map_err(|e| JsError::new(&format!("Invalid participants: {}", e)))?;

    validate_plan(&winners, &amounts, &participants, max_recipients)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Check a prospective join against the pool's caps.
///
/// # Returns
/// JSON serialized [`crate::JoinOutcome`].
#[wasm_bindgen]
pub fn preview_join(
    dues_per_entry: u64,
    num_entries: u32,
    user_entries: u32,
    pool_entries: u32,
    capacity: u32,
    max_entries_per_user: u32,
) -> Result<JsValue, JsError> {
    let outcome = check_join(
        dues_per_entry,
        num_entries,
        user_entries,
        pool_entries,
        capacity,
        max_entries_per_user,
    )
    .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&outcome)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
