//! Host-selected configuration: sensitivity tier and session reset

use wasm_bindgen::prelude::*;
use crate::alignment::Sensitivity;
use super::error::FrameError;
use super::session::with_session;

/// Select a tier by name (internal API, no JsValue)
pub fn select_sensitivity(name: &str) -> Result<Sensitivity, FrameError> {
    let tier = Sensitivity::from_name(name)
        .ok_or_else(|| FrameError::UnknownSensitivity(name.to_string()))?;
    with_session(|s| s.sensitivity = tier);
    console_log!("🎯 Sensitivity set to {}", tier.name());
    Ok(tier)
}

pub fn current_sensitivity() -> Sensitivity {
    with_session(|s| s.sensitivity)
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from the settings UI with "beginner" | "intermediate" | "advanced"
#[wasm_bindgen]
pub fn set_sensitivity(name: &str) -> Result<(), JsValue> {
    select_sensitivity(name)?;
    Ok(())
}

#[wasm_bindgen]
pub fn get_sensitivity() -> String {
    current_sensitivity().name().to_string()
}

/// Start a new practice session; the selected tier is kept
#[wasm_bindgen]
pub fn reset_session() {
    with_session(|s| s.reset());
    console_log!("🔄 Session reset");
}
