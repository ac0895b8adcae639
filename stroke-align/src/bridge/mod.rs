//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod error;
mod session;
mod frame;
mod settings;
mod debug;

pub use error::FrameError;
pub use session::{FrameCounters, FrameReport};

pub use frame::{
    // WASM entry points
    update_frame,
    get_alignment_status,
    get_head_tilt_status,
    take_feedback_cue,
    get_pose_points,
    // Internal API
    parse_points,
    process_frame,
    last_report,
};

pub use settings::{
    set_sensitivity,
    get_sensitivity,
    reset_session,
    select_sensitivity,
    current_sensitivity,
};

pub use debug::{set_frame_time, get_debug_overlay_text};
