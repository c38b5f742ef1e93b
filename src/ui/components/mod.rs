//! Reusable UI Components
//!
//! - `TabSelector` - Horizontal view selector with arrow marker
//! - `InputField` - Text input with focus handling, masking, and errors
//! - `StatusIndicator` - Spinner, success, and error markers
//! - `DialogFrame` - Centered dialog overlay with rounded borders

mod dialog_frame;
mod input_field;
mod status_indicator;
mod tab_selector;

pub use dialog_frame::{calculate_total_dialog_height, render_dialog_frame, DialogFrameConfig};
pub use input_field::{calculate_input_field_height, render_input_field, InputFieldConfig};
pub use status_indicator::{
    get_spinner_char, render_status_indicator, spinner_frame_for_tick, StatusIndicatorType,
};
pub use tab_selector::{render_tab_selector, TabItem};
