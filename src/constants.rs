// Element ids the page markup provides. The canvas id is fixed
// (`core::DEFAULT_CANVAS_ID`) because its attributes carry the config.

pub const SIMULATE_BUTTON_ID: &str = "simulate";
pub const SAMPLE_BUTTON_ID: &str = "sampleButton";
pub const RESET_BUTTON_ID: &str = "resetView";
pub const PHONE_SELECTOR_ID: &str = "phoneSelector";
