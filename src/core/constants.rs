// Shared tuning constants for the viewer. Nothing here touches browser APIs.

// Render loop
pub const TICK_INTERVAL_MS: u32 = 50; // redraw period of the fixed-interval timer
pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// Camera defaults
pub const DEFAULT_SCALE: f32 = 100.0; // pixels per simulation unit (metres)
pub const DEFAULT_DEPTH: f32 = 1000.0; // depth range of the pixel-space projection
pub const MIN_DEPTH: f32 = 1.0; // smallest depth range the wheel can reach

// Interaction
pub const ROTATION_SENSITIVITY: f32 = 100.0; // pointer pixels per radian
pub const WHEEL_DIVISOR: f32 = 10.0; // wheel deltaY units per scale/depth step

// Per-set point colors (RGBA)
pub const PHONE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0]; // red
pub const PARABOLOID_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0]; // green
pub const USER_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0]; // blue
pub const SAMPLE_COLOR: [f32; 4] = [0.9, 0.9, 0.9, 1.0]; // light grey

// Remote service
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";
pub const SIMULATION_PATH: &str = "/api/simulation";
pub const VERTICES_PATH: &str = "/api/vertices";
pub const PHONES_PATH: &str = "/api/phones";
pub const PHONE_PATH: &str = "/api/phone";

// Page
pub const DEFAULT_CANVAS_ID: &str = "glViewport"; // carries the data-* config attributes
pub const DEFAULT_SAMPLE_VERTICES: u32 = 0; // 0 disables the startup preview fetch
