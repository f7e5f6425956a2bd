//! Crate-wide constants.
//!
//! Centralizes default tunables and platform codes so the state machine,
//! the binder and the settings layer agree on the same values.

// ============================================================================
// Gesture Defaults
// ============================================================================

/// Default click/drag threshold in page pixels
pub const DEFAULT_THRESHOLD: f64 = 5.0;

/// Default horizontal and vertical scale factor
pub const DEFAULT_SCALE: f64 = 1.0;

/// Default horizontal and vertical translation
pub const DEFAULT_TRANSLATE: f64 = 0.0;

// ============================================================================
// Platform Codes
// ============================================================================

/// Button code reported for the primary (left) button
pub const BUTTON_CODE_LEFT: u8 = 0;

/// Button code reported for the auxiliary (middle) button
pub const BUTTON_CODE_MIDDLE: u8 = 1;

/// Button code reported for the secondary (right) button
pub const BUTTON_CODE_RIGHT: u8 = 2;

/// `axis` value of legacy scroll events that move along the vertical axis
pub const WHEEL_AXIS_VERTICAL: u8 = 2;

// ============================================================================
// Settings & Profiling
// ============================================================================

/// File name of the settings file inside the user config directory
pub const SETTINGS_FILE_NAME: &str = "mouse-manager.json";

/// Directory created under the user config directory
pub const SETTINGS_DIR_NAME: &str = "mouse-manager";

/// Dispatch budget in milliseconds before a raw event is reported as slow
pub const DISPATCH_BUDGET_MS: f64 = 1.0;
