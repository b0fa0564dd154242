// ============================================================================
// STATE MODULE - Estado de interacción del widget
// ============================================================================

pub mod pick_mode;

pub use pick_mode::*;
