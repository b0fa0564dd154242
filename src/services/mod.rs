// ============================================================================
// SERVICES - Comunicación con el host (Streamlit)
// ============================================================================

pub mod host_messenger;

#[cfg(target_arch = "wasm32")]
pub mod parent_window;
#[cfg(target_arch = "wasm32")]
pub mod render_listener;
#[cfg(target_arch = "wasm32")]
pub mod frame_height;

pub use host_messenger::{HostChannel, HostMessenger};

#[cfg(target_arch = "wasm32")]
pub use parent_window::ParentWindowChannel;
