// Utils compartidos

pub mod constants;

#[cfg(target_arch = "wasm32")]
pub mod leaflet_ffi;

pub use constants::*;
