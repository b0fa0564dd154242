pub mod coordinate;
pub mod render;
pub mod message;

pub use coordinate::Coordinate;
pub use render::{CoordField, RenderPayload};
pub use message::{Envelope, InboundMessage, OutboundMessage, RenderArgs};
