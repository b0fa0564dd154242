// Fakes en memoria para el mapa y el canal al host

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::maps::{CircleStyle, MapSurface, ScreenPoint};
use crate::models::{Coordinate, Envelope};
use crate::services::HostChannel;

#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Marker(Coordinate),
    Circle(Coordinate, f64),
}

/// Mapa falso: guarda overlays y vista; proyecta (x, y) → (lat = -y, lon = x)
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub overlays: Vec<Overlay>,
    pub view: Option<Coordinate>,
    pub clears: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MapSurface for RecordingSurface {
    fn clear_overlays(&mut self) {
        self.overlays.clear();
        self.clears += 1;
    }

    fn add_marker(&mut self, at: Coordinate) {
        self.overlays.push(Overlay::Marker(at));
    }

    fn add_circle(&mut self, at: Coordinate, style: &CircleStyle) {
        self.overlays.push(Overlay::Circle(at, style.radius));
    }

    fn set_view(&mut self, center: Coordinate) {
        self.view = Some(center);
    }

    fn project(&self, point: ScreenPoint) -> Coordinate {
        Coordinate::new(-point.y, point.x)
    }
}

/// Canal falso: guarda cada sobre como JSON; los clones comparten el buffer
#[derive(Clone, Default)]
pub struct RecordingChannel {
    sent: Rc<RefCell<Vec<serde_json::Value>>>,
    attempts: Rc<Cell<usize>>,
    fail: bool,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canal que rechaza todos los envíos
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn sent(&self) -> Vec<serde_json::Value> {
        self.sent.borrow().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.get()
    }
}

impl HostChannel for RecordingChannel {
    fn post(&self, envelope: &Envelope<'_>) -> Result<(), String> {
        self.attempts.set(self.attempts.get() + 1);
        if self.fail {
            return Err("parent frame unavailable".to_string());
        }
        let value = serde_json::to_value(envelope).map_err(|e| e.to_string())?;
        self.sent.borrow_mut().push(value);
        Ok(())
    }
}
