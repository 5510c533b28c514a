//! Pointer events as delivered by the host UI layer.

use crate::shapes::ShapeId;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

impl PointerButton {
    /// Bit this button occupies in a held-buttons mask.
    pub fn mask(self) -> u8 {
        match self {
            PointerButton::Primary => 0b001,
            PointerButton::Secondary => 0b010,
            PointerButton::Middle => 0b100,
        }
    }
}

/// Which part of the UI an event originated from.
///
/// Pointer-up is observed for the whole page, so the UI layer tags each event
/// with its origin instead of the controller guessing from the hit target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventSource {
    /// The drawing surface itself, or anywhere outside the other sources.
    #[default]
    Canvas,
    /// Toolbar controls; pointer-up from here is ignored.
    Toolbar,
    /// Selection box handles; pointer-up from here is ignored.
    SelectionBox,
    /// A rendered shape that received the click.
    Shape(ShapeId),
}

impl EventSource {
    /// Whether pointer-up handling should discard events from this source.
    pub fn is_ignored_on_release(&self) -> bool {
        matches!(self, EventSource::Toolbar | EventSource::SelectionBox)
    }
}

/// A pointer event in client (page) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Position in client coordinates.
    pub position: Point,
    /// Button whose state changed (meaningful for down/up).
    #[serde(default)]
    pub button: PointerButton,
    /// Mask of buttons held while the event fired.
    #[serde(default)]
    pub buttons: u8,
    /// Where the event originated.
    #[serde(default)]
    pub source: EventSource,
}

impl PointerEvent {
    /// A primary-button press on the canvas.
    pub fn down(position: Point) -> Self {
        Self {
            position,
            button: PointerButton::Primary,
            buttons: PointerButton::Primary.mask(),
            source: EventSource::Canvas,
        }
    }

    /// A move with the primary button held.
    pub fn drag(position: Point) -> Self {
        Self::down(position)
    }

    /// A primary-button release on the canvas.
    pub fn up(position: Point) -> Self {
        Self {
            position,
            button: PointerButton::Primary,
            buttons: 0,
            source: EventSource::Canvas,
        }
    }

    pub fn with_button(mut self, button: PointerButton, buttons: u8) -> Self {
        self.button = button;
        self.buttons = buttons;
        self
    }

    pub fn with_source(mut self, source: EventSource) -> Self {
        self.source = source;
        self
    }

    /// True when only the primary button is involved: it is the changed
    /// button and no other button is held.
    pub fn is_primary_only(&self) -> bool {
        self.button == PointerButton::Primary && self.buttons == PointerButton::Primary.mask()
    }
}
