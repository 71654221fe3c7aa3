//! Camera interaction state driven by pointer and wheel input.
//!
//! The host (the page's event wiring) forwards raw DOM deltas through the
//! [`InputHandler`] trait; the render loop reads [`TransformState`] once per
//! tick. No browser types appear here so the mapping can be tested natively.

use crate::core::constants::{
    DEFAULT_DEPTH, DEFAULT_SCALE, MIN_DEPTH, ROTATION_SENSITIVITY, WHEEL_DIVISOR,
};
use glam::Vec3;

/// Camera accumulators mutated in place by input handlers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    pub translation: Vec3,
    /// Radians per axis.
    pub rotation: Vec3,
    /// Never negative on any axis.
    pub scale: Vec3,
    /// Never below `MIN_DEPTH` once driven by the wheel.
    pub depth: f32,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::splat(DEFAULT_SCALE),
            depth: DEFAULT_DEPTH,
        }
    }
}

impl TransformState {
    /// Defaults with the origin placed at the centre of the viewport.
    pub fn centered(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            translation: Vec3::new(viewport_width * 0.5, viewport_height * 0.5, 0.0),
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` code.
    #[inline]
    pub fn from_dom(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonState {
    pub primary: bool,
    pub secondary: bool,
    pub middle: bool,
}

impl ButtonState {
    fn set(&mut self, button: PointerButton, pressed: bool) {
        match button {
            PointerButton::Primary => self.primary = pressed,
            PointerButton::Secondary => self.secondary = pressed,
            PointerButton::Middle => self.middle = pressed,
        }
    }

    #[inline]
    pub fn any(&self) -> bool {
        self.primary || self.secondary || self.middle
    }
}

/// What the host should do with the originating wheel event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WheelOutcome {
    /// The default scroll must be suppressed (`preventDefault`).
    pub consumed: bool,
}

/// Pick the wheel axis carrying the scroll amount.
///
/// Browsers turn Shift+wheel into a horizontal scroll, so with the modifier
/// held the amount arrives in `deltaX` while `deltaY` reads 0.
#[inline]
pub fn wheel_delta(delta_x: f32, delta_y: f32, modifier: bool) -> f32 {
    if modifier && delta_y == 0.0 {
        delta_x
    } else {
        delta_y
    }
}

/// Capability set the page's event wiring invokes.
pub trait InputHandler {
    fn on_pointer_down(&mut self, button: PointerButton);
    fn on_pointer_up(&mut self, button: PointerButton);
    fn on_pointer_move(&mut self, movement_x: f32, movement_y: f32, modifier: bool);
    fn on_wheel(&mut self, delta_y: f32, modifier: bool) -> WheelOutcome;
    fn on_pointer_leave(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionState {
    pub transform: TransformState,
    pub buttons: ButtonState,
    /// Device pixels per CSS pixel. Pointer deltas arrive in CSS pixels while
    /// `transform.translation` is in canvas backing pixels.
    pub pixel_ratio: f32,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(TransformState::default())
    }
}

impl InteractionState {
    pub fn new(transform: TransformState) -> Self {
        Self {
            transform,
            buttons: ButtonState::default(),
            pixel_ratio: 1.0,
        }
    }

    /// Non-positive or non-finite ratios fall back to 1.
    pub fn set_pixel_ratio(&mut self, ratio: f32) {
        self.pixel_ratio = if ratio.is_finite() && ratio > 0.0 {
            ratio
        } else {
            1.0
        };
    }

    /// Restore the default camera for the given viewport. Pressed buttons are kept.
    pub fn reset(&mut self, viewport_width: f32, viewport_height: f32) {
        self.transform = TransformState::centered(viewport_width, viewport_height);
    }
}

impl InputHandler for InteractionState {
    fn on_pointer_down(&mut self, button: PointerButton) {
        self.buttons.set(button, true);
    }

    fn on_pointer_up(&mut self, button: PointerButton) {
        self.buttons.set(button, false);
    }

    fn on_pointer_move(&mut self, movement_x: f32, movement_y: f32, modifier: bool) {
        if !self.buttons.any() {
            return;
        }
        let rx = movement_x / ROTATION_SENSITIVITY;
        let ry = movement_y / ROTATION_SENSITIVITY;
        let t = &mut self.transform;
        if modifier {
            if self.buttons.primary {
                t.rotation.x += ry;
            }
            if self.buttons.secondary {
                t.rotation.y += rx;
            }
            if self.buttons.middle {
                t.rotation.z += rx;
            }
        } else {
            if self.buttons.primary {
                t.rotation.y += rx;
                t.rotation.x += ry;
            }
            if self.buttons.secondary {
                t.rotation.z += rx;
                t.rotation.x += ry;
            }
            if self.buttons.middle {
                t.translation.x += movement_x * self.pixel_ratio;
                t.translation.y += movement_y * self.pixel_ratio;
            }
        }
    }

    fn on_wheel(&mut self, delta_y: f32, modifier: bool) -> WheelOutcome {
        let d = -delta_y / WHEEL_DIVISOR;
        let t = &mut self.transform;
        if modifier {
            t.depth = (t.depth + d).max(MIN_DEPTH);
            return WheelOutcome { consumed: true };
        }
        let next = t.scale + Vec3::splat(d);
        // All-or-nothing: one negative axis collapses every axis.
        t.scale = if next.min_element() < 0.0 {
            Vec3::ZERO
        } else {
            next
        };
        WheelOutcome { consumed: false }
    }

    fn on_pointer_leave(&mut self) {
        if self.buttons.any() {
            log::debug!("[input] pointer left with buttons held; releasing");
        }
        self.buttons = ButtonState::default();
    }
}
