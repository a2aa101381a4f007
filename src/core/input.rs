//! Turns one tick of raw pointer, keyboard and controller state into the
//! small set of abstract menu controls.

use std::time::{Duration, Instant};

use smallvec::SmallVec;
use winit::keyboard::{KeyCode, ModifiersState};

use crate::game::GameRequests;

/* -------------------------------- constants ------------------------------- */

/// Left stick deflection needed for vertical movement.
pub const AXIS_THRESHOLD_Y: i32 = 14000;
/// Horizontal is less sensitive so navigating does not nudge values.
pub const AXIS_THRESHOLD_X: i32 = 26000;
pub const AXIS_FIRST_REPEAT: Duration = Duration::from_millis(300);
pub const AXIS_REPEAT: Duration = Duration::from_millis(100);

pub const STEP: i32 = 1;
pub const PAGE: i32 = 9;
pub const JUMP: i32 = 1000;

/* -------------------------------- raw input ------------------------------- */

/// Pointer state in logical 320x200 coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pointer {
    pub x: i32,
    pub y: i32,
    pub moved: bool,
    pub left_click: bool,
    pub right_click: bool,
    /// Wheel notches, positive is down.
    pub wheel: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub code: KeyCode,
    pub mods: ModifiersState,
}

impl KeyPress {
    #[inline(always)]
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: ModifiersState::empty(),
        }
    }

    #[inline(always)]
    pub const fn with(code: KeyCode, mods: ModifiersState) -> Self {
        Self { code, mods }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controller {
    /// Only consulted while the game is in joystick mode.
    pub active: bool,
    pub hat_x: i32,
    pub hat_y: i32,
    pub left_x: i32,
    pub left_y: i32,
    /// A or Y held.
    pub confirm_held: bool,
    /// B held.
    pub back_held: bool,
}

/// Everything the host observed since the previous poll.
#[derive(Clone, Debug, Default)]
pub struct RawInput {
    pub pointer: Pointer,
    pub keys: SmallVec<[KeyPress; 4]>,
    pub controller: Controller,
}

impl RawInput {
    pub fn clear(&mut self) {
        let at = (self.pointer.x, self.pointer.y);
        self.pointer = Pointer {
            x: at.0,
            y: at.1,
            ..Pointer::default()
        };
        self.keys.clear();
    }
}

/* ---------------------------- normalized input ---------------------------- */

/// A command that ends the menu immediately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloseCommand {
    pub requests: GameRequests,
    /// Ctrl chord the menu does not handle itself; the host replays it.
    pub pass_through: Option<KeyPress>,
}

/// Abstract menu controls for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuInput {
    pub x: i32,
    pub y: i32,
    pub back: bool,
    pub confirm: bool,
    pub scroll: i32,
    pub pointer: Pointer,
    pub have_pointer_input: bool,
    pub have_key_or_controller_input: bool,
    pub close: Option<CloseCommand>,
}

impl MenuInput {
    /// Forgets everything except the pointer position, so a resumed screen
    /// does not act on input that was meant for the previous one.
    pub fn clear(&mut self) {
        let (x, y) = (self.pointer.x, self.pointer.y);
        *self = Self::default();
        self.pointer.x = x;
        self.pointer.y = y;
    }

    #[inline(always)]
    pub fn clicked(&self) -> bool {
        self.pointer.left_click
    }

    #[inline(always)]
    pub fn has_input(&self) -> bool {
        self.have_pointer_input || self.have_key_or_controller_input
    }

    fn update_flags(&mut self) {
        self.have_key_or_controller_input =
            self.x != 0 || self.y != 0 || self.back || self.confirm;
        self.have_pointer_input = self.pointer.moved
            || self.pointer.left_click
            || self.pointer.right_click
            || self.scroll != 0;
    }
}

/* ------------------------------ state machines ---------------------------- */

/// Hold-to-repeat timer for a directional axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisRepeat {
    released: bool,
    deadline: Option<Instant>,
}

impl Default for AxisRepeat {
    fn default() -> Self {
        Self {
            released: true,
            deadline: None,
        }
    }
}

impl AxisRepeat {
    /// Returns the direction to act on this tick, if any. The first
    /// engagement fires at once; holding repeats after the longer delay and
    /// then at the short one.
    pub fn step(&mut self, dir: (i32, i32), now: Instant) -> Option<(i32, i32)> {
        if dir == (0, 0) {
            *self = Self::default();
            return None;
        }
        let delay = if self.released {
            self.released = false;
            AXIS_FIRST_REPEAT
        } else {
            AXIS_REPEAT
        };
        if self.deadline.is_none_or(|d| now > d) {
            self.deadline = Some(now + delay);
            Some(dir)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PadButton {
    Confirm,
    Back,
}

/// Release-tracked face buttons. A button already held when tracking starts
/// must be released before it counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonEdge {
    released: bool,
}

impl ButtonEdge {
    pub fn step(&mut self, confirm_held: bool, back_held: bool) -> Option<PadButton> {
        if !confirm_held && !back_held {
            self.released = true;
            return None;
        }
        if !self.released {
            return None;
        }
        self.released = false;
        Some(if confirm_held {
            PadButton::Confirm
        } else {
            PadButton::Back
        })
    }
}

/// Stick/hat direction, vertical first. Horizontal only counts while the
/// stick is vertically neutral.
pub fn stick_direction(c: &Controller) -> (i32, i32) {
    let (mut x, mut y) = (c.hat_x.signum(), c.hat_y.signum());
    if c.left_y < -AXIS_THRESHOLD_Y {
        y = -1;
    } else if c.left_y > AXIS_THRESHOLD_Y {
        y = 1;
    } else if c.left_x < -AXIS_THRESHOLD_X {
        x = -1;
    } else if c.left_x > AXIS_THRESHOLD_X {
        x = 1;
    }
    (x, y)
}

/* ------------------------------- normalizer ------------------------------- */

#[derive(Clone, Copy, Debug, Default)]
pub struct Normalizer {
    axis: AxisRepeat,
    buttons: ButtonEdge,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process(&mut self, raw: &RawInput, now: Instant) -> MenuInput {
        let mut out = MenuInput {
            pointer: raw.pointer,
            scroll: raw.pointer.wheel,
            back: raw.pointer.right_click,
            ..MenuInput::default()
        };

        let mut pad_key = None;
        if raw.controller.active {
            if let Some((x, y)) = self.axis.step(stick_direction(&raw.controller), now) {
                out.x = x;
                out.y = y;
                out.update_flags();
                return out;
            }
            pad_key = match self
                .buttons
                .step(raw.controller.confirm_held, raw.controller.back_held)
            {
                Some(PadButton::Confirm) => Some(KeyPress::plain(KeyCode::Enter)),
                Some(PadButton::Back) => Some(KeyPress::plain(KeyCode::Escape)),
                None => None,
            };
        }

        for key in raw.keys.iter().copied().chain(pad_key) {
            apply_key(key, &mut out);
            if out.close.is_some() {
                break;
            }
        }
        out.update_flags();
        out
    }
}

#[inline(always)]
const fn is_modifier(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::ControlLeft
            | KeyCode::ControlRight
            | KeyCode::ShiftLeft
            | KeyCode::ShiftRight
            | KeyCode::AltLeft
            | KeyCode::AltRight
            | KeyCode::SuperLeft
            | KeyCode::SuperRight
    )
}

fn apply_key(key: KeyPress, out: &mut MenuInput) {
    let KeyPress { code, mods } = key;
    // a modifier on its own only starts a chord
    if is_modifier(code) {
        return;
    }
    if mods.control_key() {
        let requests = match code {
            KeyCode::KeyA => GameRequests::RESTART_LEVEL,
            KeyCode::KeyR => GameRequests::RESTART_GAME,
            KeyCode::KeyQ => GameRequests::QUIT,
            _ => GameRequests::empty(),
        };
        out.close = Some(CloseCommand {
            requests,
            pass_through: requests.is_empty().then_some(key),
        });
        return;
    }
    if mods.alt_key() || mods.super_key() {
        return;
    }
    let close = |requests| {
        Some(CloseCommand {
            requests,
            pass_through: None,
        })
    };
    match code {
        KeyCode::F6 => out.close = close(GameRequests::QUICKSAVE),
        KeyCode::F9 => out.close = close(GameRequests::QUICKLOAD),
        _ if mods.shift_key() => {}
        KeyCode::ArrowUp => out.y = -STEP,
        KeyCode::ArrowDown => out.y = STEP,
        KeyCode::PageUp => out.y = -PAGE,
        KeyCode::PageDown => out.y = PAGE,
        KeyCode::Home => out.y = -JUMP,
        KeyCode::End => out.y = JUMP,
        KeyCode::ArrowLeft => out.x = -1,
        KeyCode::ArrowRight => out.x = 1,
        KeyCode::Enter | KeyCode::NumpadEnter | KeyCode::Space => out.confirm = true,
        KeyCode::Escape | KeyCode::Backspace => out.back = true,
        _ => {}
    }
}

/// Cursor visibility for this tick. In fullscreen the cursor follows the
/// device in use; windowed it always shows. `None` keeps the current state.
pub fn cursor_visibility(input: &MenuInput, fullscreen: bool) -> Option<bool> {
    if !fullscreen {
        Some(true)
    } else if input.have_pointer_input {
        Some(true)
    } else if input.have_key_or_controller_input {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &[KeyPress]) -> RawInput {
        RawInput {
            keys: list.iter().copied().collect(),
            ..RawInput::default()
        }
    }

    fn pad(left_x: i32, left_y: i32) -> RawInput {
        RawInput {
            controller: Controller {
                active: true,
                left_x,
                left_y,
                ..Controller::default()
            },
            ..RawInput::default()
        }
    }

    #[test]
    fn axis_repeat_waits_longer_before_the_first_repeat() {
        let t0 = Instant::now();
        let mut axis = AxisRepeat::default();
        let down = (0, 1);

        assert_eq!(axis.step(down, t0), Some(down), "first engagement fires");
        assert_eq!(axis.step(down, t0 + Duration::from_millis(250)), None);
        assert_eq!(axis.step(down, t0 + Duration::from_millis(301)), Some(down));
        assert_eq!(axis.step(down, t0 + Duration::from_millis(350)), None);
        assert_eq!(axis.step(down, t0 + Duration::from_millis(402)), Some(down));
    }

    #[test]
    fn axis_neutral_resets_the_timer() {
        let t0 = Instant::now();
        let mut axis = AxisRepeat::default();
        assert!(axis.step((1, 0), t0).is_some());
        assert!(axis.step((0, 0), t0 + Duration::from_millis(10)).is_none());
        assert_eq!(
            axis.step((1, 0), t0 + Duration::from_millis(20)),
            Some((1, 0)),
            "re-engaging after neutral fires immediately"
        );
    }

    #[test]
    fn buttons_fire_once_per_press() {
        let mut edge = ButtonEdge::default();
        assert_eq!(edge.step(true, false), None, "held before tracking started");
        assert_eq!(edge.step(false, false), None);
        assert_eq!(edge.step(true, false), Some(PadButton::Confirm));
        assert_eq!(edge.step(true, false), None);
        assert_eq!(edge.step(false, false), None);
        assert_eq!(edge.step(false, true), Some(PadButton::Back));
    }

    #[test]
    fn vertical_axis_is_tested_before_horizontal() {
        let c = Controller {
            active: true,
            left_x: 30000,
            left_y: 15000,
            ..Controller::default()
        };
        assert_eq!(stick_direction(&c), (0, 1));

        let c = Controller {
            left_x: 20000,
            left_y: 0,
            ..c
        };
        assert_eq!(stick_direction(&c), (0, 0), "below the horizontal threshold");
    }

    #[test]
    fn fired_axis_cancels_other_input_that_tick() {
        let mut n = Normalizer::new();
        let mut raw = pad(0, -20000);
        raw.keys.push(KeyPress::plain(KeyCode::Enter));
        let out = n.process(&raw, Instant::now());
        assert_eq!(out.y, -1);
        assert!(!out.confirm);
        assert!(out.have_key_or_controller_input);
    }

    #[test]
    fn key_map_produces_magnitudes() {
        let mut n = Normalizer::new();
        let now = Instant::now();
        let cases = [
            (KeyCode::ArrowUp, -1),
            (KeyCode::ArrowDown, 1),
            (KeyCode::PageUp, -9),
            (KeyCode::PageDown, 9),
            (KeyCode::Home, -1000),
            (KeyCode::End, 1000),
        ];
        for (code, y) in cases {
            let out = n.process(&keys(&[KeyPress::plain(code)]), now);
            assert_eq!(out.y, y, "{code:?}");
        }
        let out = n.process(&keys(&[KeyPress::plain(KeyCode::ArrowLeft)]), now);
        assert_eq!(out.x, -1);
        let out = n.process(&keys(&[KeyPress::plain(KeyCode::Space)]), now);
        assert!(out.confirm);
        let out = n.process(&keys(&[KeyPress::plain(KeyCode::Backspace)]), now);
        assert!(out.back);
    }

    #[test]
    fn ctrl_chords_close_the_menu() {
        let mut n = Normalizer::new();
        let now = Instant::now();
        let ctrl = ModifiersState::CONTROL;

        let out = n.process(&keys(&[KeyPress::with(KeyCode::KeyA, ctrl)]), now);
        let close = out.close.expect("ctrl+a closes");
        assert_eq!(close.requests, GameRequests::RESTART_LEVEL);
        assert_eq!(close.pass_through, None);

        let other = KeyPress::with(KeyCode::KeyG, ctrl);
        let out = n.process(&keys(&[other]), now);
        let close = out.close.expect("any ctrl chord closes");
        assert!(close.requests.is_empty());
        assert_eq!(close.pass_through, Some(other));
    }

    #[test]
    fn bare_modifier_presses_do_not_close_the_menu() {
        let mut n = Normalizer::new();
        let now = Instant::now();
        for (code, mods) in [
            (KeyCode::ControlLeft, ModifiersState::CONTROL),
            (KeyCode::ControlRight, ModifiersState::CONTROL),
            (KeyCode::ShiftLeft, ModifiersState::SHIFT),
            (KeyCode::AltRight, ModifiersState::ALT),
            (KeyCode::SuperLeft, ModifiersState::SUPER),
        ] {
            let out = n.process(&keys(&[KeyPress::with(code, mods)]), now);
            assert_eq!(out.close, None, "{code:?}");
            assert!(!out.has_input(), "{code:?}");
        }

        let ctrl = ModifiersState::CONTROL;
        let out = n.process(
            &keys(&[KeyPress::with(KeyCode::ControlLeft, ctrl), KeyPress::with(KeyCode::KeyR, ctrl)]),
            now,
        );
        let close = out.close.expect("ctrl+r after the ctrl press closes");
        assert_eq!(close.requests, GameRequests::RESTART_GAME);
        assert_eq!(close.pass_through, None);
    }

    #[test]
    fn function_keys_close_with_or_without_shift() {
        let mut n = Normalizer::new();
        let now = Instant::now();
        let out = n.process(
            &keys(&[KeyPress::with(KeyCode::F6, ModifiersState::SHIFT)]),
            now,
        );
        assert_eq!(out.close.map(|c| c.requests), Some(GameRequests::QUICKSAVE));
        let out = n.process(&keys(&[KeyPress::plain(KeyCode::F9)]), now);
        assert_eq!(out.close.map(|c| c.requests), Some(GameRequests::QUICKLOAD));

        let out = n.process(
            &keys(&[KeyPress::with(KeyCode::ArrowDown, ModifiersState::SHIFT)]),
            now,
        );
        assert_eq!(out.y, 0, "shifted navigation keys are not menu input");
    }

    #[test]
    fn right_click_is_back_and_counts_as_pointer_input() {
        let mut n = Normalizer::new();
        let raw = RawInput {
            pointer: Pointer {
                right_click: true,
                ..Pointer::default()
            },
            ..RawInput::default()
        };
        let out = n.process(&raw, Instant::now());
        assert!(out.back);
        assert!(out.have_pointer_input);
    }

    #[test]
    fn face_button_confirms_once() {
        let mut n = Normalizer::new();
        let now = Instant::now();
        let mut raw = pad(0, 0);
        n.process(&raw, now);

        raw.controller.confirm_held = true;
        assert!(n.process(&raw, now).confirm);
        assert!(!n.process(&raw, now).confirm);
    }

    #[test]
    fn clear_keeps_only_the_pointer_position() {
        let mut input = MenuInput {
            x: 1,
            confirm: true,
            pointer: Pointer {
                x: 40,
                y: 50,
                left_click: true,
                ..Pointer::default()
            },
            ..MenuInput::default()
        };
        input.clear();
        assert!(!input.has_input());
        assert!(!input.clicked());
        assert_eq!((input.pointer.x, input.pointer.y), (40, 50));
    }

    #[test]
    fn cursor_follows_the_device_only_in_fullscreen() {
        let pointer = MenuInput {
            have_pointer_input: true,
            ..MenuInput::default()
        };
        let keys = MenuInput {
            have_key_or_controller_input: true,
            ..MenuInput::default()
        };
        assert_eq!(cursor_visibility(&pointer, true), Some(true));
        assert_eq!(cursor_visibility(&keys, true), Some(false));
        assert_eq!(cursor_visibility(&MenuInput::default(), true), None);
        assert_eq!(cursor_visibility(&keys, false), Some(true));
    }
}
