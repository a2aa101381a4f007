//! Modal dialogs: the two confirmation boxes and the level picker.
//!
//! Each dialog owns the loop while it is open and hands control back to the
//! menu once it resolves.

use std::time::Duration;

use log::{debug, info};

use crate::Result;
use crate::core::input::{CloseCommand, MenuInput, Normalizer, RawInput, cursor_visibility};
use crate::core::{Host, Sound};
use crate::game::GameRequests;
use crate::game::options::{LEVEL_COUNT, Options};
use crate::menu::nav::{Dialog, State};
use crate::menu::{Catalog, OptionChange, draw, layout};

const IDLE: Duration = Duration::from_millis(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Ok,
    Cancel,
}

/// How a dialog loop ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Resolved,
    /// A close command arrived while the dialog was open.
    Interrupted(CloseCommand),
}

pub const fn text(dialog: Dialog) -> &'static str {
    match dialog {
        Dialog::RestoreDefaults => "Restore all settings to their default values?",
        Dialog::ConfirmQuit => "Quit the game?",
        Dialog::SelectLevel => "Customize level...",
    }
}

/* ------------------------------ confirmation ------------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Confirmation {
    pub highlighted: Button,
}

impl Default for Confirmation {
    fn default() -> Self {
        Self {
            highlighted: Button::Ok,
        }
    }
}

impl Confirmation {
    /// Applies one tick of input. Returns the chosen button once resolved.
    pub fn step(&mut self, input: &MenuInput) -> Option<Button> {
        if input.back {
            return Some(Button::Cancel);
        }
        if input.have_pointer_input {
            let p = input.pointer;
            if layout::OK_HIGHLIGHT.contains(p.x, p.y) {
                self.highlighted = Button::Ok;
            } else if layout::CANCEL_HIGHLIGHT.contains(p.x, p.y) {
                self.highlighted = Button::Cancel;
            }
        }
        if input.x < 0 {
            self.highlighted = Button::Ok;
        } else if input.x > 0 {
            self.highlighted = Button::Cancel;
        } else if input.clicked() || input.confirm {
            return Some(self.highlighted);
        }
        None
    }
}

/* ------------------------------ level picker ------------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelPicker {
    pub level: usize,
}

impl LevelPicker {
    pub fn new(level: usize) -> Self {
        Self {
            level: level.min(LEVEL_COUNT - 1),
        }
    }

    /// `Some(true)` picks the shown level, `Some(false)` cancels.
    pub fn step(&mut self, input: &MenuInput) -> Option<bool> {
        if input.back {
            return Some(false);
        }
        if input.x < 0 {
            self.level = self.level.saturating_sub(1);
        } else if input.x > 0 {
            self.level = (self.level + 1).min(LEVEL_COUNT - 1);
        } else if input.clicked() || input.confirm {
            return Some(true);
        }
        None
    }
}

/* ---------------------------------- apply --------------------------------- */

/// Carries out the chosen button of a confirmation dialog.
pub fn resolve_confirmation<H: Host>(
    host: &mut H,
    state: &mut State,
    options: &mut Options,
    dialog: Dialog,
    button: Button,
) {
    if button == Button::Cancel {
        host.play_sound(Sound::Back);
        return;
    }
    match dialog {
        Dialog::RestoreDefaults => {
            info!("Restoring default settings.");
            host.play_sound(Sound::Toggle);
            state.changed = true;
            options.restore_defaults();
            host.apply(OptionChange::Defaults, options);
        }
        Dialog::ConfirmQuit => state.close(GameRequests::QUIT),
        Dialog::SelectLevel => {}
    }
}

/* ---------------------------------- loop ---------------------------------- */

#[derive(Clone, Copy, PartialEq, Eq)]
enum View {
    Confirmation(Confirmation),
    LevelPicker(LevelPicker),
}

/// Runs the pending dialog of `state` until it resolves.
pub fn run<H: Host>(
    host: &mut H,
    normalizer: &mut Normalizer,
    raw: &mut RawInput,
    state: &mut State,
    catalog: &Catalog,
    options: &mut Options,
) -> Result<Outcome> {
    let Some(dialog) = state.dialog.take() else {
        return Ok(Outcome::Resolved);
    };
    debug!("dialog {dialog:?} opened");

    let mut view = match dialog {
        Dialog::SelectLevel => View::LevelPicker(LevelPicker::new(state.level)),
        _ => View::Confirmation(Confirmation::default()),
    };
    let mut drawn = None;

    loop {
        raw.clear();
        host.poll(raw);
        let input = normalizer.process(raw, host.now());
        if let Some(visible) = cursor_visibility(&input, host.is_fullscreen()) {
            host.set_cursor_visible(visible);
        }
        if let Some(command) = input.close {
            debug!("dialog {dialog:?} interrupted");
            return Ok(Outcome::Interrupted(command));
        }

        match &mut view {
            View::Confirmation(c) => {
                if let Some(button) = c.step(&input) {
                    resolve_confirmation(host, state, options, dialog, button);
                    break;
                }
            }
            View::LevelPicker(p) => match p.step(&input) {
                Some(true) => {
                    host.play_sound(Sound::Activate);
                    state.customize_level(catalog, p.level);
                    break;
                }
                Some(false) => {
                    host.play_sound(Sound::Back);
                    break;
                }
                None => {}
            },
        }

        if drawn != Some(view) {
            match view {
                View::Confirmation(c) => draw::confirmation(host, text(dialog), c.highlighted)?,
                View::LevelPicker(p) => draw::level_picker(host, text(dialog), p.level)?,
            }
            host.present()?;
            drawn = Some(view);
        }
        host.idle(IDLE);
    }
    raw.clear();
    Ok(Outcome::Resolved)
}

#[cfg(test)]
mod tests {
    use super::{Button, Confirmation, LevelPicker};
    use crate::core::input::{MenuInput, Pointer};
    use crate::menu::layout;

    fn x(x: i32) -> MenuInput {
        MenuInput {
            x,
            have_key_or_controller_input: true,
            ..MenuInput::default()
        }
    }

    fn confirm() -> MenuInput {
        MenuInput {
            confirm: true,
            have_key_or_controller_input: true,
            ..MenuInput::default()
        }
    }

    #[test]
    fn confirmation_defaults_to_ok() {
        let mut c = Confirmation::default();
        assert_eq!(c.step(&confirm()), Some(Button::Ok));
    }

    #[test]
    fn horizontal_input_moves_between_buttons() {
        let mut c = Confirmation::default();
        assert_eq!(c.step(&x(1)), None);
        assert_eq!(c.highlighted, Button::Cancel);
        assert_eq!(c.step(&x(-1)), None);
        assert_eq!(c.highlighted, Button::Ok);
        c.step(&x(1));
        assert_eq!(c.step(&confirm()), Some(Button::Cancel));
    }

    #[test]
    fn back_always_cancels() {
        let mut c = Confirmation::default();
        let back = MenuInput {
            back: true,
            ..MenuInput::default()
        };
        assert_eq!(c.step(&back), Some(Button::Cancel));
    }

    #[test]
    fn clicking_a_button_picks_it() {
        let mut c = Confirmation::default();
        let r = layout::CANCEL_HIGHLIGHT;
        let click = MenuInput {
            pointer: Pointer {
                x: r.left + 1,
                y: r.top + 1,
                left_click: true,
                ..Pointer::default()
            },
            have_pointer_input: true,
            ..MenuInput::default()
        };
        assert_eq!(c.step(&click), Some(Button::Cancel));
    }

    #[test]
    fn level_picker_clamps_to_the_level_range() {
        let mut p = LevelPicker::new(1);
        p.step(&x(-1));
        p.step(&x(-1));
        assert_eq!(p.level, 0);
        for _ in 0..20 {
            p.step(&x(1));
        }
        assert_eq!(p.level, 15);
        assert_eq!(p.step(&confirm()), Some(true));
        assert_eq!(LevelPicker::new(99).level, 15);
    }
}
