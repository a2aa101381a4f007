pub mod crc32;
pub mod gfx;
pub mod input;

use std::time::{Duration, Instant};

use crate::game::options::Options;
use crate::menu::OptionChange;
use gfx::Renderer;
use input::RawInput;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sound {
    /// An item or button was activated.
    Activate,
    /// Going back or cancelling.
    Back,
    /// A value changed.
    Toggle,
    /// Focus moved.
    Move,
}

/// Everything the menu needs from the running game: drawing, input, timing,
/// sound, and the side effects of option changes.
pub trait Host: Renderer {
    /// Fills `raw` with what happened since the previous poll.
    fn poll(&mut self, raw: &mut RawInput);

    fn now(&self) -> Instant;

    /// Yields while there is nothing to redraw.
    fn idle(&mut self, duration: Duration);

    fn play_sound(&mut self, sound: Sound);

    fn set_cursor_visible(&mut self, visible: bool);

    fn is_fullscreen(&self) -> bool;

    /// Applies the game-side effect of an option that was just changed.
    fn apply(&mut self, change: OptionChange, options: &Options);
}
