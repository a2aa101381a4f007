pub mod catalog;
pub mod dialog;
pub mod draw;
pub mod items;
pub mod layout;
pub mod nav;
pub mod setting;
#[cfg(test)]
pub(crate) mod testing;

use std::time::Duration;

use log::{debug, info, warn};

use crate::Result;
use crate::core::Host;
use crate::core::input::{KeyPress, Normalizer, RawInput, cursor_visibility};
use crate::game::GameRequests;
use crate::game::options::Options;
use crate::game::persist::SnapshotStore;
use catalog::SettingId;
use dialog::Outcome;
use items::ItemList;
use nav::{Effect, Effects, State};
use setting::Registry;

const IDLE: Duration = Duration::from_millis(1);
/// Frames drawn after the last input before the loop starts idling.
const REDRAW_FRAMES: u8 = 2;

/// An option change whose game-side effect the host must apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionChange {
    Setting(SettingId),
    /// Every option was reset to its default.
    Defaults,
}

/// The static content of the menu.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub registry: Registry,
    pub pause: ItemList,
    pub categories: ItemList,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            registry: catalog::registry(),
            pause: items::pause_items(),
            categories: items::settings_items(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// What the game must do after the menu closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuExit {
    pub requests: GameRequests,
    /// Key that closed the menu and still needs the game's handling.
    pub pass_through: Option<KeyPress>,
}

/// A menu session. Navigation state survives between openings so the
/// player returns to the area they last edited.
pub struct Menu {
    catalog: Catalog,
    state: State,
    normalizer: Normalizer,
    raw: RawInput,
    store: Option<SnapshotStore>,
}

impl Menu {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: State::default(),
            normalizer: Normalizer::new(),
            raw: RawInput::default(),
            store: None,
        }
    }

    /// Saves edited options to `store` whenever the menu closes.
    #[must_use]
    pub fn with_store(mut self, store: SnapshotStore) -> Self {
        self.store = Some(store);
        self
    }

    #[inline(always)]
    pub fn state(&self) -> &State {
        &self.state
    }

    #[inline(always)]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Shows the menu until it closes. Only a rendering failure is an error.
    pub fn run<H: Host>(&mut self, host: &mut H, options: &mut Options) -> Result<MenuExit> {
        self.state.open();
        // a button still held from gameplay must be released first
        self.normalizer = Normalizer::new();
        let mut redraw = REDRAW_FRAMES;

        loop {
            if self.state.dialog.is_some() {
                let outcome = dialog::run(
                    host,
                    &mut self.normalizer,
                    &mut self.raw,
                    &mut self.state,
                    &self.catalog,
                    options,
                )?;
                if let Outcome::Interrupted(command) = outcome {
                    self.state.close(command.requests);
                    self.state.pass_through = command.pass_through;
                }
                if self.state.closing {
                    break;
                }
                redraw = REDRAW_FRAMES;
            }

            self.raw.clear();
            host.poll(&mut self.raw);
            let mut input = self.normalizer.process(&self.raw, host.now());
            if let Some(visible) = cursor_visibility(&input, host.is_fullscreen()) {
                host.set_cursor_visible(visible);
            }
            if let Some(command) = input.close {
                self.state.close(command.requests);
                self.state.pass_through = command.pass_through;
                break;
            }

            if input.back {
                let fx = self.state.back(&self.catalog);
                perform(host, options, &fx);
                if self.state.closing {
                    break;
                }
            }
            if input.scroll != 0 {
                self.state.scroll_by(&self.catalog, input.scroll);
            }

            if input.has_input() {
                redraw = REDRAW_FRAMES;
            } else if redraw == 0 {
                host.idle(IDLE);
                continue;
            }

            let fx = {
                let measure = |text: &str| host.text_width(text);
                self.state.update(&self.catalog, options, &mut input, &measure)
            };
            perform(host, options, &fx);
            if self.state.closing {
                break;
            }

            draw::menu(host, &self.state, &self.catalog, options)?;
            host.present()?;
            redraw = redraw.saturating_sub(1);
        }

        self.finish(host, options);
        let exit = MenuExit {
            requests: self.state.requests,
            pass_through: self.state.pass_through,
        };
        debug!("Menu closed: {exit:?}");
        Ok(exit)
    }

    fn finish<H: Host>(&mut self, host: &mut H, options: &Options) {
        if self.state.changed {
            if let Some(store) = &self.store {
                match store.save(options) {
                    Ok(()) => info!("Saved changed settings."),
                    Err(e) => warn!("Failed to save settings to '{}': {e}", store.cfg_path.display()),
                }
            }
            self.state.changed = false;
        }
        host.set_cursor_visible(!host.is_fullscreen());
    }
}

fn perform<H: Host>(host: &mut H, options: &Options, fx: &Effects) {
    for effect in fx {
        match *effect {
            Effect::Sound(sound) => host.play_sound(sound),
            Effect::Apply(change) => host.apply(change, options),
        }
    }
}
