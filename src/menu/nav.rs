//! Navigation state of the menu and the per-tick update that applies
//! normalized input to it.

use log::debug;
use smallvec::SmallVec;

use crate::core::Sound;
use crate::core::gfx::Rect;
use crate::core::input::{KeyPress, MenuInput};
use crate::game::GameRequests;
use crate::game::options::{LEVEL_COUNT, Options};
use crate::menu::catalog::{DEFAULT_SETTING, SettingId};
use crate::menu::items::{ItemList, MenuItemId};
use crate::menu::layout::{self, SettingRow, VISIBLE_ROWS};
use crate::menu::setting::{Section, Setting, Style};
use crate::menu::{Catalog, OptionChange};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Pause,
    Settings,
}

/// Which column of the settings screen owns keyboard focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pane {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialog {
    RestoreDefaults,
    ConfirmQuit,
    SelectLevel,
}

/// Side effect requested by an update, carried out by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Sound(Sound),
    Apply(OptionChange),
}

pub type Effects = SmallVec<[Effect; 4]>;

#[derive(Clone, Debug)]
pub struct State {
    pub screen: Screen,
    pub pane: Pane,
    /// Item under the keyboard or pointer in the visible column.
    pub hovered: Option<MenuItemId>,
    /// Category drawn highlighted in the settings column.
    pub highlighted: Option<Section>,
    pub active_area: Option<Section>,
    pub focused: SettingId,
    /// First visible row of the active area.
    pub scroll: usize,
    pub dialog: Option<Dialog>,
    /// Level edited by the level customization area.
    pub level: usize,
    /// Options were edited since the last save.
    pub changed: bool,
    pub requests: GameRequests,
    pub pass_through: Option<KeyPress>,
    pub closing: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            screen: Screen::Pause,
            pane: Pane::Left,
            hovered: Some(MenuItemId::Resume),
            highlighted: None,
            active_area: None,
            focused: DEFAULT_SETTING,
            scroll: 0,
            dialog: None,
            level: 1,
            changed: false,
            requests: GameRequests::empty(),
            pass_through: None,
            closing: false,
        }
    }
}

impl State {
    /// Prepares the state for a newly opened menu. The active area, focused
    /// setting and edited level survive between openings.
    pub fn open(&mut self) {
        self.reset_pause();
        self.dialog = None;
        self.requests = GameRequests::empty();
        self.pass_through = None;
        self.closing = false;
    }

    pub fn reset_pause(&mut self) {
        self.screen = Screen::Pause;
        self.pane = Pane::Left;
        self.hovered = Some(MenuItemId::Resume);
    }

    pub fn close(&mut self, requests: GameRequests) {
        self.requests |= requests;
        self.closing = true;
    }

    /// Edited level as a table index.
    #[inline(always)]
    pub fn level_index(&self) -> usize {
        self.level.min(LEVEL_COUNT - 1)
    }

    pub fn enter_area(&mut self, catalog: &Catalog, section: Section, from_click: bool) {
        let Some(area) = catalog.registry.area(section) else {
            return;
        };
        if self.active_area != Some(section)
            && let Some(first) = area.first()
        {
            self.focused = first;
        }
        self.active_area = Some(section);
        self.highlighted = Some(section);
        if !from_click {
            self.hovered = None;
        }
        self.pane = Pane::Right;
        self.scroll = 0;
    }

    pub fn leave_area(&mut self, catalog: &Catalog) {
        match self.active_area {
            Some(Section::Level) => self.enter_area(catalog, Section::Mods, false),
            active => {
                self.pane = Pane::Left;
                self.hovered = active.map(MenuItemId::for_section);
                self.active_area = None;
                self.highlighted = None;
            }
        }
    }

    /// Opens the level customization area for `level`, with MODS shown as
    /// the highlighted category.
    pub fn customize_level(&mut self, catalog: &Catalog, level: usize) {
        self.level = level.min(LEVEL_COUNT - 1);
        self.enter_area(catalog, Section::Level, false);
        self.highlighted = Some(Section::Mods);
    }

    /// Back input: leave the area, then the settings screen, then the menu.
    pub fn back(&mut self, catalog: &Catalog) -> Effects {
        let mut fx = Effects::new();
        fx.push(Effect::Sound(Sound::Back));
        match (self.screen, self.pane) {
            (Screen::Settings, Pane::Right) => self.leave_area(catalog),
            (Screen::Settings, Pane::Left) => self.reset_pause(),
            (Screen::Pause, _) => self.close(GameRequests::empty()),
        }
        fx
    }

    /// Wheel scrolling, one row per call, only while the area has focus.
    pub fn scroll_by(&mut self, catalog: &Catalog, dy: i32) {
        if self.screen != Screen::Settings || self.pane != Pane::Right {
            return;
        }
        let Some(area) = self.active_area.and_then(|s| catalog.registry.area(s)) else {
            return;
        };
        let max_scroll = area.max_scroll(VISIBLE_ROWS);
        if dy < 0 && self.scroll > 0 {
            self.scroll -= 1;
        } else if dy > 0 && self.scroll < max_scroll {
            self.scroll += 1;
        }
    }

    /// Moves focus within the active area by `dy` rows. Focus clamps at both
    /// ends; paging also shifts the scroll offset so the focused row keeps
    /// its place on screen where possible.
    pub fn move_focus(&mut self, catalog: &Catalog, dy: i32) -> bool {
        let Some(area) = self.active_area.and_then(|s| catalog.registry.area(s)) else {
            return false;
        };
        if dy == 0 || area.is_empty() {
            return false;
        }
        let last = area.len() as i64 - 1;
        let max_scroll = area.max_scroll(VISIBLE_ROWS) as i64;
        let dy = i64::from(dy);
        let mut index = area.position(self.focused).unwrap_or(0) as i64;
        let mut scroll = self.scroll as i64;

        index = (index + dy).clamp(0, last);
        if dy.abs() > 1 {
            scroll += dy;
        }
        let window = VISIBLE_ROWS as i64 - 1;
        if index - window > scroll {
            scroll = index - window;
        }
        if index < scroll {
            scroll = index;
        }
        self.scroll = scroll.clamp(0, max_scroll) as usize;

        let focused = area.settings[index as usize].id;
        let moved = focused != self.focused;
        self.focused = focused;
        moved
    }

    /* ------------------------------- update ------------------------------- */

    /// Applies one tick of input. `measure` gives the pixel width of a text
    /// in the menu font.
    pub fn update(
        &mut self,
        catalog: &Catalog,
        options: &mut Options,
        input: &mut MenuInput,
        measure: &dyn Fn(&str) -> i32,
    ) -> Effects {
        let mut fx = Effects::new();
        match self.screen {
            Screen::Pause => {
                if !input.have_pointer_input {
                    self.step_hover(&catalog.pause, options, input.y, &mut fx);
                }
                self.update_column(catalog, &catalog.pause, layout::PAUSE_COLUMN, options, input, &mut fx);
            }
            Screen::Settings => {
                if !input.have_pointer_input {
                    match self.pane {
                        Pane::Left => self.step_hover(&catalog.categories, options, input.y, &mut fx),
                        Pane::Right => {
                            if self.move_focus(catalog, input.y) {
                                fx.push(Effect::Sound(Sound::Move));
                            }
                        }
                    }
                }
                self.update_column(
                    catalog,
                    &catalog.categories,
                    layout::SETTINGS_COLUMN,
                    options,
                    input,
                    &mut fx,
                );
                self.update_area(catalog, options, input, measure, &mut fx);
            }
        }
        fx
    }

    fn step_hover(&mut self, list: &ItemList, options: &Options, dy: i32, fx: &mut Effects) {
        let Some(hovered) = self.hovered else {
            return;
        };
        let target = match dy {
            1 => list.next(hovered, options),
            -1 => list.previous(hovered, options),
            _ => return,
        };
        if target != hovered {
            self.hovered = Some(target);
            fx.push(Effect::Sound(Sound::Move));
        }
    }

    fn update_column(
        &mut self,
        catalog: &Catalog,
        list: &ItemList,
        column: Rect,
        options: &Options,
        input: &mut MenuInput,
        fx: &mut Effects,
    ) {
        let p = input.pointer;
        let keyboard_owns_column = self.screen == Screen::Pause || self.pane == Pane::Left;
        for row in layout::item_rows(list, options, column) {
            let over = row.selection.contains(p.x, p.y);
            if input.have_pointer_input && over {
                self.hovered = Some(row.id);
            }
            if self.hovered != Some(row.id) {
                continue;
            }
            let activate = if input.clicked() {
                over
            } else {
                input.confirm && keyboard_owns_column
            };
            if activate {
                self.activate(catalog, row.id, input.clicked(), fx);
                input.clear();
                return;
            }
        }
    }

    /// Runs the action of a pause or category item.
    pub fn activate(&mut self, catalog: &Catalog, id: MenuItemId, from_click: bool, fx: &mut Effects) {
        debug!("menu item {id:?} activated");
        fx.push(Effect::Sound(Sound::Activate));
        match id {
            MenuItemId::Resume => self.close(GameRequests::empty()),
            MenuItemId::SaveGame => self.close(GameRequests::QUICKSAVE),
            MenuItemId::LoadGame => self.close(GameRequests::QUICKLOAD),
            MenuItemId::RestartLevel => self.close(GameRequests::RESTART_LEVEL),
            MenuItemId::RestartGame => self.close(GameRequests::RESTART_GAME),
            MenuItemId::Settings => {
                self.screen = Screen::Settings;
                self.hovered = Some(MenuItemId::General);
                self.highlighted = Some(Section::General);
                self.active_area = None;
                self.pane = Pane::Left;
            }
            MenuItemId::QuitGame => self.dialog = Some(Dialog::ConfirmQuit),
            MenuItemId::LevelCustomization => self.dialog = Some(Dialog::SelectLevel),
            MenuItemId::General | MenuItemId::Gameplay | MenuItemId::Visuals | MenuItemId::Mods => {
                if let Some(section) = id.section() {
                    self.enter_area(catalog, section, from_click);
                }
            }
            MenuItemId::Back => self.reset_pause(),
        }
    }

    fn update_area(
        &mut self,
        catalog: &Catalog,
        options: &mut Options,
        input: &mut MenuInput,
        measure: &dyn Fn(&str) -> i32,
        fx: &mut Effects,
    ) {
        let Some(section) = self.active_area else {
            return;
        };
        let Some(area) = catalog.registry.area(section) else {
            return;
        };
        let p = input.pointer;
        let rows = layout::setting_rows(area, self.scroll, section == Section::Level);
        for row in &rows {
            let setting = &area.settings[row.index];
            if input.clicked() && row.highlight.contains(p.x, p.y) {
                self.focused = setting.id;
                self.pane = Pane::Right;
            }
        }
        let Some(row) = rows
            .iter()
            .find(|r| area.settings[r.index].id == self.focused)
        else {
            return;
        };
        let setting = &area.settings[row.index];
        if !setting.is_enabled(options) {
            return;
        }
        // keyboard input only reaches the area while it has focus
        let keys = self.pane == Pane::Right;
        match setting.style {
            Style::Toggle => self.input_toggle(setting, row, options, input, keys, fx),
            Style::Number(_) => self.input_number(setting, row, options, input, keys, measure),
            Style::TextOnly => {
                let clicked = input.clicked() && row.highlight.contains(p.x, p.y);
                if clicked || (keys && input.confirm) {
                    self.activate_setting(setting.id, fx);
                }
            }
        }
    }

    fn input_toggle(
        &mut self,
        setting: &Setting,
        row: &SettingRow,
        options: &mut Options,
        input: &MenuInput,
        keys: bool,
        fx: &mut Effects,
    ) {
        let level = self.level_index();
        let on = setting.link.is_none() || setting.value_of(options, level) != 0;
        let p = input.pointer;
        let target = if input.clicked() {
            if !on && layout::on_hitbox(row.highlight).contains(p.x, p.y) {
                Some(true)
            } else if on && layout::off_hitbox(row.highlight).contains(p.x, p.y) {
                Some(false)
            } else {
                None
            }
        } else if keys && on && input.x < 0 {
            Some(false)
        } else if keys && !on && input.x > 0 {
            Some(true)
        } else {
            None
        };
        if let Some(state) = target {
            self.set_toggle(setting, options, state, fx);
        }
    }

    /// Forces a toggle to `state`, marking the options as changed.
    pub fn set_toggle(&mut self, setting: &Setting, options: &mut Options, state: bool, fx: &mut Effects) {
        fx.push(Effect::Sound(Sound::Toggle));
        self.changed = true;
        setting.set_value(options, self.level_index(), i32::from(state));
        fx.push(Effect::Apply(OptionChange::Setting(setting.id)));
    }

    fn input_number(
        &mut self,
        setting: &Setting,
        row: &SettingRow,
        options: &mut Options,
        input: &MenuInput,
        keys: bool,
        measure: &dyn Fn(&str) -> i32,
    ) {
        let level = self.level_index();
        let value = setting.value_of(options, level);
        let p = input.pointer;
        let applied = if input.clicked() {
            let width = measure(&setting.format_value(value));
            let (left, right) = layout::number_hitboxes(row, width);
            if right.contains(p.x, p.y) {
                setting.increment(options, level, value)
            } else if left.contains(p.x, p.y) {
                setting.decrement(options, level, value)
            } else {
                false
            }
        } else if keys && input.x > 0 {
            setting.increment(options, level, value)
        } else if keys && input.x < 0 {
            setting.decrement(options, level, value)
        } else {
            false
        };
        self.changed |= applied;
    }

    fn activate_setting(&mut self, id: SettingId, fx: &mut Effects) {
        let dialog = match id {
            SettingId::ResetAllSettings => Dialog::RestoreDefaults,
            SettingId::LevelSettings | SettingId::LevelSettingsAnother => Dialog::SelectLevel,
            _ => return,
        };
        fx.push(Effect::Sound(Sound::Activate));
        self.dialog = Some(dialog);
    }
}
