//! Immediate-mode drawing of the menu from its current state.

use crate::Result;
use crate::core::gfx::{Align, Arrow, Color, Rect, Renderer};
use crate::game::options::Options;
use crate::menu::Catalog;
use crate::menu::dialog::Button;
use crate::menu::items::{ItemList, MenuItemId};
use crate::menu::layout::{self, SettingRow};
use crate::menu::nav::{Screen, State};
use crate::menu::setting::{Area, Section, Setting, Style};

const PAUSE_ALPHA: u8 = 120;
const SETTINGS_ALPHA: u8 = 220;
const FOCUS_FILL: Color = Color::Rgb(55, 55, 55);

/// Draws the whole menu for the current state. Does not present.
pub fn menu<R: Renderer + ?Sized>(r: &mut R, state: &State, catalog: &Catalog, options: &Options) -> Result<()> {
    match state.screen {
        Screen::Pause => pause_screen(r, state, catalog, options),
        Screen::Settings => settings_screen(r, state, catalog, options),
    }
}

fn pause_screen<R: Renderer + ?Sized>(r: &mut R, state: &State, catalog: &Catalog, options: &Options) -> Result<()> {
    r.fill_rect(layout::SCREEN, Color::Black, PAUSE_ALPHA)?;
    // keep the "GAME PAUSED" line of the game visible
    r.fill_rect(layout::BOTTOM_TEXT, Color::Black, 0)?;
    item_column(r, &catalog.pause, options, layout::PAUSE_COLUMN, state.hovered, |_| {
        Color::BrightWhite
    })
}

fn settings_screen<R: Renderer + ?Sized>(
    r: &mut R,
    state: &State,
    catalog: &Catalog,
    options: &Options,
) -> Result<()> {
    let area = state.active_area.and_then(|s| catalog.registry.area(s));
    let alpha = if area.is_some() { 255 } else { SETTINGS_ALPHA };
    r.fill_rect(layout::SCREEN, Color::Black, alpha)?;

    let highlighted = state.highlighted;
    item_column(r, &catalog.categories, options, layout::SETTINGS_COLUMN, state.hovered, |id| {
        if id.section().is_some() && id.section() == highlighted {
            Color::BrightWhite
        } else {
            Color::LightGray
        }
    })?;

    match area {
        Some(area) => settings_area(r, area, state, options),
        None => Ok(()),
    }
}

fn item_column<R: Renderer + ?Sized>(
    r: &mut R,
    list: &ItemList,
    options: &Options,
    column: Rect,
    hovered: Option<MenuItemId>,
    inactive: impl Fn(MenuItemId) -> Color,
) -> Result<()> {
    for row in layout::item_rows(list, options, column) {
        let Some(item) = list.get(row.id) else {
            continue;
        };
        let color = if hovered == Some(row.id) {
            r.outline_rect(row.selection, Color::LightGray)?;
            Color::BrightWhite
        } else {
            inactive(row.id)
        };
        r.draw_text(row.text, item.label, Align::Center, color)?;
    }
    Ok(())
}

fn settings_area<R: Renderer + ?Sized>(r: &mut R, area: &Area, state: &State, options: &Options) -> Result<()> {
    let level_header = area.section == Section::Level;
    if level_header {
        let text = format!("LEVEL {}", state.level);
        r.draw_text(layout::AREA, &text, Align::Center, Color::BrightWhite)?;
    }

    let rows = layout::setting_rows(area, state.scroll, level_header);
    for row in &rows {
        let setting = &area.settings[row.index];
        setting_row(r, setting, row, setting.id == state.focused, options, state.level_index())?;
    }

    if state.scroll > 0 {
        let (x, y) = layout::SCROLL_UP_ARROW;
        r.blit_arrow(Arrow::Up, x, y, Color::BrightWhite)?;
    }
    if state.scroll + rows.len() < area.len() {
        let (x, y) = layout::SCROLL_DOWN_ARROW;
        r.blit_arrow(Arrow::Down, x, y, Color::BrightWhite)?;
    }
    if rows.len() < area.len() {
        r.fill_rect(layout::SCROLLBAR, Color::DarkGray, 255)?;
        let slider = layout::scrollbar_slider(state.scroll, rows.len(), area.len());
        r.fill_rect(slider, Color::LightGray, 255)?;
    }
    Ok(())
}

fn setting_row<R: Renderer + ?Sized>(
    r: &mut R,
    setting: &Setting,
    row: &SettingRow,
    focused: bool,
    options: &Options,
    level: usize,
) -> Result<()> {
    if focused {
        r.fill_rect(row.highlight, FOCUS_FILL, 255)?;
        let bar = Rect {
            left: row.highlight.left - 2,
            right: row.highlight.left,
            ..row.highlight
        };
        r.fill_rect(bar, Color::BrightWhite, 255)?;
        r.draw_text(layout::EXPLANATION, setting.help, Align::Center, Color::LightGray)?;
    }

    let enabled = setting.is_enabled(options);
    let label_color = if enabled { Color::BrightWhite } else { Color::LightGray };
    r.draw_text(row.text, setting.label, Align::Left, label_color)?;
    if !enabled {
        return Ok(());
    }

    match setting.style {
        Style::Toggle => {
            let on = setting.link.is_none() || setting.value_of(options, level) != 0;
            let (on_color, off_color) = if on {
                (Color::BrightWhite, Color::LightGray)
            } else {
                (Color::LightGray, Color::BrightWhite)
            };
            r.draw_text(row.text, "ON", Align::Right, on_color)?;
            let off = Rect {
                right: row.text.right - 15,
                ..row.text
            };
            r.draw_text(off, "OFF", Align::Right, off_color)?;
        }
        Style::Number(_) => {
            let text = setting.format_value(setting.value_of(options, level));
            r.draw_text(row.text, &text, Align::Right, Color::BrightWhite)?;
            if focused {
                let (left, right) = layout::number_arrows(row.text, r.text_width(&text));
                r.blit_arrow(Arrow::Right, right.0, right.1, Color::BrightWhite)?;
                r.blit_arrow(Arrow::Left, left.0, left.1, Color::BrightWhite)?;
            }
        }
        Style::TextOnly => {}
    }
    Ok(())
}

/* --------------------------------- dialogs -------------------------------- */

fn dialog_frame<R: Renderer + ?Sized>(r: &mut R, text: &str) -> Result<()> {
    r.fill_rect(layout::DIALOG, Color::Black, 255)?;
    r.outline_rect(layout::DIALOG, Color::LightGray)?;
    r.draw_text(layout::DIALOG_TEXT, text, Align::Center, Color::BrightWhite)
}

pub fn confirmation<R: Renderer + ?Sized>(r: &mut R, text: &str, highlighted: Button) -> Result<()> {
    dialog_frame(r, text)?;
    let (highlight, ok, cancel) = match highlighted {
        Button::Ok => (layout::OK_HIGHLIGHT, Color::BrightWhite, Color::LightGray),
        Button::Cancel => (layout::CANCEL_HIGHLIGHT, Color::LightGray, Color::BrightWhite),
    };
    r.fill_rect(highlight, Color::DarkGray, 255)?;
    r.draw_text(layout::OK_TEXT, "OK", Align::Center, ok)?;
    r.draw_text(layout::CANCEL_TEXT, "Cancel", Align::Center, cancel)
}

pub fn level_picker<R: Renderer + ?Sized>(r: &mut R, text: &str, level: usize) -> Result<()> {
    dialog_frame(r, text)?;
    r.draw_text(layout::LEVEL_INPUT, &level.to_string(), Align::Center, Color::BrightWhite)?;
    let (x, y) = layout::LEVEL_RIGHT_ARROW;
    r.blit_arrow(Arrow::Right, x, y, Color::BrightWhite)?;
    let (x, y) = layout::LEVEL_LEFT_ARROW;
    r.blit_arrow(Arrow::Left, x, y, Color::BrightWhite)
}

#[cfg(test)]
mod tests {
    use super::menu;
    use crate::core::gfx::{Align, Arrow, Color};
    use crate::game::options::Options;
    use crate::menu::Catalog;
    use crate::menu::catalog::SettingId;
    use crate::menu::nav::{Screen, State};
    use crate::menu::setting::Section;
    use crate::menu::testing::{DrawCommand, Recorder};

    fn texts(r: &Recorder) -> Vec<(&str, Color)> {
        r.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, color, .. } => Some((text.as_str(), *color)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn pause_screen_lists_enabled_items() {
        let catalog = Catalog::new();
        let mut options = Options::default();
        options.mods.enable_quicksave = false;
        let mut r = Recorder::default();
        menu(&mut r, &State::default(), &catalog, &options).expect("draw");

        let texts = texts(&r);
        assert_eq!(texts[0], ("RESUME", Color::BrightWhite));
        assert!(!texts.iter().any(|(t, _)| *t == "QUICKSAVE"));
        assert_eq!(texts.len(), 5);
        assert!(matches!(
            r.commands[0],
            DrawCommand::Fill {
                color: Color::Black,
                alpha: 120,
                ..
            }
        ));
    }

    #[test]
    fn focused_toggle_draws_on_and_off() {
        let catalog = Catalog::new();
        let mut options = Options::default();
        options.user.enable_music = false;
        let mut state = State::default();
        state.screen = Screen::Settings;
        state.enter_area(&catalog, Section::General, false);
        state.focused = SettingId::EnableMusic;

        let mut r = Recorder::default();
        menu(&mut r, &state, &catalog, &options).expect("draw");

        let texts = texts(&r);
        let music = texts
            .iter()
            .position(|(t, _)| *t == "Enable music")
            .expect("music row");
        assert_eq!(texts[music + 1], ("ON", Color::LightGray));
        assert_eq!(texts[music + 2], ("OFF", Color::BrightWhite));
        assert!(texts.contains(&("Turn music on or off.", Color::LightGray)));
    }

    #[test]
    fn long_areas_draw_a_scrollbar_and_down_arrow() {
        let catalog = Catalog::new();
        let options = Options::default();
        let mut state = State::default();
        state.screen = Screen::Settings;
        state.enter_area(&catalog, Section::Gameplay, false);

        let mut r = Recorder::default();
        menu(&mut r, &state, &catalog, &options).expect("draw");
        assert!(r.commands.contains(&DrawCommand::Arrow {
            arrow: Arrow::Down,
            x: 200,
            y: 151,
            color: Color::BrightWhite,
        }));
        assert!(!r.commands.iter().any(|c| matches!(c, DrawCommand::Arrow { arrow: Arrow::Up, .. })));
        assert!(r.commands.iter().any(|c| matches!(
            c,
            DrawCommand::Fill {
                color: Color::DarkGray,
                ..
            }
        )));
    }

    #[test]
    fn level_area_shows_its_level() {
        let catalog = Catalog::new();
        let mut options = Options::default();
        options.mods.use_custom_options = true;
        let mut state = State::default();
        state.screen = Screen::Settings;
        state.customize_level(&catalog, 12);

        let mut r = Recorder::default();
        menu(&mut r, &state, &catalog, &options).expect("draw");
        assert!(r.commands.iter().any(|c| matches!(
            c,
            DrawCommand::Text { text, align: Align::Center, .. } if text == "LEVEL 12"
        )));
    }
}
