//! Fixed screen geometry of the menu, shared by hit-testing and drawing.

use smallvec::SmallVec;

use crate::core::gfx::Rect;
use crate::game::options::Options;
use crate::menu::items::{ItemList, MenuItemId};
use crate::menu::setting::Area;

pub const SCREEN: Rect = Rect::new(0, 0, 200, 320);
pub const BOTTOM_TEXT: Rect = Rect::new(193, 70, 200, 250);

pub const PAUSE_COLUMN: Rect = Rect::new(0, 110, 192, 210);
pub const SETTINGS_COLUMN: Rect = Rect::new(0, 10, 192, 80);
const COLUMN_MARGIN: i32 = 5;
const ITEMS_TOP: i32 = 50;
const ITEM_STEP: i32 = 13;

pub const AREA: Rect = Rect::new(20, 100, 150, 300);
pub const VISIBLE_ROWS: usize = 9;
const ROW_STEP: i32 = 15;
/// The level area starts one row lower, under its level header.
const LEVEL_HEADER_OFFSET: i32 = 15;

pub const EXPLANATION: Rect = Rect::new(170, 20, 200, 300);
pub const SCROLL_UP_ARROW: (i32, i32) = (200, 10);
pub const SCROLL_DOWN_ARROW: (i32, i32) = (200, 151);
pub const SCROLLBAR: Rect = Rect::new(AREA.top - 5, AREA.right + 8, AREA.bottom, AREA.right + 10);

pub const DIALOG: Rect = Rect::new(60, 56, 124, 264);
pub const DIALOG_TEXT: Rect = Rect::new(70, 66, 104, 254);
pub const OK_TEXT: Rect = Rect::new(104, 108, 118, 158);
pub const OK_HIGHLIGHT: Rect = Rect::new(103, 108, 116, 158);
pub const CANCEL_TEXT: Rect = Rect::new(104, 162, 118, 212);
pub const CANCEL_HIGHLIGHT: Rect = Rect::new(103, 162, 116, 212);
pub const LEVEL_INPUT: Rect = Rect::new(104, 64, 118, 256);
pub const LEVEL_RIGHT_ARROW: (i32, i32) = (175, LEVEL_INPUT.top + 3);
pub const LEVEL_LEFT_ARROW: (i32, i32) = (142, LEVEL_INPUT.top + 3);

/// One drawn entry of an item column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemRow {
    pub id: MenuItemId,
    pub text: Rect,
    pub selection: Rect,
}

/// Rows of the enabled items of `list`. Disabled items take no space.
pub fn item_rows(list: &ItemList, options: &Options, column: Rect) -> SmallVec<[ItemRow; 8]> {
    let inner = column.inflate(-COLUMN_MARGIN);
    let mut y = ITEMS_TOP;
    let mut rows = SmallVec::new();
    for item in list.items() {
        if !item.is_enabled(options) {
            continue;
        }
        let text = Rect { top: inner.top + y, ..inner };
        let selection = Rect {
            top: text.top - 3,
            bottom: text.top + 8,
            ..text
        };
        rows.push(ItemRow {
            id: item.id,
            text,
            selection,
        });
        y += ITEM_STEP;
    }
    rows
}

/// One visible row of a settings area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettingRow {
    /// Position of the setting within its area.
    pub index: usize,
    pub text: Rect,
    /// Highlight box, also the click target.
    pub highlight: Rect,
}

pub fn setting_rows(area: &Area, scroll: usize, level_header: bool) -> SmallVec<[SettingRow; VISIBLE_ROWS]> {
    let mut y = if level_header { LEVEL_HEADER_OFFSET } else { 0 };
    let mut rows = SmallVec::new();
    for index in (scroll..area.len()).take(VISIBLE_ROWS) {
        let text = Rect {
            top: AREA.top + y,
            ..AREA
        };
        let highlight = Rect {
            top: text.top - 5,
            bottom: text.top + 10,
            left: text.left - 10,
            right: text.right + 10,
        };
        rows.push(SettingRow {
            index,
            text,
            highlight,
        });
        y += ROW_STEP;
    }
    rows
}

pub const fn on_hitbox(highlight: Rect) -> Rect {
    Rect {
        left: highlight.right - 22,
        ..highlight
    }
}

pub const fn off_hitbox(highlight: Rect) -> Rect {
    Rect {
        left: highlight.right - 49,
        right: highlight.right - 22,
        ..highlight
    }
}

/// Hit boxes of the decrement and increment arrows around a value text of
/// `value_width` pixels, right aligned in `text`.
pub const fn number_hitboxes(row: &SettingRow, value_width: i32) -> (Rect, Rect) {
    let right = Rect {
        top: row.highlight.top,
        left: row.text.right - 5,
        bottom: row.highlight.bottom,
        right: row.text.right + 10,
    };
    let left = Rect {
        left: right.left - (value_width + 10),
        right: right.right - (value_width + 5),
        ..right
    };
    (left, right)
}

/// Top-left corners of the left and right arrows of a focused number.
pub const fn number_arrows(text: Rect, value_width: i32) -> ((i32, i32), (i32, i32)) {
    (
        (text.right - value_width - 6, text.top),
        (text.right + 2, text.top),
    )
}

/// Scrollbar slider for `visible` rows starting at `scroll` out of `count`.
pub const fn scrollbar_slider(scroll: usize, visible: usize, count: usize) -> Rect {
    let height = SCROLLBAR.height();
    let count = if count == 0 { 1 } else { count as i32 };
    Rect {
        top: SCROLLBAR.top + scroll as i32 * height / count,
        bottom: SCROLLBAR.top + (scroll + visible) as i32 * height / count,
        ..SCROLLBAR
    }
}
