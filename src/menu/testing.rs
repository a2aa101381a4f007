//! Scripted host for driving the menu in tests.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use winit::keyboard::KeyCode;

use crate::Result;
use crate::core::gfx::{Align, Arrow, Color, Rect, Renderer};
use crate::core::input::{KeyPress, RawInput};
use crate::core::{Host, Sound};
use crate::game::options::Options;
use crate::menu::OptionChange;

/// Width of every glyph of the fake font.
pub const GLYPH_WIDTH: i32 = 4;
const FRAME: Duration = Duration::from_millis(16);
/// Polls allowed after the script ran out before the test is failed.
const EXHAUSTED_LIMIT: usize = 1000;

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    Text {
        rect: Rect,
        text: String,
        align: Align,
        color: Color,
    },
    Fill {
        rect: Rect,
        color: Color,
        alpha: u8,
    },
    Outline {
        rect: Rect,
        color: Color,
    },
    Arrow {
        arrow: Arrow,
        x: i32,
        y: i32,
        color: Color,
    },
    Present,
}

/// Renderer that records draw calls instead of drawing.
#[derive(Debug, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Renderer for Recorder {
    fn draw_text(&mut self, rect: Rect, text: &str, align: Align, color: Color) -> Result<()> {
        self.commands.push(DrawCommand::Text {
            rect,
            text: text.to_owned(),
            align,
            color,
        });
        Ok(())
    }

    fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * GLYPH_WIDTH
    }

    fn fill_rect(&mut self, rect: Rect, color: Color, alpha: u8) -> Result<()> {
        self.commands.push(DrawCommand::Fill { rect, color, alpha });
        Ok(())
    }

    fn outline_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        self.commands.push(DrawCommand::Outline { rect, color });
        Ok(())
    }

    fn blit_arrow(&mut self, arrow: Arrow, x: i32, y: i32, color: Color) -> Result<()> {
        self.commands.push(DrawCommand::Arrow { arrow, x, y, color });
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.commands.push(DrawCommand::Present);
        Ok(())
    }
}

/// Host that replays raw input frames on a manual clock.
#[derive(Debug)]
pub struct FakeHost {
    pub recorder: Recorder,
    pub frames: VecDeque<RawInput>,
    pub clock: Instant,
    pub fullscreen: bool,
    pub sounds: Vec<Sound>,
    pub applied: Vec<OptionChange>,
    pub cursor: Option<bool>,
    pub idles: usize,
    exhausted: usize,
}

impl FakeHost {
    pub fn new(frames: impl IntoIterator<Item = RawInput>) -> Self {
        Self {
            recorder: Recorder::default(),
            frames: frames.into_iter().collect(),
            clock: Instant::now(),
            fullscreen: false,
            sounds: Vec::new(),
            applied: Vec::new(),
            cursor: None,
            idles: 0,
            exhausted: 0,
        }
    }

    pub fn texts(&self) -> Vec<String> {
        self.recorder
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn presents(&self) -> usize {
        self.recorder
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Present))
            .count()
    }
}

impl Renderer for FakeHost {
    fn draw_text(&mut self, rect: Rect, text: &str, align: Align, color: Color) -> Result<()> {
        self.recorder.draw_text(rect, text, align, color)
    }

    fn text_width(&self, text: &str) -> i32 {
        self.recorder.text_width(text)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color, alpha: u8) -> Result<()> {
        self.recorder.fill_rect(rect, color, alpha)
    }

    fn outline_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        self.recorder.outline_rect(rect, color)
    }

    fn blit_arrow(&mut self, arrow: Arrow, x: i32, y: i32, color: Color) -> Result<()> {
        self.recorder.blit_arrow(arrow, x, y, color)
    }

    fn present(&mut self) -> Result<()> {
        self.recorder.present()
    }
}

impl Host for FakeHost {
    fn poll(&mut self, raw: &mut RawInput) {
        self.clock += FRAME;
        match self.frames.pop_front() {
            Some(frame) => *raw = frame,
            None => {
                self.exhausted += 1;
                assert!(
                    self.exhausted < EXHAUSTED_LIMIT,
                    "input script ran out before the menu closed"
                );
            }
        }
    }

    fn now(&self) -> Instant {
        self.clock
    }

    fn idle(&mut self, duration: Duration) {
        self.idles += 1;
        self.clock += duration;
    }

    fn play_sound(&mut self, sound: Sound) {
        self.sounds.push(sound);
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor = Some(visible);
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn apply(&mut self, change: OptionChange, _options: &Options) {
        self.applied.push(change);
    }
}

impl From<KeyPress> for RawInput {
    fn from(key: KeyPress) -> Self {
        let mut raw = RawInput::default();
        raw.keys.push(key);
        raw
    }
}

/// One frame with a single unmodified key press.
pub fn key(code: KeyCode) -> RawInput {
    KeyPress::plain(code).into()
}

/// `count` frames pressing `code` once each.
pub fn keys(code: KeyCode, count: usize) -> Vec<RawInput> {
    (0..count).map(|_| key(code)).collect()
}
