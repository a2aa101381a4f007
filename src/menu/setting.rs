//! Setting descriptors, their storage accessors, and the areas that group them.

use crate::game::options::Options;
use crate::menu::catalog::SettingId;
use rustc_hash::FxHashMap;

/* ----------------------------- value accessor ----------------------------- */

/// Width and signedness of the storage behind a setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    Flag,
    Byte,
    SByte,
    Word,
    Short,
    Int,
}

/// Shared view of one stored value.
#[derive(Debug)]
pub enum Slot<'a> {
    Flag(&'a bool),
    Byte(&'a u8),
    SByte(&'a i8),
    Word(&'a u16),
    Short(&'a i16),
    Int(&'a i32),
}

/// Mutable view of one stored value.
#[derive(Debug)]
pub enum SlotMut<'a> {
    Flag(&'a mut bool),
    Byte(&'a mut u8),
    SByte(&'a mut i8),
    Word(&'a mut u16),
    Short(&'a mut i16),
    Int(&'a mut i32),
}

impl Slot<'_> {
    #[inline(always)]
    pub fn get(&self) -> i32 {
        match *self {
            Slot::Flag(v) => i32::from(*v),
            Slot::Byte(v) => i32::from(*v),
            Slot::SByte(v) => i32::from(*v),
            Slot::Word(v) => i32::from(*v),
            Slot::Short(v) => i32::from(*v),
            Slot::Int(v) => *v,
        }
    }
}

impl SlotMut<'_> {
    /// Stores `value` truncated to the slot's width. Range policy belongs to
    /// the caller.
    #[inline(always)]
    pub fn set(self, value: i32) {
        match self {
            SlotMut::Flag(v) => *v = value != 0,
            SlotMut::Byte(v) => *v = value as u8,
            SlotMut::SByte(v) => *v = value as i8,
            SlotMut::Word(v) => *v = value as u16,
            SlotMut::Short(v) => *v = value as i16,
            SlotMut::Int(v) => *v = value,
        }
    }
}

pub type ReadFn = for<'a> fn(&'a Options, usize) -> Slot<'a>;
pub type WriteFn = for<'a> fn(&'a mut Options, usize) -> SlotMut<'a>;

/// Storage handle of a setting: an accessor pair resolved against the option
/// store and the level currently being customized. Level-independent links
/// ignore the level.
#[derive(Clone, Copy)]
pub struct Link {
    width: Width,
    per_level: bool,
    read: ReadFn,
    write: WriteFn,
}

impl std::fmt::Debug for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Link")
            .field("width", &self.width)
            .field("per_level", &self.per_level)
            .finish()
    }
}

impl Link {
    #[inline(always)]
    pub const fn new(width: Width, per_level: bool, read: ReadFn, write: WriteFn) -> Self {
        Self {
            width,
            per_level,
            read,
            write,
        }
    }

    #[inline(always)]
    pub const fn width(&self) -> Width {
        self.width
    }

    #[inline(always)]
    pub const fn is_per_level(&self) -> bool {
        self.per_level
    }

    #[inline(always)]
    pub fn get(&self, options: &Options, level: usize) -> i32 {
        (self.read)(options, level).get()
    }

    #[inline(always)]
    pub fn set(&self, options: &mut Options, level: usize, value: i32) {
        (self.write)(options, level).set(value);
    }
}

/// Builds a [`Link`] to an option field, e.g. `slot_link!(Flag, user.enable_music)`
/// or `slot_link!(per_level Byte, mods.custom.tbl_guard_hp)`.
macro_rules! slot_link {
    (per_level $width:ident, $($field:ident).+) => {{
        fn read(o: &$crate::game::options::Options, level: usize) -> $crate::menu::setting::Slot<'_> {
            $crate::menu::setting::Slot::$width(&o.$($field).+[level])
        }
        fn write(
            o: &mut $crate::game::options::Options,
            level: usize,
        ) -> $crate::menu::setting::SlotMut<'_> {
            $crate::menu::setting::SlotMut::$width(&mut o.$($field).+[level])
        }
        $crate::menu::setting::Link::new($crate::menu::setting::Width::$width, true, read, write)
    }};
    ($width:ident, $($field:ident).+) => {{
        fn read(o: &$crate::game::options::Options, _level: usize) -> $crate::menu::setting::Slot<'_> {
            $crate::menu::setting::Slot::$width(&o.$($field).+)
        }
        fn write(
            o: &mut $crate::game::options::Options,
            _level: usize,
        ) -> $crate::menu::setting::SlotMut<'_> {
            $crate::menu::setting::SlotMut::$width(&mut o.$($field).+)
        }
        $crate::menu::setting::Link::new($crate::menu::setting::Width::$width, false, read, write)
    }};
}
pub(crate) use slot_link;

/* ------------------------------- descriptors ------------------------------ */

pub type Predicate = fn(&Options) -> bool;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueNames {
    /// Label per value, indexed from 0.
    Indexed(&'static [&'static str]),
    /// Sparse value to label table.
    Keyed(&'static [(&'static str, i32)]),
}

impl ValueNames {
    pub fn lookup(&self, value: i32) -> Option<&'static str> {
        match *self {
            ValueNames::Indexed(names) => usize::try_from(value)
                .ok()
                .and_then(|i| names.get(i))
                .copied(),
            ValueNames::Keyed(pairs) => pairs
                .iter()
                .find_map(|&(name, key)| (key == value).then_some(name)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    One,
    /// Moves to the next multiple of the given size.
    Snap(i32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Plain,
    /// Twelfths of a second, shown as seconds.
    Ticks,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberSpec {
    pub min: i32,
    pub max: i32,
    pub names: Option<ValueNames>,
    pub step: Step,
    pub unit: Unit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    Toggle,
    Number(NumberSpec),
    TextOnly,
}

#[derive(Clone, Copy, Debug)]
pub struct Setting {
    pub id: SettingId,
    pub label: &'static str,
    pub help: &'static str,
    pub style: Style,
    pub link: Option<Link>,
    pub required: Option<Predicate>,
    pub index: usize,
    pub previous: SettingId,
    pub next: SettingId,
}

impl Setting {
    const fn base(id: SettingId, style: Style, label: &'static str, help: &'static str) -> Self {
        Self {
            id,
            label,
            help,
            style,
            link: None,
            required: None,
            index: 0,
            previous: id,
            next: id,
        }
    }

    pub const fn toggle(id: SettingId, link: Link, label: &'static str, help: &'static str) -> Self {
        let mut s = Self::base(id, Style::Toggle, label, help);
        s.link = Some(link);
        s
    }

    pub const fn number(
        id: SettingId,
        link: Link,
        min: i32,
        max: i32,
        label: &'static str,
        help: &'static str,
    ) -> Self {
        let spec = NumberSpec {
            min,
            max,
            names: None,
            step: Step::One,
            unit: Unit::Plain,
        };
        let mut s = Self::base(id, Style::Number(spec), label, help);
        s.link = Some(link);
        s
    }

    pub const fn action(id: SettingId, label: &'static str, help: &'static str) -> Self {
        Self::base(id, Style::TextOnly, label, help)
    }

    pub fn requires(mut self, predicate: Predicate) -> Self {
        self.required = Some(predicate);
        self
    }

    pub fn names(self, names: &'static [&'static str]) -> Self {
        self.with_spec(|spec| spec.names = Some(ValueNames::Indexed(names)))
    }

    pub fn keyed(self, pairs: &'static [(&'static str, i32)]) -> Self {
        self.with_spec(|spec| spec.names = Some(ValueNames::Keyed(pairs)))
    }

    pub fn ticks(self) -> Self {
        self.with_spec(|spec| spec.unit = Unit::Ticks)
    }

    pub fn snap(self, size: i32) -> Self {
        self.with_spec(|spec| spec.step = Step::Snap(size))
    }

    fn with_spec(mut self, f: impl FnOnce(&mut NumberSpec)) -> Self {
        if let Style::Number(spec) = &mut self.style {
            f(spec);
        }
        self
    }

    #[inline(always)]
    pub const fn number_spec(&self) -> Option<&NumberSpec> {
        match &self.style {
            Style::Number(spec) => Some(spec),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn is_per_level(&self) -> bool {
        self.link.is_some_and(|l| l.is_per_level())
    }

    pub fn is_enabled(&self, options: &Options) -> bool {
        self.required.is_none_or(|pred| pred(options))
    }

    pub fn value_of(&self, options: &Options, level: usize) -> i32 {
        self.link.map_or(0, |l| l.get(options, level))
    }

    pub fn set_value(&self, options: &mut Options, level: usize, value: i32) {
        if let Some(link) = self.link {
            link.set(options, level, value);
        }
    }

    /// Stores `value` clamped to the declared bounds.
    pub fn set_clamped(&self, options: &mut Options, level: usize, value: i32) {
        let value = match self.number_spec() {
            Some(spec) => value.clamp(spec.min, spec.max),
            None => i32::from(value != 0),
        };
        self.set_value(options, level, value);
    }

    /// Applies the next value up if it stays in range. Returns whether a
    /// value was stored.
    pub fn increment(&self, options: &mut Options, level: usize, current: i32) -> bool {
        let Some(spec) = self.number_spec() else {
            return false;
        };
        let candidate = match spec.step {
            Step::One => current + 1,
            Step::Snap(size) => (current / size + 1) * size,
        };
        self.apply_candidate(options, level, candidate)
    }

    pub fn decrement(&self, options: &mut Options, level: usize, current: i32) -> bool {
        let Some(spec) = self.number_spec() else {
            return false;
        };
        let candidate = match spec.step {
            Step::One => current - 1,
            Step::Snap(size) => ((current + size - 1) / size - 1) * size,
        };
        self.apply_candidate(options, level, candidate)
    }

    fn apply_candidate(&self, options: &mut Options, level: usize, candidate: i32) -> bool {
        let Some(spec) = self.number_spec() else {
            return false;
        };
        if self.link.is_none() || candidate < spec.min || candidate > spec.max {
            return false;
        }
        self.set_value(options, level, candidate);
        true
    }

    pub fn format_value(&self, value: i32) -> String {
        let Some(spec) = self.number_spec() else {
            return value.to_string();
        };
        if let Some(name) = spec.names.and_then(|n| n.lookup(value)) {
            return name.to_string();
        }
        match spec.unit {
            Unit::Ticks => format!("{:.2}", value as f32 / 12.0),
            Unit::Plain => value.to_string(),
        }
    }
}

/* ---------------------------------- areas --------------------------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    General,
    Gameplay,
    Visuals,
    Mods,
    Level,
}

impl Section {
    pub const ALL: [Self; 5] = [
        Self::General,
        Self::Gameplay,
        Self::Visuals,
        Self::Mods,
        Self::Level,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Gameplay => "Gameplay",
            Self::Visuals => "Visuals",
            Self::Mods => "Mods",
            Self::Level => "Level",
        }
    }
}

/// Assigns positions and clamped neighbour links from slice order.
pub fn build_area(settings: &mut [Setting]) {
    let last = settings.len().saturating_sub(1);
    let ids: Vec<SettingId> = settings.iter().map(|s| s.id).collect();
    for (i, setting) in settings.iter_mut().enumerate() {
        setting.index = i;
        setting.previous = ids[i.saturating_sub(1)];
        setting.next = ids[(i + 1).min(last)];
    }
}

#[derive(Clone, Debug)]
pub struct Area {
    pub section: Section,
    pub settings: Vec<Setting>,
}

impl Area {
    pub fn new(section: Section, mut settings: Vec<Setting>) -> Self {
        build_area(&mut settings);
        Self { section, settings }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    pub fn first(&self) -> Option<SettingId> {
        self.settings.first().map(|s| s.id)
    }

    pub fn position(&self, id: SettingId) -> Option<usize> {
        self.settings.iter().position(|s| s.id == id)
    }

    pub fn get(&self, id: SettingId) -> Option<&Setting> {
        self.settings.iter().find(|s| s.id == id)
    }

    /// Largest first-visible index for a window of `visible` rows.
    #[inline(always)]
    pub fn max_scroll(&self, visible: usize) -> usize {
        self.len().saturating_sub(visible)
    }
}

/// All setting areas, with an id index across them.
#[derive(Clone, Debug)]
pub struct Registry {
    areas: Vec<Area>,
    index: FxHashMap<SettingId, (usize, usize)>,
}

impl Registry {
    pub fn new(areas: Vec<Area>) -> Self {
        let mut index = FxHashMap::default();
        for (a, area) in areas.iter().enumerate() {
            for (s, setting) in area.settings.iter().enumerate() {
                let previous = index.insert(setting.id, (a, s));
                debug_assert!(previous.is_none(), "duplicate setting id {:?}", setting.id);
            }
        }
        Self { areas, index }
    }

    #[inline(always)]
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn area(&self, section: Section) -> Option<&Area> {
        self.areas.iter().find(|a| a.section == section)
    }

    pub fn find(&self, id: SettingId) -> Option<(&Area, &Setting)> {
        let &(a, s) = self.index.get(&id)?;
        let area = &self.areas[a];
        Some((area, &area.settings[s]))
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Area, Section, Setting, Slot, SlotMut, Width, build_area, slot_link};
    use crate::game::options::Options;
    use crate::menu::catalog::SettingId;

    fn threshold() -> Setting {
        Setting::number(
            SettingId::JoystickThreshold,
            slot_link!(Int, user.joystick_threshold),
            0,
            i16::MAX as i32,
            "Joystick threshold",
            "",
        )
        .snap(1000)
    }

    #[test]
    fn slots_truncate_like_narrowing_casts() {
        let mut byte = 0u8;
        SlotMut::Byte(&mut byte).set(300);
        assert_eq!(byte, 44);

        let mut sbyte = 0i8;
        SlotMut::SByte(&mut sbyte).set(-1);
        assert_eq!(Slot::SByte(&sbyte).get(), -1);

        let mut word = 0u16;
        SlotMut::Word(&mut word).set(-1);
        assert_eq!(Slot::Word(&word).get(), 65535);

        let mut flag = false;
        SlotMut::Flag(&mut flag).set(2);
        assert!(flag);
    }

    #[test]
    fn null_storage_reads_zero_and_ignores_writes() {
        let action = Setting::action(SettingId::ResetAllSettings, "Restore defaults...", "");
        let mut options = Options::default();
        let before = options;
        assert_eq!(action.value_of(&options, 0), 0);
        action.set_value(&mut options, 0, 1);
        assert_eq!(options, before);
    }

    #[test]
    fn per_level_links_follow_the_level_argument() {
        let hp = slot_link!(per_level Byte, mods.custom.tbl_guard_hp);
        assert_eq!(hp.width(), Width::Byte);
        assert!(hp.is_per_level());

        let mut options = Options::default();
        hp.set(&mut options, 15, 42);
        assert_eq!(options.mods.custom.tbl_guard_hp[15], 42);
        assert_eq!(hp.get(&options, 15), 42);
        assert_ne!(hp.get(&options, 0), 42);
    }

    #[test]
    fn snap_setting_moves_between_multiples_of_1000() {
        let setting = threshold();
        let mut options = Options::default();

        options.user.joystick_threshold = 450;
        assert!(setting.increment(&mut options, 0, 450));
        assert_eq!(options.user.joystick_threshold, 1000);

        assert!(setting.decrement(&mut options, 0, 1000));
        assert_eq!(options.user.joystick_threshold, 0);

        assert!(!setting.decrement(&mut options, 0, 0), "below min is rejected");
        assert_eq!(options.user.joystick_threshold, 0);
    }

    #[test]
    fn increment_stops_at_the_maximum() {
        let setting = threshold();
        let mut options = Options::default();
        options.user.joystick_threshold = 32000;
        assert!(!setting.increment(&mut options, 0, 32000));
        assert_eq!(options.user.joystick_threshold, 32000);
    }

    #[test]
    fn increment_then_decrement_returns_to_the_start() {
        let hp = Setting::number(
            SettingId::StartHitp,
            slot_link!(Word, mods.custom.start_hitp),
            1,
            10,
            "Starting hitpoints",
            "",
        );
        let mut options = Options::default();
        for start in 1..10 {
            options.mods.custom.start_hitp = start as u16;
            assert!(hp.increment(&mut options, 0, start));
            assert!(hp.decrement(&mut options, 0, start + 1));
            assert_eq!(i32::from(options.mods.custom.start_hitp), start);
        }

        let setting = threshold();
        options.user.joystick_threshold = 3000;
        assert!(setting.increment(&mut options, 0, 3000));
        assert!(setting.decrement(&mut options, 0, 4000));
        assert_eq!(options.user.joystick_threshold, 3000, "multiples round trip");
    }

    #[test]
    fn formats_ticks_as_seconds() {
        let setting = Setting::number(
            SettingId::StartTicksLeft,
            slot_link!(Word, mods.custom.start_ticks_left),
            0,
            u16::MAX as i32,
            "Starting seconds left",
            "",
        )
        .ticks();
        assert_eq!(setting.format_value(720), "60.00");
        assert_eq!(setting.format_value(719), "59.92");
    }

    #[test]
    fn keyed_names_fall_back_to_numbers() {
        let setting = Setting::number(
            SettingId::SeamlessExit,
            slot_link!(per_level SByte, mods.custom.tbl_seamless_exit),
            -1,
            24,
            "Seamless exit",
            "",
        )
        .keyed(&[("Off", -1)]);
        assert_eq!(setting.format_value(-1), "Off");
        assert_eq!(setting.format_value(7), "7");
    }

    #[test]
    fn build_area_links_are_clamped_and_idempotent() {
        let mut settings = vec![
            Setting::action(SettingId::ResetAllSettings, "a", ""),
            threshold(),
            Setting::toggle(SettingId::EnableMusic, slot_link!(Flag, user.enable_music), "c", ""),
        ];
        build_area(&mut settings);
        build_area(&mut settings);

        assert_eq!(settings[0].previous, SettingId::ResetAllSettings);
        assert_eq!(settings[0].next, SettingId::JoystickThreshold);
        assert_eq!(settings[2].next, SettingId::EnableMusic);
        assert_eq!(settings[2].index, 2);

        let area = Area::new(Section::General, settings);
        assert_eq!(area.max_scroll(9), 0);
        assert_eq!(area.position(SettingId::EnableMusic), Some(2));
    }
}
