//! The wrapping item lists of the pause menu and the settings category column.

use crate::game::options::Options;
use crate::menu::catalog::custom_options_enabled;
use crate::menu::setting::{Predicate, Section};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuItemId {
    // pause menu
    Resume,
    SaveGame,
    LoadGame,
    RestartLevel,
    Settings,
    RestartGame,
    QuitGame,
    // settings categories
    General,
    Gameplay,
    Visuals,
    Mods,
    LevelCustomization,
    Back,
}

impl MenuItemId {
    /// Settings area a category item stands for.
    pub const fn section(self) -> Option<Section> {
        match self {
            Self::General => Some(Section::General),
            Self::Gameplay => Some(Section::Gameplay),
            Self::Visuals => Some(Section::Visuals),
            Self::Mods => Some(Section::Mods),
            Self::LevelCustomization => Some(Section::Level),
            _ => None,
        }
    }

    pub const fn for_section(section: Section) -> Self {
        match section {
            Section::General => Self::General,
            Section::Gameplay => Self::Gameplay,
            Section::Visuals => Self::Visuals,
            Section::Mods => Self::Mods,
            Section::Level => Self::LevelCustomization,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub label: &'static str,
    pub required: Option<Predicate>,
    pub previous: MenuItemId,
    pub next: MenuItemId,
}

impl MenuItem {
    const fn new(id: MenuItemId, label: &'static str) -> Self {
        Self {
            id,
            label,
            required: None,
            previous: id,
            next: id,
        }
    }

    const fn requires(mut self, predicate: Predicate) -> Self {
        self.required = Some(predicate);
        self
    }

    pub fn is_enabled(&self, options: &Options) -> bool {
        self.required.is_none_or(|pred| pred(options))
    }
}

/// Circular list: the first item's previous is the last and vice versa.
#[derive(Clone, Debug)]
pub struct ItemList {
    items: Vec<MenuItem>,
}

impl ItemList {
    pub fn new(mut items: Vec<MenuItem>) -> Self {
        let n = items.len();
        let ids: Vec<MenuItemId> = items.iter().map(|i| i.id).collect();
        for (i, item) in items.iter_mut().enumerate() {
            item.previous = ids[(i + n - 1) % n];
            item.next = ids[(i + 1) % n];
        }
        Self { items }
    }

    #[inline(always)]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn contains(&self, id: MenuItemId) -> bool {
        self.get(id).is_some()
    }

    /// Next item down, walking over disabled items.
    pub fn next(&self, from: MenuItemId, options: &Options) -> MenuItemId {
        self.walk(from, options, |item| item.next)
    }

    /// Next item up, walking over disabled items.
    pub fn previous(&self, from: MenuItemId, options: &Options) -> MenuItemId {
        self.walk(from, options, |item| item.previous)
    }

    fn walk(
        &self,
        from: MenuItemId,
        options: &Options,
        step: impl Fn(&MenuItem) -> MenuItemId,
    ) -> MenuItemId {
        let Some(start) = self.get(from) else {
            return from;
        };
        let mut id = step(start);
        // bounded so a list with every item disabled cannot spin
        for _ in 0..self.items.len() {
            match self.get(id) {
                Some(item) if !item.is_enabled(options) => id = step(item),
                _ => break,
            }
        }
        id
    }
}

fn quicksave_enabled(o: &Options) -> bool {
    o.mods.enable_quicksave
}

pub fn pause_items() -> ItemList {
    use MenuItemId as Id;
    ItemList::new(vec![
        MenuItem::new(Id::Resume, "RESUME"),
        MenuItem::new(Id::SaveGame, "QUICKSAVE").requires(quicksave_enabled),
        MenuItem::new(Id::LoadGame, "QUICKLOAD").requires(quicksave_enabled),
        MenuItem::new(Id::RestartLevel, "RESTART LEVEL"),
        MenuItem::new(Id::Settings, "SETTINGS"),
        MenuItem::new(Id::RestartGame, "RESTART GAME"),
        MenuItem::new(Id::QuitGame, "QUIT GAME"),
    ])
}

pub fn settings_items() -> ItemList {
    use MenuItemId as Id;
    ItemList::new(vec![
        MenuItem::new(Id::General, "GENERAL"),
        MenuItem::new(Id::Gameplay, "GAMEPLAY"),
        MenuItem::new(Id::Visuals, "VISUALS"),
        MenuItem::new(Id::Mods, "MODS"),
        MenuItem::new(Id::LevelCustomization, "LEVEL CUSTOMIZATION").requires(custom_options_enabled),
        MenuItem::new(Id::Back, "BACK"),
    ])
}

#[cfg(test)]
mod tests {
    use super::{MenuItemId, pause_items, settings_items};
    use crate::game::options::Options;

    #[test]
    fn lists_wrap_after_exactly_n_steps() {
        let mut options = Options::default();
        options.mods.enable_quicksave = true;
        options.mods.use_custom_options = true;

        for list in [pause_items(), settings_items()] {
            for origin in list.items() {
                let mut id = origin.id;
                for step in 1..=list.len() {
                    id = list.next(id, &options);
                    if step < list.len() {
                        assert_ne!(id, origin.id, "returned early after {step} steps");
                    }
                }
                assert_eq!(id, origin.id);

                for _ in 0..list.len() {
                    id = list.previous(id, &options);
                }
                assert_eq!(id, origin.id);
            }
        }
    }

    #[test]
    fn first_and_last_are_linked() {
        let options = Options::default();
        let list = pause_items();
        assert_eq!(list.previous(MenuItemId::Resume, &options), MenuItemId::QuitGame);
        assert_eq!(list.next(MenuItemId::QuitGame, &options), MenuItemId::Resume);
    }

    #[test]
    fn disabled_items_are_walked_over() {
        let mut options = Options::default();
        options.mods.enable_quicksave = false;
        let list = pause_items();
        assert_eq!(list.next(MenuItemId::Resume, &options), MenuItemId::RestartLevel);
        assert_eq!(list.previous(MenuItemId::RestartLevel, &options), MenuItemId::Resume);

        options.mods.enable_quicksave = true;
        assert_eq!(list.next(MenuItemId::Resume, &options), MenuItemId::SaveGame);
    }

    #[test]
    fn level_customization_needs_custom_options() {
        let mut options = Options::default();
        options.mods.use_custom_options = false;
        let list = settings_items();
        assert_eq!(list.next(MenuItemId::Mods, &options), MenuItemId::Back);
        options.mods.use_custom_options = true;
        assert_eq!(list.next(MenuItemId::Mods, &options), MenuItemId::LevelCustomization);
    }

    #[test]
    fn category_items_map_to_sections() {
        for item in settings_items().items() {
            if let Some(section) = item.id.section() {
                assert_eq!(MenuItemId::for_section(section), item.id);
            }
        }
        assert_eq!(MenuItemId::Back.section(), None);
    }
}
