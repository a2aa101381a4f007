use crate::Result;
use crate::game::options::Options;
use crate::menu::setting::{Registry, Section};
use directories::ProjectDirs;
use ini::Ini;
use log::{LevelFilter, info, warn};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{LazyLock, Mutex, PoisonError};

pub const CONFIG_FILE: &str = "popmenu.ini";
pub const SNAPSHOT_FILE: &str = "popmenu.cfg";
const MENU_SECTION: &str = "Menu";

/// Areas written to the text config. Level tables live only in the snapshot.
const PERSISTED_AREAS: [Section; 4] = [
    Section::General,
    Section::Visuals,
    Section::Gameplay,
    Section::Mods,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::Error => "Error",
            Self::Warn => "Warn",
            Self::Info => "Info",
            Self::Debug => "Debug",
            Self::Trace => "Trace",
        }
    }

    pub const fn as_level_filter(&self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::Off,
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

impl FromStr for LogLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: LogLevel,
    /// Name of the active levelset. The mod-managed options in the snapshot
    /// are only valid for this name.
    pub levelset_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            levelset_name: String::new(),
        }
    }
}

static CONFIG: LazyLock<Mutex<Config>> = LazyLock::new(|| Mutex::new(Config::default()));

// --- Locations ---

/// Where the text config and the snapshot live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub config: PathBuf,
    pub snapshot: PathBuf,
}

impl Paths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            config: dir.join(CONFIG_FILE),
            snapshot: dir.join(SNAPSHOT_FILE),
        }
    }
}

/// A config in the working directory wins (portable mode). Otherwise the
/// platform config directory is used, falling back to the working directory.
pub fn locate() -> Paths {
    if Path::new(CONFIG_FILE).exists() {
        return Paths::in_dir(Path::new("."));
    }
    let Some(dirs) = ProjectDirs::from("", "", "popmenu") else {
        warn!("No home directory found; using the working directory for config.");
        return Paths::in_dir(Path::new("."));
    };
    let dir = dirs.config_dir();
    if let Err(e) = std::fs::create_dir_all(dir) {
        warn!("Failed to create '{}': {e}", dir.display());
        return Paths::in_dir(Path::new("."));
    }
    Paths::in_dir(dir)
}

// --- File I/O ---

/// Writes every persisted option of `options` into `conf`.
pub fn write_options(conf: &mut Ini, registry: &Registry, options: &Options) {
    for section in PERSISTED_AREAS {
        let Some(area) = registry.area(section) else {
            continue;
        };
        for setting in &area.settings {
            if setting.link.is_none() || setting.is_per_level() {
                continue;
            }
            conf.with_section(Some(section.as_str()))
                .set(format!("{:?}", setting.id), setting.value_of(options, 0).to_string());
        }
    }
}

/// Reads persisted options from `conf`. Missing or unparsable keys keep the
/// current value; numbers are clamped to the setting's bounds.
pub fn read_options(conf: &Ini, registry: &Registry, options: &mut Options) {
    for section in PERSISTED_AREAS {
        let Some(area) = registry.area(section) else {
            continue;
        };
        let Some(props) = conf.section(Some(section.as_str())) else {
            continue;
        };
        for setting in &area.settings {
            if setting.link.is_none() || setting.is_per_level() {
                continue;
            }
            let key = format!("{:?}", setting.id);
            let Some(raw) = props.get(key.as_str()) else {
                continue;
            };
            match raw.trim().parse::<i32>() {
                Ok(value) => setting.set_clamped(options, 0, value),
                Err(_) => warn!("Ignoring invalid value '{raw}' for {section:?}.{key}."),
            }
        }
    }
}

pub fn create_default_config_file(path: &Path, registry: &Registry) -> Result<()> {
    info!("'{}' not found, creating with default values.", path.display());
    let default = Config::default();
    let mut conf = Ini::new();
    conf.with_section(Some(MENU_SECTION))
        .set("LevelsetName", default.levelset_name.as_str())
        .set("LogLevel", default.log_level.as_str());
    write_options(&mut conf, registry, &Options::default());
    conf.write_to_file(path)?;
    Ok(())
}

fn read_config(conf: &Ini) -> Config {
    let default = Config::default();
    let menu = conf.section(Some(MENU_SECTION));
    Config {
        log_level: menu
            .and_then(|s| s.get("LogLevel"))
            .and_then(|v| LogLevel::from_str(v).ok())
            .unwrap_or(default.log_level),
        levelset_name: menu
            .and_then(|s| s.get("LevelsetName"))
            .map_or(default.levelset_name, |v| v.trim().to_string()),
    }
}

/// Where the text config values came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// The file already existed and may hold manual edits.
    Existing,
    /// The file was missing and a default one was written.
    Generated,
    /// The file could not be read; defaults are in effect.
    Unreadable,
}

/// Reads the text config at `path` into `options`, creating the file first
/// if it does not exist. Failures leave defaults.
pub fn read(path: &Path, registry: &Registry, options: &mut Options) -> (Config, Source) {
    let mut source = Source::Existing;
    if !path.exists() {
        match create_default_config_file(path, registry) {
            Ok(()) => source = Source::Generated,
            Err(e) => warn!("Failed to create default config file: {e}"),
        }
    }

    match Ini::load_from_file(path) {
        Ok(conf) => {
            let cfg = read_config(&conf);
            read_options(&conf, registry, options);
            info!("Loaded '{}' (levelset '{}').", path.display(), cfg.levelset_name);
            (cfg, source)
        }
        Err(e) => {
            warn!("Failed to load '{}': {e}", path.display());
            (Config::default(), Source::Unreadable)
        }
    }
}

/// Like [`read`], and makes the result the global config.
pub fn load(path: &Path, registry: &Registry, options: &mut Options) -> Source {
    let (cfg, source) = read(path, registry, options);
    *CONFIG.lock().unwrap_or_else(PoisonError::into_inner) = cfg;
    source
}

pub fn get() -> Config {
    CONFIG.lock().unwrap_or_else(PoisonError::into_inner).clone()
}
