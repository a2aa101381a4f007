use popmenu::config;
use popmenu::core::crc32;
use popmenu::game::options::{LEVEL_COUNT, Options};
use popmenu::game::persist::SnapshotStore;
use popmenu::menu::catalog;
use popmenu::menu::setting::{Registry, Setting, Style};

const USAGE: &str = "usage: popmenu <list | set <Key> <value> [level] | reset | crc>";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Install logger immediately, then set runtime max level from config after loading it.
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .try_init();
    log::set_max_level(log::LevelFilter::Warn);

    let registry = catalog::registry();
    let paths = config::locate();
    let mut options = Options::default();
    let source = config::load(&paths.config, &registry, &mut options);
    let cfg = config::get();
    log::set_max_level(cfg.log_level.as_level_filter());

    let store = SnapshotStore::new(paths.snapshot, paths.config, cfg.levelset_name)
        .with_generated_ini(source == config::Source::Generated);
    store.load(&mut options);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["list"] | [] => list(&registry, &options),
        ["set", key, value] => set(&registry, &store, &mut options, key, value, 0)?,
        ["set", key, value, level] => {
            let level: usize = level.parse()?;
            set(&registry, &store, &mut options, key, value, level)?;
        }
        ["reset"] => {
            options.restore_defaults();
            store.save(&options)?;
            println!("All settings restored to their defaults.");
        }
        ["crc"] => println!("{:08x}", crc32::exe_checksum()),
        _ => return Err(USAGE.into()),
    }
    Ok(())
}

fn describe(setting: &Setting, options: &Options, level: usize) -> String {
    let value = setting.value_of(options, level);
    match setting.style {
        Style::Toggle => (if value != 0 { "ON" } else { "OFF" }).to_string(),
        _ => setting.format_value(value),
    }
}

fn list(registry: &Registry, options: &Options) {
    for area in registry.areas() {
        println!("[{}]", area.section.as_str());
        for setting in &area.settings {
            if setting.style == Style::TextOnly {
                continue;
            }
            let value = if setting.is_per_level() {
                (0..LEVEL_COUNT)
                    .map(|level| describe(setting, options, level))
                    .collect::<Vec<_>>()
                    .join(", ")
            } else {
                describe(setting, options, 0)
            };
            let note = if setting.is_enabled(options) { "" } else { " (disabled)" };
            println!("{:?} = {value}{note}", setting.id);
        }
    }
}

fn set(
    registry: &Registry,
    store: &SnapshotStore,
    options: &mut Options,
    key: &str,
    value: &str,
    level: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let setting = registry
        .areas()
        .iter()
        .flat_map(|area| &area.settings)
        .find(|s| s.link.is_some() && format!("{:?}", s.id).eq_ignore_ascii_case(key))
        .ok_or_else(|| format!("unknown setting '{key}'"))?;
    if level >= LEVEL_COUNT {
        return Err(format!("level must be below {LEVEL_COUNT}").into());
    }
    let value: i32 = match value.to_ascii_lowercase().as_str() {
        "on" | "true" => 1,
        "off" | "false" => 0,
        other => other.parse()?,
    };
    setting.set_clamped(options, level, value);
    store.save(options)?;
    println!("{:?} = {}", setting.id, describe(setting, options, level));
    Ok(())
}
