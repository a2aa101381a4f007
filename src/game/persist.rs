//! Binary option snapshot (`popmenu.cfg`).
//!
//! Layout, in order:
//! - `u32` checksum of the executable that wrote the file (little endian)
//! - `u8` levelset name length followed by that many name bytes
//! - the user-managed set
//! - the mod-managed set, including the fixes and custom-options records
//!
//! Every value is fixed width and little endian. The file is tied to the
//! executable: a checksum mismatch means the whole file is ignored.

use crate::Result;
use crate::core::crc32;
use crate::game::options::{ModOptions, Options, UserOptions};
use bincode::config::Config;
use bincode::{Decode, Encode};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

const MAX_NAME_LEN: usize = u8::MAX as usize;

#[inline(always)]
fn codec() -> impl Config {
    bincode::config::legacy()
}

/// One pass over a field set. Reading and writing share the same field order.
trait Process {
    fn field<T: Encode + Decode<()>>(&mut self, value: &mut T) -> Result<()>;
}

struct Writer<'a, W: Write>(&'a mut W);

impl<W: Write> Process for Writer<'_, W> {
    fn field<T: Encode + Decode<()>>(&mut self, value: &mut T) -> Result<()> {
        bincode::encode_into_std_write(&*value, &mut *self.0, codec())?;
        Ok(())
    }
}

struct Reader<'a, R: Read>(&'a mut R);

impl<R: Read> Process for Reader<'_, R> {
    fn field<T: Encode + Decode<()>>(&mut self, value: &mut T) -> Result<()> {
        *value = bincode::decode_from_std_read(&mut *self.0, codec())?;
        Ok(())
    }
}

fn process_user_managed<P: Process>(p: &mut P, user: &mut UserOptions) -> Result<()> {
    p.field(&mut user.enable_pause_menu)?;
    p.field(&mut user.enable_info_screen)?;
    p.field(&mut user.is_sound_on)?;
    p.field(&mut user.enable_music)?;
    p.field(&mut user.enable_controller_rumble)?;
    p.field(&mut user.joystick_threshold)?;
    p.field(&mut user.joystick_only_horizontal)?;
    p.field(&mut user.enable_replay)?;
    p.field(&mut user.start_fullscreen)?;
    p.field(&mut user.use_correct_aspect_ratio)?;
    p.field(&mut user.use_integer_scaling)?;
    p.field(&mut user.scaling_type)?;
    p.field(&mut user.enable_fade)?;
    p.field(&mut user.enable_flash)?;
    p.field(&mut user.enable_lighting)?;
    Ok(())
}

fn process_mod_managed<P: Process>(p: &mut P, mods: &mut ModOptions) -> Result<()> {
    p.field(&mut mods.enable_copyprot)?;
    p.field(&mut mods.enable_quicksave)?;
    p.field(&mut mods.enable_quicksave_penalty)?;
    p.field(&mut mods.use_fixes_and_enhancements)?;
    p.field(&mut mods.fixes)?;
    p.field(&mut mods.use_custom_options)?;
    p.field(&mut mods.custom)?;
    Ok(())
}

#[inline(always)]
fn truncated_name(name: &str) -> &[u8] {
    let bytes = name.as_bytes();
    &bytes[..bytes.len().min(MAX_NAME_LEN)]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No snapshot on disk.
    Missing,
    /// The text config was edited after the snapshot was written.
    Stale,
    /// Written by a different executable.
    ChecksumMismatch,
    /// Truncated or undecodable; nothing was applied.
    Malformed,
    /// The levelset name differed, so only the user-managed set was applied.
    UserOnly,
    Full,
}

pub fn write_snapshot<W: Write>(
    w: &mut W,
    options: &Options,
    exe_crc: u32,
    levelset_name: &str,
) -> Result<()> {
    let name = truncated_name(levelset_name);
    let mut user = options.user;
    let mut mods = options.mods;

    let mut writer = Writer(w);
    writer.field(&mut { exe_crc })?;
    writer.field(&mut (name.len() as u8))?;
    writer.0.write_all(name)?;
    process_user_managed(&mut writer, &mut user)?;
    process_mod_managed(&mut writer, &mut mods)?;
    Ok(())
}

/// Applies a snapshot to `options`. Each set is decoded into a scratch copy
/// and only committed once it decoded completely.
pub fn read_snapshot<R: Read>(
    r: &mut R,
    options: &mut Options,
    exe_crc: u32,
    levelset_name: &str,
) -> Result<LoadOutcome> {
    let mut reader = Reader(r);

    let mut stored_crc = 0u32;
    reader.field(&mut stored_crc)?;
    if stored_crc != exe_crc {
        return Ok(LoadOutcome::ChecksumMismatch);
    }

    let mut name_len = 0u8;
    reader.field(&mut name_len)?;
    let mut stored_name = vec![0u8; name_len as usize];
    reader.0.read_exact(&mut stored_name)?;

    let mut user = options.user;
    process_user_managed(&mut reader, &mut user)?;
    options.user = user;

    if stored_name != truncated_name(levelset_name) {
        return Ok(LoadOutcome::UserOnly);
    }

    let mut mods = options.mods;
    process_mod_managed(&mut reader, &mut mods)?;
    options.mods = mods;
    Ok(LoadOutcome::Full)
}

/// The snapshot file and the text config whose modification time can
/// invalidate it.
#[derive(Clone, Debug)]
pub struct SnapshotStore {
    pub cfg_path: PathBuf,
    pub ini_path: PathBuf,
    pub levelset_name: String,
    exe_crc: u32,
    ini_generated: bool,
}

impl SnapshotStore {
    pub fn new(cfg_path: PathBuf, ini_path: PathBuf, levelset_name: String) -> Self {
        Self {
            cfg_path,
            ini_path,
            levelset_name,
            exe_crc: crc32::exe_checksum(),
            ini_generated: false,
        }
    }

    /// A text config written by the program itself holds no manual edits
    /// and does not invalidate the snapshot.
    #[must_use]
    pub fn with_generated_ini(mut self, generated: bool) -> Self {
        self.ini_generated = generated;
        self
    }

    #[must_use]
    pub fn with_checksum(mut self, exe_crc: u32) -> Self {
        self.exe_crc = exe_crc;
        self
    }

    #[inline(always)]
    pub const fn checksum(&self) -> u32 {
        self.exe_crc
    }

    pub fn save(&self, options: &Options) -> Result<()> {
        let mut out = BufWriter::new(File::create(&self.cfg_path)?);
        write_snapshot(&mut out, options, self.exe_crc, &self.levelset_name)?;
        out.flush()?;
        debug!("Saved option snapshot to '{}'.", self.cfg_path.display());
        Ok(())
    }

    /// Never fails: every problem degrades to "no saved overrides".
    pub fn load(&self, options: &mut Options) -> LoadOutcome {
        if !self.ini_generated && is_newer(&self.ini_path, &self.cfg_path) {
            info!(
                "'{}' is newer than '{}', keeping the text config values.",
                self.ini_path.display(),
                self.cfg_path.display()
            );
            return LoadOutcome::Stale;
        }

        let file = match File::open(&self.cfg_path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return LoadOutcome::Missing,
            Err(e) => {
                warn!("Failed to open '{}': {e}", self.cfg_path.display());
                return LoadOutcome::Missing;
            }
        };

        let mut reader = BufReader::new(file);
        let outcome = match read_snapshot(&mut reader, options, self.exe_crc, &self.levelset_name) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Ignoring malformed snapshot '{}': {e}", self.cfg_path.display());
                LoadOutcome::Malformed
            }
        };
        match outcome {
            LoadOutcome::ChecksumMismatch => {
                info!("Snapshot was written by a different executable, ignoring it.");
            }
            LoadOutcome::UserOnly => {
                info!("Levelset changed, discarding the saved mod-managed options.");
            }
            _ => debug!("Snapshot load: {outcome:?}"),
        }
        outcome
    }
}

fn is_newer(candidate: &Path, reference: &Path) -> bool {
    let modified = |p: &Path| std::fs::metadata(p).and_then(|m| m.modified());
    match (modified(candidate), modified(reference)) {
        (Ok(a), Ok(b)) => a > b,
        _ => false,
    }
}
