//! CRC-32 (reflected polynomial 0xEDB88320) and the cached checksum of the
//! running executable that guards the option snapshot.

use log::{debug, warn};
use std::io::Read;
use std::sync::OnceLock;

const CRC32_TABLE: [u32; 256] = {
    let mut table = [0u32; 256];
    let mut i = 0u32;
    while i < 256 {
        let mut crc = i;
        let mut j = 0;
        while j < 8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ 0xEDB88320;
            } else {
                crc >>= 1;
            }
            j += 1;
        }
        table[i as usize] = crc;
        i += 1;
    }
    table
};

/// Incremental CRC-32 state. `finish` applies the final complement.
#[derive(Clone, Copy, Debug)]
pub struct Crc32 {
    state: u32,
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Crc32 {
    #[inline(always)]
    pub const fn new() -> Self {
        Self { state: 0xFFFFFFFF }
    }

    pub fn update(&mut self, data: &[u8]) {
        let mut crc = self.state;
        for &b in data {
            crc = CRC32_TABLE[((crc ^ b as u32) & 0xFF) as usize] ^ (crc >> 8);
        }
        self.state = crc;
    }

    #[inline(always)]
    pub const fn finish(self) -> u32 {
        self.state ^ 0xFFFFFFFF
    }
}

pub fn crc32(data: &[u8]) -> u32 {
    let mut hasher = Crc32::new();
    hasher.update(data);
    hasher.finish()
}

pub fn crc32_reader<R: Read>(mut reader: R) -> std::io::Result<u32> {
    let mut hasher = Crc32::new();
    let mut buf = [0u8; 64 * 1024];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finish())
}

static EXE_CRC: OnceLock<u32> = OnceLock::new();

/// Checksum of the running executable, computed on first use and cached for
/// the rest of the process. An unreadable image yields 0, which never matches
/// a snapshot written by a readable one.
pub fn exe_checksum() -> u32 {
    *EXE_CRC.get_or_init(|| {
        let result = std::env::current_exe()
            .and_then(std::fs::File::open)
            .map(std::io::BufReader::new)
            .and_then(crc32_reader);
        match result {
            Ok(crc) => {
                debug!("Executable CRC-32: {crc:08x}");
                crc
            }
            Err(e) => {
                warn!("Failed to checksum the executable: {e}");
                0
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{Crc32, crc32, crc32_reader, exe_checksum};

    #[test]
    fn matches_the_standard_check_value() {
        assert_eq!(crc32(b"123456789"), 0xCBF43926);
        assert_eq!(crc32(b""), 0);
    }

    #[test]
    fn incremental_updates_equal_one_shot() {
        let data = b"The quick brown fox jumps over the lazy dog";
        let mut hasher = Crc32::new();
        for chunk in data.chunks(7) {
            hasher.update(chunk);
        }
        assert_eq!(hasher.finish(), crc32(data));
        assert_eq!(hasher.finish(), 0x414FA339);
    }

    #[test]
    fn reader_checksum_matches_slice_checksum() {
        let data: Vec<u8> = (0..200_000u32).map(|i| (i * 31 % 251) as u8).collect();
        let from_reader = crc32_reader(std::io::Cursor::new(&data)).expect("in-memory read");
        assert_eq!(from_reader, crc32(&data));
    }

    #[test]
    fn executable_checksum_is_cached() {
        assert_eq!(exe_checksum(), exe_checksum());
    }
}
