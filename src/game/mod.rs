pub mod options;
pub mod persist;

use bitflags::bitflags;

bitflags! {
    /// Commands the menu hands back to the surrounding game loop.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    #[must_use]
    pub struct GameRequests: u8 {
        const QUICKSAVE = 1 << 0;
        const QUICKLOAD = 1 << 1;
        const RESTART_LEVEL = 1 << 2;
        const RESTART_GAME = 1 << 3;
        const QUIT = 1 << 4;
    }
}
