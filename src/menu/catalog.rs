//! The settings shown by the menu, grouped by area.

use crate::game::options::Options;
use crate::menu::setting::{Area, Registry, Section, Setting, slot_link};

/// Stable setting identities. The `Debug` name doubles as the text config key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettingId {
    // general
    ShowMenuOnPause,
    EnableInfoScreen,
    EnableSound,
    EnableMusic,
    EnableControllerRumble,
    JoystickThreshold,
    JoystickOnlyHorizontal,
    ResetAllSettings,
    // visuals
    Fullscreen,
    UseCorrectAspectRatio,
    UseIntegerScaling,
    ScalingType,
    EnableFade,
    EnableFlash,
    EnableLighting,
    // gameplay
    EnableCheats,
    EnableCopyprot,
    EnableQuicksave,
    EnableQuicksavePenalty,
    EnableReplay,
    UseFixesAndEnhancements,
    EnableCrouchAfterClimbing,
    EnableFreezeTimeDuringEndMusic,
    EnableRememberGuardHp,
    EnableSuperHighJump,
    FixGateSounds,
    FixTwoCollBug,
    FixInfiniteDownBug,
    FixGateDrawingBug,
    FixBigpillarClimb,
    FixJumpDistanceAtEdge,
    FixEdgeDistanceCheckWhenClimbing,
    FixPainlessFallOnGuard,
    FixWallBumpTriggersTileBelow,
    FixStandOnThinAir,
    FixPressThroughClosedGates,
    FixGrabFallingSpeed,
    FixSkeletonChomperBlood,
    FixMoveAfterDrink,
    FixLooseLeftOfPotion,
    FixGuardFollowingThroughClosedGates,
    FixSafeLandingOnSpikes,
    FixGlideThroughWall,
    FixDropThroughTapestry,
    FixLandAgainstGateOrTapestry,
    FixUnintendedSwordStrike,
    FixRetreatWithoutLeavingRoom,
    FixRunningJumpThroughTapestry,
    FixPushGuardIntoWall,
    FixJumpThroughWallAboveGate,
    FixChompersNotStarting,
    FixFeatherInterruptedByLeveldoor,
    FixOffscreenGuardsDisappearing,
    FixMoveAfterSheathe,
    FixHiddenFloorsDuringFlashing,
    FixHangOnTeleport,
    FixExitDoor,
    FixQuicksaveDuringFeather,
    FixCapedPrinceSlidingThroughGate,
    FixDoortopDisablingGuard,
    FixJumpingOverGuard,
    FixDrop2RoomsClimbingLooseTile,
    FixFallingThroughFloorDuringSwordStrike,
    // mods
    UseCustomOptions,
    LevelSettings,
    StartMinutesLeft,
    StartTicksLeft,
    StartHitp,
    MaxHitpAllowed,
    SavingAllowedFirstLevel,
    SavingAllowedLastLevel,
    StartUpsideDown,
    StartInBlindMode,
    CopyprotLevel,
    DrawnTileTopLevelEdge,
    DrawnTileLeftLevelEdge,
    LevelEdgeHitTile,
    AllowTriggeringAnyTile,
    EnableWdaInPalace,
    FirstLevel,
    SkipTitle,
    ShiftLAllowedUntilLevel,
    ShiftLReducedMinutes,
    ShiftLReducedTicks,
    DemoHitp,
    DemoEndRoom,
    IntroMusicLevel,
    HaveSwordFromLevel,
    CheckpointLevel,
    CheckpointRespawnDir,
    CheckpointRespawnRoom,
    CheckpointRespawnTilepos,
    CheckpointClearTileRoom,
    CheckpointClearTileCol,
    CheckpointClearTileRow,
    SkeletonLevel,
    SkeletonRoom,
    SkeletonTriggerColumn1,
    SkeletonTriggerColumn2,
    SkeletonColumn,
    SkeletonRow,
    SkeletonRequireOpenLevelDoor,
    SkeletonSkill,
    SkeletonReappearRoom,
    SkeletonReappearX,
    SkeletonReappearRow,
    SkeletonReappearDir,
    MirrorLevel,
    MirrorRoom,
    MirrorColumn,
    MirrorRow,
    MirrorTile,
    ShowMirrorImage,
    ShadowStealLevel,
    ShadowStealRoom,
    ShadowStepLevel,
    ShadowStepRoom,
    FallingExitLevel,
    FallingExitRoom,
    FallingEntryLevel,
    FallingEntryRoom,
    MouseLevel,
    MouseRoom,
    MouseDelay,
    MouseObject,
    MouseStartX,
    LooseTilesLevel,
    LooseTilesRoom1,
    LooseTilesRoom2,
    LooseTilesFirstTile,
    LooseTilesLastTile,
    JaffarVictoryLevel,
    JaffarVictoryFlashTime,
    HideLevelNumberFirstLevel,
    Level13LevelNumber,
    VictoryStopsTimeLevel,
    WinLevel,
    WinRoom,
    LooseFloorDelay,
    BaseSpeed,
    FightSpeed,
    ChomperSpeed,
    // level customization
    LevelSettingsAnother,
    LevelType,
    LevelColor,
    GuardType,
    GuardHp,
    Cutscene,
    EntryPose,
    SeamlessExit,
}

/// Focused setting when nothing else has been chosen yet.
pub const DEFAULT_SETTING: SettingId = SettingId::EnableInfoScreen;

/* ------------------------------- value names ------------------------------ */

const SCALING_NAMES: &[&str] = &["Sharp", "Fuzzy", "Blurry"];
const NEVER_IS_16: &[(&str, i32)] = &[("Never", 16)];
const ROW_NAMES: &[&str] = &["Top", "Middle", "Bottom"];
const DIRECTION_NAMES: &[(&str, i32)] = &[("Left", -1), ("Right", 0)];
const TILE_NAMES: &[&str] = &[
    "Empty", "Floor", "Spikes", "Pillar", "Gate",
    "Stuck button", "Closer button", "Tapestry/floor", "Big pillar: bottom", "Big pillar: top",
    "Potion", "Loose floor", "Tapestry", "Mirror", "Floor/debris",
    "Raise button", "Level door: left", "Level door: right", "Chomper", "Torch",
    "Wall", "Skeleton", "Sword", "Balcony: left", "Balcony: right",
    "Lattice: pillar", "Lattice: down", "Lattice: small", "Lattice: left", "Lattice: right",
    "Torch/debris", "Tile 31 (unused)",
];
const LEVEL_TYPE_NAMES: &[&str] = &["Dungeon", "Palace"];
const GUARD_TYPE_NAMES: &[(&str, i32)] = &[
    ("None", -1),
    ("Normal", 0),
    ("Fat", 1),
    ("Skeleton", 2),
    ("Vizier", 3),
    ("Shadow", 4),
];
const ENTRY_POSE_NAMES: &[&str] = &["Turning", "Falling", "Running"];
const SEAMLESS_EXIT_NAMES: &[(&str, i32)] = &[("Off", -1)];

const U16_MAX: i32 = u16::MAX as i32;
const I16_MAX: i32 = i16::MAX as i32;

/* ------------------------------- predicates ------------------------------- */

fn integer_scaling_possible(o: &Options) -> bool {
    o.integer_scaling_possible
}

fn fixes_enabled(o: &Options) -> bool {
    o.mods.use_fixes_and_enhancements
}

pub fn custom_options_enabled(o: &Options) -> bool {
    o.mods.use_custom_options
}

/* --------------------------------- areas ---------------------------------- */

use SettingId as Id;

fn general() -> Vec<Setting> {
    vec![
        Setting::toggle(Id::ShowMenuOnPause, slot_link!(Flag, user.enable_pause_menu),
            "Enable pause menu",
            "Show the in-game menu when you pause the game.\nIf disabled, you can still bring up the menu by pressing Backspace."),
        Setting::toggle(Id::EnableInfoScreen, slot_link!(Flag, user.enable_info_screen),
            "Display info screen on launch",
            "Display the information screen when the game starts."),
        Setting::toggle(Id::EnableSound, slot_link!(Flag, user.is_sound_on),
            "Enable sound", "Turn sound on or off."),
        Setting::toggle(Id::EnableMusic, slot_link!(Flag, user.enable_music),
            "Enable music", "Turn music on or off."),
        Setting::toggle(Id::EnableControllerRumble, slot_link!(Flag, user.enable_controller_rumble),
            "Enable controller rumble",
            "If using a controller with a rumble motor, provide haptic feedback when the kid is hurt."),
        Setting::number(Id::JoystickThreshold, slot_link!(Int, user.joystick_threshold), 0, I16_MAX,
            "Joystick threshold", "Joystick 'dead zone' sensitivity threshold.")
            .snap(1000),
        Setting::toggle(Id::JoystickOnlyHorizontal, slot_link!(Flag, user.joystick_only_horizontal),
            "Horizontal joystick movement only",
            "Use joysticks for horizontal movement only, not all-directional."),
        Setting::action(Id::ResetAllSettings,
            "Restore defaults...", "Revert all settings to the default state."),
    ]
}

fn visuals() -> Vec<Setting> {
    vec![
        Setting::toggle(Id::Fullscreen, slot_link!(Flag, user.start_fullscreen),
            "Start fullscreen",
            "Start the game in fullscreen mode.\nYou can also toggle fullscreen by pressing Alt+Enter."),
        Setting::toggle(Id::UseCorrectAspectRatio, slot_link!(Flag, user.use_correct_aspect_ratio),
            "Use 4:3 aspect ratio",
            "Render the game in the originally intended 4:3 aspect ratio.\nNB. Works best using a high resolution."),
        Setting::toggle(Id::UseIntegerScaling, slot_link!(Flag, user.use_integer_scaling),
            "Use integer scaling",
            "Enable pixel perfect scaling. That is, make all pixels the same size by forcing integer scale factors.\nCombining with 4:3 aspect ratio requires at least 1600x1200.")
            .requires(integer_scaling_possible),
        Setting::number(Id::ScalingType, slot_link!(Byte, user.scaling_type), 0, 2,
            "Scaling method",
            "Sharp - Use nearest neighbour resampling.\nFuzzy - First upscale to double size, then use smooth scaling.\nBlurry - Use smooth scaling.")
            .names(SCALING_NAMES),
        Setting::toggle(Id::EnableFade, slot_link!(Flag, user.enable_fade),
            "Fading enabled", "Turn fading on or off."),
        Setting::toggle(Id::EnableFlash, slot_link!(Flag, user.enable_flash),
            "Flashing enabled", "Turn flashing on or off."),
        Setting::toggle(Id::EnableLighting, slot_link!(Flag, user.enable_lighting),
            "Torch shadows enabled",
            "Darken those parts of the screen which are not near a torch."),
    ]
}

fn gameplay() -> Vec<Setting> {
    let fix = |id, link, label, help| Setting::toggle(id, link, label, help).requires(fixes_enabled);
    vec![
        Setting::toggle(Id::EnableCheats, slot_link!(Flag, cheats_enabled),
            "Enable cheats", "Turn cheats on or off."),
        Setting::toggle(Id::EnableCopyprot, slot_link!(Flag, mods.enable_copyprot),
            "Enable copy protection level",
            "Enable or disable the potions (copy protection) level."),
        Setting::toggle(Id::EnableQuicksave, slot_link!(Flag, mods.enable_quicksave),
            "Enable quicksave",
            "Enable quicksave/load feature.\nPress F6 to quicksave, F9 to quickload."),
        Setting::toggle(Id::EnableQuicksavePenalty, slot_link!(Flag, mods.enable_quicksave_penalty),
            "Quicksave time penalty",
            "Try to let time run out when quickloading (similar to dying).\nActually, the 'remaining time' will still be restored, but a penalty (up to one minute) will be applied."),
        Setting::toggle(Id::EnableReplay, slot_link!(Flag, user.enable_replay),
            "Enable replays",
            "Enable recording/replay feature.\nPress Ctrl+Tab in-game to start recording.\nTo stop, press Ctrl+Tab again."),
        Setting::toggle(Id::UseFixesAndEnhancements, slot_link!(Flag, mods.use_fixes_and_enhancements),
            "Enhanced mode (allow bug fixes)",
            "Turn on game fixes and enhancements.\nBelow, you can turn individual fixes/enhancements on or off.\nNOTE: Some fixes disable 'tricks' that depend on game quirks."),
        fix(Id::EnableCrouchAfterClimbing, slot_link!(Flag, mods.fixes.enable_crouch_after_climbing),
            "Enable crouching after climbing",
            "Adds a way to crouch immediately after climbing up: press down and forward simultaneously. In the original game, this could not be done (pressing down always causes the kid to climb down)."),
        fix(Id::EnableFreezeTimeDuringEndMusic, slot_link!(Flag, mods.fixes.enable_freeze_time_during_end_music),
            "Freeze time during level end music",
            "Time runs out while the level ending music plays; however, the music can be skipped by disabling sound. This option stops time while the ending music is playing (so there is no need to disable sound)."),
        fix(Id::EnableRememberGuardHp, slot_link!(Flag, mods.fixes.enable_remember_guard_hp),
            "Remember guard hitpoints",
            "Enable guard hitpoints not resetting to their default (maximum) value when re-entering the room."),
        fix(Id::EnableSuperHighJump, slot_link!(Flag, mods.fixes.enable_super_high_jump),
            "Enable super high jump",
            "Prince in feather mode (after drinking a green potion) can jump 2 stories high."),
        fix(Id::FixGateSounds, slot_link!(Flag, mods.fixes.fix_gate_sounds),
            "Fix gate sounds bug",
            "If a room is linked to itself on the left, the closing sounds of the gates in that room can't be heard."),
        fix(Id::FixTwoCollBug, slot_link!(Flag, mods.fixes.fix_two_coll_bug),
            "Fix two collisions bug",
            "An open gate or chomper may enable the Kid to go through walls. (Trick 7, 37, 62)"),
        fix(Id::FixInfiniteDownBug, slot_link!(Flag, mods.fixes.fix_infinite_down_bug),
            "Fix infinite down bug",
            "If a room is linked to itself at the bottom, and the Kid's column has no floors, the game hangs."),
        fix(Id::FixGateDrawingBug, slot_link!(Flag, mods.fixes.fix_gate_drawing_bug),
            "Fix gate drawing bug",
            "When a gate is under another gate, the top of the bottom gate is not visible."),
        fix(Id::FixBigpillarClimb, slot_link!(Flag, mods.fixes.fix_bigpillar_climb),
            "Fix big pillar climbing bug",
            "When climbing up to a floor with a big pillar top behind, turned right, Kid sees through floor."),
        fix(Id::FixJumpDistanceAtEdge, slot_link!(Flag, mods.fixes.fix_jump_distance_at_edge),
            "Fix jump distance at edge",
            "When climbing up two floors, turning around and jumping upward, the kid falls down. This fix makes the workaround of Trick 25 unnecessary."),
        fix(Id::FixEdgeDistanceCheckWhenClimbing, slot_link!(Flag, mods.fixes.fix_edge_distance_check_when_climbing),
            "Fix edge distance check when climbing",
            "When climbing to a higher floor, the game unnecessarily checks how far away the edge below is. Sometimes you will \"teleport\" some distance when climbing from firm ground."),
        fix(Id::FixPainlessFallOnGuard, slot_link!(Flag, mods.fixes.fix_painless_fall_on_guard),
            "Fix painless fall on guard",
            "Falling from a great height directly on top of guards does not hurt."),
        fix(Id::FixWallBumpTriggersTileBelow, slot_link!(Flag, mods.fixes.fix_wall_bump_triggers_tile_below),
            "Fix wall bump triggering tile below",
            "Bumping against a wall may cause a loose floor below to drop, even though it has not been touched. (Trick 18, 34)"),
        fix(Id::FixStandOnThinAir, slot_link!(Flag, mods.fixes.fix_stand_on_thin_air),
            "Fix standing on thin air",
            "When pressing a loose tile, you can temporarily stand on thin air by standing up from crouching."),
        fix(Id::FixPressThroughClosedGates, slot_link!(Flag, mods.fixes.fix_press_through_closed_gates),
            "Fix pressing through closed gates",
            "Buttons directly to the right of gates can be pressed even though the gate is closed (Trick 1)"),
        fix(Id::FixGrabFallingSpeed, slot_link!(Flag, mods.fixes.fix_grab_falling_speed),
            "Fix grab falling speed",
            "By jumping and bumping into a wall, you can sometimes grab a ledge two stories down (which should not be possible)."),
        fix(Id::FixSkeletonChomperBlood, slot_link!(Flag, mods.fixes.fix_skeleton_chomper_blood),
            "Fix skeleton chomper blood",
            "When chomped, skeletons cause the chomper to become bloody even though skeletons do not have blood."),
        fix(Id::FixMoveAfterDrink, slot_link!(Flag, mods.fixes.fix_move_after_drink),
            "Fix movement after drinking",
            "Controls do not get released properly when drinking a potion, sometimes causing unintended movements."),
        fix(Id::FixLooseLeftOfPotion, slot_link!(Flag, mods.fixes.fix_loose_left_of_potion),
            "Fix loose floor left of potion",
            "A drawing bug occurs when a loose tile is placed to the left of a potion (or sword)."),
        fix(Id::FixGuardFollowingThroughClosedGates, slot_link!(Flag, mods.fixes.fix_guard_following_through_closed_gates),
            "Fix guards passing closed gates",
            "Guards may \"follow\" the kid to the room on the left or right, even though there is a closed gate in between."),
        fix(Id::FixSafeLandingOnSpikes, slot_link!(Flag, mods.fixes.fix_safe_landing_on_spikes),
            "Fix safe landing on spikes",
            "When landing on the edge of a spikes tile, it is considered safe. (Trick 65)"),
        fix(Id::FixGlideThroughWall, slot_link!(Flag, mods.fixes.fix_glide_through_wall),
            "Fix gliding through walls",
            "The kid may glide through walls after turning around while running (especially when weightless)."),
        fix(Id::FixDropThroughTapestry, slot_link!(Flag, mods.fixes.fix_drop_through_tapestry),
            "Fix dropping through tapestries",
            "The kid can drop down through a closed gate, when there is a tapestry (doortop) above the gate."),
        fix(Id::FixLandAgainstGateOrTapestry, slot_link!(Flag, mods.fixes.fix_land_against_gate_or_tapestry),
            "Fix land against gate or tapestry",
            "When dropping down and landing right in front of a wall, the entire landing animation should normally play. However, when falling against a closed gate or a tapestry(+floor) tile, the animation aborts."),
        fix(Id::FixUnintendedSwordStrike, slot_link!(Flag, mods.fixes.fix_unintended_sword_strike),
            "Fix unintended sword strike",
            "Sometimes, the kid may automatically strike immediately after drawing the sword. This especially happens when dropping down from a higher floor and then turning towards the opponent."),
        fix(Id::FixRetreatWithoutLeavingRoom, slot_link!(Flag, mods.fixes.fix_retreat_without_leaving_room),
            "Fix retreat without leaving room",
            "By repeatedly pressing 'back' in a swordfight, you can retreat out of a room without the room changing. (Trick 35)"),
        fix(Id::FixRunningJumpThroughTapestry, slot_link!(Flag, mods.fixes.fix_running_jump_through_tapestry),
            "Fix running jumps through tapestries",
            "The kid can jump through a tapestry with a running jump to the left, if there is a floor above it."),
        fix(Id::FixPushGuardIntoWall, slot_link!(Flag, mods.fixes.fix_push_guard_into_wall),
            "Fix pushing guards into walls",
            "Guards can be pushed into walls, because the game does not correctly check for walls located behind a guard."),
        fix(Id::FixJumpThroughWallAboveGate, slot_link!(Flag, mods.fixes.fix_jump_through_wall_above_gate),
            "Fix jump through wall above gate",
            "By doing a running jump into a wall, you can fall behind a closed gate two floors down. (e.g. skip in Level 7)"),
        fix(Id::FixChompersNotStarting, slot_link!(Flag, mods.fixes.fix_chompers_not_starting),
            "Fix chompers not starting",
            "If you grab a ledge that is one or more floors down, the chompers on that row will not start."),
        fix(Id::FixFeatherInterruptedByLeveldoor, slot_link!(Flag, mods.fixes.fix_feather_interrupted_by_leveldoor),
            "Fix leveldoor interrupting feather fall",
            "As soon as a level door has completely opened, the feather fall effect is interrupted because the sound stops."),
        fix(Id::FixOffscreenGuardsDisappearing, slot_link!(Flag, mods.fixes.fix_offscreen_guards_disappearing),
            "Fix offscreen guards disappearing",
            "Guards will often not reappear in another room if they have been pushed (partly or entirely) offscreen."),
        fix(Id::FixMoveAfterSheathe, slot_link!(Flag, mods.fixes.fix_move_after_sheathe),
            "Fix movement after sheathing",
            "While putting the sword away, if you press forward and down, and then release down, the kid will still duck."),
        fix(Id::FixHiddenFloorsDuringFlashing, slot_link!(Flag, mods.fixes.fix_hidden_floors_during_flashing),
            "Fix hidden floors during flashing",
            "After uniting with the shadow in level 12, the hidden floors will not appear until after the flashing stops."),
        fix(Id::FixHangOnTeleport, slot_link!(Flag, mods.fixes.fix_hang_on_teleport),
            "Fix hang on teleport bug",
            "By jumping towards one of the bottom corners of the room and grabbing a ledge, you can teleport to the room above."),
        fix(Id::FixExitDoor, slot_link!(Flag, mods.fixes.fix_exit_door),
            "Fix exit doors",
            "You can enter closed exit doors after you met the shadow or Jaffar died, or after you opened one of multiple exits."),
        fix(Id::FixQuicksaveDuringFeather, slot_link!(Flag, mods.fixes.fix_quicksave_during_feather),
            "Fix quick save in feather mode",
            "You cannot save game while floating in feather mode."),
        fix(Id::FixCapedPrinceSlidingThroughGate, slot_link!(Flag, mods.fixes.fix_caped_prince_sliding_through_gate),
            "Fix sliding through closed gate",
            "If you are using the caped prince graphics, and crouch with your back towards a closed gate on the left edge on the room, then the prince will slide through the gate."),
        fix(Id::FixDoortopDisablingGuard, slot_link!(Flag, mods.fixes.fix_doortop_disabling_guard),
            "Fix door top disabling guard",
            "Guards become inactive if they are standing on a door top (with floor), or if the prince is standing on a door top."),
        fix(Id::FixJumpingOverGuard, slot_link!(Flag, mods.fixes.fix_jumping_over_guard),
            "Fix jumping over guard",
            "Prince can jump over guards with a properly timed running jump."),
        fix(Id::FixDrop2RoomsClimbingLooseTile, slot_link!(Flag, mods.fixes.fix_drop_2_rooms_climbing_loose_tile),
            "Fix dropping 2 rooms with loose tile",
            "Prince can fall 2 rooms down while climbing a loose tile in a room above. (Trick 153)"),
        fix(Id::FixFallingThroughFloorDuringSwordStrike, slot_link!(Flag, mods.fixes.fix_falling_through_floor_during_sword_strike),
            "Fix dropping through floor striking",
            "Prince or guard can fall through the floor during a sword strike sequence."),
    ]
}

fn mods() -> Vec<Setting> {
    let toggle = |id, link, label, help| Setting::toggle(id, link, label, help).requires(custom_options_enabled);
    let number = |id, link, min, max, label, help| {
        Setting::number(id, link, min, max, label, help).requires(custom_options_enabled)
    };
    vec![
        Setting::toggle(Id::UseCustomOptions, slot_link!(Flag, mods.use_custom_options),
            "Use customization options",
            "Turn customization options on or off.\n(default = OFF)"),
        Setting::action(Id::LevelSettings,
            "Customize level...",
            "Change level-specific options (such as level type, guard type, number of guard hitpoints).")
            .requires(custom_options_enabled),
        number(Id::StartMinutesLeft, slot_link!(Short, mods.custom.start_minutes_left), -1, I16_MAX,
            "Starting minutes left",
            "Starting minutes left. (default = 60)\nTo disable the time limit completely, set this to -1."),
        number(Id::StartTicksLeft, slot_link!(Word, mods.custom.start_ticks_left), 0, U16_MAX,
            "Starting seconds left",
            "Starting number of seconds left in the first minute.\n(default = 59.92)")
            .ticks(),
        number(Id::StartHitp, slot_link!(Word, mods.custom.start_hitp), 0, U16_MAX,
            "Starting hitpoints", "Starting hitpoints. (default = 3)"),
        number(Id::MaxHitpAllowed, slot_link!(Word, mods.custom.max_hitp_allowed), 0, U16_MAX,
            "Max hitpoints allowed", "Maximum number of hitpoints you can get. (default = 10)"),
        number(Id::SavingAllowedFirstLevel, slot_link!(Word, mods.custom.saving_allowed_first_level), 0, 16,
            "Saving allowed: first level", "First level where you can save the game. (default = 3)")
            .keyed(NEVER_IS_16),
        number(Id::SavingAllowedLastLevel, slot_link!(Word, mods.custom.saving_allowed_last_level), 0, 16,
            "Saving allowed: last level", "Last level where you can save the game. (default = 13)")
            .keyed(NEVER_IS_16),
        toggle(Id::StartUpsideDown, slot_link!(Flag, mods.custom.start_upside_down),
            "Start with the screen flipped",
            "Start the game with the screen flipped upside down, similar to Shift+I (default = OFF)"),
        toggle(Id::StartInBlindMode, slot_link!(Flag, mods.custom.start_in_blind_mode),
            "Start in blind mode", "Start in blind mode, similar to Shift+B (default = OFF)"),
        number(Id::CopyprotLevel, slot_link!(Word, mods.custom.copyprot_level), 0, 16,
            "Copy protection before level",
            "The potions level will appear before this level. (default = 2)")
            .keyed(NEVER_IS_16),
        number(Id::DrawnTileTopLevelEdge, slot_link!(Byte, mods.custom.drawn_tile_top_level_edge), 0, 31,
            "Drawn tile: top level edge",
            "Tile drawn at the top of the room if there is no room that way. (default = floor)")
            .names(TILE_NAMES),
        number(Id::DrawnTileLeftLevelEdge, slot_link!(Byte, mods.custom.drawn_tile_left_level_edge), 0, 31,
            "Drawn tile: left level edge",
            "Tile drawn at the left of the room if there is no room that way. (default = wall)")
            .names(TILE_NAMES),
        number(Id::LevelEdgeHitTile, slot_link!(Byte, mods.custom.level_edge_hit_tile), 0, 31,
            "Level edge hit tile",
            "Tile behavior at the top or left of the room if there is no room that way (default = wall)")
            .names(TILE_NAMES),
        toggle(Id::AllowTriggeringAnyTile, slot_link!(Flag, mods.custom.allow_triggering_any_tile),
            "Allow triggering any tile",
            "Enable triggering any tile. For example a button could make loose floors fall, or start a stuck chomper. (default = OFF)"),
        toggle(Id::EnableWdaInPalace, slot_link!(Flag, mods.custom.enable_wda_in_palace),
            "Enable WDA in palace",
            "Enable the dungeon wall drawing algorithm in the palace.\nN.B. Use with a modified VPALACE.DAT that provides dungeon-like wall graphics! (default = OFF)"),
        number(Id::FirstLevel, slot_link!(Word, mods.custom.first_level), 0, 15,
            "First level", "Level that will be loaded when starting a new game.\n(default = 1)"),
        toggle(Id::SkipTitle, slot_link!(Flag, mods.custom.skip_title),
            "Skip title sequence",
            "Always skip the title sequence: the first level will be loaded immediately.\n(default = OFF)"),
        number(Id::ShiftLAllowedUntilLevel, slot_link!(Word, mods.custom.shift_l_allowed_until_level), 0, 16,
            "Shift+L allowed until level",
            "First level where level skipping with Shift+L is denied in non-cheat mode.\n(default = 4)")
            .keyed(NEVER_IS_16),
        number(Id::ShiftLReducedMinutes, slot_link!(Word, mods.custom.shift_l_reduced_minutes), 0, U16_MAX,
            "Minutes left after Shift+L used",
            "Number of minutes left after Shift+L is used in non-cheat mode.\n(default = 15)"),
        number(Id::ShiftLReducedTicks, slot_link!(Word, mods.custom.shift_l_reduced_ticks), 0, U16_MAX,
            "Seconds left after Shift+L used",
            "Number of seconds left after Shift+L is used in non-cheat mode.\n(default = 59.92)")
            .ticks(),
        number(Id::DemoHitp, slot_link!(Word, mods.custom.demo_hitp), 0, U16_MAX,
            "Demo level hitpoints", "Hitpoints the kid has on the demo level.\n(default = 4)"),
        number(Id::DemoEndRoom, slot_link!(Word, mods.custom.demo_end_room), 1, 24,
            "Demo level ending room", "Demo level ending room.\n(default = 24)"),
        number(Id::IntroMusicLevel, slot_link!(Word, mods.custom.intro_music_level), 0, 16,
            "Level with intro music",
            "Level where the presentation music is played when the kid crouches down. (default = 1)\nNote: only works if this level is the starting level.")
            .keyed(NEVER_IS_16),
        number(Id::HaveSwordFromLevel, slot_link!(Word, mods.custom.have_sword_from_level), 1, 16,
            "Have sword from level",
            "First level (except the demo level) where kid has the sword.\n(default = 2)")
            .keyed(NEVER_IS_16),
        number(Id::CheckpointLevel, slot_link!(Word, mods.custom.checkpoint_level), 0, 16,
            "Checkpoint level",
            "Level where there is a checkpoint. (default = 3)\nThe checkpoint is triggered when leaving room 7 to the left.")
            .keyed(NEVER_IS_16),
        number(Id::CheckpointRespawnDir, slot_link!(SByte, mods.custom.checkpoint_respawn_dir), -1, 0,
            "Checkpoint respawn direction",
            "Respawn direction after triggering the checkpoint.\n(default = left)")
            .keyed(DIRECTION_NAMES),
        number(Id::CheckpointRespawnRoom, slot_link!(Byte, mods.custom.checkpoint_respawn_room), 1, 24,
            "Checkpoint respawn room",
            "Room where you respawn after triggering the checkpoint.\n(default = 2)"),
        number(Id::CheckpointRespawnTilepos, slot_link!(Byte, mods.custom.checkpoint_respawn_tilepos), 0, 29,
            "Checkpoint respawn tile position",
            "Tile position (0 to 29) where you respawn after triggering the checkpoint.\n(default = 6)"),
        number(Id::CheckpointClearTileRoom, slot_link!(Byte, mods.custom.checkpoint_clear_tile_room), 1, 24,
            "Checkpoint clear tile room",
            "Room where a tile is cleared after respawning at the checkpoint location.\n(default = 7)"),
        number(Id::CheckpointClearTileCol, slot_link!(Byte, mods.custom.checkpoint_clear_tile_col), 0, 9,
            "Checkpoint clear tile column",
            "Location (column/row) of the cleared tile after respawning at the checkpoint location.\n(default: column = 4, row = top)"),
        number(Id::CheckpointClearTileRow, slot_link!(Byte, mods.custom.checkpoint_clear_tile_row), 0, 2,
            "Checkpoint clear tile row",
            "Location (column/row) of the cleared tile after respawning at the checkpoint location.\n(default: column = 4, row = top)")
            .names(ROW_NAMES),
        number(Id::SkeletonLevel, slot_link!(Word, mods.custom.skeleton_level), 0, 16,
            "Skeleton awakes level",
            "Level and room where a skeleton can come alive.\n(default: level = 3, room = 1)")
            .keyed(NEVER_IS_16),
        number(Id::SkeletonRoom, slot_link!(Byte, mods.custom.skeleton_room), 1, 24,
            "Skeleton awakes room",
            "Level and room where a skeleton can come alive.\n(default: level = 3, room = 1)"),
        number(Id::SkeletonTriggerColumn1, slot_link!(Byte, mods.custom.skeleton_trigger_column_1), 0, 9,
            "Skeleton trigger column (1)",
            "The skeleton will wake up if the kid is on one of these two columns.\n(defaults = 2,3)"),
        number(Id::SkeletonTriggerColumn2, slot_link!(Byte, mods.custom.skeleton_trigger_column_2), 0, 9,
            "Skeleton trigger column (2)",
            "The skeleton will wake up if the kid is on one of these two columns.\n(defaults = 2,3)"),
        number(Id::SkeletonColumn, slot_link!(Byte, mods.custom.skeleton_column), 0, 9,
            "Skeleton tile column",
            "Location (column/row) of the skeleton tile that will awaken.\n(default: column = 5, row = middle)"),
        number(Id::SkeletonRow, slot_link!(Byte, mods.custom.skeleton_row), 0, 2,
            "Skeleton tile row",
            "Location (column/row) of the skeleton tile that will awaken.\n(default: column = 5, row = middle)")
            .names(ROW_NAMES),
        toggle(Id::SkeletonRequireOpenLevelDoor, slot_link!(Flag, mods.custom.skeleton_require_open_level_door),
            "Skeleton requires level door",
            "Whether the level door must first be opened before the skeleton awakes.\n(default = true)"),
        number(Id::SkeletonSkill, slot_link!(Byte, mods.custom.skeleton_skill), 0, 15,
            "Skeleton skill", "Skill of the awoken skeleton.\n(default = 2)"),
        number(Id::SkeletonReappearRoom, slot_link!(Byte, mods.custom.skeleton_reappear_room), 1, 24,
            "Skeleton reappear room",
            "If the skeleton falls into this room, it will reappear there.\n(default = 3)"),
        number(Id::SkeletonReappearX, slot_link!(Byte, mods.custom.skeleton_reappear_x), 0, 255,
            "Skeleton reappear X coordinate",
            "Horizontal coordinate where the skeleton reappears.\n(default = 133)\n(58 = left edge of the room, 198 = right edge)"),
        number(Id::SkeletonReappearRow, slot_link!(Byte, mods.custom.skeleton_reappear_row), 0, 2,
            "Skeleton reappear row", "Row on which the skeleton reappears.\n(default = middle)")
            .names(ROW_NAMES),
        number(Id::SkeletonReappearDir, slot_link!(SByte, mods.custom.skeleton_reappear_dir), -1, 0,
            "Skeleton reappear direction",
            "Direction the skeleton is facing when it reappears.\n(default = right)")
            .keyed(DIRECTION_NAMES),
        number(Id::MirrorLevel, slot_link!(Word, mods.custom.mirror_level), 0, 16,
            "Mirror level", "Level and room where the mirror appears.\n(default: level = 4, room = 4)")
            .keyed(NEVER_IS_16),
        number(Id::MirrorRoom, slot_link!(Byte, mods.custom.mirror_room), 1, 24,
            "Mirror room", "Level and room where the mirror appears.\n(default: level = 4, room = 4)"),
        number(Id::MirrorColumn, slot_link!(Byte, mods.custom.mirror_column), 0, 9,
            "Mirror column",
            "Location (column/row) of the tile where the mirror appears.\n(default: column = 4, row = top)"),
        number(Id::MirrorRow, slot_link!(Byte, mods.custom.mirror_row), 0, 2,
            "Mirror row",
            "Location (column/row) of the tile where the mirror appears.\n(default: column = 4, row = top)")
            .names(ROW_NAMES),
        number(Id::MirrorTile, slot_link!(Byte, mods.custom.mirror_tile), 0, 31,
            "Mirror tile", "Tile type that appears when the mirror should appear.\n(default = mirror)")
            .names(TILE_NAMES),
        toggle(Id::ShowMirrorImage, slot_link!(Flag, mods.custom.show_mirror_image),
            "Show mirror image", "Show the kid's mirror image in the mirror.\n(default = true)"),
        number(Id::ShadowStealLevel, slot_link!(Byte, mods.custom.shadow_steal_level), 0, 16,
            "Shadow steal level", "Level where the shadow steals a potion.\n(default = 5)")
            .keyed(NEVER_IS_16),
        number(Id::ShadowStealRoom, slot_link!(Byte, mods.custom.shadow_steal_room), 1, 24,
            "Shadow steal room", "Room where the shadow steals a potion.\n(default = 24)"),
        number(Id::ShadowStepLevel, slot_link!(Byte, mods.custom.shadow_step_level), 0, 16,
            "Shadow step level", "Level where the shadow steps on a button.\n(default = 6)")
            .keyed(NEVER_IS_16),
        number(Id::ShadowStepRoom, slot_link!(Byte, mods.custom.shadow_step_room), 1, 24,
            "Shadow step room", "Room where the shadow steps on a button.\n(default = 1)"),
        number(Id::FallingExitLevel, slot_link!(Word, mods.custom.falling_exit_level), 0, 16,
            "Falling exit level",
            "Level where the kid can progress to the next level by falling off a specific room.\n(default = 6)")
            .keyed(NEVER_IS_16),
        number(Id::FallingExitRoom, slot_link!(Byte, mods.custom.falling_exit_room), 1, 24,
            "Falling exit room",
            "Room where the kid can progress to the next level by falling down.\n(default = 1)"),
        number(Id::FallingEntryLevel, slot_link!(Word, mods.custom.falling_entry_level), 0, 16,
            "Falling entry level",
            "If the kid starts in this level in this room, the starting room will not be shown,\nbut the room below instead, to allow for a falling entry. (default: level = 7, room = 17)")
            .keyed(NEVER_IS_16),
        number(Id::FallingEntryRoom, slot_link!(Byte, mods.custom.falling_entry_room), 1, 24,
            "Falling entry room",
            "If the kid starts in this level in this room, the starting room will not be shown,\nbut the room below instead, to allow for a falling entry. (default: level = 7, room = 17)"),
        number(Id::MouseLevel, slot_link!(Word, mods.custom.mouse_level), 0, 16,
            "Mouse level", "Level where the mouse appears.\n(default = 8)")
            .keyed(NEVER_IS_16),
        number(Id::MouseRoom, slot_link!(Byte, mods.custom.mouse_room), 1, 24,
            "Mouse room", "Room where the mouse appears.\n(default = 16)"),
        number(Id::MouseDelay, slot_link!(Word, mods.custom.mouse_delay), 0, U16_MAX,
            "Mouse delay", "Number of seconds to wait before the mouse appears.\n(default = 12.5)")
            .ticks(),
        number(Id::MouseObject, slot_link!(Byte, mods.custom.mouse_object), 0, 255,
            "Mouse object",
            "Mouse object type. (default = 24)\nBe careful: a value not 24 will change the mouse for the kid."),
        number(Id::MouseStartX, slot_link!(Byte, mods.custom.mouse_start_x), 0, 255,
            "Mouse start X coordinate", "Horizontal starting coordinate of the mouse.\n(default = 200)"),
        number(Id::LooseTilesLevel, slot_link!(Word, mods.custom.loose_tiles_level), 0, 16,
            "Loose tiles level", "Level where loose floor tiles will fall down.\n(default = 13)")
            .keyed(NEVER_IS_16),
        number(Id::LooseTilesRoom1, slot_link!(Byte, mods.custom.loose_tiles_room_1), 1, 24,
            "Loose tiles room (1)",
            "Rooms where visible loose floor tiles will fall down.\n(default = 23, 16)"),
        number(Id::LooseTilesRoom2, slot_link!(Byte, mods.custom.loose_tiles_room_2), 1, 24,
            "Loose tiles room (2)",
            "Rooms where visible loose floor tiles will fall down.\n(default = 23, 16)"),
        number(Id::LooseTilesFirstTile, slot_link!(Byte, mods.custom.loose_tiles_first_tile), 0, 29,
            "Loose tiles first tile",
            "Range of loose floor tile positions that will be pressed.\n(default = 22 to 27)"),
        number(Id::LooseTilesLastTile, slot_link!(Byte, mods.custom.loose_tiles_last_tile), 0, 29,
            "Loose tiles last tile",
            "Range of loose floor tile positions that will be pressed.\n(default = 22 to 27)"),
        number(Id::JaffarVictoryLevel, slot_link!(Word, mods.custom.jaffar_victory_level), 0, 16,
            "Jaffar victory level",
            "Killing the guard in this level causes the screen to flash, and event 0 to be triggered upon leaving the room.\n(default = 13)")
            .keyed(NEVER_IS_16),
        number(Id::JaffarVictoryFlashTime, slot_link!(Byte, mods.custom.jaffar_victory_flash_time), 0, 255,
            "Jaffar victory flash time",
            "How long the screen will flash after killing Jaffar.\n(default = 18)"),
        number(Id::HideLevelNumberFirstLevel, slot_link!(Word, mods.custom.hide_level_number_from_level), 0, 16,
            "Hide level number from level",
            "First level where the level number will not be displayed.\n(default = 14)")
            .keyed(NEVER_IS_16),
        number(Id::Level13LevelNumber, slot_link!(Byte, mods.custom.level_13_level_number), 0, 255,
            "Level 13 displayed level number", "Level number displayed on level 13.\n(default = 12)"),
        number(Id::VictoryStopsTimeLevel, slot_link!(Word, mods.custom.victory_stops_time_level), 0, 16,
            "Victory stops time level", "Level where Jaffar's death stops time.\n(default = 13)")
            .keyed(NEVER_IS_16),
        number(Id::WinLevel, slot_link!(Word, mods.custom.win_level), 0, 16,
            "Level where you can win",
            "Level and room where you can win the game.\n(default: level = 14, room = 5)")
            .keyed(NEVER_IS_16),
        number(Id::WinRoom, slot_link!(Byte, mods.custom.win_room), 1, 24,
            "Room where you can win",
            "Level and room where you can win the game.\n(default: level = 14, room = 5)"),
        number(Id::LooseFloorDelay, slot_link!(Byte, mods.custom.loose_floor_delay), 0, 127,
            "Loose floor delay",
            "Number of seconds to wait before a loose floor falls.\n(default = 0.92)")
            .ticks(),
        number(Id::BaseSpeed, slot_link!(Byte, mods.custom.base_speed), 1, 127,
            "Base speed",
            "Game speed when not fighting (delay between frames in 1/60 seconds). Smaller is faster.\n(default = 5)"),
        number(Id::FightSpeed, slot_link!(Byte, mods.custom.fight_speed), 1, 127,
            "Fight speed",
            "Game speed when fighting (delay between frames in 1/60 seconds). Smaller is faster.\n(default = 6)"),
        number(Id::ChomperSpeed, slot_link!(Byte, mods.custom.chomper_speed), 0, 127,
            "Chomper speed",
            "Chomper speed (length of the animation cycle in frames). Smaller is faster.\n(default = 15)"),
    ]
}

fn level() -> Vec<Setting> {
    let number = |id, link, min, max, label, help| {
        Setting::number(id, link, min, max, label, help).requires(custom_options_enabled)
    };
    vec![
        Setting::action(Id::LevelSettingsAnother,
            "Customize another level...", "Select another level to customize.")
            .requires(custom_options_enabled),
        number(Id::LevelType, slot_link!(per_level Byte, mods.custom.tbl_level_type), 0, 1,
            "Level type", "Which environment is used in this level.\n(either dungeon or palace)")
            .names(LEVEL_TYPE_NAMES),
        number(Id::LevelColor, slot_link!(per_level Word, mods.custom.tbl_level_color), 0, 4,
            "Level color palette",
            "0: colors from VDUNGEON.DAT/VPALACE.DAT\n>0: colors from PRINCE.DAT.\nYou need a PRINCE.DAT from PoP 1.3 or 1.4 for this."),
        number(Id::GuardType, slot_link!(per_level Short, mods.custom.tbl_guard_type), -1, 4,
            "Guard type", "Guard type used in this level (normal, fat, skeleton, vizier, or shadow).")
            .keyed(GUARD_TYPE_NAMES),
        number(Id::GuardHp, slot_link!(per_level Byte, mods.custom.tbl_guard_hp), 0, 255,
            "Guard hitpoints", "Number of hitpoints guards have in this level."),
        number(Id::Cutscene, slot_link!(per_level Byte, mods.custom.tbl_cutscenes_by_index), 0, 15,
            "Cutscene before level",
            "Cutscene that plays between the previous level and this level.\n0: none, 2 or 6: standing, 4: lying down, 8: mouse leaves,\n9: mouse returns, 12: standing or turn around"),
        number(Id::EntryPose, slot_link!(per_level Byte, mods.custom.tbl_entry_pose), 0, 2,
            "Entry pose", "The pose the kid has when the level starts.")
            .names(ENTRY_POSE_NAMES),
        number(Id::SeamlessExit, slot_link!(per_level SByte, mods.custom.tbl_seamless_exit), -1, 24,
            "Seamless exit", "Entering this room moves the kid to the next level.\nSet to -1 to disable.")
            .keyed(SEAMLESS_EXIT_NAMES),
    ]
}

pub fn registry() -> Registry {
    Registry::new(vec![
        Area::new(Section::General, general()),
        Area::new(Section::Gameplay, gameplay()),
        Area::new(Section::Visuals, visuals()),
        Area::new(Section::Mods, mods()),
        Area::new(Section::Level, level()),
    ])
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_SETTING, SettingId, registry};
    use crate::game::options::Options;
    use crate::menu::setting::{Style, ValueNames, Width};
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_across_areas() {
        let registry = registry();
        let mut seen = HashSet::new();
        for area in registry.areas() {
            for setting in &area.settings {
                assert!(seen.insert(setting.id), "duplicate id {:?}", setting.id);
            }
        }
        assert_eq!(seen.len(), registry.len());
        assert!(registry.find(DEFAULT_SETTING).is_some());
    }

    #[test]
    fn traversal_reaches_both_ends_without_wrapping() {
        let registry = registry();
        for area in registry.areas() {
            let first = area.settings[0].id;
            let last = area.settings[area.len() - 1].id;
            for start in &area.settings {
                let mut id = start.id;
                for _ in 0..area.len() {
                    id = area.get(id).expect("linked id").next;
                }
                assert_eq!(id, last, "next chain from {:?} must end at {last:?}", start.id);

                let mut id = start.id;
                for _ in 0..area.len() {
                    id = area.get(id).expect("linked id").previous;
                }
                assert_eq!(id, first, "previous chain from {:?} must end at {first:?}", start.id);
            }
        }
    }

    #[test]
    fn defaults_lie_within_declared_bounds() {
        let registry = registry();
        let options = Options::default();
        for area in registry.areas() {
            for setting in &area.settings {
                let Some(spec) = setting.number_spec() else { continue };
                for level in 0..16 {
                    let v = setting.value_of(&options, level);
                    assert!(
                        (spec.min..=spec.max).contains(&v),
                        "{:?} default {v} outside {}..={}",
                        setting.id,
                        spec.min,
                        spec.max
                    );
                }
            }
        }
    }

    #[test]
    fn declared_bounds_fit_the_storage_width() {
        let registry = registry();
        for area in registry.areas() {
            for setting in &area.settings {
                let (Some(spec), Some(link)) = (setting.number_spec(), setting.link) else {
                    continue;
                };
                let (lo, hi) = match link.width() {
                    Width::Flag => (0, 1),
                    Width::Byte => (0, u8::MAX as i32),
                    Width::SByte => (i8::MIN as i32, i8::MAX as i32),
                    Width::Word => (0, u16::MAX as i32),
                    Width::Short => (i16::MIN as i32, i16::MAX as i32),
                    Width::Int => (i32::MIN, i32::MAX),
                };
                assert!(spec.min >= lo && spec.max <= hi, "{:?} bounds exceed storage", setting.id);
            }
        }
    }

    #[test]
    fn increment_then_decrement_returns_to_start() {
        let registry = registry();
        for area in registry.areas() {
            for setting in &area.settings {
                let Some(spec) = setting.number_spec() else { continue };
                let mut options = Options::default();
                let start = setting.value_of(&options, 1);
                if setting.increment(&mut options, 1, start) {
                    let up = setting.value_of(&options, 1);
                    assert!(setting.decrement(&mut options, 1, up));
                    let back = setting.value_of(&options, 1);
                    // snapping settings land on the multiple below the start
                    if matches!(spec.step, crate::menu::setting::Step::One) {
                        assert_eq!(back, start, "{:?}", setting.id);
                    }
                } else {
                    assert_eq!(start, spec.max, "{:?} rejected increment below max", setting.id);
                }
            }
        }
    }

    #[test]
    fn every_declared_label_formats_back_to_itself() {
        let registry = registry();
        for area in registry.areas() {
            for setting in &area.settings {
                let Some(names) = setting.number_spec().and_then(|s| s.names) else {
                    continue;
                };
                match names {
                    ValueNames::Indexed(list) => {
                        for (i, &name) in list.iter().enumerate() {
                            assert_eq!(setting.format_value(i as i32), name);
                        }
                    }
                    ValueNames::Keyed(pairs) => {
                        for &(name, value) in pairs {
                            assert_eq!(setting.format_value(value), name);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn time_like_settings_are_exactly_the_tick_counters() {
        let registry = registry();
        let ticks: Vec<SettingId> = registry
            .areas()
            .iter()
            .flat_map(|a| a.settings.iter())
            .filter(|s| s.format_value(720) == "60.00")
            .map(|s| s.id)
            .collect();
        assert_eq!(
            ticks,
            vec![
                SettingId::StartTicksLeft,
                SettingId::ShiftLReducedTicks,
                SettingId::MouseDelay,
                SettingId::LooseFloorDelay,
            ]
        );
    }

    #[test]
    fn level_area_settings_are_level_dependent() {
        let registry = registry();
        let area = registry.area(crate::menu::setting::Section::Level).expect("level area");
        for setting in &area.settings[1..] {
            assert!(setting.is_per_level(), "{:?}", setting.id);
            assert!(matches!(setting.style, Style::Number(_)));
        }
    }
}
