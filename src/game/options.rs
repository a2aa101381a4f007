use bincode::{Decode, Encode};

/// Number of levels that carry per-level customization tables.
pub const LEVEL_COUNT: usize = 16;

/// Options the player edits directly. Persisted regardless of the active
/// levelset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserOptions {
    pub enable_pause_menu: bool,
    pub enable_info_screen: bool,
    pub is_sound_on: bool,
    pub enable_music: bool,
    pub enable_controller_rumble: bool,
    pub joystick_threshold: i32,
    pub joystick_only_horizontal: bool,
    pub enable_replay: bool,
    pub start_fullscreen: bool,
    pub use_correct_aspect_ratio: bool,
    pub use_integer_scaling: bool,
    pub scaling_type: u8,
    pub enable_fade: bool,
    pub enable_flash: bool,
    pub enable_lighting: bool,
}

impl Default for UserOptions {
    fn default() -> Self {
        Self {
            enable_pause_menu: true,
            enable_info_screen: true,
            is_sound_on: true,
            enable_music: true,
            enable_controller_rumble: true,
            joystick_threshold: 8000,
            joystick_only_horizontal: true,
            enable_replay: true,
            start_fullscreen: false,
            use_correct_aspect_ratio: false,
            use_integer_scaling: false,
            scaling_type: 0,
            enable_fade: true,
            enable_flash: true,
            enable_lighting: false,
        }
    }
}

/// Individual fix/enhancement switches, only consulted while enhanced mode is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Encode, Decode)]
pub struct FixesOptions {
    pub enable_crouch_after_climbing: bool,
    pub enable_freeze_time_during_end_music: bool,
    pub enable_remember_guard_hp: bool,
    pub enable_super_high_jump: bool,
    pub fix_gate_sounds: bool,
    pub fix_two_coll_bug: bool,
    pub fix_infinite_down_bug: bool,
    pub fix_gate_drawing_bug: bool,
    pub fix_bigpillar_climb: bool,
    pub fix_jump_distance_at_edge: bool,
    pub fix_edge_distance_check_when_climbing: bool,
    pub fix_painless_fall_on_guard: bool,
    pub fix_wall_bump_triggers_tile_below: bool,
    pub fix_stand_on_thin_air: bool,
    pub fix_press_through_closed_gates: bool,
    pub fix_grab_falling_speed: bool,
    pub fix_skeleton_chomper_blood: bool,
    pub fix_move_after_drink: bool,
    pub fix_loose_left_of_potion: bool,
    pub fix_guard_following_through_closed_gates: bool,
    pub fix_safe_landing_on_spikes: bool,
    pub fix_glide_through_wall: bool,
    pub fix_drop_through_tapestry: bool,
    pub fix_land_against_gate_or_tapestry: bool,
    pub fix_unintended_sword_strike: bool,
    pub fix_retreat_without_leaving_room: bool,
    pub fix_running_jump_through_tapestry: bool,
    pub fix_push_guard_into_wall: bool,
    pub fix_jump_through_wall_above_gate: bool,
    pub fix_chompers_not_starting: bool,
    pub fix_feather_interrupted_by_leveldoor: bool,
    pub fix_offscreen_guards_disappearing: bool,
    pub fix_move_after_sheathe: bool,
    pub fix_hidden_floors_during_flashing: bool,
    pub fix_hang_on_teleport: bool,
    pub fix_exit_door: bool,
    pub fix_quicksave_during_feather: bool,
    pub fix_caped_prince_sliding_through_gate: bool,
    pub fix_doortop_disabling_guard: bool,
    pub fix_jumping_over_guard: bool,
    pub fix_drop_2_rooms_climbing_loose_tile: bool,
    pub fix_falling_through_floor_during_sword_strike: bool,
}

impl Default for FixesOptions {
    fn default() -> Self {
        Self {
            enable_crouch_after_climbing: true,
            enable_freeze_time_during_end_music: true,
            enable_remember_guard_hp: true,
            enable_super_high_jump: false,
            fix_gate_sounds: true,
            fix_two_coll_bug: true,
            fix_infinite_down_bug: true,
            fix_gate_drawing_bug: true,
            fix_bigpillar_climb: true,
            fix_jump_distance_at_edge: true,
            fix_edge_distance_check_when_climbing: true,
            fix_painless_fall_on_guard: true,
            fix_wall_bump_triggers_tile_below: true,
            fix_stand_on_thin_air: true,
            fix_press_through_closed_gates: true,
            fix_grab_falling_speed: true,
            fix_skeleton_chomper_blood: true,
            fix_move_after_drink: true,
            fix_loose_left_of_potion: true,
            fix_guard_following_through_closed_gates: true,
            fix_safe_landing_on_spikes: true,
            fix_glide_through_wall: true,
            fix_drop_through_tapestry: true,
            fix_land_against_gate_or_tapestry: true,
            fix_unintended_sword_strike: true,
            fix_retreat_without_leaving_room: true,
            fix_running_jump_through_tapestry: true,
            fix_push_guard_into_wall: true,
            fix_jump_through_wall_above_gate: true,
            fix_chompers_not_starting: true,
            fix_feather_interrupted_by_leveldoor: true,
            fix_offscreen_guards_disappearing: true,
            fix_move_after_sheathe: true,
            fix_hidden_floors_during_flashing: true,
            fix_hang_on_teleport: true,
            fix_exit_door: true,
            fix_quicksave_during_feather: true,
            fix_caped_prince_sliding_through_gate: true,
            fix_doortop_disabling_guard: true,
            fix_jumping_over_guard: true,
            fix_drop_2_rooms_climbing_loose_tile: true,
            fix_falling_through_floor_during_sword_strike: true,
        }
    }
}

/// Gameplay customization supplied by the active levelset. Time values are in
/// twelfths of a second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Encode, Decode)]
pub struct CustomOptions {
    pub start_minutes_left: i16,
    pub start_ticks_left: u16,
    pub start_hitp: u16,
    pub max_hitp_allowed: u16,
    pub saving_allowed_first_level: u16,
    pub saving_allowed_last_level: u16,
    pub start_upside_down: bool,
    pub start_in_blind_mode: bool,
    pub copyprot_level: u16,
    pub drawn_tile_top_level_edge: u8,
    pub drawn_tile_left_level_edge: u8,
    pub level_edge_hit_tile: u8,
    pub allow_triggering_any_tile: bool,
    pub enable_wda_in_palace: bool,
    pub first_level: u16,
    pub skip_title: bool,
    pub shift_l_allowed_until_level: u16,
    pub shift_l_reduced_minutes: u16,
    pub shift_l_reduced_ticks: u16,
    pub demo_hitp: u16,
    pub demo_end_room: u16,
    pub intro_music_level: u16,
    pub have_sword_from_level: u16,
    pub checkpoint_level: u16,
    pub checkpoint_respawn_dir: i8,
    pub checkpoint_respawn_room: u8,
    pub checkpoint_respawn_tilepos: u8,
    pub checkpoint_clear_tile_room: u8,
    pub checkpoint_clear_tile_col: u8,
    pub checkpoint_clear_tile_row: u8,
    pub skeleton_level: u16,
    pub skeleton_room: u8,
    pub skeleton_trigger_column_1: u8,
    pub skeleton_trigger_column_2: u8,
    pub skeleton_column: u8,
    pub skeleton_row: u8,
    pub skeleton_require_open_level_door: bool,
    pub skeleton_skill: u8,
    pub skeleton_reappear_room: u8,
    pub skeleton_reappear_x: u8,
    pub skeleton_reappear_row: u8,
    pub skeleton_reappear_dir: i8,
    pub mirror_level: u16,
    pub mirror_room: u8,
    pub mirror_column: u8,
    pub mirror_row: u8,
    pub mirror_tile: u8,
    pub show_mirror_image: bool,
    pub shadow_steal_level: u8,
    pub shadow_steal_room: u8,
    pub shadow_step_level: u8,
    pub shadow_step_room: u8,
    pub falling_exit_level: u16,
    pub falling_exit_room: u8,
    pub falling_entry_level: u16,
    pub falling_entry_room: u8,
    pub mouse_level: u16,
    pub mouse_room: u8,
    pub mouse_delay: u16,
    pub mouse_object: u8,
    pub mouse_start_x: u8,
    pub loose_tiles_level: u16,
    pub loose_tiles_room_1: u8,
    pub loose_tiles_room_2: u8,
    pub loose_tiles_first_tile: u8,
    pub loose_tiles_last_tile: u8,
    pub jaffar_victory_level: u16,
    pub jaffar_victory_flash_time: u8,
    pub hide_level_number_from_level: u16,
    pub level_13_level_number: u8,
    pub victory_stops_time_level: u16,
    pub win_level: u16,
    pub win_room: u8,
    pub loose_floor_delay: u8,
    pub base_speed: u8,
    pub fight_speed: u8,
    pub chomper_speed: u8,
    // per-level tables, indexed by level number
    pub tbl_level_type: [u8; LEVEL_COUNT],
    pub tbl_level_color: [u16; LEVEL_COUNT],
    pub tbl_guard_type: [i16; LEVEL_COUNT],
    pub tbl_guard_hp: [u8; LEVEL_COUNT],
    pub tbl_cutscenes_by_index: [u8; LEVEL_COUNT],
    pub tbl_entry_pose: [u8; LEVEL_COUNT],
    pub tbl_seamless_exit: [i8; LEVEL_COUNT],
}

impl Default for CustomOptions {
    fn default() -> Self {
        Self {
            start_minutes_left: 60,
            start_ticks_left: 719,
            start_hitp: 3,
            max_hitp_allowed: 10,
            saving_allowed_first_level: 3,
            saving_allowed_last_level: 13,
            start_upside_down: false,
            start_in_blind_mode: false,
            copyprot_level: 2,
            drawn_tile_top_level_edge: 1,
            drawn_tile_left_level_edge: 20,
            level_edge_hit_tile: 20,
            allow_triggering_any_tile: false,
            enable_wda_in_palace: false,
            first_level: 1,
            skip_title: false,
            shift_l_allowed_until_level: 4,
            shift_l_reduced_minutes: 15,
            shift_l_reduced_ticks: 719,
            demo_hitp: 4,
            demo_end_room: 24,
            intro_music_level: 1,
            have_sword_from_level: 2,
            checkpoint_level: 3,
            checkpoint_respawn_dir: -1,
            checkpoint_respawn_room: 2,
            checkpoint_respawn_tilepos: 6,
            checkpoint_clear_tile_room: 7,
            checkpoint_clear_tile_col: 4,
            checkpoint_clear_tile_row: 0,
            skeleton_level: 3,
            skeleton_room: 1,
            skeleton_trigger_column_1: 2,
            skeleton_trigger_column_2: 3,
            skeleton_column: 5,
            skeleton_row: 1,
            skeleton_require_open_level_door: true,
            skeleton_skill: 2,
            skeleton_reappear_room: 3,
            skeleton_reappear_x: 133,
            skeleton_reappear_row: 1,
            skeleton_reappear_dir: 0,
            mirror_level: 4,
            mirror_room: 4,
            mirror_column: 4,
            mirror_row: 0,
            mirror_tile: 13,
            show_mirror_image: true,
            shadow_steal_level: 5,
            shadow_steal_room: 24,
            shadow_step_level: 6,
            shadow_step_room: 1,
            falling_exit_level: 6,
            falling_exit_room: 1,
            falling_entry_level: 7,
            falling_entry_room: 17,
            mouse_level: 8,
            mouse_room: 16,
            mouse_delay: 150,
            mouse_object: 24,
            mouse_start_x: 200,
            loose_tiles_level: 13,
            loose_tiles_room_1: 23,
            loose_tiles_room_2: 16,
            loose_tiles_first_tile: 22,
            loose_tiles_last_tile: 27,
            jaffar_victory_level: 13,
            jaffar_victory_flash_time: 18,
            hide_level_number_from_level: 14,
            level_13_level_number: 12,
            victory_stops_time_level: 13,
            win_level: 14,
            win_room: 5,
            loose_floor_delay: 11,
            base_speed: 5,
            fight_speed: 6,
            chomper_speed: 15,
            tbl_level_type: [0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 0, 0, 1, 0],
            tbl_level_color: [0, 0, 0, 1, 0, 0, 0, 1, 2, 2, 0, 0, 3, 3, 4, 0],
            tbl_guard_type: [0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 0, 0, 4, 3, -1, -1],
            tbl_guard_hp: [4, 3, 3, 3, 3, 4, 5, 4, 4, 5, 5, 5, 4, 6, 0, 0],
            tbl_cutscenes_by_index: [0, 0, 2, 0, 4, 0, 6, 0, 8, 9, 0, 0, 12, 0, 0, 0],
            tbl_entry_pose: [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0],
            tbl_seamless_exit: [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 23, -1, -1, -1],
        }
    }
}

/// Options owned by the active levelset. Discarded from the snapshot when
/// the levelset name changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModOptions {
    pub enable_copyprot: bool,
    pub enable_quicksave: bool,
    pub enable_quicksave_penalty: bool,
    pub use_fixes_and_enhancements: bool,
    pub fixes: FixesOptions,
    pub use_custom_options: bool,
    pub custom: CustomOptions,
}

impl Default for ModOptions {
    fn default() -> Self {
        Self {
            enable_copyprot: false,
            enable_quicksave: true,
            enable_quicksave_penalty: true,
            use_fixes_and_enhancements: false,
            fixes: FixesOptions::default(),
            use_custom_options: false,
            custom: CustomOptions::default(),
        }
    }
}

/// Every value the menu can edit, plus the session-only switches it reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    pub user: UserOptions,
    pub mods: ModOptions,
    /// Session only, never written to the snapshot.
    pub cheats_enabled: bool,
    /// Platform capability reported by the host.
    pub integer_scaling_possible: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            user: UserOptions::default(),
            mods: ModOptions::default(),
            cheats_enabled: false,
            integer_scaling_possible: true,
        }
    }
}

impl Options {
    /// Reverts every option to its default. Platform capabilities are kept.
    pub fn restore_defaults(&mut self) {
        let integer_scaling_possible = self.integer_scaling_possible;
        *self = Self {
            integer_scaling_possible,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::{LEVEL_COUNT, Options};

    #[test]
    fn restore_defaults_keeps_platform_capabilities() {
        let mut options = Options {
            integer_scaling_possible: false,
            ..Options::default()
        };
        options.user.enable_music = false;
        options.mods.custom.tbl_guard_hp[15] = 99;
        options.cheats_enabled = true;

        options.restore_defaults();

        assert!(options.user.enable_music);
        assert_eq!(options.mods.custom.tbl_guard_hp[15], 0);
        assert!(!options.cheats_enabled);
        assert!(
            !options.integer_scaling_possible,
            "capability must survive a defaults reset"
        );
    }

    #[test]
    fn per_level_tables_cover_every_level() {
        let custom = Options::default().mods.custom;
        assert_eq!(custom.tbl_level_type.len(), LEVEL_COUNT);
        assert_eq!(custom.tbl_seamless_exit.len(), LEVEL_COUNT);
        assert!(custom.tbl_level_type.iter().all(|&t| t <= 1));
        assert!(custom.tbl_guard_type.iter().all(|&t| (-1..=4).contains(&t)));
    }
}
