//! Sound, menu style and miscellaneous records.

use super::color::{Color, ColorToggle, ColorToggleThickness, clamp_unit};
use crate::document::write::narrow_floats;
use crate::document::{
    FromValue, Object, Record, put_records, read, read_array, read_record, read_records, write,
    write_record,
};
use crate::fonts::FontCatalog;
use indexmap::IndexMap;
use serde_json::Value;

/// Per-player sound groups: local player, allies, enemies.
pub const SOUND_PLAYERS: usize = 3;

/// Virtual-key code of the Insert key, the default menu toggle.
pub const VK_INSERT: i32 = 0x2D;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundPlayer {
    pub master_volume: i32,
    pub headshot_volume: i32,
    pub weapon_volume: i32,
    pub footstep_volume: i32,
}

impl Default for SoundPlayer {
    fn default() -> Self {
        Self {
            master_volume: 100,
            headshot_volume: 100,
            weapon_volume: 100,
            footstep_volume: 100,
        }
    }
}

impl Record for SoundPlayer {
    fn decode(&mut self, obj: &Object, _fonts: &mut FontCatalog) {
        read(obj, "Master volume", &mut self.master_volume);
        read(obj, "Headshot volume", &mut self.headshot_volume);
        read(obj, "Weapon volume", &mut self.weapon_volume);
        read(obj, "Footstep volume", &mut self.footstep_volume);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        write(out, "Master volume", &self.master_volume, &baseline.master_volume);
        write(out, "Headshot volume", &self.headshot_volume, &baseline.headshot_volume);
        write(out, "Weapon volume", &self.weapon_volume, &baseline.weapon_volume);
        write(out, "Footstep volume", &self.footstep_volume, &baseline.footstep_volume);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sound {
    pub chicken_volume: i32,
    pub players: [SoundPlayer; SOUND_PLAYERS],
}

impl Default for Sound {
    fn default() -> Self {
        Self {
            chicken_volume: 100,
            players: Default::default(),
        }
    }
}

impl Record for Sound {
    fn decode(&mut self, obj: &Object, fonts: &mut FontCatalog) {
        read(obj, "Chicken volume", &mut self.chicken_volume);
        read_records(obj, "Players", &mut self.players, fonts);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        write(out, "Chicken volume", &self.chicken_volume, &baseline.chicken_volume);
        put_records(out, "Players", &self.players);
    }
}

/// Menu theme. `colors` maps a style color name to RGBA.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub menu_style: i32,
    pub menu_colors: i32,
    pub colors: IndexMap<String, [f32; 4]>,
}

impl Record for Style {
    fn decode(&mut self, obj: &Object, _fonts: &mut FontCatalog) {
        read(obj, "Menu style", &mut self.menu_style);
        read(obj, "Menu colors", &mut self.menu_colors);

        // Known colors take whichever components parse; a new color needs all four.
        if let Some(colors) = obj.get("Colors").and_then(Value::as_object) {
            for (name, value) in colors {
                let Some(items) = value.as_array() else {
                    continue;
                };

                match self.colors.get_mut(name) {
                    Some(rgba) => {
                        read_array(colors, name, rgba);
                        clamp_unit(rgba);
                    }
                    None if items.len() == 4
                        && items.iter().all(|c| f32::from_value(c).is_some()) =>
                    {
                        let mut rgba = [0.0; 4];
                        read_array(colors, name, &mut rgba);
                        clamp_unit(&mut rgba);
                        self.colors.insert(name.clone(), rgba);
                    }
                    None => {}
                }
            }
        }
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        write(out, "Menu style", &self.menu_style, &baseline.menu_style);
        write(out, "Menu colors", &self.menu_colors, &baseline.menu_colors);

        let colors = self
            .colors
            .iter()
            .map(|(name, rgba)| {
                let mut value = Value::from(rgba.to_vec());
                narrow_floats(&mut value);
                (name.clone(), value)
            })
            .collect();
        out.insert("Colors".to_string(), Value::Object(colors));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PurchaseList {
    pub enabled: bool,
    pub only_during_freeze_time: bool,
    pub show_prices: bool,
    pub no_title_bar: bool,
    /// 0 details, 1 summary.
    pub mode: i32,
}

impl Record for PurchaseList {
    fn decode(&mut self, obj: &Object, _fonts: &mut FontCatalog) {
        read(obj, "Enabled", &mut self.enabled);
        read(obj, "Only During Freeze Time", &mut self.only_during_freeze_time);
        read(obj, "Show Prices", &mut self.show_prices);
        read(obj, "No Title Bar", &mut self.no_title_bar);
        read(obj, "Mode", &mut self.mode);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        write(out, "Enabled", &self.enabled, &baseline.enabled);
        write(
            out,
            "Only During Freeze Time",
            &self.only_during_freeze_time,
            &baseline.only_during_freeze_time,
        );
        write(out, "Show Prices", &self.show_prices, &baseline.show_prices);
        write(out, "No Title Bar", &self.no_title_bar, &baseline.no_title_bar);
        write(out, "Mode", &self.mode, &baseline.mode);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Misc {
    pub menu_key: i32,
    pub auto_strafe: bool,
    pub auto_strafe_key: i32,
    pub bunny_hop: bool,
    pub bunny_hop_key: i32,
    pub fast_duck: bool,
    pub edge_jump: bool,
    pub edge_jump_key: i32,
    pub jump_bug: bool,
    pub jump_bug_key: i32,
    pub jump_bug_hold: bool,
    pub noscope_crosshair: ColorToggleThickness,
    pub recoil_crosshair: ColorToggleThickness,
    pub auto_reload: bool,
    pub auto_accept: bool,
    pub radar_hack: bool,
    pub reveal_ranks: bool,
    pub reveal_money: bool,
    pub reveal_suspect: bool,
    pub spectator_list: ColorToggle,
    pub fix_bone_matrix: bool,
    pub fix_movement: bool,
    pub aspect_ratio: f32,
    pub fast_plant: bool,
    pub bomb_timer: ColorToggle,
    pub quick_reload: bool,
    pub nade_predict: bool,
    pub draw_aimbot_fov: bool,
    pub actual_fov: f32,
    pub max_angle_delta: f32,
    pub purchase_list: PurchaseList,
}

impl Default for Misc {
    fn default() -> Self {
        Self {
            menu_key: VK_INSERT,
            auto_strafe: false,
            auto_strafe_key: 0,
            bunny_hop: false,
            bunny_hop_key: 0,
            fast_duck: false,
            edge_jump: false,
            edge_jump_key: 0,
            jump_bug: false,
            jump_bug_key: 0,
            jump_bug_hold: false,
            noscope_crosshair: ColorToggleThickness::default(),
            recoil_crosshair: ColorToggleThickness::default(),
            auto_reload: false,
            auto_accept: false,
            radar_hack: false,
            reveal_ranks: false,
            reveal_money: false,
            reveal_suspect: false,
            spectator_list: ColorToggle::default(),
            fix_bone_matrix: false,
            fix_movement: false,
            aspect_ratio: 0.0,
            fast_plant: false,
            bomb_timer: ColorToggle::with_color(Color::rgb(1.0, 0.55, 0.0)),
            quick_reload: false,
            nade_predict: false,
            draw_aimbot_fov: false,
            actual_fov: 0.0,
            max_angle_delta: 30.0,
            purchase_list: PurchaseList::default(),
        }
    }
}

impl Record for Misc {
    fn decode(&mut self, obj: &Object, fonts: &mut FontCatalog) {
        read(obj, "Menu key", &mut self.menu_key);
        read(obj, "Auto strafe", &mut self.auto_strafe);
        read(obj, "Auto strafe Key", &mut self.auto_strafe_key);
        read(obj, "Bunny hop", &mut self.bunny_hop);
        read(obj, "Bunny hop Key", &mut self.bunny_hop_key);
        read(obj, "Fast duck", &mut self.fast_duck);
        read(obj, "Edge Jump", &mut self.edge_jump);
        read(obj, "Edge Jump Key", &mut self.edge_jump_key);
        read(obj, "Jump Bug", &mut self.jump_bug);
        read(obj, "Jump Bug Key", &mut self.jump_bug_key);
        read(obj, "Jump Bug Hold", &mut self.jump_bug_hold);
        read_record(obj, "Noscope crosshair", &mut self.noscope_crosshair, fonts);
        read_record(obj, "Recoil crosshair", &mut self.recoil_crosshair, fonts);
        read(obj, "Auto reload", &mut self.auto_reload);
        read(obj, "Auto accept", &mut self.auto_accept);
        read(obj, "Radar hack", &mut self.radar_hack);
        read(obj, "Reveal ranks", &mut self.reveal_ranks);
        read(obj, "Reveal money", &mut self.reveal_money);
        read(obj, "Reveal suspect", &mut self.reveal_suspect);
        read_record(obj, "Spectator list", &mut self.spectator_list, fonts);
        read(obj, "Fix bone matrix", &mut self.fix_bone_matrix);
        read(obj, "Fix movement", &mut self.fix_movement);
        read(obj, "Aspect Ratio", &mut self.aspect_ratio);
        read(obj, "Fast plant", &mut self.fast_plant);
        read_record(obj, "Bomb timer", &mut self.bomb_timer, fonts);
        read(obj, "Quick reload", &mut self.quick_reload);
        read(obj, "Grenade predict", &mut self.nade_predict);
        read(obj, "Draw aimbot FOV", &mut self.draw_aimbot_fov);
        read(obj, "Draw aimbot Actual FOV", &mut self.actual_fov);
        read(obj, "Max angle delta", &mut self.max_angle_delta);
        read_record(obj, "Purchase List", &mut self.purchase_list, fonts);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        write(out, "Menu key", &self.menu_key, &baseline.menu_key);
        write(out, "Auto strafe", &self.auto_strafe, &baseline.auto_strafe);
        write(out, "Auto strafe Key", &self.auto_strafe_key, &baseline.auto_strafe_key);
        write(out, "Bunny hop", &self.bunny_hop, &baseline.bunny_hop);
        write(out, "Bunny hop Key", &self.bunny_hop_key, &baseline.bunny_hop_key);
        write(out, "Fast duck", &self.fast_duck, &baseline.fast_duck);
        write(out, "Edge Jump", &self.edge_jump, &baseline.edge_jump);
        write(out, "Edge Jump Key", &self.edge_jump_key, &baseline.edge_jump_key);
        write(out, "Jump Bug", &self.jump_bug, &baseline.jump_bug);
        write(out, "Jump Bug Key", &self.jump_bug_key, &baseline.jump_bug_key);
        write(out, "Jump Bug Hold", &self.jump_bug_hold, &baseline.jump_bug_hold);
        write_record(
            out,
            "Noscope crosshair",
            &self.noscope_crosshair,
            &baseline.noscope_crosshair,
        );
        write_record(out, "Recoil crosshair", &self.recoil_crosshair, &baseline.recoil_crosshair);
        write(out, "Auto reload", &self.auto_reload, &baseline.auto_reload);
        write(out, "Auto accept", &self.auto_accept, &baseline.auto_accept);
        write(out, "Radar hack", &self.radar_hack, &baseline.radar_hack);
        write(out, "Reveal ranks", &self.reveal_ranks, &baseline.reveal_ranks);
        write(out, "Reveal money", &self.reveal_money, &baseline.reveal_money);
        write(out, "Reveal suspect", &self.reveal_suspect, &baseline.reveal_suspect);
        write_record(out, "Spectator list", &self.spectator_list, &baseline.spectator_list);
        write(out, "Fix bone matrix", &self.fix_bone_matrix, &baseline.fix_bone_matrix);
        write(out, "Fix movement", &self.fix_movement, &baseline.fix_movement);
        write(out, "Aspect Ratio", &self.aspect_ratio, &baseline.aspect_ratio);
        write(out, "Fast plant", &self.fast_plant, &baseline.fast_plant);
        write_record(out, "Bomb timer", &self.bomb_timer, &baseline.bomb_timer);
        write(out, "Quick reload", &self.quick_reload, &baseline.quick_reload);
        write(out, "Grenade predict", &self.nade_predict, &baseline.nade_predict);
        write(out, "Draw aimbot FOV", &self.draw_aimbot_fov, &baseline.draw_aimbot_fov);
        write(out, "Draw aimbot Actual FOV", &self.actual_fov, &baseline.actual_fov);
        write(out, "Max angle delta", &self.max_angle_delta, &baseline.max_angle_delta);
        write_record(out, "Purchase List", &self.purchase_list, &baseline.purchase_list);
    }
}
