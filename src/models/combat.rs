//! Per-weapon aim assistance records.

use crate::document::{Object, Record, read, write};
use crate::fonts::FontCatalog;

/// Number of weapon slots for aimbot and triggerbot settings.
pub const WEAPON_SLOTS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aimbot {
    pub enabled: bool,
    pub on_key: bool,
    pub key: i32,
    pub key_mode: i32,
    pub aimlock: bool,
    pub silent: bool,
    pub friendly_fire: bool,
    pub visible_only: bool,
    pub scoped_only: bool,
    pub ignore_flash: bool,
    pub ignore_smoke: bool,
    pub auto_shot: bool,
    pub auto_scope: bool,
    pub fov: f32,
    pub smooth: f32,
    pub bone: i32,
    pub max_aim_inaccuracy: f32,
    pub max_shot_inaccuracy: f32,
    pub min_damage: i32,
    pub killshot: bool,
    pub between_shots: bool,
}

impl Default for Aimbot {
    fn default() -> Self {
        Self {
            enabled: false,
            on_key: false,
            key: 0,
            key_mode: 0,
            aimlock: false,
            silent: false,
            friendly_fire: false,
            visible_only: true,
            scoped_only: true,
            ignore_flash: false,
            ignore_smoke: false,
            auto_shot: false,
            auto_scope: false,
            fov: 0.0,
            smooth: 1.0,
            bone: 0,
            max_aim_inaccuracy: 1.0,
            max_shot_inaccuracy: 1.0,
            min_damage: 1,
            killshot: false,
            between_shots: true,
        }
    }
}

impl Record for Aimbot {
    fn decode(&mut self, obj: &Object, _fonts: &mut FontCatalog) {
        read(obj, "Enabled", &mut self.enabled);
        read(obj, "On key", &mut self.on_key);
        read(obj, "Key", &mut self.key);
        read(obj, "Key mode", &mut self.key_mode);
        read(obj, "Aimlock", &mut self.aimlock);
        read(obj, "Silent", &mut self.silent);
        read(obj, "Friendly fire", &mut self.friendly_fire);
        read(obj, "Visible only", &mut self.visible_only);
        read(obj, "Scoped only", &mut self.scoped_only);
        read(obj, "Ignore flash", &mut self.ignore_flash);
        read(obj, "Ignore smoke", &mut self.ignore_smoke);
        read(obj, "Auto shot", &mut self.auto_shot);
        read(obj, "Auto scope", &mut self.auto_scope);
        read(obj, "Fov", &mut self.fov);
        read(obj, "Smooth", &mut self.smooth);
        read(obj, "Bone", &mut self.bone);
        read(obj, "Max aim inaccuracy", &mut self.max_aim_inaccuracy);
        read(obj, "Max shot inaccuracy", &mut self.max_shot_inaccuracy);
        read(obj, "Min damage", &mut self.min_damage);
        read(obj, "Killshot", &mut self.killshot);
        read(obj, "Between shots", &mut self.between_shots);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        write(out, "Enabled", &self.enabled, &baseline.enabled);
        write(out, "On key", &self.on_key, &baseline.on_key);
        write(out, "Key", &self.key, &baseline.key);
        write(out, "Key mode", &self.key_mode, &baseline.key_mode);
        write(out, "Aimlock", &self.aimlock, &baseline.aimlock);
        write(out, "Silent", &self.silent, &baseline.silent);
        write(out, "Friendly fire", &self.friendly_fire, &baseline.friendly_fire);
        write(out, "Visible only", &self.visible_only, &baseline.visible_only);
        write(out, "Scoped only", &self.scoped_only, &baseline.scoped_only);
        write(out, "Ignore flash", &self.ignore_flash, &baseline.ignore_flash);
        write(out, "Ignore smoke", &self.ignore_smoke, &baseline.ignore_smoke);
        write(out, "Auto shot", &self.auto_shot, &baseline.auto_shot);
        write(out, "Auto scope", &self.auto_scope, &baseline.auto_scope);
        write(out, "Fov", &self.fov, &baseline.fov);
        write(out, "Smooth", &self.smooth, &baseline.smooth);
        write(out, "Bone", &self.bone, &baseline.bone);
        write(
            out,
            "Max aim inaccuracy",
            &self.max_aim_inaccuracy,
            &baseline.max_aim_inaccuracy,
        );
        write(
            out,
            "Max shot inaccuracy",
            &self.max_shot_inaccuracy,
            &baseline.max_shot_inaccuracy,
        );
        write(out, "Min damage", &self.min_damage, &baseline.min_damage);
        write(out, "Killshot", &self.killshot, &baseline.killshot);
        write(out, "Between shots", &self.between_shots, &baseline.between_shots);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triggerbot {
    pub enabled: bool,
    pub friendly_fire: bool,
    pub scoped_only: bool,
    pub ignore_flash: bool,
    pub ignore_smoke: bool,
    pub killshot: bool,
    pub on_key: bool,
    pub key: i32,
    pub hitgroup: i32,
    pub shot_delay: i32,
    pub min_damage: i32,
    pub burst_time: f32,
}

impl Default for Triggerbot {
    fn default() -> Self {
        Self {
            enabled: false,
            friendly_fire: false,
            scoped_only: true,
            ignore_flash: false,
            ignore_smoke: false,
            killshot: false,
            on_key: false,
            key: 0,
            hitgroup: 0,
            shot_delay: 0,
            min_damage: 1,
            burst_time: 0.0,
        }
    }
}

impl Record for Triggerbot {
    fn decode(&mut self, obj: &Object, _fonts: &mut FontCatalog) {
        read(obj, "Enabled", &mut self.enabled);
        read(obj, "On key", &mut self.on_key);
        read(obj, "Key", &mut self.key);
        read(obj, "Friendly fire", &mut self.friendly_fire);
        read(obj, "Scoped only", &mut self.scoped_only);
        read(obj, "Ignore flash", &mut self.ignore_flash);
        read(obj, "Ignore smoke", &mut self.ignore_smoke);
        read(obj, "Hitgroup", &mut self.hitgroup);
        read(obj, "Shot delay", &mut self.shot_delay);
        read(obj, "Min damage", &mut self.min_damage);
        read(obj, "Killshot", &mut self.killshot);
        read(obj, "Burst Time", &mut self.burst_time);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        write(out, "Enabled", &self.enabled, &baseline.enabled);
        write(out, "On key", &self.on_key, &baseline.on_key);
        write(out, "Key", &self.key, &baseline.key);
        write(out, "Friendly fire", &self.friendly_fire, &baseline.friendly_fire);
        write(out, "Scoped only", &self.scoped_only, &baseline.scoped_only);
        write(out, "Ignore flash", &self.ignore_flash, &baseline.ignore_flash);
        write(out, "Ignore smoke", &self.ignore_smoke, &baseline.ignore_smoke);
        write(out, "Hitgroup", &self.hitgroup, &baseline.hitgroup);
        write(out, "Shot delay", &self.shot_delay, &baseline.shot_delay);
        write(out, "Min damage", &self.min_damage, &baseline.min_damage);
        write(out, "Killshot", &self.killshot, &baseline.killshot);
        write(out, "Burst Time", &self.burst_time, &baseline.burst_time);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backtrack {
    pub enabled: bool,
    pub ignore_smoke: bool,
    pub recoil_based_fov: bool,
    /// Milliseconds.
    pub time_limit: i32,
}

impl Default for Backtrack {
    fn default() -> Self {
        Self {
            enabled: false,
            ignore_smoke: false,
            recoil_based_fov: false,
            time_limit: 200,
        }
    }
}

impl Record for Backtrack {
    fn decode(&mut self, obj: &Object, _fonts: &mut FontCatalog) {
        read(obj, "Enabled", &mut self.enabled);
        read(obj, "Ignore smoke", &mut self.ignore_smoke);
        read(obj, "Recoil based fov", &mut self.recoil_based_fov);
        read(obj, "Time limit", &mut self.time_limit);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        write(out, "Enabled", &self.enabled, &baseline.enabled);
        write(out, "Ignore smoke", &self.ignore_smoke, &baseline.ignore_smoke);
        write(out, "Recoil based fov", &self.recoil_based_fov, &baseline.recoil_based_fov);
        write(out, "Time limit", &self.time_limit, &baseline.time_limit);
    }
}
