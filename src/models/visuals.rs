//! Glow, chams and world visual records.

use super::color::{ColorA, ColorToggle};
use crate::document::{
    Object, Record, put_records, read, read_record, read_records_lenient, write, write_record,
};
use crate::fonts::FontCatalog;

/// Number of glow entity kinds.
pub const GLOW_SLOTS: usize = 21;

/// Number of material layers per chams entry.
pub const CHAMS_MATERIALS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Glow {
    pub color: ColorA,
    pub enabled: bool,
    pub health_based: bool,
    pub style: i32,
}

impl Record for Glow {
    fn decode(&mut self, obj: &Object, fonts: &mut FontCatalog) {
        self.color.decode(obj, fonts);
        read(obj, "Enabled", &mut self.enabled);
        read(obj, "Health based", &mut self.health_based);
        read(obj, "Style", &mut self.style);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        self.color.encode(out, &baseline.color);
        write(out, "Enabled", &self.enabled, &baseline.enabled);
        write(out, "Health based", &self.health_based, &baseline.health_based);
        write(out, "Style", &self.style, &baseline.style);
    }
}

/// One material layer of a chams entry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Material {
    pub color: ColorA,
    pub enabled: bool,
    pub health_based: bool,
    pub blinking: bool,
    pub wireframe: bool,
    pub cover: bool,
    pub ignore_z: bool,
    pub material: i32,
}

impl Record for Material {
    fn decode(&mut self, obj: &Object, fonts: &mut FontCatalog) {
        self.color.decode(obj, fonts);
        read(obj, "Enabled", &mut self.enabled);
        read(obj, "Health based", &mut self.health_based);
        read(obj, "Blinking", &mut self.blinking);
        read(obj, "Wireframe", &mut self.wireframe);
        read(obj, "Cover", &mut self.cover);
        read(obj, "Ignore-Z", &mut self.ignore_z);
        read(obj, "Material", &mut self.material);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        self.color.encode(out, &baseline.color);
        write(out, "Enabled", &self.enabled, &baseline.enabled);
        write(out, "Health based", &self.health_based, &baseline.health_based);
        write(out, "Blinking", &self.blinking, &baseline.blinking);
        write(out, "Wireframe", &self.wireframe, &baseline.wireframe);
        write(out, "Cover", &self.cover, &baseline.cover);
        write(out, "Ignore-Z", &self.ignore_z, &baseline.ignore_z);
        write(out, "Material", &self.material, &baseline.material);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Chams {
    pub materials: [Material; CHAMS_MATERIALS],
}

impl Record for Chams {
    // Older profiles carry fewer material layers.
    fn decode(&mut self, obj: &Object, fonts: &mut FontCatalog) {
        read_records_lenient(obj, "Materials", &mut self.materials, fonts);
    }

    fn encode(&self, out: &mut Object, _baseline: &Self) {
        put_records(out, "Materials", &self.materials);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Visuals {
    pub disable_post_processing: bool,
    pub no_fog: bool,
    pub no_3d_sky: bool,
    /// Percentage, 0 to 100.
    pub flash_reduction: i32,
    pub player_model_t: i32,
    pub player_model_ct: i32,
    pub no_scope_overlay: bool,
    pub show_velocity: ColorToggle,
}

impl Record for Visuals {
    fn decode(&mut self, obj: &Object, fonts: &mut FontCatalog) {
        read(obj, "Disable post-processing", &mut self.disable_post_processing);
        read(obj, "No fog", &mut self.no_fog);
        read(obj, "No 3d sky", &mut self.no_3d_sky);
        read(obj, "Flash reduction", &mut self.flash_reduction);
        read_record(obj, "Show Velocity", &mut self.show_velocity, fonts);
        read(obj, "Playermodel T", &mut self.player_model_t);
        read(obj, "Playermodel CT", &mut self.player_model_ct);
        read(obj, "No scope overlay", &mut self.no_scope_overlay);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        write(
            out,
            "Disable post-processing",
            &self.disable_post_processing,
            &baseline.disable_post_processing,
        );
        write(out, "No fog", &self.no_fog, &baseline.no_fog);
        write(out, "No 3d sky", &self.no_3d_sky, &baseline.no_3d_sky);
        write(out, "Flash reduction", &self.flash_reduction, &baseline.flash_reduction);
        write_record(out, "Show Velocity", &self.show_velocity, &baseline.show_velocity);
        write(out, "Playermodel T", &self.player_model_t, &baseline.player_model_t);
        write(out, "Playermodel CT", &self.player_model_ct, &baseline.player_model_ct);
        write(out, "No scope overlay", &self.no_scope_overlay, &baseline.no_scope_overlay);
    }
}
