//! Stream-proof ESP records, keyed by entity name.

use super::color::{ColorA, ColorToggleA, ColorToggleThickness, ColorToggleThicknessRounding};
use crate::document::{
    Object, Record, put_map, read, read_array, read_map, read_record, write, write_record,
};
use crate::fonts::FontCatalog;
use indexmap::IndexMap;

/// Font selection for ESP text.
///
/// `index` points into the font catalog's system font list and is recomputed on every
/// decode; only `name` is persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Font {
    pub index: usize,
    pub name: String,
}

impl Record for Font {
    fn decode(&mut self, obj: &Object, fonts: &mut FontCatalog) {
        read(obj, "Name", &mut self.name);

        if !self.name.is_empty() {
            fonts.schedule(&self.name);
        }
        self.index = fonts.index_of(&self.name).unwrap_or(0);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        write(out, "Name", &self.name, &baseline.name);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Snapline {
    pub line: ColorToggleThickness,
    /// 0 bottom, 1 top, 2 crosshair.
    pub kind: i32,
}

impl Record for Snapline {
    fn decode(&mut self, obj: &Object, fonts: &mut FontCatalog) {
        self.line.decode(obj, fonts);
        read(obj, "Type", &mut self.kind);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        self.line.encode(out, &baseline.line);
        write(out, "Type", &self.kind, &baseline.kind);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EspBox {
    pub frame: ColorToggleThicknessRounding,
    /// 0 2D, 1 2D corners, 2 3D, 3 3D corners.
    pub kind: i32,
    pub scale: [f32; 3],
    pub fill: ColorToggleA,
}

impl Default for EspBox {
    fn default() -> Self {
        Self {
            frame: ColorToggleThicknessRounding::default(),
            kind: 0,
            scale: [0.25; 3],
            fill: ColorToggleA::with_color(ColorA::rgba(1.0, 1.0, 1.0, 0.4)),
        }
    }
}

impl Record for EspBox {
    fn decode(&mut self, obj: &Object, fonts: &mut FontCatalog) {
        self.frame.decode(obj, fonts);
        read(obj, "Type", &mut self.kind);
        read_array(obj, "Scale", &mut self.scale);
        read_record(obj, "Fill", &mut self.fill, fonts);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        self.frame.encode(out, &baseline.frame);
        write(out, "Type", &self.kind, &baseline.kind);
        write(out, "Scale", &self.scale, &baseline.scale);
        write_record(out, "Fill", &self.fill, &baseline.fill);
    }
}

/// Fields every ESP entity group carries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shared {
    pub enabled: bool,
    pub font: Font,
    pub snapline: Snapline,
    pub esp_box: EspBox,
    pub name: ColorToggleA,
    pub text_cull_distance: f32,
}

impl Record for Shared {
    fn decode(&mut self, obj: &Object, fonts: &mut FontCatalog) {
        read(obj, "Enabled", &mut self.enabled);
        read_record(obj, "Font", &mut self.font, fonts);
        read_record(obj, "Snapline", &mut self.snapline, fonts);
        read_record(obj, "Box", &mut self.esp_box, fonts);
        read_record(obj, "Name", &mut self.name, fonts);
        read(obj, "Text Cull Distance", &mut self.text_cull_distance);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        write(out, "Enabled", &self.enabled, &baseline.enabled);
        write_record(out, "Font", &self.font, &baseline.font);
        write_record(out, "Snapline", &self.snapline, &baseline.snapline);
        write_record(out, "Box", &self.esp_box, &baseline.esp_box);
        write_record(out, "Name", &self.name, &baseline.name);
        write(
            out,
            "Text Cull Distance",
            &self.text_cull_distance,
            &baseline.text_cull_distance,
        );
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Player {
    pub shared: Shared,
    pub weapon: ColorToggleA,
    pub flash_duration: ColorToggleA,
    pub audible_only: bool,
    pub spotted_only: bool,
    pub skeleton: ColorToggleThickness,
    pub head_box: EspBox,
}

impl Record for Player {
    fn decode(&mut self, obj: &Object, fonts: &mut FontCatalog) {
        self.shared.decode(obj, fonts);
        read_record(obj, "Weapon", &mut self.weapon, fonts);
        read_record(obj, "Flash Duration", &mut self.flash_duration, fonts);
        read(obj, "Audible Only", &mut self.audible_only);
        read(obj, "Spotted Only", &mut self.spotted_only);
        read_record(obj, "Skeleton", &mut self.skeleton, fonts);
        read_record(obj, "Head Box", &mut self.head_box, fonts);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        self.shared.encode(out, &baseline.shared);
        write_record(out, "Weapon", &self.weapon, &baseline.weapon);
        write_record(out, "Flash Duration", &self.flash_duration, &baseline.flash_duration);
        write(out, "Audible Only", &self.audible_only, &baseline.audible_only);
        write(out, "Spotted Only", &self.spotted_only, &baseline.spotted_only);
        write_record(out, "Skeleton", &self.skeleton, &baseline.skeleton);
        write_record(out, "Head Box", &self.head_box, &baseline.head_box);
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Weapon {
    pub shared: Shared,
    pub ammo: ColorToggleA,
}

impl Record for Weapon {
    fn decode(&mut self, obj: &Object, fonts: &mut FontCatalog) {
        self.shared.decode(obj, fonts);
        read_record(obj, "Ammo", &mut self.ammo, fonts);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        self.shared.encode(out, &baseline.shared);
        write_record(out, "Ammo", &self.ammo, &baseline.ammo);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trail {
    pub line: ColorToggleThickness,
    /// 0 line, 1 circles, 2 filled circles.
    pub kind: i32,
    pub time: f32,
}

impl Default for Trail {
    fn default() -> Self {
        Self {
            line: ColorToggleThickness::default(),
            kind: 0,
            time: 2.0,
        }
    }
}

impl Record for Trail {
    fn decode(&mut self, obj: &Object, fonts: &mut FontCatalog) {
        self.line.decode(obj, fonts);
        read(obj, "Type", &mut self.kind);
        read(obj, "Time", &mut self.time);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        self.line.encode(out, &baseline.line);
        write(out, "Type", &self.kind, &baseline.kind);
        write(out, "Time", &self.time, &baseline.time);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Trails {
    pub enabled: bool,
    pub local_player: Trail,
    pub allies: Trail,
    pub enemies: Trail,
}

impl Record for Trails {
    fn decode(&mut self, obj: &Object, fonts: &mut FontCatalog) {
        read(obj, "Enabled", &mut self.enabled);
        read_record(obj, "Local Player", &mut self.local_player, fonts);
        read_record(obj, "Allies", &mut self.allies, fonts);
        read_record(obj, "Enemies", &mut self.enemies, fonts);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        write(out, "Enabled", &self.enabled, &baseline.enabled);
        write_record(out, "Local Player", &self.local_player, &baseline.local_player);
        write_record(out, "Allies", &self.allies, &baseline.allies);
        write_record(out, "Enemies", &self.enemies, &baseline.enemies);
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Projectile {
    pub shared: Shared,
    pub trails: Trails,
}

impl Record for Projectile {
    fn decode(&mut self, obj: &Object, fonts: &mut FontCatalog) {
        self.shared.decode(obj, fonts);
        read_record(obj, "Trails", &mut self.trails, fonts);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        self.shared.encode(out, &baseline.shared);
        write_record(out, "Trails", &self.trails, &baseline.trails);
    }
}

/// ESP groups keyed by free-form entity name ("All", "Visible", a weapon class, ...).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StreamProofEsp {
    pub allies: IndexMap<String, Player>,
    pub enemies: IndexMap<String, Player>,
    pub weapons: IndexMap<String, Weapon>,
    pub projectiles: IndexMap<String, Projectile>,
    pub loot_crates: IndexMap<String, Shared>,
    pub other_entities: IndexMap<String, Shared>,
}

impl Record for StreamProofEsp {
    fn decode(&mut self, obj: &Object, fonts: &mut FontCatalog) {
        read_map(obj, "Allies", &mut self.allies, fonts);
        read_map(obj, "Enemies", &mut self.enemies, fonts);
        read_map(obj, "Weapons", &mut self.weapons, fonts);
        read_map(obj, "Projectiles", &mut self.projectiles, fonts);
        read_map(obj, "Loot Crates", &mut self.loot_crates, fonts);
        read_map(obj, "Other Entities", &mut self.other_entities, fonts);
    }

    fn encode(&self, out: &mut Object, _baseline: &Self) {
        put_map(out, "Allies", &self.allies);
        put_map(out, "Enemies", &self.enemies);
        put_map(out, "Weapons", &self.weapons);
        put_map(out, "Projectiles", &self.projectiles);
        put_map(out, "Loot Crates", &self.loot_crates);
        put_map(out, "Other Entities", &self.other_entities);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{encode_record, prune};
    use serde_json::json;

    #[test]
    fn test_font_decode_schedules_and_resolves_index() {
        let mut fonts = FontCatalog::new(vec!["Tahoma".to_string(), "Arial".to_string()]);
        let doc = json!({ "Name": "Tahoma" });

        let mut font = Font::default();
        font.decode(doc.as_object().unwrap(), &mut fonts);

        assert_eq!(font.name, "Tahoma");
        assert_eq!(font.index, 2);
        assert_eq!(fonts.scheduled(), &["Default", "Tahoma"]);
    }

    #[test]
    fn test_unknown_font_falls_back_to_index_zero() {
        let mut fonts = FontCatalog::new(vec!["Arial".to_string()]);
        let doc = json!({ "Name": "Wingdings" });

        let mut font = Font {
            index: 1,
            name: String::new(),
        };
        font.decode(doc.as_object().unwrap(), &mut fonts);

        assert_eq!(font.index, 0);
        assert_eq!(fonts.scheduled().last().map(String::as_str), Some("Wingdings"));
    }

    #[test]
    fn test_player_layers_into_one_object() {
        let mut player = Player::default();
        player.shared.enabled = true;
        player.shared.esp_box.kind = 2;
        player.shared.esp_box.fill.enabled = true;
        player.audible_only = true;
        player.skeleton.thickness = 3.0;

        let encoded = encode_record(&player, &Player::default());
        assert_eq!(
            encoded,
            json!({
                "Enabled": true,
                "Box": { "Type": 2, "Fill": { "Enabled": true } },
                "Audible Only": true,
                "Skeleton": { "Thickness": 3.0 },
            })
        );

        let mut decoded = Player::default();
        decoded.decode(encoded.as_object().unwrap(), &mut FontCatalog::default());
        assert_eq!(decoded, player);
    }

    #[test]
    fn test_esp_groups_round_trip_through_names() {
        let mut esp = StreamProofEsp::default();
        esp.enemies.insert("Visible".to_string(), Player::default());
        let mut crate_group = Shared::default();
        crate_group.text_cull_distance = 25.0;
        esp.loot_crates.insert("Pistol Case".to_string(), crate_group);

        let mut encoded = encode_record(&esp, &StreamProofEsp::default());
        prune(&mut encoded);
        assert_eq!(
            encoded,
            json!({ "Loot Crates": { "Pistol Case": { "Text Cull Distance": 25.0 } } })
        );

        let mut decoded = StreamProofEsp::default();
        decoded.decode(encoded.as_object().unwrap(), &mut FontCatalog::default());
        assert_eq!(decoded.loot_crates, esp.loot_crates);
        assert!(decoded.enemies.is_empty());
    }
}
