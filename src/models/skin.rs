//! Skin override records.

use crate::document::{Object, Record, read, read_records, write, write_records};
use crate::fonts::FontCatalog;

/// Number of skin override slots.
pub const SKIN_SLOTS: usize = 36;

/// Sticker slots per item.
pub const STICKER_SLOTS: usize = 5;

/// Capacity of a custom name in bytes, terminator included.
pub const CUSTOM_NAME_CAPACITY: usize = 32;

/// Default wear: the smallest normal positive float, since the game rejects a wear of zero.
pub const MIN_WEAR: f32 = f32::MIN_POSITIVE;

/// A custom display name bounded to [`CUSTOM_NAME_CAPACITY`] - 1 bytes of UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomName(String);

impl CustomName {
    /// Replace the name, truncating on a char boundary when it does not fit.
    pub fn set(&mut self, name: &str) {
        let mut end = name.len().min(CUSTOM_NAME_CAPACITY - 1);
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        self.0.clear();
        self.0.push_str(&name[..end]);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for CustomName {
    fn from(name: &str) -> Self {
        let mut custom = Self::default();
        custom.set(name);
        custom
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickerSetting {
    pub kit: i32,
    pub kit_vector_index: i32,
    pub wear: f32,
    pub scale: f32,
    pub rotation: f32,
}

impl Default for StickerSetting {
    fn default() -> Self {
        Self {
            kit: 0,
            kit_vector_index: 0,
            wear: MIN_WEAR,
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

impl Record for StickerSetting {
    fn decode(&mut self, obj: &Object, _fonts: &mut FontCatalog) {
        read(obj, "Kit", &mut self.kit);
        read(obj, "Kit vector index", &mut self.kit_vector_index);
        read(obj, "Wear", &mut self.wear);
        read(obj, "Scale", &mut self.scale);
        read(obj, "Rotation", &mut self.rotation);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        write(out, "Kit", &self.kit, &baseline.kit);
        write(out, "Kit vector index", &self.kit_vector_index, &baseline.kit_vector_index);
        write(out, "Wear", &self.wear, &baseline.wear);
        write(out, "Scale", &self.scale, &baseline.scale);
        write(out, "Rotation", &self.rotation, &baseline.rotation);
    }
}

/// Skin override for one item slot. The `*_vector_index` fields are the positions the
/// menu's pickers had selected.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSetting {
    pub enabled: bool,
    pub item_id_index: i32,
    pub item_id: i32,
    pub quality_vector_index: i32,
    pub quality: i32,
    pub paint_kit_vector_index: i32,
    pub paint_kit: i32,
    pub definition_override_vector_index: i32,
    pub definition_override_index: i32,
    pub seed: i32,
    pub stat_trak: i32,
    pub wear: f32,
    pub custom_name: CustomName,
    pub stickers: [StickerSetting; STICKER_SLOTS],
}

impl Default for ItemSetting {
    fn default() -> Self {
        Self {
            enabled: false,
            item_id_index: 0,
            item_id: 0,
            quality_vector_index: 0,
            quality: 0,
            paint_kit_vector_index: 0,
            paint_kit: 0,
            definition_override_vector_index: 0,
            definition_override_index: 0,
            seed: 0,
            stat_trak: 0,
            wear: MIN_WEAR,
            custom_name: CustomName::default(),
            stickers: Default::default(),
        }
    }
}

impl Record for ItemSetting {
    fn decode(&mut self, obj: &Object, fonts: &mut FontCatalog) {
        read(obj, "Enabled", &mut self.enabled);
        read(obj, "Definition index", &mut self.item_id);
        read(obj, "Definition vector index", &mut self.item_id_index);
        read(obj, "Quality", &mut self.quality);
        read(obj, "Quality vector index", &mut self.quality_vector_index);

        read(obj, "Paint Kit", &mut self.paint_kit);
        read(obj, "Paint Kit vector index", &mut self.paint_kit_vector_index);

        read(obj, "Definition override", &mut self.definition_override_index);
        read(
            obj,
            "Definition override vector index",
            &mut self.definition_override_vector_index,
        );

        read(obj, "Seed", &mut self.seed);
        read(obj, "StatTrak", &mut self.stat_trak);
        read(obj, "Wear", &mut self.wear);

        if let Some(name) = obj.get("Custom name").and_then(|value| value.as_str()) {
            self.custom_name.set(name);
        }

        read_records(obj, "Stickers", &mut self.stickers, fonts);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        write(out, "Enabled", &self.enabled, &baseline.enabled);
        write(out, "Definition index", &self.item_id, &baseline.item_id);
        write(out, "Definition vector index", &self.item_id_index, &baseline.item_id_index);
        write(out, "Quality", &self.quality, &baseline.quality);
        write(
            out,
            "Quality vector index",
            &self.quality_vector_index,
            &baseline.quality_vector_index,
        );
        write(out, "Paint Kit", &self.paint_kit, &baseline.paint_kit);
        write(
            out,
            "Paint Kit vector index",
            &self.paint_kit_vector_index,
            &baseline.paint_kit_vector_index,
        );
        write(
            out,
            "Definition override",
            &self.definition_override_index,
            &baseline.definition_override_index,
        );
        write(
            out,
            "Definition override vector index",
            &self.definition_override_vector_index,
            &baseline.definition_override_vector_index,
        );
        write(out, "Seed", &self.seed, &baseline.seed);
        write(out, "StatTrak", &self.stat_trak, &baseline.stat_trak);
        write(out, "Wear", &self.wear, &baseline.wear);
        if !self.custom_name.is_empty() {
            out.insert(
                "Custom name".to_string(),
                self.custom_name.as_str().into(),
            );
        }
        write_records(out, "Stickers", &self.stickers, &baseline.stickers);
    }
}
