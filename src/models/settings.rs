use super::combat::{Aimbot, Backtrack, Triggerbot, WEAPON_SLOTS};
use super::esp::StreamProofEsp;
use super::misc::{Misc, Sound, Style};
use super::skin::{ItemSetting, SKIN_SLOTS};
use super::visuals::{Chams, GLOW_SLOTS, Glow, Visuals};
use crate::document::{
    Object, Record, encode_record, prune, put_map, put_records, read_map, read_record,
    read_records, write_record,
};
use crate::fonts::FontCatalog;
use indexmap::IndexMap;
use serde_json::Value;

/// The complete settings tree of one profile.
///
/// Real-time consumers read this directly; only the config store replaces or merges it.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub aimbot: [Aimbot; WEAPON_SLOTS],
    pub triggerbot: [Triggerbot; WEAPON_SLOTS],
    pub backtrack: Backtrack,
    pub glow: [Glow; GLOW_SLOTS],
    pub chams: IndexMap<String, Chams>,
    pub esp: StreamProofEsp,
    pub visuals: Visuals,
    pub skin_changer: [ItemSetting; SKIN_SLOTS],
    pub sound: Sound,
    pub style: Style,
    pub misc: Misc,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            aimbot: [Aimbot::default(); WEAPON_SLOTS],
            triggerbot: [Triggerbot::default(); WEAPON_SLOTS],
            backtrack: Backtrack::default(),
            glow: Default::default(),
            chams: IndexMap::new(),
            esp: StreamProofEsp::default(),
            visuals: Visuals::default(),
            skin_changer: std::array::from_fn(|_| ItemSetting::default()),
            sound: Sound::default(),
            style: Style::default(),
            misc: Misc::default(),
        }
    }
}

impl Settings {
    /// Restore every category to its default in place.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Merge a whole profile document into the tree.
    ///
    /// Non-object documents are ignored.
    pub fn apply_document(&mut self, doc: &Value, fonts: &mut FontCatalog) {
        if let Some(obj) = doc.as_object() {
            self.decode(obj, fonts);
        }
    }

    /// Encode the tree with defaults suppressed and empty containers pruned.
    pub fn to_document(&self) -> Value {
        let mut doc = encode_record(self, &Self::default());
        prune(&mut doc);
        doc
    }
}

impl Record for Settings {
    fn decode(&mut self, obj: &Object, fonts: &mut FontCatalog) {
        read_records(obj, "Aimbot", &mut self.aimbot, fonts);
        read_records(obj, "Triggerbot", &mut self.triggerbot, fonts);
        read_record(obj, "Backtrack", &mut self.backtrack, fonts);
        read_records(obj, "Glow", &mut self.glow, fonts);
        read_map(obj, "Chams", &mut self.chams, fonts);
        read_record(obj, "ESP", &mut self.esp, fonts);
        read_record(obj, "Visuals", &mut self.visuals, fonts);
        read_records(obj, "Skin changer", &mut self.skin_changer, fonts);
        read_record(obj, "Sound", &mut self.sound, fonts);
        read_record(obj, "Style", &mut self.style, fonts);
        read_record(obj, "Misc", &mut self.misc, fonts);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        put_records(out, "Aimbot", &self.aimbot);
        put_records(out, "Triggerbot", &self.triggerbot);
        out.insert(
            "Backtrack".to_string(),
            encode_record(&self.backtrack, &baseline.backtrack),
        );
        put_records(out, "Glow", &self.glow);
        put_map(out, "Chams", &self.chams);
        out.insert("ESP".to_string(), encode_record(&self.esp, &baseline.esp));
        out.insert("Sound".to_string(), encode_record(&self.sound, &baseline.sound));
        write_record(out, "Visuals", &self.visuals, &baseline.visuals);
        out.insert("Misc".to_string(), encode_record(&self.misc, &baseline.misc));
        out.insert("Style".to_string(), encode_record(&self.style, &baseline.style));
        put_records(out, "Skin changer", &self.skin_changer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Player;
    use serde_json::json;

    #[test]
    fn test_default_tree_keeps_only_fixed_arrays() {
        let doc = Settings::default().to_document();
        let obj = doc.as_object().unwrap();

        let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Aimbot", "Glow", "Skin changer", "Sound", "Triggerbot"]);
        assert_eq!(obj["Aimbot"].as_array().unwrap().len(), WEAPON_SLOTS);
        assert!(obj["Aimbot"].as_array().unwrap().iter().all(|slot| slot == &json!({})));
    }

    #[test]
    fn test_tree_round_trip() {
        let mut settings = Settings::default();
        settings.aimbot[3].fov = 12.5;
        settings.aimbot[3].silent = true;
        settings.triggerbot[39].shot_delay = 80;
        settings.backtrack.enabled = true;
        settings.glow[20].enabled = true;
        settings.chams.entry("Enemies".to_string()).or_default().materials[0].enabled = true;
        settings.esp.allies.insert("All".to_string(), Player::default());
        settings.visuals.flash_reduction = 70;
        settings.skin_changer[35].paint_kit = 12;
        settings.sound.chicken_volume = 0;
        settings.style.menu_style = 1;
        settings.misc.bunny_hop = true;

        let doc = settings.to_document();

        let mut decoded = Settings::default();
        decoded.apply_document(&doc, &mut FontCatalog::default());

        // Name-keyed entries that are entirely default are pruned and do not come back.
        settings.esp.allies.clear();
        assert_eq!(decoded, settings);
    }

    #[test]
    fn test_default_map_entries_do_not_survive_round_trip() {
        let mut settings = Settings::default();
        settings.chams.insert("Allies".to_string(), Chams::default());
        settings.esp.enemies.insert("Visible".to_string(), Player::default());

        let doc = settings.to_document();
        assert!(doc.get("Chams").is_none());
        assert!(doc.get("ESP").is_none());

        let mut decoded = Settings::default();
        decoded.apply_document(&doc, &mut FontCatalog::default());
        assert!(decoded.chams.is_empty());
        assert!(decoded.esp.enemies.is_empty());
    }

    #[test]
    fn test_floats_are_stored_in_short_form() {
        let mut settings = Settings::default();
        settings.aimbot[0].fov = 1.7;

        let text = serde_json::to_string(&settings.to_document()).unwrap();
        assert!(text.contains(r#""Fov":1.7}"#));

        let mut decoded = Settings::default();
        decoded.apply_document(&serde_json::from_str(&text).unwrap(), &mut FontCatalog::default());
        assert_eq!(decoded, settings);
    }

    #[test]
    fn test_missing_sections_leave_tree_untouched() {
        let mut settings = Settings::default();
        settings.aimbot[0].enabled = true;
        settings.misc.menu_key = 0x24;

        let doc = json!({ "Triggerbot": [], "Misc": "not an object", "Glow": [{}] });
        settings.apply_document(&doc, &mut FontCatalog::default());

        assert!(settings.aimbot[0].enabled);
        assert_eq!(settings.misc.menu_key, 0x24);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut settings = Settings::default();
        settings.aimbot[1].enabled = true;
        settings.chams.insert("Allies".to_string(), Chams::default());

        settings.reset();
        assert_eq!(settings, Settings::default());
    }
}
