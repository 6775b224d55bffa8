//! Settings records for the overlay.
//!
//! Every record implements [`Record`](crate::document::Record) so it can merge a partial
//! profile document into itself and encode only what differs from its defaults:
//! - [`Settings`]: the full tree the config store loads and saves
//! - [`color`]: colour and toggle layers shared by most visual records
//! - [`esp`]: stream-proof ESP groups keyed by user-chosen names
//! - [`combat`], [`visuals`], [`skin`], [`misc`]: the remaining categories

pub mod color;
pub mod combat;
pub mod esp;
pub mod misc;
pub mod settings;
pub mod skin;
pub mod visuals;

pub use color::{
    Color, ColorA, ColorToggle, ColorToggleA, ColorToggleRounding, ColorToggleThickness,
    ColorToggleThicknessRounding,
};
pub use combat::{Aimbot, Backtrack, Triggerbot, WEAPON_SLOTS};
pub use esp::{EspBox, Font, Player, Projectile, Shared, Snapline, StreamProofEsp, Trail, Trails, Weapon};
pub use misc::{Misc, PurchaseList, Sound, SoundPlayer, Style};
pub use settings::Settings;
pub use skin::{CustomName, ItemSetting, SKIN_SLOTS, StickerSetting};
pub use visuals::{CHAMS_MATERIALS, Chams, GLOW_SLOTS, Glow, Material, Visuals};
