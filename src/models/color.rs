//! Color composites shared by every colored element.
//!
//! Each layer embeds the layer below it as a field and its codec runs the embedded
//! codec first, so a `ColorToggleThicknessRounding` reads and writes the keys of all
//! four layers into one flat JSON object.

use crate::document::{Object, Record, read, read_array, write};
use crate::fonts::FontCatalog;

pub const DEFAULT_RAINBOW_SPEED: f32 = 0.6;

pub(crate) fn clamp_unit<const N: usize>(components: &mut [f32; N]) {
    for component in components {
        *component = component.clamp(0.0, 1.0);
    }
}

/// RGB color with optional rainbow cycling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub rgb: [f32; 3],
    pub rainbow: bool,
    pub rainbow_speed: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            rgb: [r, g, b],
            rainbow: false,
            rainbow_speed: DEFAULT_RAINBOW_SPEED,
        }
    }
}

impl Record for Color {
    fn decode(&mut self, obj: &Object, _fonts: &mut FontCatalog) {
        read_array(obj, "Color", &mut self.rgb);
        clamp_unit(&mut self.rgb);
        read(obj, "Rainbow", &mut self.rainbow);
        read(obj, "Rainbow Speed", &mut self.rainbow_speed);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        write(out, "Color", &self.rgb, &baseline.rgb);
        write(out, "Rainbow", &self.rainbow, &baseline.rainbow);
        write(out, "Rainbow Speed", &self.rainbow_speed, &baseline.rainbow_speed);
    }
}

/// RGBA color with optional rainbow cycling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorA {
    pub rgba: [f32; 4],
    pub rainbow: bool,
    pub rainbow_speed: f32,
}

impl Default for ColorA {
    fn default() -> Self {
        Self::rgba(1.0, 1.0, 1.0, 1.0)
    }
}

impl ColorA {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            rgba: [r, g, b, a],
            rainbow: false,
            rainbow_speed: DEFAULT_RAINBOW_SPEED,
        }
    }
}

impl Record for ColorA {
    fn decode(&mut self, obj: &Object, _fonts: &mut FontCatalog) {
        read_array(obj, "Color", &mut self.rgba);
        clamp_unit(&mut self.rgba);
        read(obj, "Rainbow", &mut self.rainbow);
        read(obj, "Rainbow Speed", &mut self.rainbow_speed);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        write(out, "Color", &self.rgba, &baseline.rgba);
        write(out, "Rainbow", &self.rainbow, &baseline.rainbow);
        write(out, "Rainbow Speed", &self.rainbow_speed, &baseline.rainbow_speed);
    }
}

/// [`Color`] with an on/off switch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorToggle {
    pub color: Color,
    pub enabled: bool,
}

impl ColorToggle {
    pub const fn with_color(color: Color) -> Self {
        Self {
            color,
            enabled: false,
        }
    }
}

impl Record for ColorToggle {
    fn decode(&mut self, obj: &Object, fonts: &mut FontCatalog) {
        self.color.decode(obj, fonts);
        read(obj, "Enabled", &mut self.enabled);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        self.color.encode(out, &baseline.color);
        write(out, "Enabled", &self.enabled, &baseline.enabled);
    }
}

/// [`ColorA`] with an on/off switch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorToggleA {
    pub color: ColorA,
    pub enabled: bool,
}

impl ColorToggleA {
    pub const fn with_color(color: ColorA) -> Self {
        Self {
            color,
            enabled: false,
        }
    }
}

impl Record for ColorToggleA {
    fn decode(&mut self, obj: &Object, fonts: &mut FontCatalog) {
        self.color.decode(obj, fonts);
        read(obj, "Enabled", &mut self.enabled);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        self.color.encode(out, &baseline.color);
        write(out, "Enabled", &self.enabled, &baseline.enabled);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorToggleRounding {
    pub toggle: ColorToggleA,
    pub rounding: f32,
}

impl Record for ColorToggleRounding {
    fn decode(&mut self, obj: &Object, fonts: &mut FontCatalog) {
        self.toggle.decode(obj, fonts);
        read(obj, "Rounding", &mut self.rounding);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        self.toggle.encode(out, &baseline.toggle);
        write(out, "Rounding", &self.rounding, &baseline.rounding);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorToggleThickness {
    pub toggle: ColorToggleA,
    pub thickness: f32,
}

impl Default for ColorToggleThickness {
    fn default() -> Self {
        Self {
            toggle: ColorToggleA::default(),
            thickness: 1.0,
        }
    }
}

impl Record for ColorToggleThickness {
    fn decode(&mut self, obj: &Object, fonts: &mut FontCatalog) {
        self.toggle.decode(obj, fonts);
        read(obj, "Thickness", &mut self.thickness);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        self.toggle.encode(out, &baseline.toggle);
        write(out, "Thickness", &self.thickness, &baseline.thickness);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorToggleThicknessRounding {
    pub rounded: ColorToggleRounding,
    pub thickness: f32,
}

impl Default for ColorToggleThicknessRounding {
    fn default() -> Self {
        Self {
            rounded: ColorToggleRounding::default(),
            thickness: 1.0,
        }
    }
}

impl Record for ColorToggleThicknessRounding {
    fn decode(&mut self, obj: &Object, fonts: &mut FontCatalog) {
        self.rounded.decode(obj, fonts);
        read(obj, "Thickness", &mut self.thickness);
    }

    fn encode(&self, out: &mut Object, baseline: &Self) {
        self.rounded.encode(out, &baseline.rounded);
        write(out, "Thickness", &self.thickness, &baseline.thickness);
    }
}
