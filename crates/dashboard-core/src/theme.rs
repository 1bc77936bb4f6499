// File: crates/dashboard-core/src/theme.rs
// Summary: Dashboard palette (series colors, grid and label inks).

use crate::dataset::CityId;

/// Opaque 8-bit RGB color, rendered as `#rrggbb` in markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self { r: (hex >> 16) as u8, g: (hex >> 8) as u8, b: hex as u8 }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Rgb,
    pub city_a: Rgb,
    pub city_b: Rgb,
    pub grid: Rgb,
    /// Grid values and period labels.
    pub tick_label: Rgb,
    /// Legend entries and line point values.
    pub label: Rgb,
    /// Value labels drawn over bars.
    pub bar_value: Rgb,
}

impl Palette {
    /// The blue/red light palette the dashboard ships with.
    pub const fn light() -> Self {
        Self {
            background: Rgb::from_hex(0xffffff),
            city_a: Rgb::from_hex(0x3b82f6),
            city_b: Rgb::from_hex(0xef4444),
            grid: Rgb::from_hex(0xe5e7eb),
            tick_label: Rgb::from_hex(0x4b5563),
            label: Rgb::from_hex(0x374151),
            bar_value: Rgb::from_hex(0xffffff),
        }
    }

    /// Series color; depends on the city identity only.
    pub fn series(&self, city: CityId) -> Rgb {
        match city {
            CityId::CityA => self.city_a,
            CityId::CityB => self.city_b,
        }
    }
}

impl Default for Palette {
    fn default() -> Self { Self::light() }
}
