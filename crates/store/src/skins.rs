//! Built-in skin catalog.

use tui_snake_core::SnakeColors;
use tui_snake_types::Rgb;

/// Name of the skin used when nothing (or something unknown) is selected.
pub const DEFAULT_SKIN: &str = "classic";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skin {
    /// Stable identifier, persisted in the profile.
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub head: Rgb,
    pub body: Rgb,
}

impl Skin {
    pub fn colors(&self) -> SnakeColors {
        SnakeColors::new(self.head, self.body)
    }
}

pub const SKINS: [Skin; 3] = [
    Skin {
        name: "classic",
        display_name: "Classic",
        description: "The traditional green snake",
        head: Rgb::new(0, 255, 0),
        body: Rgb::new(0, 200, 0),
    },
    Skin {
        name: "neko",
        display_name: "Neko",
        description: "Cute pink cat-eared style",
        head: Rgb::new(255, 150, 200),
        body: Rgb::new(255, 100, 150),
    },
    Skin {
        name: "dragon",
        display_name: "Dragon",
        description: "Majestic golden dragon style",
        head: Rgb::new(255, 215, 0),
        body: Rgb::new(255, 165, 0),
    },
];

pub fn skin_by_name(name: &str) -> Option<&'static Skin> {
    SKINS.iter().find(|s| s.name == name)
}

/// Position of `name` in [`SKINS`], if known.
pub fn skin_index(name: &str) -> Option<usize> {
    SKINS.iter().position(|s| s.name == name)
}

/// Resolve a persisted name, falling back to the default skin.
pub fn resolve_skin(name: &str) -> &'static Skin {
    skin_by_name(name).unwrap_or(&SKINS[0])
}
