use eframe::egui::{Color32, Visuals};
use minefield_core::CellValue;
use minefield_game::TextureSelector;

/// How one [`TextureSelector`] is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Skin {
    pub(crate) fill: Color32,
    pub(crate) glyph: Option<&'static str>,
    pub(crate) glyph_color: Color32,
}

impl Skin {
    const fn plain(fill: Color32) -> Self {
        Self {
            fill,
            glyph: None,
            glyph_color: Color32::TRANSPARENT,
        }
    }

    const fn with_glyph(fill: Color32, glyph: &'static str, glyph_color: Color32) -> Self {
        Self {
            fill,
            glyph: Some(glyph),
            glyph_color,
        }
    }
}

/// Drawn in place of a skin that is not in the table.
const FALLBACK: Skin = Skin::with_glyph(Color32::from_rgb(255, 0, 255), "?", Color32::BLACK);

const COUNT_GLYPHS: [&str; 9] = ["", "1", "2", "3", "4", "5", "6", "7", "8"];

const COUNT_COLORS_LIGHT: [Color32; 9] = [
    Color32::TRANSPARENT,
    Color32::from_rgb(0, 0, 255),
    Color32::from_rgb(0, 128, 0),
    Color32::from_rgb(255, 0, 0),
    Color32::from_rgb(0, 0, 128),
    Color32::from_rgb(128, 0, 0),
    Color32::from_rgb(0, 128, 128),
    Color32::from_rgb(0, 0, 0),
    Color32::from_rgb(128, 128, 128),
];

const COUNT_COLORS_DARK: [Color32; 9] = [
    Color32::TRANSPARENT,
    Color32::from_rgb(110, 160, 255),
    Color32::from_rgb(100, 200, 100),
    Color32::from_rgb(255, 110, 110),
    Color32::from_rgb(170, 140, 255),
    Color32::from_rgb(230, 150, 90),
    Color32::from_rgb(90, 210, 210),
    Color32::from_rgb(230, 230, 230),
    Color32::from_rgb(170, 170, 170),
];

/// Maps every [`TextureSelector`] to a [`Skin`].
///
/// Lookups of missing entries fall back to a placeholder and are reported
/// once per selector.
#[derive(Debug, Clone)]
pub(crate) struct SkinTable {
    dark_mode: bool,
    skins: [Option<Skin>; TextureSelector::COUNT],
    reported: [bool; TextureSelector::COUNT],
}

impl SkinTable {
    pub(crate) fn from_visuals(visuals: &Visuals) -> Self {
        let mut table = Self {
            dark_mode: visuals.dark_mode,
            skins: [None; TextureSelector::COUNT],
            reported: [false; TextureSelector::COUNT],
        };
        table.fill_from(visuals);
        table
    }

    /// Rebuilds the skins if the light/dark mode changed.
    pub(crate) fn sync(&mut self, visuals: &Visuals) {
        if self.dark_mode != visuals.dark_mode {
            self.dark_mode = visuals.dark_mode;
            self.fill_from(visuals);
        }
    }

    fn fill_from(&mut self, visuals: &Visuals) {
        let covered = visuals.widgets.inactive.bg_fill;
        let revealed = visuals.extreme_bg_color;
        let count_colors = if visuals.dark_mode {
            &COUNT_COLORS_DARK
        } else {
            &COUNT_COLORS_LIGHT
        };

        for selector in TextureSelector::ALL {
            let skin = match selector {
                TextureSelector::Covered => Skin::plain(covered),
                TextureSelector::Flag => {
                    Skin::with_glyph(covered, "🚩", visuals.error_fg_color)
                }
                TextureSelector::Revealed(CellValue::Mine) => {
                    Skin::with_glyph(visuals.error_fg_color, "💣", visuals.strong_text_color())
                }
                TextureSelector::Revealed(CellValue::Count(0)) => Skin::plain(revealed),
                TextureSelector::Revealed(CellValue::Count(n)) => {
                    let i = usize::from(n.min(8));
                    Skin::with_glyph(revealed, COUNT_GLYPHS[i], count_colors[i])
                }
            };
            self.set(selector, skin);
        }
    }

    pub(crate) fn set(&mut self, selector: TextureSelector, skin: Skin) {
        self.skins[selector.asset_index()] = Some(skin);
    }

    #[cfg(test)]
    pub(crate) fn remove(&mut self, selector: TextureSelector) {
        self.skins[selector.asset_index()] = None;
    }

    pub(crate) fn lookup(&mut self, selector: TextureSelector) -> Skin {
        let index = selector.asset_index();
        if let Some(skin) = self.skins[index] {
            return skin;
        }
        if !self.reported[index] {
            self.reported[index] = true;
            log::error!("no skin for {selector:?}, drawing a placeholder");
        }
        FALLBACK
    }

    pub(crate) fn border_color(&self) -> Color32 {
        if self.dark_mode {
            Color32::from_gray(30)
        } else {
            Color32::from_gray(120)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_selector_has_a_skin() {
        let mut table = SkinTable::from_visuals(&Visuals::light());
        for selector in TextureSelector::ALL {
            assert_ne!(table.lookup(selector), FALLBACK);
        }
        assert!(!table.reported.contains(&true));
    }

    #[test]
    fn test_counts_show_digits() {
        let mut table = SkinTable::from_visuals(&Visuals::dark());
        assert_eq!(
            table.lookup(TextureSelector::Revealed(CellValue::Count(3))).glyph,
            Some("3")
        );
        assert_eq!(
            table.lookup(TextureSelector::Revealed(CellValue::EMPTY)).glyph,
            None
        );
        assert_eq!(table.lookup(TextureSelector::Covered).glyph, None);
    }

    #[test]
    fn test_missing_skin_falls_back() {
        let mut table = SkinTable::from_visuals(&Visuals::light());
        table.remove(TextureSelector::Flag);

        assert_eq!(table.lookup(TextureSelector::Flag), FALLBACK);
        assert!(table.reported[TextureSelector::Flag.asset_index()]);
        assert_eq!(table.lookup(TextureSelector::Flag), FALLBACK);
    }

    #[test]
    fn test_sync_switches_palette() {
        let mut table = SkinTable::from_visuals(&Visuals::light());
        let light = table.lookup(TextureSelector::Revealed(CellValue::Count(1)));

        table.sync(&Visuals::dark());
        let dark = table.lookup(TextureSelector::Revealed(CellValue::Count(1)));

        assert_ne!(light.glyph_color, dark.glyph_color);
    }
}
