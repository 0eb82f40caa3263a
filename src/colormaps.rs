//! Colormap dataset assembler
//!
//! Builds the flat colormap list consumed by the frontend build: a fixed set
//! of hand-authored colormaps followed by sequential and diverging palettes
//! queried from the ColorBrewer catalog.

use color_brewery::{PaletteType, RGBColor};
use rgb::RGB8;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// How many palettes of each catalog type the dataset carries.
pub const PALETTES_PER_TYPE: usize = 7;

/// Palette classification as it appears in the emitted dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    Sequential,
    Diverging,
}

impl PaletteKind {
    fn catalog_type(self) -> PaletteType {
        match self {
            Self::Sequential => PaletteType::Seq,
            Self::Diverging => PaletteType::Div,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Diverging => "diverging",
        }
    }
}

/// One colormap record. Color order defines the visual scale and is
/// preserved exactly as sourced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colormap {
    #[serde(rename = "type")]
    pub kind: PaletteKind,
    pub colors: Vec<String>,
}

impl Colormap {
    fn new(kind: PaletteKind, colors: &[&str]) -> Self {
        Self {
            kind,
            colors: colors.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// The hand-authored colormaps. These values are a fixed contract of the
/// dataset, not derived data.
pub fn custom_colormaps() -> Vec<Colormap> {
    use PaletteKind::{Diverging, Sequential};
    vec![
        Colormap::new(Sequential, &[
            "#E4EEC6", "#C3E0A7", "#8DCB81", "#64AD66", "#378C4D", "#296634", "#1C401F",
        ]),
        Colormap::new(Sequential, &[
            "#D9E9F5", "#BACCE8", "#8D9CCD", "#6678B8", "#3C59A6", "#214080", "#001C5E",
        ]),
        Colormap::new(Sequential, &[
            "#E1F0DC", "#BCE1D0", "#94D2C4", "#5EB4B4", "#0098A6", "#03707D", "#054957",
        ]),
        Colormap::new(Sequential, &[
            "#FEE1D6", "#FEC0BF", "#F496A0", "#E16E87", "#C64974", "#A32A64", "#77184F",
        ]),
        Colormap::new(Sequential, &[
            "#FAECB7", "#FDD881", "#FCB817", "#F49D21", "#EA8026", "#BA4F28", "#8B1B26",
        ]),
        Colormap::new(Diverging, &[
            "#8B1B26", "#BA4F28", "#F08E23", "#FCDD8E", "#FBF7EA", "#B6DED2", "#6CAFAC",
            "#07717D", "#054957",
        ]),
        Colormap::new(Diverging, &[
            "#5A0C0C", "#A03035", "#E1746F", "#F9C5BC", "#FBF7EA", "#CFDBE8", "#90A2D1",
            "#3A56A3", "#001C5E",
        ]),
        Colormap::new(Diverging, &[
            "#5C1339", "#A33166", "#D783A0", "#FCD5D2", "#FBF7EA", "#E5E8B3", "#84C77B",
            "#2F8749", "#1C401F",
        ]),
    ]
}

fn hex(color: RGB8) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b)
}

/// Query the palette catalog for exactly `count` palettes of `kind`, in the
/// catalog's own enumeration order.
///
/// # Errors
/// Returns `ProviderUnavailable` if the catalog holds fewer than `count`
/// matching palettes; no partial result is returned.
pub fn list_palettes(kind: PaletteKind, count: usize) -> Result<Vec<Colormap>, AppError> {
    let palettes: Vec<Colormap> = RGB8::palettes(2)
        .typ(kind.catalog_type())
        .find()
        .take(count)
        .map(|p| Colormap {
            kind,
            colors: p.colors().into_iter().map(hex).collect(),
        })
        .collect();

    if palettes.len() < count {
        return Err(AppError::ProviderUnavailable {
            kind: kind.as_str(),
            requested: count,
            available: palettes.len(),
        });
    }
    Ok(palettes)
}

/// Assemble the full colormap dataset.
///
/// Output order is a contract: custom colormaps first, then the sequential
/// catalog palettes, then the diverging ones.
pub fn assemble() -> Result<Vec<Colormap>, AppError> {
    let diverging = list_palettes(PaletteKind::Diverging, PALETTES_PER_TYPE)?;
    let sequential = list_palettes(PaletteKind::Sequential, PALETTES_PER_TYPE)?;

    let mut colormaps = custom_colormaps();
    colormaps.extend(sequential);
    colormaps.extend(diverging);
    Ok(colormaps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex_color(s: &str) -> bool {
        s.len() == 7
            && s.starts_with('#')
            && s[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn test_custom_colormaps_shape() {
        let custom = custom_colormaps();
        assert_eq!(custom.len(), 8);
        assert!(custom[..5].iter().all(|c| c.kind == PaletteKind::Sequential));
        assert!(custom[5..].iter().all(|c| c.kind == PaletteKind::Diverging));
        for cmap in &custom {
            assert!(!cmap.colors.is_empty());
            assert!(cmap.colors.iter().all(|c| is_hex_color(c)));
        }
    }

    #[test]
    fn test_custom_colormaps_first_entry_is_exact() {
        let custom = custom_colormaps();
        assert_eq!(
            custom[0].colors,
            vec![
                "#E4EEC6", "#C3E0A7", "#8DCB81", "#64AD66", "#378C4D", "#296634", "#1C401F"
            ]
        );
    }

    #[test]
    fn test_list_palettes_returns_requested_count() {
        let seq = list_palettes(PaletteKind::Sequential, 7).unwrap();
        assert_eq!(seq.len(), 7);
        assert!(seq.iter().all(|c| c.kind == PaletteKind::Sequential));
        for cmap in &seq {
            assert!(cmap.colors.len() >= 2);
            assert!(cmap.colors.iter().all(|c| is_hex_color(c)));
        }
    }

    #[test]
    fn test_list_palettes_insufficient_is_an_error() {
        let err = list_palettes(PaletteKind::Diverging, 10_000).unwrap_err();
        match err {
            AppError::ProviderUnavailable {
                kind, requested, ..
            } => {
                assert_eq!(kind, "diverging");
                assert_eq!(requested, 10_000);
            }
            other => panic!("Expected ProviderUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_assemble_order_contract() {
        let colormaps = assemble().unwrap();
        assert_eq!(colormaps.len(), 8 + 2 * PALETTES_PER_TYPE);
        assert_eq!(&colormaps[..8], &custom_colormaps()[..]);
        assert!(colormaps[8..15]
            .iter()
            .all(|c| c.kind == PaletteKind::Sequential));
        assert!(colormaps[15..]
            .iter()
            .all(|c| c.kind == PaletteKind::Diverging));
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let a = serde_json::to_string(&assemble().unwrap()).unwrap();
        let b = serde_json::to_string(&assemble().unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_colormap_serialization_is_minimal() {
        let cmap = Colormap::new(PaletteKind::Sequential, &["#E4EEC6", "#C3E0A7"]);
        assert_eq!(
            serde_json::to_string(&cmap).unwrap(),
            r##"{"type":"sequential","colors":["#E4EEC6","#C3E0A7"]}"##
        );
    }

    #[test]
    fn test_serialized_dataset_round_trips() {
        let bytes = serde_json::to_string(&assemble().unwrap()).unwrap();
        let parsed: Vec<Colormap> = serde_json::from_str(&bytes).unwrap();
        assert_eq!(serde_json::to_string(&parsed).unwrap(), bytes);
    }
}
