//! Pigment records and the fixed catalogs the game draws from.
//!
//! A pigment's `colorant` is the OKLab value the mixing model consumes; the
//! swatch hex is display-only and is never reparsed for mixing math. The
//! classic catalog derives its colorants once from the swatch hex at
//! construction; the expanded catalog carries hand-tuned colorants.

use serde::{Deserialize, Serialize};

use crate::color_space::{rgb_to_oklab, OkLab, Rgb};

/// An oil pigment: display identity plus its mixing colorant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pigment {
    pub id: String,
    pub name: String,
    /// Color Index code, e.g. "PB29".
    pub code: String,
    pub swatch_hex: String,
    pub colorant: OkLab,
}

impl Pigment {
    /// Pigment whose colorant is derived from its swatch hex.
    ///
    /// # Panics
    /// Panics if `swatch_hex` is not a valid 6-digit hex color; catalog data
    /// is static and checked by tests.
    fn derived(id: &str, name: &str, code: &str, swatch_hex: &str) -> Self {
        let rgb = Rgb::from_hex(swatch_hex)
            .unwrap_or_else(|| panic!("invalid swatch hex for pigment {id}: {swatch_hex}"));
        Self {
            id: id.to_string(),
            name: name.to_string(),
            code: code.to_string(),
            swatch_hex: swatch_hex.to_string(),
            colorant: rgb_to_oklab(rgb),
        }
    }

    /// Pigment with a hand-tuned colorant.
    fn curated(id: &str, name: &str, code: &str, swatch_hex: &str, l: f64, a: f64, b: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            code: code.to_string(),
            swatch_hex: swatch_hex.to_string(),
            colorant: OkLab::new(l, a, b),
        }
    }
}

/// A fixed, insertion-ordered set of pigments with unique ids.
/// Read-only at runtime; sessions hold one catalog for their lifetime.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PigmentCatalog {
    pigments: Vec<Pigment>,
}

impl PigmentCatalog {
    /// The classic ten-pigment starter palette.
    pub fn classic() -> Self {
        Self {
            pigments: vec![
                Pigment::derived("pw6", "Titanium White", "PW6", "#F2F2F2"),
                Pigment::derived("pbk9", "Ivory Black", "PBk9", "#1C1C1C"),
                Pigment::derived("py35", "Cadmium Yellow", "PY35", "#F6C700"),
                Pigment::derived("py43", "Yellow Ochre", "PY43", "#C49A2C"),
                Pigment::derived("pr108", "Cadmium Red", "PR108", "#D02A2A"),
                Pigment::derived("pr177", "Alizarin Crimson", "PR177", "#8E1F2E"),
                Pigment::derived("pb29", "Ultramarine Blue", "PB29", "#2C3FA3"),
                Pigment::derived("pb15", "Phthalo Blue", "PB15", "#0C4DA2"),
                Pigment::derived("pg7", "Phthalo Green", "PG7", "#0C8A6D"),
                Pigment::derived("pbr7", "Burnt Sienna", "PBr7", "#7A3B1C"),
            ],
        }
    }

    /// The expanded studio palette with hand-tuned colorants.
    pub fn expanded() -> Self {
        Self {
            pigments: vec![
                // Whites
                Pigment::curated("pw6", "Titanium White", "PW6", "#F2F2F2", 0.96, 0.00, 0.00),
                Pigment::curated("pw1", "Zinc White", "PW1", "#FEFEFE", 0.98, 0.00, 0.00),
                Pigment::curated("pw4", "Buff Titanium", "PW4", "#DAD2C6", 0.85, 0.02, 0.05),
                // Blacks and grays
                Pigment::curated("pbk9", "Ivory Black", "PBk9", "#1C1C1C", 0.15, 0.00, 0.00),
                Pigment::curated("pbk7", "Mars Black", "PBk7", "#0F0F0F", 0.12, 0.00, 0.00),
                Pigment::curated("pg1", "Payne's Gray", "PG1", "#53606B", 0.42, -0.02, -0.05),
                Pigment::curated("ng1", "Neutral Gray", "NG1", "#808080", 0.55, 0.00, 0.00),
                Pigment::curated("pg2", "Davy's Gray", "PG2", "#5E6E66", 0.45, -0.02, 0.02),
                // Yellows
                Pigment::curated("py35", "Cadmium Yellow", "PY35", "#FFD200", 0.88, 0.02, 0.18),
                Pigment::curated("py3", "Lemon Yellow", "PY3", "#FFF44F", 0.92, -0.08, 0.22),
                Pigment::curated("py83", "Indian Yellow", "PY83", "#FFB000", 0.78, 0.08, 0.20),
                Pigment::curated("py74", "Hansa Yellow Medium", "PY74", "#F7D038", 0.85, 0.00, 0.16),
                Pigment::curated("py184", "Bismuth Yellow", "PY184", "#F9E04C", 0.89, -0.02, 0.18),
                Pigment::curated("py154", "Naples Yellow", "PY154", "#F4E0A3", 0.88, 0.02, 0.08),
                Pigment::curated("py43", "Yellow Ochre", "PY43", "#C6862B", 0.62, 0.05, 0.12),
                // Oranges
                Pigment::curated("po20", "Cadmium Orange", "PO20", "#FF7F2A", 0.68, 0.18, 0.16),
                // Reds
                Pigment::curated("pr108", "Cadmium Red", "PR108", "#E03C31", 0.55, 0.22, 0.14),
                Pigment::curated("pr254", "Scarlet Lake", "PR254", "#FF2400", 0.58, 0.28, 0.18),
                Pigment::curated("pr188", "Vermilion", "PR188", "#E34234", 0.56, 0.24, 0.16),
                Pigment::curated("pr177", "Alizarin Crimson", "PR177", "#8A2232", 0.32, 0.18, 0.08),
                Pigment::curated("pr19", "Carmine", "PR19", "#A50034", 0.38, 0.25, 0.05),
                Pigment::curated("pr209", "Quinacridone Red", "PR209", "#D12C4F", 0.48, 0.25, 0.05),
                Pigment::curated("pr122", "Quinacridone Rose", "PR122", "#D95A8F", 0.58, 0.22, -0.05),
                Pigment::curated("pr170", "Permanent Rose", "PR170", "#E03C8A", 0.55, 0.28, -0.08),
                Pigment::curated("pr83", "Rose Madder Hue", "PR83", "#E3A1B8", 0.72, 0.15, -0.02),
                Pigment::curated("pr101", "Indian Red", "PR101", "#7E2A2A", 0.32, 0.15, 0.08),
                Pigment::curated("pr102", "English Red", "PR102", "#B24C2B", 0.42, 0.18, 0.12),
                Pigment::curated("pr101v", "Venetian Red", "PR101", "#9E3A2B", 0.38, 0.16, 0.10),
                Pigment::curated("pr233", "Transparent Oxide Red", "PR233", "#A34222", 0.42, 0.20, 0.12),
                // Purples and violets
                Pigment::curated("pv14", "Cobalt Violet Light", "PV14", "#A98AC5", 0.62, 0.08, -0.15),
                Pigment::curated("pv14d", "Cobalt Violet Deep", "PV14", "#774C9E", 0.42, 0.15, -0.18),
                Pigment::curated("pv23", "Dioxazine Purple", "PV23", "#4A2C6F", 0.28, 0.12, -0.22),
                Pigment::curated("pv42", "Mauve", "PV42", "#B190B6", 0.65, 0.08, -0.08),
                Pigment::curated("pv16", "Mars Violet", "PV16", "#5E2D3A", 0.25, 0.10, -0.05),
                Pigment::curated("pv49", "Lavender", "PV49", "#C9B6E4", 0.75, 0.05, -0.12),
                // Blues
                Pigment::curated("pb28", "Cobalt Blue", "PB28", "#3A5DAE", 0.45, -0.02, -0.28),
                Pigment::curated("pb35", "Cerulean Blue", "PB35", "#2A7FBA", 0.55, -0.08, -0.22),
                Pigment::curated("pb33", "Manganese Blue Hue", "PB33", "#3AA6DE", 0.68, -0.12, -0.18),
                Pigment::curated("pb27", "Prussian Blue", "PB27", "#0B3C5D", 0.28, -0.05, -0.18),
                Pigment::curated("pb29", "Ultramarine Blue", "PB29", "#3F4BA0", 0.42, -0.05, -0.25),
                Pigment::curated("pb60", "Indigo", "PB60", "#26457D", 0.32, -0.02, -0.20),
                Pigment::curated("pb15", "Phthalo Blue", "PB15", "#0F4C81", 0.35, -0.08, -0.22),
                Pigment::curated("kb1", "King's Blue", "KB1", "#8FB9E6", 0.75, -0.05, -0.15),
                Pigment::curated("az1", "Azure", "AZ1", "#007FFF", 0.62, -0.08, -0.25),
                Pigment::curated("pb36", "Cobalt Turquoise", "PB36", "#2FB8B6", 0.72, -0.18, -0.08),
                Pigment::curated("pb74", "Cobalt Teal", "PB74", "#34C6B6", 0.78, -0.20, -0.05),
                Pigment::curated("pg50t", "Phthalo Turquoise", "PG50", "#006D77", 0.45, -0.15, -0.08),
                // Greens
                Pigment::curated("pg18", "Viridian", "PG18", "#1B8A6B", 0.52, -0.18, 0.08),
                Pigment::curated("pg7", "Phthalo Green", "PG7", "#00836C", 0.48, -0.15, 0.05),
                Pigment::curated("pg36", "Sap Green", "PG36", "#507D2A", 0.45, -0.08, 0.18),
                Pigment::curated("pg8", "Hooker's Green", "PG8", "#3B6E3B", 0.42, -0.10, 0.15),
                Pigment::curated("pg17", "Chromium Oxide Green", "PG17", "#4F7D4A", 0.48, -0.12, 0.12),
                Pigment::curated("pg23", "Terre Verte", "PG23", "#7BA05B", 0.58, -0.10, 0.15),
                Pigment::curated("py129", "Olive Green", "PY129", "#6B8E23", 0.52, -0.05, 0.20),
                Pigment::curated("pg50", "Cobalt Green", "PG50", "#6FBF9B", 0.72, -0.15, 0.08),
                Pigment::curated("pg55", "Emerald Green", "PG55", "#00A776", 0.62, -0.22, 0.12),
                Pigment::curated("pg12", "Permanent Green Light", "PG12", "#74D055", 0.78, -0.18, 0.22),
                // Browns and earth tones
                Pigment::curated("pbr7r", "Raw Sienna", "PBr7", "#C08A3E", 0.58, 0.08, 0.15),
                Pigment::curated("pbr7ru", "Raw Umber", "PBr7", "#6B4E2E", 0.35, 0.05, 0.08),
                Pigment::curated("pbr7u", "Burnt Umber", "PBr7", "#7E4A25", 0.32, 0.08, 0.10),
                Pigment::curated("pbr7", "Burnt Sienna", "PBr7", "#8A3B12", 0.35, 0.12, 0.08),
                Pigment::curated("pbr8", "Van Dyke Brown", "PBr8", "#5A3A2B", 0.28, 0.06, 0.06),
            ],
        }
    }

    /// Look up a pigment by id.
    pub fn get(&self, id: &str) -> Option<&Pigment> {
        self.pigments.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Pigments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Pigment> {
        self.pigments.iter()
    }

    pub fn len(&self) -> usize {
        self.pigments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pigments.is_empty()
    }
}
