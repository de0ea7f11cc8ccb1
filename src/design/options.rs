//! Selectable attribute catalogs. Values are the wire encodings the
//! selection UI submits; display labels are derived by title-casing.

pub const MATERIALS: &[&str] = &[
    "cotton",
    "neon",
    "silk",
    "linen",
    "wool",
    "polyester",
    "denim",
    "velvet",
];

pub const CLOTH_TYPES: &[&str] = &[
    "shirt", "t-shirt", "pant", "saree", "dress", "jacket", "blouse", "skirt",
];

pub const USAGES: &[&str] = &[
    "sportswear",
    "casual",
    "formal",
    "party-wear",
    "ethnic",
    "office-wear",
];

pub const COLORS: &[&str] = &[
    "red",
    "blue",
    "green",
    "yellow",
    "purple",
    "orange",
    "pink",
    "black",
    "white",
    "multicolor",
];

pub const PATTERNS: &[&str] = &[
    "striped",
    "dotted",
    "printed",
    "floral",
    "geometric",
    "abstract",
    "paisley",
    "checkered",
    "solid",
];

const SLEEVE_DETAILS: &[&str] = &["quarter-sleeve", "half-sleeve", "full-sleeve"];

/// Sub-options offered for a cloth type; empty when the type has none.
pub fn cloth_details_for(cloth_type: &str) -> &'static [&'static str] {
    match cloth_type {
        "shirt" | "t-shirt" => SLEEVE_DETAILS,
        "pant" => &["full", "boxers", "trousers", "shorts"],
        "jacket" => &["zipped-jacket", "buttoned-jacket", "plain-jacket"],
        "blouse" => &["boat-neck", "backless", "strappy", "sleeveless"],
        "saree" => &["full", "half-saree"],
        "skirt" => &["mini", "box-pleats", "pencil", "tiered", "circle"],
        _ => &[],
    }
}

const TOP_ADJUSTMENTS: &[&str] = &[
    "Mandarin/Grandad collar",
    "High stand collar",
    "Open V-neck collarless",
    "Hidden button collar",
    "Cuban collar",
    "Concealed/Hidden placket",
    "Extended placket",
    "Cross placket",
    "Shoulder placket",
    "Popover placket",
    "Asymmetrical hem",
    "Raw edge/Frayed hem",
    "High-low hem",
    "Rounded hem (Shirttail)",
    "Straight hem",
    "Bishop sleeves",
    "Balloon sleeves",
    "Dropped shoulder sleeves",
    "Raglan sleeves",
    "Puff sleeves",
];

const PANT_ADJUSTMENTS: &[&str] = &[
    "Wide-leg fit",
    "Baggy fit",
    "Cropped length",
    "Raw edge/Frayed hem",
    "Side hem slit/vent",
    "Drawstring/Elasticated waist",
    "Side tab adjusters (beltless)",
    "Gurkha pants closure",
    "Cargo pockets",
    "Pintuck seam",
    "Stirrup pants",
];

/// Structural adjustments offered for a cloth type. Adjustment values are
/// submitted verbatim, unlike the lowercased detail encodings.
pub fn cloth_adjustments_for(cloth_type: &str) -> &'static [&'static str] {
    match cloth_type {
        "shirt" | "t-shirt" => TOP_ADJUSTMENTS,
        "pant" => PANT_ADJUSTMENTS,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cloth_type_with_details_is_a_known_type() {
        for cloth_type in CLOTH_TYPES {
            // Catalog access must never panic, whatever the type.
            let _ = cloth_details_for(cloth_type);
            let _ = cloth_adjustments_for(cloth_type);
        }
        assert!(cloth_details_for("dress").is_empty());
        assert!(cloth_adjustments_for("saree").is_empty());
    }

    #[test]
    fn unknown_cloth_type_has_no_options() {
        assert!(cloth_details_for("cape").is_empty());
        assert!(cloth_adjustments_for("cape").is_empty());
    }

    #[test]
    fn sleeve_details_are_shared_between_shirt_and_t_shirt() {
        assert_eq!(cloth_details_for("shirt"), cloth_details_for("t-shirt"));
        assert_eq!(
            cloth_adjustments_for("shirt"),
            cloth_adjustments_for("t-shirt")
        );
    }
}
