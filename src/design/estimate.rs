//! Static fabric/measurement estimates per cloth type. Pure data; the
//! derived display facts are recomputed on every request and never stored.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementEstimate {
    pub length: &'static str,
    pub width: &'static str,
    pub time: &'static str,
    pub fabric: &'static str,
    pub stitches: &'static str,
    pub buttons: &'static str,
}

const DEFAULT_ESTIMATE: MeasurementEstimate = MeasurementEstimate {
    length: "2 meters (78 inches)",
    width: "1.5 meters (59 inches)",
    time: "4-6 hours",
    fabric: "2m total fabric",
    stitches: "Approx. 3000-3500",
    buttons: "Standard closure",
};

static ESTIMATES: &[(&str, MeasurementEstimate)] = &[
    (
        "shirt",
        MeasurementEstimate {
            length: "2.5 meters (98 inches)",
            width: "1.5 meters (59 inches)",
            time: "4-6 hours",
            fabric: "2.5m body + 0.5m sleeves",
            stitches: "Approx. 3500-4000",
            buttons: "6-8 buttons required",
        },
    ),
    (
        "t-shirt",
        MeasurementEstimate {
            length: "1.5 meters (59 inches)",
            width: "1.2 meters (47 inches)",
            time: "2-3 hours",
            fabric: "1.5m body + sleeves",
            stitches: "Approx. 2000-2500",
            buttons: "None",
        },
    ),
    (
        "pant",
        MeasurementEstimate {
            length: "2 meters (78 inches)",
            width: "1.5 meters (59 inches)",
            time: "3-5 hours",
            fabric: "2m legs + waistband",
            stitches: "Approx. 3000-3500",
            buttons: "1 button + zipper",
        },
    ),
    (
        "saree",
        MeasurementEstimate {
            length: "6 meters (236 inches)",
            width: "1.2 meters (47 inches)",
            time: "8-10 hours",
            fabric: "6m continuous fabric",
            stitches: "Approx. 5000-6000",
            buttons: "None (blouse separate)",
        },
    ),
    (
        "dress",
        MeasurementEstimate {
            length: "3 meters (118 inches)",
            width: "1.5 meters (59 inches)",
            time: "5-7 hours",
            fabric: "3m body + sleeves",
            stitches: "Approx. 4000-4500",
            buttons: "4-6 buttons or zipper",
        },
    ),
    (
        "jacket",
        MeasurementEstimate {
            length: "2.5 meters (98 inches)",
            width: "1.5 meters (59 inches)",
            time: "6-8 hours",
            fabric: "2.5m outer + 2m lining",
            stitches: "Approx. 4500-5000",
            buttons: "4-8 buttons + zipper",
        },
    ),
    (
        "blouse",
        MeasurementEstimate {
            length: "1.5 meters (59 inches)",
            width: "1 meter (39 inches)",
            time: "3-4 hours",
            fabric: "1.5m body + sleeves",
            stitches: "Approx. 2500-3000",
            buttons: "3-5 buttons or hooks",
        },
    ),
    (
        "skirt",
        MeasurementEstimate {
            length: "1.5 meters (59 inches)",
            width: "1.5 meters (59 inches)",
            time: "2-3 hours",
            fabric: "1.5m skirt + waistband",
            stitches: "Approx. 2000-2500",
            buttons: "1 button + zipper",
        },
    ),
];

/// Estimate row for a cloth type, falling back to a generic record for
/// unknown types rather than failing.
pub fn estimate_for(cloth_type: &str) -> &'static MeasurementEstimate {
    ESTIMATES
        .iter()
        .find(|(key, _)| *key == cloth_type)
        .map(|(_, estimate)| estimate)
        .unwrap_or(&DEFAULT_ESTIMATE)
}

/// Display-ready facts for the measurement panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialDetails {
    pub material: String,
    pub cloth_type: String,
    pub estimate: &'static MeasurementEstimate,
    pub detail: String,
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// "quarter-sleeve" -> "Quarter Sleeve"; empty/missing -> "Standard".
fn humanize_detail(detail: Option<&str>) -> String {
    match detail.filter(|value| !value.trim().is_empty()) {
        Some(value) => value
            .split('-')
            .map(capitalize_first)
            .collect::<Vec<_>>()
            .join(" "),
        None => "Standard".to_string(),
    }
}

pub fn material_details(
    material: &str,
    cloth_type: &str,
    cloth_detail: Option<&str>,
) -> MaterialDetails {
    MaterialDetails {
        material: capitalize_first(material),
        cloth_type: capitalize_first(cloth_type),
        estimate: estimate_for(cloth_type),
        detail: humanize_detail(cloth_detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saree_row_is_returned_verbatim() {
        let estimate = estimate_for("saree");
        assert_eq!(estimate.length, "6 meters (236 inches)");
        assert_eq!(estimate.buttons, "None (blouse separate)");
        assert_eq!(estimate.time, "8-10 hours");
    }

    #[test]
    fn unknown_cloth_type_falls_back_to_default() {
        let estimate = estimate_for("poncho");
        assert_eq!(estimate, &DEFAULT_ESTIMATE);
        assert_eq!(estimate.length, "2 meters (78 inches)");
    }

    #[test]
    fn details_are_title_cased_for_display() {
        let details = material_details("silk", "saree", Some("half-saree"));
        assert_eq!(details.material, "Silk");
        assert_eq!(details.cloth_type, "Saree");
        assert_eq!(details.detail, "Half Saree");
    }

    #[test]
    fn missing_detail_displays_as_standard() {
        let details = material_details("cotton", "dress", None);
        assert_eq!(details.detail, "Standard");
        let details = material_details("cotton", "dress", Some("  "));
        assert_eq!(details.detail, "Standard");
    }
}
