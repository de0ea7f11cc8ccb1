use serde::{Deserialize, Serialize};

/// Blend color value that means "no secondary color requested".
pub const NO_BLEND_SENTINEL: &str = "#000000";

/// Adjustment value that means "no structural adjustment requested".
pub const NO_ADJUSTMENT: &str = "none";

/// The full set of user-chosen garment attributes driving prompt
/// construction. Field values come from the catalogs in
/// [`crate::design::options`]; the wire accepts arbitrary strings and the
/// estimate lookup falls back to a default row for unknown cloth types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSelection {
    pub material: String,
    pub cloth_type: String,
    pub usage: String,
    pub color: String,
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloth_detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloth_adjustment: Option<String>,
}

impl DesignSelection {
    /// The secondary color, if one is requested and not the sentinel.
    pub fn active_blend_color(&self) -> Option<&str> {
        self.blend_color
            .as_deref()
            .filter(|value| !value.trim().is_empty() && *value != NO_BLEND_SENTINEL)
    }

    /// The structural adjustment, if one is requested and not "none".
    pub fn active_adjustment(&self) -> Option<&str> {
        self.cloth_adjustment
            .as_deref()
            .filter(|value| !value.trim().is_empty() && *value != NO_ADJUSTMENT)
    }

    /// The cloth detail, if present and non-empty.
    pub fn active_detail(&self) -> Option<&str> {
        self.cloth_detail
            .as_deref()
            .filter(|value| !value.trim().is_empty())
    }
}

/// The design summary forwarded to the chat assistant. A subset of
/// [`DesignSelection`]: the optional edit-panel fields do not feed the
/// assistant's context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignParams {
    pub material: String,
    pub cloth_type: String,
    pub usage: String,
    pub color: String,
    pub pattern: String,
}

impl From<&DesignSelection> for DesignParams {
    fn from(selection: &DesignSelection) -> Self {
        DesignParams {
            material: selection.material.clone(),
            cloth_type: selection.cloth_type.clone(),
            usage: selection.usage.clone(),
            color: selection.color.clone(),
            pattern: selection.pattern.clone(),
        }
    }
}
