//! Deterministic prompt assembly for the image gateway. Pure string
//! construction; no I/O and no randomness.

use crate::design::selection::DesignSelection;

/// Builds the image-generation instruction for a selection. Clause order:
/// garment line, specification block, optional blend-color block, optional
/// structural-adjustment block, presentation requirements, no-crop
/// reminder.
pub fn build_image_prompt(selection: &DesignSelection) -> String {
    let cloth_type = selection.cloth_type.as_str();

    let detail_text = selection
        .active_detail()
        .map(|detail| format!(" with {}", detail.replace('-', " ")))
        .unwrap_or_default();

    let adjustment = selection.active_adjustment();
    let adjustment_text = adjustment
        .map(|value| format!(" with {value} design modification"))
        .unwrap_or_default();

    let pattern_text = if selection.pattern == "solid" {
        "solid color".to_string()
    } else {
        format!("{} pattern", selection.pattern)
    };

    let (color_description, color_instructions) = match selection.active_blend_color() {
        Some(blend) => (
            format!(
                "dual-tone color scheme combining {} and {}",
                selection.color, blend
            ),
            format!(
                "CRITICAL COLOR REQUIREMENT: The fabric MUST show BOTH {color} AND {blend} colors integrated throughout. \
                 Use techniques like ombre gradient, color blocking, or interwoven color patterns to ensure BOTH colors \
                 are prominently visible. Do NOT make it predominantly one color - both colors must be equally \
                 represented and clearly distinguishable.",
                color = selection.color,
            ),
        ),
        None => (format!("{} color", selection.color), String::new()),
    };

    let adjustment_instructions = adjustment
        .map(|value| {
            format!(
                "CRITICAL STRUCTURAL REQUIREMENT: The {cloth_type} MUST feature \"{value}\" as its PRIMARY design element.\n\
                 - This is NOT optional - the {value} MUST be the defining characteristic of this garment\n\
                 - Show the {value} clearly and prominently in the front view\n\
                 - The {value} should be immediately noticeable and accurately depicted\n\
                 - Ensure proper proportions and realistic construction of the {value}\n\
                 Example: If it's \"Mandarin collar\", show a clear stand-up collar without lapels. \
                 If it's \"Bishop sleeves\", show dramatically full, gathered sleeves."
            )
        })
        .unwrap_or_default();

    format!(
        "Create a ultra-realistic, high-quality photograph of a {cloth_type}{detail_text}{adjustment_text}.\n\
         \n\
         SPECIFICATIONS:\n\
         - Garment Type: {cloth_type}{detail_text}\n\
         - Fabric Material: {material} with visible texture\n\
         - Pattern Style: {pattern_text}\n\
         - Color Scheme: {color_description}\n\
         - Usage Context: {usage}\n\
         \n\
         {color_instructions}\n\
         \n\
         {adjustment_instructions}\n\
         \n\
         PRESENTATION REQUIREMENTS:\n\
         - Show the complete {cloth_type} flat laid or on an invisible mannequin\n\
         - Ensure the entire garment fits within the frame - no parts cut off\n\
         - Center the garment in the composition\n\
         - Use professional fashion photography lighting\n\
         - Clean white or light neutral background\n\
         - High resolution, sharp focus throughout\n\
         - The {pattern_text} should be clearly visible across the entire garment\n\
         - Professional product photography quality\n\
         \n\
         CRITICAL: Ensure the full {cloth_type} is visible and properly framed without any parts extending beyond the image boundaries.",
        material = selection.material,
        usage = selection.usage,
    )
}
