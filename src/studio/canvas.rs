//! Design canvas state machine. The studio owns the selection and the
//! single generated-design slot; render layers read snapshots and never
//! mutate.

use std::path::PathBuf;

use anyhow::bail;
use thiserror::Error;

use crate::config::CONFIG;
use crate::design::estimate::{material_details, MaterialDetails};
use crate::design::options::{cloth_adjustments_for, cloth_details_for};
use crate::design::selection::{DesignParams, DesignSelection, NO_ADJUSTMENT};
use crate::llm::GatewayError;
use crate::studio::export;

/// Blend picker value meaning "leave the primary color alone".
pub const DEFAULT_BLEND_COLOR: &str = "#ffffff";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasPhase {
    Idle,
    Generating,
    Ready,
    Failed,
}

/// Reference to the currently displayed design. A single mutable slot:
/// replaced wholesale on success, untouched on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDesign {
    pub image_url: String,
}

#[derive(Debug, Error)]
pub enum StudioError {
    #[error("a design generation request is already in flight")]
    GenerationInFlight,
    #[error("design generation failed: {0}")]
    GenerationFailed(String),
}

#[derive(Debug, Clone)]
pub struct DesignStudio {
    material: String,
    cloth_type: String,
    usage: String,
    color: String,
    pattern: String,
    cloth_detail: String,
    blend_color: String,
    cloth_adjustment: String,
    phase: CanvasPhase,
    design: Option<GeneratedDesign>,
    last_notice: Option<String>,
}

impl Default for DesignStudio {
    fn default() -> Self {
        DesignStudio {
            material: "cotton".to_string(),
            cloth_type: "shirt".to_string(),
            usage: "casual".to_string(),
            color: "blue".to_string(),
            pattern: "striped".to_string(),
            cloth_detail: String::new(),
            blend_color: DEFAULT_BLEND_COLOR.to_string(),
            cloth_adjustment: NO_ADJUSTMENT.to_string(),
            phase: CanvasPhase::Idle,
            design: None,
            last_notice: None,
        }
    }
}

impl DesignStudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_material(&mut self, material: impl Into<String>) {
        self.material = material.into();
    }

    /// Changing the cloth type invalidates sub-options that the new type
    /// does not offer.
    pub fn set_cloth_type(&mut self, cloth_type: impl Into<String>) {
        self.cloth_type = cloth_type.into();
        if !cloth_details_for(&self.cloth_type).contains(&self.cloth_detail.as_str()) {
            self.cloth_detail.clear();
        }
        if !cloth_adjustments_for(&self.cloth_type).contains(&self.cloth_adjustment.as_str()) {
            self.cloth_adjustment = NO_ADJUSTMENT.to_string();
        }
    }

    pub fn set_usage(&mut self, usage: impl Into<String>) {
        self.usage = usage.into();
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
    }

    pub fn set_cloth_detail(&mut self, detail: impl Into<String>) {
        self.cloth_detail = detail.into();
    }

    pub fn set_blend_color(&mut self, blend_color: impl Into<String>) {
        self.blend_color = blend_color.into();
    }

    pub fn set_cloth_adjustment(&mut self, adjustment: impl Into<String>) {
        self.cloth_adjustment = adjustment.into();
    }

    pub fn phase(&self) -> CanvasPhase {
        self.phase
    }

    pub fn design(&self) -> Option<&GeneratedDesign> {
        self.design.as_ref()
    }

    pub fn last_notice(&self) -> Option<&str> {
        self.last_notice.as_deref()
    }

    /// Snapshot of the current selection with the picker defaults mapped
    /// to absent optional fields.
    pub fn selection(&self) -> DesignSelection {
        DesignSelection {
            material: self.material.clone(),
            cloth_type: self.cloth_type.clone(),
            usage: self.usage.clone(),
            color: self.color.clone(),
            pattern: self.pattern.clone(),
            cloth_detail: (!self.cloth_detail.is_empty()).then(|| self.cloth_detail.clone()),
            blend_color: (self.blend_color != DEFAULT_BLEND_COLOR)
                .then(|| self.blend_color.clone()),
            cloth_adjustment: (self.cloth_adjustment != NO_ADJUSTMENT)
                .then(|| self.cloth_adjustment.clone()),
        }
    }

    /// Design summary for the chat assistant.
    pub fn design_params(&self) -> DesignParams {
        DesignParams::from(&self.selection())
    }

    /// Derived measurement facts for the current selection.
    pub fn material_details(&self) -> MaterialDetails {
        material_details(
            &self.material,
            &self.cloth_type,
            (!self.cloth_detail.is_empty()).then_some(self.cloth_detail.as_str()),
        )
    }

    /// Enters `generating` and returns the selection snapshot to send.
    /// Rejects the trigger while a request is already outstanding.
    pub fn begin_generation(&mut self) -> Result<DesignSelection, StudioError> {
        if self.phase == CanvasPhase::Generating {
            return Err(StudioError::GenerationInFlight);
        }
        self.phase = CanvasPhase::Generating;
        self.last_notice = None;
        Ok(self.selection())
    }

    /// Settles the in-flight generation. Success replaces the displayed
    /// design wholesale; failure records a notice and keeps the prior
    /// image. The most recent completion wins.
    pub fn complete_generation(&mut self, outcome: Result<String, GatewayError>) {
        match outcome {
            Ok(image_url) => {
                self.design = Some(GeneratedDesign { image_url });
                self.phase = CanvasPhase::Ready;
            }
            Err(err) => {
                self.last_notice = Some(format!("Failed to generate design: {err}"));
                self.phase = CanvasPhase::Failed;
            }
        }
    }

    fn exportable_design(&self) -> anyhow::Result<&GeneratedDesign> {
        if self.phase == CanvasPhase::Generating {
            bail!("cannot export while a design is being generated");
        }
        match self.design.as_ref() {
            Some(design) => Ok(design),
            None => bail!("no design to download"),
        }
    }

    /// Saves the displayed design as an image file in the configured
    /// export directory.
    pub async fn export_jpg(&self) -> anyhow::Result<PathBuf> {
        let design = self.exportable_design()?;
        export::export_jpg(&design.image_url, &CONFIG.export_dir).await
    }

    /// Saves the displayed design as a single-page PDF in the configured
    /// export directory.
    pub async fn export_pdf(&self) -> anyhow::Result<PathBuf> {
        let design = self.exportable_design()?;
        export::export_pdf(&design.image_url, &CONFIG.export_dir).await
    }

    /// Drives a full generation round trip against the gateway.
    pub async fn generate(&mut self) -> Result<(), StudioError> {
        let selection = self.begin_generation()?;
        match crate::llm::generate_design(&selection).await {
            Ok(image_url) => {
                self.complete_generation(Ok(image_url));
                Ok(())
            }
            Err(err) => {
                let message = err.to_string();
                self.complete_generation(Err(err));
                Err(StudioError::GenerationFailed(message))
            }
        }
    }
}
