pub mod canvas;
pub mod chat;
pub mod export;

pub use canvas::{CanvasPhase, DesignStudio, GeneratedDesign, StudioError};
pub use chat::{ChatError, ChatPanel, PanelState};
pub use export::{export_jpg, export_pdf};
