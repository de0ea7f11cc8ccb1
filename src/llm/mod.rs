pub mod assistant;
pub mod gateway;
pub mod image;

pub use assistant::{assistant_reply, ChatMessage, ChatRole};
pub use gateway::GatewayError;
pub use image::generate_design;
