use std::env;
use std::path::PathBuf;

use once_cell::sync::Lazy;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub bind_addr: String,
    pub gateway_api_key: String,
    pub gateway_base_url: String,
    pub image_model: String,
    pub chat_model: String,
    pub gateway_timeout_seconds: u64,
    pub export_dir: PathBuf,
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::load);

fn env_string(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn load() -> Self {
        Config {
            log_level: env_string("LOG_LEVEL", "info").to_lowercase(),
            bind_addr: env_string("STUDIO_BIND_ADDR", "0.0.0.0:8787"),
            gateway_api_key: env_string("LOVABLE_API_KEY", ""),
            gateway_base_url: env_string(
                "AI_GATEWAY_BASE_URL",
                "https://ai.gateway.lovable.dev/v1",
            ),
            image_model: env_string("IMAGE_MODEL", "google/gemini-2.5-flash-image-preview"),
            chat_model: env_string("CHAT_MODEL", "google/gemini-2.5-flash"),
            gateway_timeout_seconds: env_u64("AI_GATEWAY_TIMEOUT_SECONDS", 60),
            export_dir: PathBuf::from(env_string("EXPORT_DIR", "exports")),
        }
    }
}

pub const ASSISTANT_SYSTEM_PROMPT: &str = "You are a cool, expert textile design assistant. Keep responses BRIEF and CONCISE - 2-3 sentences max.\n\nCurrent design: {material} {cloth_type}, {pattern} pattern in {color}, for {usage}.\n\nGive quick, actionable feedback:\n- Rate combinations out of 10\n- Suggest better combos briefly\n- Be encouraging but honest\n- Keep it short and punchy\n\nNo long explanations - just the essentials!";

pub const ASSISTANT_GREETING: &str = "Hello! I'm your AI textile design assistant. I can help you improve your designs, suggest better combinations, and rate your choices. What would you like to know?";

pub const ASSISTANT_APOLOGY: &str =
    "I apologize, but I'm having trouble connecting right now. Please try again.";
