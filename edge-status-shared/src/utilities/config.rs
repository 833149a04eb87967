use dotenv::dotenv;
use std::env;
use crate::utilities::logging::log_info;

pub const DEFAULT_STATUS_MESSAGE: &str = "Hello from Supabase Edge Functions!";
const STATUS_MESSAGE_VAR: &str = "STATUS_MESSAGE";

/// Initialize dotenv (only needs to be called once at startup)
pub fn init() {
    if dotenv().is_ok() {
        log_info("config_init", "Loaded .env file");
    } else {
        log_info("config_init", "No .env file found, using process environment");
    }
}

/// Message reported in every status payload. `STATUS_MESSAGE` overrides the default.
pub fn get_status_message() -> String {
    resolve_status_message(env::var(STATUS_MESSAGE_VAR).ok())
}

fn resolve_status_message(value: Option<String>) -> String {
    value
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_STATUS_MESSAGE.to_string())
}
