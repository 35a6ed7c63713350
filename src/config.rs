// Request Configs
pub const ACCEPT_HEADER: &str = "Accept";
pub const ACCEPT_JSON: &str = "application/json";

// Logging Configs
pub const LOG_BODY_PREVIEW_CHARS: usize = 128;
