pub mod redact;
pub mod sanitize;
