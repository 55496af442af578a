mod log_level;
mod validation;
