pub mod arguments;
pub mod patterns;
pub mod prompt;
pub mod targets;
pub mod updater;
pub mod version;
