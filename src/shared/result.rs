/// Result alias used by the application layer (config, CLI, formatters).
/// Typed read failures live in [`crate::shared::error::ReadError`].
pub type Result<T> = std::result::Result<T, anyhow::Error>;
