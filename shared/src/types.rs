/// Result alias used across the workspace.
pub type Result<T> = anyhow::Result<T>;
