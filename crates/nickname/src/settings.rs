//! Nickname settings loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Configuration values for the `nickname` command.
///
/// Values are read from `NICKNAME_*` environment variables. Command-line
/// flags take precedence over anything loaded here.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "NICKNAME")]
pub struct NicknameSettings {
    /// Optional word list document replacing the built-in tables.
    pub word_list_path: Option<PathBuf>,
    /// Emit one JSON object per line instead of plain nicknames.
    #[ortho_config(default = false)]
    pub json: bool,
}
