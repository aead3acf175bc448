//! Configuration — loads optional ~/.cppify/config.yaml.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::lang::EmitOptions;

/// Transpiler configuration. Every field is optional in the YAML file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Indent for statements inside function bodies.
    #[serde(default = "default_indent")]
    pub indent: String,
    /// Also write the JSON AST next to the C++ output.
    #[serde(default)]
    pub emit_ast: bool,
    /// Suffix appended to the input stem for the AST file.
    #[serde(default = "default_ast_suffix")]
    pub ast_suffix: String,
    /// Extension given to the C++ output file.
    #[serde(default = "default_output_extension")]
    pub output_extension: String,
}

fn default_indent() -> String {
    "    ".to_string()
}

fn default_ast_suffix() -> String {
    "-ast.json".to_string()
}

fn default_output_extension() -> String {
    "cpp".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            emit_ast: false,
            ast_suffix: default_ast_suffix(),
            output_extension: default_output_extension(),
        }
    }
}

impl Config {
    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            indent: self.indent.clone(),
        }
    }
}

/// Default config location, ~/.cppify/config.yaml.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".cppify").join("config.yaml"))
}

/// Load the default config file, falling back to defaults when it is
/// missing or unreadable.
pub fn load_config() -> Config {
    default_config_path()
        .and_then(|path| load_config_from(&path).ok())
        .unwrap_or_default()
}

/// Load a config file from an explicit path. Parse failures are errors.
pub fn load_config_from(path: &Path) -> Result<Config, io::Error> {
    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
