//! Configuration loading and discovery.
//!
//! This module provides configuration file discovery by:
//! 1. Walking up from the current directory to find project config
//! 2. Loading user config from XDG config directory
//! 3. Merging with sensible defaults
//!
//! # Supported formats
//!
//! The following configuration file formats are supported:
//! - TOML (`.toml`)
//! - YAML (`.yaml`, `.yml`)
//! - JSON (`.json`)
//!
//! # Config file locations (in order of precedence, highest first):
//! - `plume.<ext>` in current directory or any parent
//! - `.plume.<ext>` in current directory or any parent
//! - `~/.config/plume/config.<ext>` (user config)
//!
//! Where `<ext>` is one of: `toml`, `yaml`, `yml`, `json`
//!
//! When multiple files exist in the same directory, all are merged via figment.
//! Later extensions override earlier: toml < yaml < yml < json.
//!
//! `PLUME_*` environment variables override every file. Nested keys use a
//! double underscore: `PLUME_ANALYSIS__READING_WPM=250`.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use plume_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! let analyzer = config.analyzer(sources.base_dir().unwrap_or(cwd.as_path())).unwrap();
//! let report = analyzer.analyze("Le chat dort.");
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::analysis::{AnalyzerSettings, TextAnalyzer};
use crate::error::{ConfigError, ConfigResult};
use crate::lexicon::{Lexicon, parse_word_list};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// Word-table overrides.
///
/// Each table can be given inline or as a path to a word-list file (one word
/// per line, `#` comments). A file wins over the inline list. Relative paths
/// resolve against the directory of the config file. Unset tables keep the
/// built-in French defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LexiconConfig {
    /// Function words excluded from statistics.
    pub stop_words: Option<Vec<String>>,
    /// Word-list file replacing `stop_words`.
    pub stop_words_file: Option<Utf8PathBuf>,
    /// Positive sentiment lexicon.
    pub positive_words: Option<Vec<String>>,
    /// Word-list file replacing `positive_words`.
    pub positive_words_file: Option<Utf8PathBuf>,
    /// Negative sentiment lexicon.
    pub negative_words: Option<Vec<String>>,
    /// Word-list file replacing `negative_words`.
    pub negative_words_file: Option<Utf8PathBuf>,
    /// Vowel characters for syllable estimation, e.g. `"aeiouy"`.
    pub vowels: Option<String>,
}

impl LexiconConfig {
    /// Build the word tables, reading any word-list files.
    pub fn resolve(&self, config_dir: &Utf8Path) -> ConfigResult<Lexicon> {
        let mut lexicon = Lexicon::french();
        if let Some(words) = read_table(&self.stop_words, &self.stop_words_file, config_dir)? {
            lexicon = lexicon.with_stop_words(words);
        }
        if let Some(words) =
            read_table(&self.positive_words, &self.positive_words_file, config_dir)?
        {
            lexicon = lexicon.with_positive_words(words);
        }
        if let Some(words) =
            read_table(&self.negative_words, &self.negative_words_file, config_dir)?
        {
            lexicon = lexicon.with_negative_words(words);
        }
        if let Some(ref vowels) = self.vowels {
            lexicon = lexicon.with_vowels(vowels);
        }
        Ok(lexicon)
    }
}

#[allow(clippy::option_if_let_else)]
fn read_table(
    inline: &Option<Vec<String>>,
    file: &Option<Utf8PathBuf>,
    config_dir: &Utf8Path,
) -> ConfigResult<Option<Vec<String>>> {
    if let Some(file_path) = file {
        let resolved = if file_path.is_relative() {
            config_dir.join(file_path)
        } else {
            file_path.clone()
        };
        let body = std::fs::read_to_string(resolved.as_std_path()).map_err(|e| {
            ConfigError::LexiconFile {
                path: resolved.clone(),
                source: e,
            }
        })?;
        tracing::debug!(path = %resolved, "loaded word list");
        Ok(Some(parse_word_list(&body)))
    } else {
        Ok(inline.clone())
    }
}

/// Quality gates for a path-based rule. Unset gates are not checked.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct QualityChecks {
    /// Minimum overall grade score (0–100).
    pub grade_min: Option<u32>,
    /// Minimum readability score (0–100).
    pub readability_min: Option<u32>,
    /// Maximum complexity score (0–100).
    pub complexity_max: Option<u32>,
    /// Maximum number of repeated words.
    pub max_repetitions: Option<usize>,
}

/// A path-based quality rule.
///
/// Glob patterns in `paths` are relative to the project root.
/// All matching rules accumulate; when two rules set the same gate,
/// the more specific pattern's value wins.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Rule {
    /// Glob patterns to match file paths against.
    pub paths: Vec<String>,
    /// Gates applied to matched files.
    pub checks: QualityChecks,
}

/// The configuration for plume.
///
/// Deserialized from config files found during discovery (TOML, YAML, or
/// JSON). Every field is optional in the files.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files (falls back to platform defaults if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Prevents resource exhaustion from oversized inputs in both CLI and MCP server.
    /// Omit to use the default (5 MiB). Use `disable_input_limit` to remove the
    /// limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    ///
    /// When `true`, `max_input_bytes` is ignored and no size check is performed.
    /// Default: `false`.
    #[serde(default)]
    pub disable_input_limit: bool,
    /// Engine thresholds.
    pub analysis: AnalyzerSettings,
    /// Word-table overrides.
    pub lexicon: LexiconConfig,
    /// Strip Markdown before analysis. Unset means: only for `.md` files.
    pub strip_markdown: Option<bool>,
    /// Default minimum grade for the `check` command.
    pub grade_min: Option<u32>,
    /// Path-based quality rules.
    ///
    /// Each rule maps glob patterns to quality gates.
    /// All matching rules accumulate; more specific patterns override
    /// less specific ones when they set the same gate.
    pub rules: Option<Vec<Rule>>,
}

impl Config {
    /// Build the analysis engine this configuration describes.
    ///
    /// `config_dir` anchors relative word-list paths.
    pub fn analyzer(&self, config_dir: &Utf8Path) -> ConfigResult<TextAnalyzer> {
        if self.analysis.reading_wpm == 0 {
            return Err(ConfigError::InvalidValue {
                key: "analysis.reading_wpm",
                reason: "must be at least 1 word per minute",
            });
        }
        if self.analysis.speaking_wpm == 0 {
            return Err(ConfigError::InvalidValue {
                key: "analysis.speaking_wpm",
                reason: "must be at least 1 word per minute",
            });
        }
        let lexicon = self.lexicon.resolve(config_dir)?;
        Ok(TextAnalyzer::new(self.analysis.clone(), lexicon))
    }

    /// Effective input size limit, or `None` when disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
        }
    }

    /// Whether a file at `path` should have its Markdown stripped.
    pub fn strips_markdown(&self, path: &Utf8Path) -> bool {
        self.strip_markdown
            .unwrap_or_else(|| matches!(path.extension(), Some("md" | "markdown")))
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so commands
/// can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }

    /// Directory of the primary config file, for resolving relative paths.
    pub fn base_dir(&self) -> Option<&Utf8Path> {
        self.primary_file().and_then(Utf8Path::parent)
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "plume";

/// Prefix of configuration environment variables.
const ENV_PREFIX: &str = "PLUME_";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include user config from XDG directory.
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    /// Explicit config files to load (for testing or programmatic use).
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    ///
    /// The loader will walk up from this directory looking for config files.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/plume/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Set a boundary marker to stop directory traversal.
    ///
    /// When walking up directories, stop if we find a directory containing
    /// this file or directory name. Default is `.git`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Disable boundary marker (search all the way to filesystem root).
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file to load.
    ///
    /// Files are loaded in order, with later files taking precedence.
    /// Explicit files are loaded after discovered files.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Precedence (highest to lowest):
    /// 1. `PLUME_*` environment variables
    /// 2. Explicit files (in order added via `with_file`)
    /// 3. Project config (closest to search root)
    /// 4. User config (`~/.config/plume/config.<ext>`)
    /// 5. Default values
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = self.find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // PLUME_GRADE_MIN=70, PLUME_ANALYSIS__READING_WPM=250, etc.
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            rules = config.rules.as_ref().map_or(0, Vec::len),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Load configuration, returning an error if no config file is found.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let has_user = self.include_user_config && self.find_user_config().is_some();
        let has_project = self
            .project_search_root
            .as_ref()
            .is_some_and(|root| !self.find_project_configs(root).is_empty());
        let has_explicit = !self.explicit_files.is_empty();

        if !has_user && !has_project && !has_explicit {
            return Err(ConfigError::NotFound);
        }

        self.load()
    }

    /// Find project config files by walking up from the given directory.
    ///
    /// Returns all matching config files from the closest directory that has
    /// any match, ordered low-to-high precedence: dotfiles before regular
    /// files, then by extension.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();

            for prefix in [".", ""] {
                for ext in CONFIG_EXTENSIONS {
                    let candidate = dir.join(format!("{prefix}{APP_NAME}.{ext}"));
                    if candidate.is_file() {
                        found.push(candidate);
                    }
                }
            }

            if !found.is_empty() {
                return found;
            }

            // Check for boundary marker AFTER checking config files,
            // so a config in the same directory as the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    /// Find user config in XDG config directory.
    fn find_user_config(&self) -> Option<Utf8PathBuf> {
        let config_dir = user_config_dir()?;
        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| config_dir.join(format!("config.{ext}")))
            .find(|path| path.is_file())
    }

    /// Merge a config file into the figment, detecting format from extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

/// Get the project directories for XDG-compliant path resolution.
///
/// Returns `None` if the home directory cannot be determined.
fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// Get the user config directory path.
///
/// Returns `~/.config/plume/` on Linux, `~/Library/Application Support/plume/`
/// on macOS, and equivalent on other platforms.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

/// Get the user data directory path.
///
/// Returns `~/.local/share/plume/` on Linux, `~/Library/Application Support/plume/`
/// on macOS, and equivalent on other platforms.
pub fn user_data_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.data_dir().to_path_buf()).ok()
}
