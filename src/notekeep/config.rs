use crate::error::{NotesError, Result};
use crate::model::NoteDraft;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_STORAGE_KEY: &str = "notes";

/// Configuration for notekeep, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotesConfig {
    /// Backend key the collection is saved under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    #[serde(default = "default_priorities")]
    pub priorities: Vec<String>,

    /// Background colors offered for new notes (e.g. "#ffffff")
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,

    #[serde(default = "default_category")]
    pub default_category: String,

    #[serde(default = "default_priority")]
    pub default_priority: String,

    #[serde(default = "default_color")]
    pub default_color: String,

    /// Reject categories, priorities and colors outside the configured sets
    #[serde(default)]
    pub enforce_choices: bool,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_categories() -> Vec<String> {
    vec!["Work".to_string(), "Personal".to_string(), "Other".to_string()]
}

fn default_priorities() -> Vec<String> {
    vec!["Low".to_string(), "Medium".to_string(), "High".to_string()]
}

fn default_colors() -> Vec<String> {
    vec![
        "#ffffff".to_string(),
        "#ffeb3b".to_string(),
        "#ffcdd2".to_string(),
        "#c8e6c9".to_string(),
        "#bbdefb".to_string(),
    ]
}

fn default_category() -> String {
    "Work".to_string()
}

fn default_priority() -> String {
    "Medium".to_string()
}

fn default_color() -> String {
    "#ffffff".to_string()
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            categories: default_categories(),
            priorities: default_priorities(),
            colors: default_colors(),
            default_category: default_category(),
            default_priority: default_priority(),
            default_color: default_color(),
            enforce_choices: false,
        }
    }
}

impl NotesConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NotesError::Io)?;
        let config: NotesConfig =
            serde_json::from_str(&content).map_err(NotesError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NotesError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NotesError::Serialization)?;
        fs::write(&config_path, content).map_err(NotesError::Io)?;
        tracing::info!(path = %config_path.display(), "saved notes config");
        Ok(())
    }

    /// A draft pre-filled with the default category, priority and color.
    pub fn draft(&self, text: impl Into<String>) -> NoteDraft {
        NoteDraft::new(
            text,
            self.default_category.clone(),
            self.default_priority.clone(),
            self.default_color.clone(),
        )
    }

    /// Set the default color (normalizes bare hex to start with '#')
    pub fn set_default_color(&mut self, color: &str) {
        self.default_color = normalize_color(color);
    }

    /// Checks a draft's category, priority and color against the configured sets.
    ///
    /// Always passes unless `enforce_choices` is on. Colors compare after bare hex is
    /// given its `#`.
    pub fn check_choices(&self, draft: &NoteDraft) -> Result<()> {
        if !self.enforce_choices {
            return Ok(());
        }
        if !self.categories.iter().any(|c| c == &draft.category) {
            return Err(NotesError::Validation(format!(
                "Unknown category: {}",
                draft.category
            )));
        }
        if !self.priorities.iter().any(|p| p == &draft.priority) {
            return Err(NotesError::Validation(format!(
                "Unknown priority: {}",
                draft.priority
            )));
        }
        let color = normalize_color(&draft.color);
        if !self.colors.iter().any(|c| normalize_color(c) == color) {
            return Err(NotesError::Validation(format!(
                "Unknown color: {}",
                draft.color
            )));
        }
        Ok(())
    }
}

fn normalize_color(color: &str) -> String {
    let is_bare_hex = !color.is_empty()
        && matches!(color.len(), 3 | 6 | 8)
        && color.chars().all(|c| c.is_ascii_hexdigit());
    if is_bare_hex {
        format!("#{}", color)
    } else {
        color.to_string()
    }
}
