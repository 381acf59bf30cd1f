// Admin-managed display metadata. Purely presentational; no relationship to
// the booking/event logic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::default_true;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub icon: String,
    pub color: String,
    pub description: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryBody {
    pub name: String,
    pub icon: String,
    pub color: String,
    pub description: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl CategoryBody {
    pub fn into_category(self) -> Category {
        Category {
            name: self.name,
            icon: self.icon,
            color: self.color,
            description: self.description,
            is_active: self.is_active,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default = "default_icon_color")]
    pub icon_color: String,
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
    #[serde(default = "default_background_color")]
    pub background_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary_color: default_primary_color(),
            text_color: default_text_color(),
            icon_color: default_icon_color(),
            accent_color: default_accent_color(),
            background_color: default_background_color(),
        }
    }
}

fn default_primary_color() -> String {
    "#6D9773".to_string()
}

fn default_text_color() -> String {
    "#0C3B2E".to_string()
}

fn default_icon_color() -> String {
    "#BB8A52".to_string()
}

fn default_accent_color() -> String {
    "#FFBA00".to_string()
}

fn default_background_color() -> String {
    "#F9FAFB".to_string()
}

/// Singleton settings document holding the stored theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeDocument {
    #[serde(rename = "type")]
    pub doc_type: String,
    #[serde(flatten)]
    pub theme: ThemeConfig,
    pub updated_at: DateTime<Utc>,
}
