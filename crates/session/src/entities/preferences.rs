use serde::{Deserialize, Serialize};

/// User preferences, denormalized to the top level of the session for fast access
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Colour theme preference
    pub theme: Theme,
    /// Locale preference (BCP 47 language tag)
    pub locale: String,
    /// Render larger text across the app
    pub large_text: bool,
    /// Disable animated transitions
    pub reduced_motion: bool,
}

/// Theme enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            locale: "en".to_string(),
            large_text: false,
            reduced_motion: false,
        }
    }
}

impl From<&str> for Theme {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }
}

impl From<Theme> for String {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => "light".to_string(),
            Theme::Dark => "dark".to_string(),
            Theme::System => "system".to_string(),
        }
    }
}

/// Partial preferences update; `None` fields keep their current value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferencesPatch {
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub large_text: Option<bool>,
    #[serde(default)]
    pub reduced_motion: Option<bool>,
}

impl Preferences {
    /// Apply a shallow patch; provided fields overwrite current values
    pub fn apply(&mut self, patch: &PreferencesPatch) {
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(ref locale) = patch.locale {
            self.locale = locale.clone();
        }
        if let Some(large_text) = patch.large_text {
            self.large_text = large_text;
        }
        if let Some(reduced_motion) = patch.reduced_motion {
            self.reduced_motion = reduced_motion;
        }
    }

    /// Validate preference data
    pub fn validate(&self) -> Result<(), String> {
        if self.locale.is_empty() {
            return Err("Locale cannot be empty".to_string());
        }

        if self.locale.len() > 35 {
            return Err("Locale too long (max 35 characters)".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_defaults() {
        let prefs = Preferences::default();

        assert_eq!(prefs.theme, Theme::System);
        assert_eq!(prefs.locale, "en");
        assert!(!prefs.large_text);
        assert!(!prefs.reduced_motion);
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn test_theme_conversion() {
        assert_eq!(Theme::from("light"), Theme::Light);
        assert_eq!(Theme::from("dark"), Theme::Dark);
        assert_eq!(Theme::from("system"), Theme::System);
        assert_eq!(Theme::from("unknown"), Theme::System);

        assert_eq!(String::from(Theme::Light), "light");
        assert_eq!(String::from(Theme::Dark), "dark");
        assert_eq!(String::from(Theme::System), "system");
    }

    #[test]
    fn test_apply_partial_patch() {
        let mut prefs = Preferences::default();

        prefs.apply(&PreferencesPatch {
            theme: Some(Theme::Dark),
            ..PreferencesPatch::default()
        });

        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.locale, "en");
        assert!(!prefs.large_text);
    }

    #[test]
    fn test_apply_full_patch() {
        let mut prefs = Preferences::default();

        prefs.apply(&PreferencesPatch {
            theme: Some(Theme::Light),
            locale: Some("de-AT".to_string()),
            large_text: Some(true),
            reduced_motion: Some(true),
        });

        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.locale, "de-AT");
        assert!(prefs.large_text);
        assert!(prefs.reduced_motion);
    }

    #[test]
    fn test_preferences_validation() {
        let mut prefs = Preferences::default();
        assert!(prefs.validate().is_ok());

        prefs.locale = "".to_string();
        assert!(prefs.validate().is_err());

        prefs.locale = "a".repeat(36);
        assert!(prefs.validate().is_err());
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut prefs = Preferences::default();
        let before = prefs.clone();

        prefs.apply(&PreferencesPatch::default());

        assert_eq!(prefs, before);
    }
}
