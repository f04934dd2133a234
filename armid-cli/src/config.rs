//! Output configuration

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON document per command
    Json,
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Colorize text output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Build from command-line flags and the `NO_COLOR` environment value
    pub fn from_flags(json: bool, no_color: bool, no_color_env: Option<&str>) -> Self {
        let env_disables = no_color_env.is_some_and(|v| !v.is_empty());
        Self {
            format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            color: !json && !no_color && !env_disables,
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Apply the color setting globally
    pub fn apply(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OutputConfig::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.color);
        assert!(!config.is_json());
    }

    #[test]
    fn test_json_disables_color() {
        let config = OutputConfig::from_flags(true, false, None);
        assert!(config.is_json());
        assert!(!config.color);
    }

    #[test]
    fn test_no_color_env() {
        assert!(!OutputConfig::from_flags(false, false, Some("1")).color);
        // an empty NO_COLOR is ignored
        assert!(OutputConfig::from_flags(false, false, Some("")).color);
        assert!(!OutputConfig::from_flags(false, true, None).color);
    }
}
