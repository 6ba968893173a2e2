//! Command-line configuration.

use crate::model::ResourceKind;
use clap::Parser;

pub const DEFAULT_API_ROOT: &str = "http://localhost:5000";

/// Admin console for the BigRecipe API
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about, long_about = None)]
pub struct AdminConfig {
    /// Origin that relative hrefs resolve against
    #[arg(long = "api-root", value_name = "URL", default_value = DEFAULT_API_ROOT)]
    pub api_root: String,

    /// Collection shown on startup
    #[arg(short = 'e', long = "entry", value_enum, default_value = "recipes")]
    pub entry: ResourceKind,

    /// Print screens as HTML instead of numbered text
    #[arg(long = "html")]
    pub html: bool,

    /// Print the entry screen and exit
    #[arg(long = "once")]
    pub once: bool,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            entry: ResourceKind::Recipe,
            html: false,
            once: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_default_impl() {
        let parsed = AdminConfig::try_parse_from(["bigrecipe-admin"]).unwrap();
        assert_eq!(parsed, AdminConfig::default());
    }

    #[test]
    fn test_flags() {
        let parsed = AdminConfig::try_parse_from([
            "bigrecipe-admin",
            "--api-root",
            "http://api.example:8080",
            "--entry",
            "drinks",
            "--html",
            "--once",
        ])
        .unwrap();
        assert_eq!(parsed.api_root, "http://api.example:8080");
        assert_eq!(parsed.entry, ResourceKind::Drink);
        assert!(parsed.html && parsed.once);

        assert!(AdminConfig::try_parse_from(["bigrecipe-admin", "--entry", "wines"]).is_err());
    }
}
