use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::warn;

use crate::dates::DEFAULT_FORMATS;
use crate::keywords::KeywordSet;
use crate::reminder::ReminderConfig;

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directory where entries and push tokens live.
    pub data_dir: PathBuf,
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    /// Format used for day headers, e.g. "Friday, 15 Aug 2025".
    pub date_format: String,
    /// Format used for entry times in the timeline and in exports.
    pub time_format: String,
    /// Formats tried, in order, when parsing dates given on the command line.
    pub input_date_formats: Vec<String>,
    /// Extra keywords appended to the built-in lists.
    pub extra_productive: Vec<String>,
    pub extra_unproductive: Vec<String>,
    pub reminder: ReminderConfig,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    editor: Option<String>,
    date_format: Option<String>,
    time_format: Option<String>,
    input_date_formats: Option<Vec<String>>,
    /// Optional table:
    /// [keywords]
    /// productive = ["read"]
    /// unproductive = ["tiktok"]
    keywords: Option<FileKeywords>,
    /// Optional table:
    /// [reminder]
    /// title = "Hour Journal"
    /// body = "What did you do last hour?"
    /// link = "https://example.com"
    reminder: Option<FileReminder>,
}

#[derive(Debug, Default, Deserialize)]
struct FileKeywords {
    #[serde(default)]
    productive: Vec<String>,
    #[serde(default)]
    unproductive: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileReminder {
    title: Option<String>,
    body: Option<String>,
    link: Option<String>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    ///
    /// A missing file means defaults. A malformed one is reported and ignored.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|error| {
            warn!("ignoring config file: {error:#}");
            FileConfig::default()
        });
        Ok(Self::from_file_config(file_config, Self::default_data_dir()))
    }

    fn from_file_config(file_config: FileConfig, default_data_dir: PathBuf) -> Self {
        let keywords = file_config.keywords.unwrap_or_default();
        let reminder = file_config.reminder.unwrap_or_default();
        let defaults = ReminderConfig::default();

        Self {
            data_dir: file_config.data_dir.unwrap_or(default_data_dir),
            editor: file_config.editor,
            date_format: file_config
                .date_format
                .unwrap_or_else(|| "%A, %d %b %Y".to_string()),
            time_format: file_config
                .time_format
                .unwrap_or_else(|| "%H:%M".to_string()),
            input_date_formats: file_config
                .input_date_formats
                .unwrap_or_else(|| DEFAULT_FORMATS.iter().map(|f| f.to_string()).collect()),
            extra_productive: keywords.productive,
            extra_unproductive: keywords.unproductive,
            reminder: ReminderConfig {
                title: reminder.title.unwrap_or(defaults.title),
                body: reminder.body.unwrap_or(defaults.body),
                link: reminder.link.or(defaults.link),
            },
        }
    }

    /// The built-in keyword lists extended with the ones from `[keywords]`.
    pub fn keyword_set(&self) -> KeywordSet {
        let mut set = KeywordSet::default();
        set.extend(&self.extra_productive, &self.extra_unproductive);
        set
    }

    /// Default data root: `{data_dir}/hourlog`
    /// - macOS:   `~/Library/Application Support/hourlog`
    /// - Linux:   `$XDG_DATA_HOME/hourlog` or `~/.local/share/hourlog`
    /// - Windows: `%APPDATA%\hourlog`
    fn default_data_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            base.data_dir().join("hourlog")
        } else {
            PathBuf::from("./hourlog")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            v.push(b.home_dir().join(".config").join("hourlog").join("config.toml"));
            v.push(b.config_dir().join("hourlog").join("config.toml"));
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Classification;
    use std::path::Path;

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b.home_dir().join(".config").join("hourlog").join("config.toml");
            let expected_native = b.config_dir().join("hourlog").join("config.toml");
            let c = Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn empty_file_gives_defaults() {
        let fc = Config::parse_file("").unwrap();
        let cfg = Config::from_file_config(fc, PathBuf::from("/tmp/default"));
        assert_eq!(cfg.data_dir, Path::new("/tmp/default"));
        assert_eq!(cfg.date_format, "%A, %d %b %Y");
        assert_eq!(cfg.time_format, "%H:%M");
        assert_eq!(cfg.input_date_formats, vec!["%Y-%m-%d", "%d/%m/%Y"]);
        assert_eq!(cfg.reminder, ReminderConfig::default());
        assert_eq!(cfg.keyword_set(), KeywordSet::default());
    }

    #[test]
    fn parse_file_accepts_data_dir_and_editor() {
        let toml = r#"
            data_dir = "/tmp/my-hours"
            editor = "hx"
            input_date_formats = ["%d.%m.%Y"]
        "#;
        let fc = Config::parse_file(toml).unwrap();
        let cfg = Config::from_file_config(fc, PathBuf::from("/tmp/default"));
        assert_eq!(cfg.data_dir, Path::new("/tmp/my-hours"));
        assert_eq!(cfg.editor.as_deref(), Some("hx"));
        assert_eq!(cfg.input_date_formats, vec!["%d.%m.%Y"]);
    }

    #[test]
    fn parse_file_accepts_keywords() {
        let toml = r#"
            [keywords]
            productive = ["Read"]
            unproductive = ["tiktok"]
        "#;
        let fc = Config::parse_file(toml).unwrap();
        let cfg = Config::from_file_config(fc, PathBuf::from("/tmp/default"));
        let set = cfg.keyword_set();
        assert_eq!(set.classify("read a paper"), Classification::Productive);
        assert_eq!(set.classify("TikTok"), Classification::Unproductive);
    }

    #[test]
    fn parse_file_accepts_partial_reminder() {
        let toml = r#"
            [reminder]
            link = "https://example.com/hourlog"
        "#;
        let fc = Config::parse_file(toml).unwrap();
        let cfg = Config::from_file_config(fc, PathBuf::from("/tmp/default"));
        assert_eq!(cfg.reminder.title, "Hour Journal");
        assert_eq!(cfg.reminder.body, "What did you do last hour?");
        assert_eq!(cfg.reminder.link.as_deref(), Some("https://example.com/hourlog"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(Config::parse_file("data_dir = [").is_err());
    }
}
