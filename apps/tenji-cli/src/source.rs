//! Input text, layout settings and reading corrections shared by every
//! command.

use anyhow::{bail, Context, Result};
use clap::Args;
use config::LayoutSettings;
use std::path::{Path, PathBuf};
use tenji_cells::{convert, LexiconSegmenter, MappedWord, Segmenter};
use tracing::{info, warn};

/// Where the text comes from and how it is laid out.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Text to convert
    #[arg(required_unless_present = "input", conflicts_with = "input")]
    pub text: Option<String>,

    /// Read the text from a UTF-8 file instead
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// JSON file with layout settings
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Maximum cells per line (overrides the settings file)
    #[arg(long)]
    pub max_chars: Option<usize>,

    /// Maximum lines per plate (overrides the settings file)
    #[arg(long)]
    pub max_lines: Option<usize>,

    /// Plate thickness in millimeters (overrides the settings file)
    #[arg(long)]
    pub thickness: Option<f64>,

    /// JSON object mapping surfaces to readings, used to split words
    #[arg(long, value_name = "PATH")]
    pub lexicon: Option<PathBuf>,

    /// Replace the reading of word INDEX (0-based), e.g. --fix 2=にち
    #[arg(long = "fix", value_name = "INDEX=READING", value_parser = parse_fix)]
    pub fixes: Vec<ReadingFix>,
}

/// A reading correction for one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingFix {
    pub index: usize,
    pub reading: String,
}

/// Parses `INDEX=READING`. The reading may be empty, which drops the word.
pub fn parse_fix(value: &str) -> std::result::Result<ReadingFix, String> {
    let (index, reading) = value
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=READING, got {value:?}"))?;
    let index = index
        .trim()
        .parse()
        .map_err(|_| format!("word index must be a non-negative integer: {index:?}"))?;
    Ok(ReadingFix {
        index,
        reading: reading.to_string(),
    })
}

impl SourceArgs {
    /// Returns the text to convert.
    pub fn read_text(&self) -> Result<String> {
        match (&self.text, &self.input) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read input text from {}", path.display())),
            (None, None) => bail!("no input text given"),
        }
    }

    /// Loads the settings file (or defaults), applies command-line overrides
    /// and validates the result.
    pub fn layout_settings(&self) -> Result<LayoutSettings> {
        let mut settings = match &self.settings {
            Some(path) => load_settings_file(path)?,
            None => LayoutSettings::default(),
        };

        if let Some(max_chars) = self.max_chars {
            settings.max_chars_per_line = max_chars;
        }
        if let Some(max_lines) = self.max_lines {
            settings.max_lines_per_plate = max_lines;
        }
        if let Some(thickness) = self.thickness {
            settings.plate_thickness_mm = thickness;
        }

        settings.validate().context("invalid layout settings")?;
        for field in settings.unusual_fields() {
            warn!(field, "setting is outside the recommended range");
        }
        Ok(settings)
    }

    /// Loads the lexicon segmenter, if one was given.
    pub fn segmenter(&self) -> Result<Option<LexiconSegmenter>> {
        let Some(path) = &self.lexicon else {
            return Ok(None);
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read lexicon {}", path.display()))?;
        let segmenter = LexiconSegmenter::from_json(&json)
            .with_context(|| format!("invalid lexicon {}", path.display()))?;
        info!(entries = segmenter.len(), "loaded lexicon");
        Ok(Some(segmenter))
    }

    /// Converts `text` into words and applies the reading corrections.
    pub fn words(&self, text: &str) -> Result<Vec<MappedWord>> {
        let segmenter = self.segmenter()?;
        let mut words = convert(text, segmenter.as_ref().map(|s| s as &dyn Segmenter));
        apply_fixes(&mut words, &self.fixes)?;
        Ok(words)
    }
}

fn load_settings_file(path: &Path) -> Result<LayoutSettings> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read settings {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("invalid settings {}", path.display()))
}

/// Applies reading corrections in order. An index past the last word is an
/// error.
pub fn apply_fixes(words: &mut [MappedWord], fixes: &[ReadingFix]) -> Result<()> {
    for fix in fixes {
        let count = words.len();
        let Some(word) = words.get_mut(fix.index) else {
            bail!("word index {} is out of range ({} words)", fix.index, count);
        };
        info!(
            index = fix.index,
            from = word.reading_text(),
            to = fix.reading.as_str(),
            "correcting reading"
        );
        word.correct_reading(fix.reading.as_str());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_fix() {
        assert_eq!(
            parse_fix("2=にち").unwrap(),
            ReadingFix {
                index: 2,
                reading: "にち".into()
            }
        );
        assert_eq!(parse_fix("0=").unwrap().reading, "");
        assert!(parse_fix("にち").is_err());
        assert!(parse_fix("-1=あ").is_err());
    }

    #[test]
    fn test_overrides_apply_on_top_of_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "max_chars_per_line": 12, "plate_thickness_mm": 1.2 }}"#).unwrap();

        let args = SourceArgs {
            settings: Some(file.path().to_path_buf()),
            max_lines: Some(2),
            ..Default::default()
        };
        let settings = args.layout_settings().unwrap();
        assert_eq!(settings.max_chars_per_line, 12);
        assert_eq!(settings.max_lines_per_plate, 2);
        assert_eq!(settings.plate_thickness_mm, 1.2);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let args = SourceArgs {
            thickness: Some(0.0),
            ..Default::default()
        };
        assert!(args.layout_settings().is_err());
    }

    #[test]
    fn test_read_text_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "てんじ").unwrap();
        let args = SourceArgs {
            input: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert_eq!(args.read_text().unwrap(), "てんじ");
    }

    #[test]
    fn test_fixes_replace_readings() {
        let args = SourceArgs {
            fixes: vec![parse_fix("1=に").unwrap()],
            ..Default::default()
        };
        let words = args.words("日本").unwrap();
        assert_eq!(words[1].reading_text(), "に");
        assert_eq!(words[1].original_text(), "本");
        assert_eq!(words[1].cells().len(), 1);
    }

    #[test]
    fn test_fix_out_of_range() {
        let mut words = convert("あ", None);
        let fixes = [ReadingFix {
            index: 3,
            reading: "い".into(),
        }];
        assert!(apply_fixes(&mut words, &fixes).is_err());
    }

    #[test]
    fn test_lexicon_splits_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "点字": "テンジ" }}"#).unwrap();
        let args = SourceArgs {
            lexicon: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let words = args.words("点字").unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].reading_text(), "てんじ");
    }
}
