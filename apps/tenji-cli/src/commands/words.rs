//! `words`: print the converted words as JSON.

use crate::source::SourceArgs;
use anyhow::{Context, Result};

pub fn handle_words(args: SourceArgs) -> Result<()> {
    let text = args.read_text()?;
    let words = args.words(&text)?;
    let json = serde_json::to_string_pretty(&words).context("failed to encode words")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::source::{parse_fix, SourceArgs};

    #[test]
    fn test_words_json_shape() {
        let args = SourceArgs {
            fixes: vec![parse_fix("0=").unwrap()],
            ..Default::default()
        };
        let words = args.words("かa").unwrap();
        let value = serde_json::to_value(&words).unwrap();
        assert_eq!(value[0]["original_text"], "か");
        assert_eq!(value[0]["cells"].as_array().unwrap().len(), 0);
        assert_eq!(value[1]["reading_text"], "a");
        assert_eq!(value[1]["source_span"]["start"], 1);
        assert_eq!(value[1]["cells"][0]["glyph"], "外");
    }
}
