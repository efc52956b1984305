use crate::domain::model::{OutputFormat, Verdict};
use crate::utils::error::Result;
use std::io::Write;

pub fn write_verdict<W: Write>(out: &mut W, verdict: &Verdict, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", verdict.token())?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, verdict)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(below_threshold: bool) -> Verdict {
        Verdict {
            start: 26,
            threshold: 20,
            final_value: 0,
            iterations: 26,
            below_threshold,
        }
    }

    #[test]
    fn test_text_output_is_single_token_line() {
        let mut buf = Vec::new();
        write_verdict(&mut buf, &sample(true), OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "true\n");

        let mut buf = Vec::new();
        write_verdict(&mut buf, &sample(false), OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "false\n");
    }

    #[test]
    fn test_json_output_is_one_line_object() {
        let mut buf = Vec::new();
        write_verdict(&mut buf, &sample(true), OutputFormat::Json).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(value["start"], 26);
        assert_eq!(value["threshold"], 20);
        assert_eq!(value["final_value"], 0);
        assert_eq!(value["iterations"], 26);
        assert_eq!(value["below_threshold"], true);
    }
}
