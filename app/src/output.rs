//! Rendering of extracted facts for standard output.

use adfacts_config::OutputFormat;
use adfacts_extract::Fact;
use std::fmt::Write;

pub fn render(facts: &[Fact], format: OutputFormat) -> anyhow::Result<String> {
    let mut out = match format {
        OutputFormat::Debug => format!("{facts:#?}"),
        OutputFormat::Json => serde_json::to_string_pretty(facts)?,
        OutputFormat::Lines => {
            let mut out = String::new();
            for fact in facts {
                writeln!(out, "{fact}")?;
            }
            return Ok(out);
        }
    };
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adfacts_extract::{Ad, annotate_ad};

    fn facts() -> Vec<Fact> {
        annotate_ad(&Ad::from_body("kawalerka, 1800 zł"))
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_render_lines() {
        let out = render(&facts(), OutputFormat::Lines).expect("lines should render");
        assert_eq!(out, "flat_type=studio at [0, 8)\nprice=1800 at [11, 15)\n");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_render_json() {
        let out = render(&facts(), OutputFormat::Json).expect("json should render");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("output should be JSON");

        assert_eq!(parsed[0]["domain"], "flat_type");
        assert_eq!(parsed[1]["value"], 1800);
        assert_eq!(parsed[1]["origin"]["start"], 11);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_render_debug() {
        let out = render(&facts(), OutputFormat::Debug).expect("debug should render");
        assert!(out.starts_with('['));
        assert!(out.contains("FlatType"));
        assert!(out.ends_with("]\n"));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_render_nothing() {
        assert_eq!(
            render(&[], OutputFormat::Json).expect("json should render"),
            "[]\n"
        );
        assert_eq!(
            render(&[], OutputFormat::Lines).expect("lines should render"),
            ""
        );
    }
}
