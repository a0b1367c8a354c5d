use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Text => Ok(render_text(&serde_json::to_value(value)?)),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Arrays print one item per line, objects one `key: value` per line.
fn render_text(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(inline)
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| match value {
                Value::Array(items) if !items.is_empty() => format!(
                    "{key}:\n{}",
                    items
                        .iter()
                        .map(|item| format!("  {}", inline(item)))
                        .collect::<Vec<_>>()
                        .join("\n")
                ),
                other => format!("{key}: {}", inline(other)),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        scalar => inline(scalar),
    }
}

fn inline(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(v) => v.clone(),
        Value::Array(items) => items.iter().map(inline).collect::<Vec<_>>().join(", "),
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| format!("{key}={}", inline(value)))
            .collect::<Vec<_>>()
            .join(" "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Report {
        created: Vec<&'static str>,
        updated: Vec<&'static str>,
    }

    #[derive(Serialize)]
    struct Language {
        code: &'static str,
        name: Option<&'static str>,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Report {
            created: vec!["b"],
            updated: vec!["a"],
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["created"][0], "b");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Report {
            created: vec!["b"],
            updated: vec![],
        };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn text_render_for_object_lists_keys() {
        let value = Report {
            created: vec!["b", "c"],
            updated: vec![],
        };
        let out = render(&value, OutputFormat::Text).expect("text render should work");
        assert_eq!(out, "created:\n  b\n  c\nupdated: ");
    }

    #[test]
    fn text_render_for_array_is_one_line_per_item() {
        let value = vec![
            Language {
                code: "fr",
                name: Some("French"),
            },
            Language {
                code: "de",
                name: None,
            },
        ];
        let out = render(&value, OutputFormat::Text).expect("text render should work");
        assert_eq!(out, "code=fr name=French\ncode=de name=-");
    }
}
