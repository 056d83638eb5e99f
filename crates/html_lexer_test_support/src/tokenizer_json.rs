//! html5lib-format tokenizer fixtures.
//!
//! A fixture file is `{"tests": [case, ...]}`. Expected output uses the
//! html5lib token arrays; actual tokens are converted to the same shape so
//! the two can be compared line by line.

use html_lexer::{ContentModelFlag, Token};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Deserialize)]
pub struct FixtureFile {
    #[serde(default)]
    pub tests: Vec<FixtureCase>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureCase {
    pub description: String,
    pub input: String,
    pub output: Vec<Value>,
    #[serde(default)]
    pub initial_states: Vec<String>,
    #[serde(default)]
    pub last_start_tag: Option<String>,
    /// Strings carry `\uXXXX` escapes that must be expanded after JSON
    /// decoding, which lets fixtures spell lone surrogates.
    #[serde(default)]
    pub double_escaped: bool,
    /// When present, the number of error diagnostics the case must produce.
    #[serde(default)]
    pub errors: Option<Vec<Value>>,
}

/// A case together with the file it came from.
#[derive(Clone, Debug)]
pub struct LoadedCase {
    pub id: String,
    pub case: FixtureCase,
}

pub fn load_fixture_file(path: &Path) -> Result<FixtureFile, String> {
    let content = fs::read_to_string(path)
        .map_err(|err| format!("failed to read fixture {path:?}: {err}"))?;
    serde_json::from_str(&content).map_err(|err| format!("failed to parse fixture {path:?}: {err}"))
}

/// Every case of every `*.test` file in `dir`, in file-name order.
pub fn load_fixture_dir(dir: &Path) -> Result<Vec<LoadedCase>, String> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|err| format!("failed to list fixtures in {dir:?}: {err}"))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "test"))
        .collect();
    paths.sort();

    let mut out = Vec::new();
    for path in paths {
        let file = load_fixture_file(&path)?;
        let stem = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        for (index, case) in file.tests.into_iter().enumerate() {
            out.push(LoadedCase {
                id: format!("{stem}#{index}"),
                case,
            });
        }
    }
    Ok(out)
}

impl FixtureCase {
    pub fn input_units(&self) -> Vec<u16> {
        if self.double_escaped {
            unescape_units(&self.input)
        } else {
            self.input.encode_utf16().collect()
        }
    }

    /// Initial content models to run; plain data when none are listed.
    pub fn content_models(&self) -> Result<Vec<ContentModelFlag>, String> {
        if self.initial_states.is_empty() {
            return Ok(vec![ContentModelFlag::Pcdata]);
        }
        self.initial_states
            .iter()
            .map(|state| {
                parse_initial_state(state)
                    .ok_or_else(|| format!("unsupported initial state '{state}'"))
            })
            .collect()
    }

    pub fn expected_error_count(&self) -> Option<usize> {
        self.errors.as_ref().map(Vec::len)
    }

    /// Expected tokens with parse-error markers dropped and adjacent
    /// character tokens merged.
    pub fn expected_tokens(&self) -> Result<Vec<Value>, String> {
        let mut out: Vec<Value> = Vec::new();
        for value in &self.output {
            if value.as_str() == Some("ParseError") {
                continue;
            }
            let token = value
                .as_array()
                .ok_or_else(|| format!("token must be an array, got {value}"))?;
            let kind = token
                .first()
                .and_then(Value::as_str)
                .ok_or_else(|| format!("token without a kind: {value}"))?;
            let mut token: Vec<Value> = token.iter().map(|v| self.unescape_value(v)).collect();
            match kind {
                "Character" => {
                    let text = token.get(1).and_then(Value::as_str).unwrap_or_default();
                    push_characters(&mut out, text);
                    continue;
                }
                "StartTag" => {
                    if token.get(3) == Some(&Value::Bool(false)) {
                        token.truncate(3);
                    }
                    if token.len() == 2 {
                        token.push(Value::Object(Map::new()));
                    }
                }
                "DOCTYPE" if token.get(1).and_then(Value::as_str) == Some("") => {
                    token[1] = Value::Null;
                }
                "EndTag" | "Comment" | "DOCTYPE" => {}
                other => return Err(format!("unknown token kind '{other}'")),
            }
            out.push(Value::Array(token));
        }
        Ok(out)
    }

    fn unescape_value(&self, value: &Value) -> Value {
        if !self.double_escaped {
            return value.clone();
        }
        match value {
            Value::String(text) => Value::String(String::from_utf16_lossy(&unescape_units(text))),
            Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(name, value)| (name.clone(), self.unescape_value(value)))
                    .collect(),
            ),
            other => other.clone(),
        }
    }
}

/// Map an html5lib initial state name to a content model.
pub fn parse_initial_state(name: &str) -> Option<ContentModelFlag> {
    match name {
        "Data state" => Some(ContentModelFlag::Pcdata),
        "RCDATA state" => Some(ContentModelFlag::Rcdata),
        "RAWTEXT state" | "Script data state" => Some(ContentModelFlag::Cdata),
        "PLAINTEXT state" => Some(ContentModelFlag::Plaintext),
        _ => None,
    }
}

/// Recorded tokens in html5lib shape. `Eof` has no counterpart.
pub fn tokens_to_json(tokens: &[Token]) -> Vec<Value> {
    let mut out = Vec::new();
    for token in tokens {
        match token {
            Token::Characters { text } => push_characters(&mut out, text),
            Token::StartTag {
                name,
                attributes,
                self_closing,
            } => {
                let attrs: Map<String, Value> = attributes
                    .iter()
                    .map(|attr| (attr.name.clone(), Value::String(attr.value.clone())))
                    .collect();
                let mut value = vec![json!("StartTag"), json!(name), Value::Object(attrs)];
                if *self_closing {
                    value.push(Value::Bool(true));
                }
                out.push(Value::Array(value));
            }
            Token::EndTag { name } => out.push(json!(["EndTag", name])),
            Token::Comment { text } => out.push(json!(["Comment", text])),
            Token::Doctype {
                name,
                public_id,
                system_id,
                correct,
            } => {
                let name = if name.is_empty() {
                    Value::Null
                } else {
                    json!(name)
                };
                out.push(json!(["DOCTYPE", name, public_id, system_id, correct]));
            }
            Token::Eof => {}
        }
    }
    out
}

/// One line per token, for `diff_lines`.
pub fn render(tokens: &[Value]) -> Vec<String> {
    tokens.iter().map(Value::to_string).collect()
}

fn push_characters(out: &mut Vec<Value>, text: &str) {
    if let Some(Value::Array(last)) = out.last_mut()
        && last.first().and_then(Value::as_str) == Some("Character")
        && let Some(Value::String(previous)) = last.get_mut(1)
    {
        previous.push_str(text);
        return;
    }
    out.push(json!(["Character", text]));
}

/// Expand `\uXXXX` escapes into raw code units; anything else is kept.
pub fn unescape_units(text: &str) -> Vec<u16> {
    let mut out = Vec::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find("\\u") {
        out.extend(rest[..pos].encode_utf16());
        let unit = rest
            .get(pos + 2..pos + 6)
            .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
            .and_then(|hex| u16::from_str_radix(hex, 16).ok());
        match unit {
            Some(unit) => {
                out.push(unit);
                rest = &rest[pos + 6..];
            }
            None => {
                out.extend("\\u".encode_utf16());
                rest = &rest[pos + 2..];
            }
        }
    }
    out.extend(rest.encode_utf16());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use html_lexer::Attributes;

    #[test]
    fn unescape_keeps_lone_surrogates() {
        assert_eq!(unescape_units("a\\uD800b"), vec![0x61, 0xD800, 0x62]);
        assert_eq!(unescape_units("\\uZZ"), "\\uZZ".encode_utf16().collect::<Vec<_>>());
    }

    #[test]
    fn expected_tokens_are_normalized() {
        let case: FixtureCase = serde_json::from_value(json!({
            "description": "merge",
            "input": "",
            "output": [
                "ParseError",
                ["Character", "a"],
                ["Character", "b"],
                ["StartTag", "p", {}, false],
                ["DOCTYPE", "", null, null, false]
            ]
        }))
        .expect("valid case");
        assert_eq!(
            render(&case.expected_tokens().expect("normalize")),
            vec![
                r#"["Character","ab"]"#,
                r#"["StartTag","p",{}]"#,
                r#"["DOCTYPE",null,null,null,false]"#,
            ]
        );
    }

    #[test]
    fn recorded_tokens_convert() {
        let mut attributes = Attributes::new();
        attributes.push("href", "x");
        let tokens = vec![
            Token::Characters {
                text: "a".to_string(),
            },
            Token::Characters {
                text: "b".to_string(),
            },
            Token::StartTag {
                name: "br".to_string(),
                attributes,
                self_closing: true,
            },
            Token::Eof,
        ];
        assert_eq!(
            render(&tokens_to_json(&tokens)),
            vec![
                r#"["Character","ab"]"#,
                r#"["StartTag","br",{"href":"x"},true]"#,
            ]
        );
    }

    #[test]
    fn initial_state_names() {
        assert_eq!(
            parse_initial_state("RAWTEXT state"),
            Some(ContentModelFlag::Cdata)
        );
        assert_eq!(parse_initial_state("Bogus state"), None);
    }
}
