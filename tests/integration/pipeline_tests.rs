//! Integration tests for the full pipeline

use std::fs;
use std::path::Path;
use recase::config::{Config, ConvertConfig, InputFormat, StyleOverride, StylesConfig};
use recase::models::CaseStyle;
use recase::pipeline::Pipeline;
use recase::CaseError;
use tempfile::tempdir;

/// Run the pipeline over `input` and return the produced text
fn run_to_string(config: &Config, input: &str) -> anyhow::Result<String> {
    let mut output = Vec::new();
    Pipeline::new(false).run(config, input.as_bytes(), &mut output)?;
    Ok(String::from_utf8(output).expect("pipeline writes UTF-8"))
}

fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("recase.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_full_pipeline_every_style() {
    let input = "XMLHttpRequest\nitem123Name\nfoo--bar__baz..qux\nHELLO_WORLD\n";

    let expected = [
        (CaseStyle::Kebab, "xml-http-request\nitem123-name\nfoo-bar-baz-qux\nhello-world\n"),
        (CaseStyle::Snake, "xml_http_request\nitem123_name\nfoo_bar_baz_qux\nhello_world\n"),
        (CaseStyle::Camel, "xmlhttprequest\nitem123Name\nfooBarBazQux\nhelloWorld\n"),
        (CaseStyle::Dot, "xmlhttprequest\nitem.123.name\nfoo.bar.baz.qux\nhello.world\n"),
    ];

    for (style, want) in expected {
        let config = Config {
            convert: ConvertConfig {
                style,
                input: InputFormat::Text,
            },
            styles: StylesConfig::default(),
        };
        let output = run_to_string(&config, input).unwrap();
        assert_eq!(output, want, "style {}", style);
    }
}

#[test]
fn test_pipeline_with_config_file() {
    let temp = tempdir().unwrap();
    let path = write_config(
        temp.path(),
        r#"
[convert]
style = "dot"
input = "json"

[styles.dot]
split_case_transitions = true
"#,
    );

    let config = Config::load(&path).unwrap();
    let output = run_to_string(&config, "\"fooBar\"\n\n\"ПриветМир\"\n").unwrap();

    assert_eq!(output, "foo.bar\nпривет.мир\n");
}

#[test]
fn test_pipeline_rejects_non_string_json() {
    let mut config = Config::default_config();
    config.convert.input = InputFormat::Json;

    for bad in ["null", "12", "{\"a\": \"b\"}", "[\"x\"]", "false"] {
        let err = run_to_string(&config, bad).unwrap_err();
        let case_err = err.downcast_ref::<CaseError>().expect("CaseError in chain");
        assert!(matches!(case_err, CaseError::InvalidInputType { .. }));
        assert_eq!(case_err.to_string(), "Input must be a string");
    }
}

#[test]
fn test_whitespace_lines_become_empty() {
    let config = Config::default_config();
    let output = run_to_string(&config, "   \n\t\n").unwrap();
    assert_eq!(output, "\n\n");
}

#[test]
fn test_config_save_and_load() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("recase.toml");

    let mut config = Config::default_config();
    config.convert.style = CaseStyle::Snake;
    config.styles.snake = Some(StyleOverride {
        separators: Some(" /".to_string()),
        ..StyleOverride::default()
    });

    config.save(&path).unwrap();
    let loaded = Config::load(&path).unwrap();

    assert_eq!(loaded, config);
    assert_eq!(
        loaded.converter().convert("src/main-file", CaseStyle::Snake),
        "src_mainfile"
    );
}

#[test]
fn test_default_config_file_is_loadable() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("recase.toml");

    Config::default_config().save(&path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[convert]"));
    assert!(content.contains("style = \"kebab\""));

    assert_eq!(Config::load(&path).unwrap(), Config::default_config());
}

#[test]
fn test_load_missing_config_fails() {
    let temp = tempdir().unwrap();
    let err = Config::load(&temp.path().join("nope.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_load_invalid_separators_fails() {
    let temp = tempdir().unwrap();
    let path = write_config(
        temp.path(),
        r#"
[styles.kebab]
separators = "-1"
"#,
    );

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid config file"));
}

#[test]
fn test_resolve_explicit_path() {
    let temp = tempdir().unwrap();
    let path = write_config(
        temp.path(),
        r#"
[convert]
style = "camel"
"#,
    );

    let config = Config::resolve(Some(&path)).unwrap();
    assert_eq!(config.convert.style, CaseStyle::Camel);
}

#[test]
fn test_resolve_falls_back_to_file_in_base_dir() {
    let temp = tempdir().unwrap();

    // No recase.toml yet: built-in defaults
    let config = Config::resolve_in(temp.path(), None).unwrap();
    assert_eq!(config, Config::default_config());

    write_config(
        temp.path(),
        r#"
[convert]
style = "snake"
"#,
    );
    let config = Config::resolve_in(temp.path(), None).unwrap();
    assert_eq!(config.convert.style, CaseStyle::Snake);
}

#[test]
fn test_cli_flags_override_config_file() {
    let temp = tempdir().unwrap();
    write_config(
        temp.path(),
        r#"
[convert]
style = "dot"
input = "text"
"#,
    );

    let mut config = Config::resolve_in(temp.path(), None).unwrap();
    config.apply_cli(Some(CaseStyle::Kebab), true);

    assert_eq!(config.convert.style, CaseStyle::Kebab);
    assert_eq!(config.convert.input, InputFormat::Json);
    assert_eq!(run_to_string(&config, "\"fooBar\"\n").unwrap(), "foo-bar\n");

    // Without flags the file wins
    let mut config = Config::resolve_in(temp.path(), None).unwrap();
    config.apply_cli(None, false);
    assert_eq!(run_to_string(&config, "fooBar\n").unwrap(), "foobar\n");
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let temp = tempdir().unwrap();
    let path = write_config(temp.path(), "[convert]\nstyle = \"camel\"\n");

    let err = Config::init_file(&path, false).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    // The existing file is untouched
    assert_eq!(Config::load(&path).unwrap().convert.style, CaseStyle::Camel);

    let written = Config::init_file(&path, true).unwrap();
    assert_eq!(written, Config::default_config());
    assert_eq!(Config::load(&path).unwrap(), Config::default_config());
}

#[test]
fn test_init_creates_missing_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("fresh.toml");

    Config::init_file(&path, false).unwrap();
    assert!(path.exists());
}

#[test]
fn test_run_inputs_json_mode() {
    let mut config = Config::default_config();
    config.apply_cli(Some(CaseStyle::Camel), true);

    let inputs = vec!["\"foo bar\"".to_string(), "7".to_string()];
    let mut output = Vec::new();
    let err = Pipeline::new(false)
        .run_inputs(&config, &inputs, &mut output)
        .unwrap_err();

    assert!(err.to_string().contains("line 2"));
    assert_eq!(String::from_utf8(output).unwrap(), "fooBar\n");
}
