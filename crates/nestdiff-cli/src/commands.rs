use std::process::ExitCode;

use anyhow::Context;
use tracing::{debug, info};

use nestdiff_diff::{diff, DiffOptions, Row};
use nestdiff_render::render_view;
use nestdiff_types::{normalize, InputValue};
use nestdiff_view::DiffView;

use crate::cli::{Cli, OutputFormat};
use crate::config::Settings;
use crate::input::load;
use crate::output::{render_json, render_text, summary};

/// Result of a completed comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub equal: bool,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        if self.equal {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        }
    }
}

pub fn run_command(cli: Cli) -> anyhow::Result<Outcome> {
    let settings = Settings::resolve(&cli)?;
    debug!(?settings, "resolved settings");

    let first = load(&cli.first)?;
    let second = match &cli.second {
        Some(path) => load(path)?,
        None => InputValue::Map(Vec::new()),
    };

    let root = compare(&first, &second, &settings);
    info!(rows = root.row_count, equal = root.equal, "comparison finished");

    if cli.output.is_some() {
        colored::control::set_override(false);
    }
    let rendered = render(&root, &settings)?;

    match &cli.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{rendered}"),
    }
    Ok(Outcome { equal: root.equal })
}

fn compare(first: &InputValue, second: &InputValue, settings: &Settings) -> Row {
    let options = DiffOptions {
        strict: settings.strict,
        no_second: settings.render.no_second,
    };
    diff(&normalize(first), &normalize(second), &options)
}

fn render(root: &Row, settings: &Settings) -> anyhow::Result<String> {
    let view = DiffView::new(root);
    let states = view.initial_states();
    Ok(match settings.format {
        OutputFormat::Html => render_view(&view, &states, &settings.render).html,
        OutputFormat::Text => {
            let mut text = render_text(&view, &states, &settings.render);
            text.push_str(&summary(&root.stats(), root.equal));
            text.push('\n');
            text
        }
        OutputFormat::Json => {
            let mut json = render_json(root)?;
            json.push('\n');
            json
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn run(args: &[&str]) -> anyhow::Result<Outcome> {
        run_command(Cli::try_parse_from(std::iter::once("nestdiff").chain(args.iter().copied()))?)
    }

    #[test]
    fn equal_documents_succeed() {
        let a = temp(".json", r#"{"a": [1, 2]}"#);
        let b = temp(".toml", "a = [1, 2]\n");
        let out = tempfile::NamedTempFile::new().unwrap();
        let outcome = run(&[
            "--strict",
            "-o",
            out.path().to_str().unwrap(),
            a.path().to_str().unwrap(),
            b.path().to_str().unwrap(),
        ])
        .unwrap();
        assert!(outcome.equal);
        let html = std::fs::read_to_string(out.path()).unwrap();
        assert!(html.contains("<th>[a]</th>"));
        assert!(html.contains("First structure"));
    }

    #[test]
    fn different_documents_report_unequal() {
        let a = temp(".json", r#"{"a": 1}"#);
        let b = temp(".json", r#"{"a": 2}"#);
        let out = tempfile::NamedTempFile::new().unwrap();
        let outcome = run(&[
            "--format",
            "text",
            "-o",
            out.path().to_str().unwrap(),
            a.path().to_str().unwrap(),
            b.path().to_str().unwrap(),
        ])
        .unwrap();
        assert!(!outcome.equal);
        let text = std::fs::read_to_string(out.path()).unwrap();
        assert!(text.starts_with("  a: int(1) | int(2)\n"));
        assert!(text.contains("different: 2 rows"));
    }

    #[test]
    fn single_document_is_equal() {
        let a = temp(".json", r#"{"c": {"foo2": ["bar2", "bar3"]}}"#);
        let out = tempfile::NamedTempFile::new().unwrap();
        let outcome = run(&[
            "--format",
            "json",
            "-o",
            out.path().to_str().unwrap(),
            a.path().to_str().unwrap(),
        ])
        .unwrap();
        assert!(outcome.equal);
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out.path()).unwrap()).unwrap();
        assert_eq!(json["stats"]["missingFromSecond"], 4);
    }

    #[test]
    fn missing_input_fails() {
        assert!(run(&["/nonexistent/a.json", "/nonexistent/b.json"]).is_err());
    }
}
