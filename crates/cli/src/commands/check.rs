use std::path::Path;
use tracing::info;
use typex_core::{TypeCodec, TypeError};

#[derive(Debug)]
pub struct LineFailure {
    /// 1-based
    pub line: usize,
    pub error: TypeError,
}

/// Parse every non-blank, non-comment line of `text`.
pub fn check_lines(codec: &TypeCodec, text: &str) -> (usize, Vec<LineFailure>) {
    let mut checked = 0;
    let mut failures = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let expr = line.trim();
        if expr.is_empty() || expr.starts_with('#') {
            continue;
        }
        checked += 1;
        if let Err(error) = codec.parse(expr) {
            failures.push(LineFailure { line: i + 1, error });
        }
    }
    (checked, failures)
}

pub fn run(codec: &TypeCodec, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let (checked, failures) = check_lines(codec, &text);

    for failure in &failures {
        println!("{}: {}", failure.line, failure.error);
    }
    info!(
        "Checked {} expressions in {}, {} failed",
        checked,
        path.display(),
        failures.len()
    );

    if failures.is_empty() {
        Ok(())
    } else {
        Err(format!("{} of {} expressions failed", failures.len(), checked).into())
    }
}
