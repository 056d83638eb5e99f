use std::fmt::Write;

pub mod tokenizer_json;

const CONTEXT: usize = 2;

fn side(lines: &[String], i: usize) -> &str {
    lines.get(i).map_or("<missing>", String::as_str)
}

/// Report around the first line where `actual` departs from `expected`.
pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    let total = expected.len().max(actual.len());
    let mut out = String::new();

    if let Some(first) = (0..total).find(|&i| side(expected, i) != side(actual, i)) {
        let window = first.saturating_sub(CONTEXT)..(first + CONTEXT + 1).min(total);
        let _ = writeln!(
            out,
            "first mismatch at line {} (showing {}..={}):",
            first + 1,
            window.start + 1,
            window.end
        );
        for i in window {
            let marker = if i == first { '>' } else { ' ' };
            let _ = writeln!(out, "{marker} {:>4}  expected: {}", i + 1, side(expected, i));
            let _ = writeln!(out, "{marker} {:>4}    actual: {}", i + 1, side(actual, i));
        }
    }
    let _ = writeln!(
        out,
        "expected {} lines, actual {} lines",
        expected.len(),
        actual.len()
    );
    out
}

/// Boolean switch read from the environment; unset means off.
pub fn parse_env_bool(key: &str) -> bool {
    let Ok(value) = std::env::var(key) else {
        return false;
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => false,
        "1" | "true" | "yes" | "on" => true,
        other => panic!("unsupported {key} value '{other}'; use 1/0 or true/false"),
    }
}

/// Non-empty value of `key`, if set.
pub fn env_filter(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn diff_lines_points_at_first_mismatch() {
        let report = diff_lines(&lines(&["a", "b"]), &lines(&["a", "c"]));
        assert!(report.starts_with("first mismatch at line 2"), "{report}");
        assert!(report.contains(">    2    actual: c"), "{report}");
        assert!(report.ends_with("expected 2 lines, actual 2 lines\n"), "{report}");
    }

    #[test]
    fn diff_lines_reports_length_only_difference() {
        let report = diff_lines(&lines(&["a"]), &lines(&["a", "b"]));
        assert!(report.contains("line 2"), "{report}");
        assert!(report.contains("expected: <missing>"), "{report}");
    }

    #[test]
    fn identical_inputs_only_report_counts() {
        let report = diff_lines(&lines(&["x"]), &lines(&["x"]));
        assert_eq!(report, "expected 1 lines, actual 1 lines\n");
    }
}
