//! Human-readable run summary.

use colored::Colorize;

const NEXT_STEPS: &[&str] = &[
    "Run: pip install mkdocs-material",
    "Run: mkdocs serve",
    "Visit http://127.0.0.1:8000 to preview your docs.",
];

/// Completion line for a run that wrote `created` files
pub fn headline(project: &str, created: usize) -> String {
    format!("✅ {project} documentation tree initialized: {created} markdown files created.")
}

/// Numbered follow-on instructions, one line each
pub fn next_steps() -> Vec<String> {
    let mut lines = vec!["📘 Next steps:".to_string()];
    lines.extend(
        NEXT_STEPS
            .iter()
            .enumerate()
            .map(|(i, step)| format!("  {}. {step}", i + 1)),
    );
    lines
}

/// Full report as plain text
pub fn render_report(project: &str, created: usize) -> String {
    let mut out = headline(project, created);
    out.push('\n');
    for line in next_steps() {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Print the report to stdout
pub fn report(project: &str, created: usize) {
    println!("{}", headline(project, created).green().bold());
    for line in next_steps() {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_report_reference_output() {
        let expected = "✅ HalRust documentation tree initialized: 42 markdown files created.\n\
📘 Next steps:\n  1. Run: pip install mkdocs-material\n  2. Run: mkdocs serve\n  3. Visit http://127.0.0.1:8000 to preview your docs.\n";
        assert_eq!(render_report("HalRust", 42), expected);
    }

    #[test]
    fn test_headline_reports_zero() {
        assert!(headline("Acme", 0).contains(": 0 markdown files created."));
    }
}
