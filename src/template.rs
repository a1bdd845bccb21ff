//! Placeholder content for generated documents.
//!
//! One fixed layout with a derived title and the project's branding.

use serde::{Deserialize, Serialize};

/// Project name and footer lines stamped into every placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branding {
    pub project: String,
    pub footer: Vec<String>,
}

pub const DEFAULT_PROJECT: &str = "HalRust";

/// Footer lines; the first keeps its two trailing spaces (markdown hard break)
pub fn default_footer() -> Vec<String> {
    vec![
        "🪶 HalRust — Hybrid Adaptive Layered Rust  ".to_string(),
        "\"LLVM and Freedom can coexist.\"".to_string(),
    ]
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            project: DEFAULT_PROJECT.to_string(),
            footer: default_footer(),
        }
    }
}

/// Derive a document title from its file name.
///
/// `design_goals.md` becomes `Design Goals`. A letter is uppercased when it
/// starts the string or follows a non-letter, and lowercased otherwise, so
/// `relation_to_r3c.md` becomes `Relation To R3C`.
pub fn derive_title(file_name: &str) -> String {
    let stem = file_name.strip_suffix(".md").unwrap_or(file_name);

    let mut title = String::with_capacity(stem.len());
    let mut prev_is_letter = false;
    for ch in stem.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if prev_is_letter {
                title.extend(ch.to_lowercase());
            } else {
                title.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            title.push(ch);
            prev_is_letter = false;
        }
    }
    title
}

/// Render the full placeholder document for `title`
pub fn render(title: &str, branding: &Branding) -> String {
    let mut out = format!(
        "# {title}\n\
         \n\
         _(This document is auto-generated as part of the {project} Docs Portal.)_\n\
         \n\
         Describe the content of **{title}** here.\n\
         \n\
         ---\n\
         \n",
        project = branding.project,
    );
    for line in &branding.footer {
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_title_basic() {
        assert_eq!(derive_title("design_goals.md"), "Design Goals");
        assert_eq!(derive_title("llvm_path.md"), "Llvm Path");
        assert_eq!(derive_title("overview.md"), "Overview");
    }

    #[test]
    fn test_derive_title_digits_start_new_word() {
        assert_eq!(derive_title("migration_to_r3c.md"), "Migration To R3C");
        assert_eq!(derive_title("ci_cd_pipeline.md"), "Ci Cd Pipeline");
    }

    #[test]
    fn test_derive_title_lowercases_inner_capitals() {
        assert_eq!(derive_title("LLVM_hooks.md"), "Llvm Hooks");
    }

    #[test]
    fn test_derive_title_only_strips_trailing_extension() {
        assert_eq!(derive_title("notes.md.md"), "Notes.Md");
        assert_eq!(derive_title("readme"), "Readme");
    }

    #[test]
    fn test_render_default_branding() {
        let doc = render("Design Goals", &Branding::default());
        let expected = "# Design Goals\n\
\n\
_(This document is auto-generated as part of the HalRust Docs Portal.)_\n\
\n\
Describe the content of **Design Goals** here.\n\
\n\
---\n\
\n\
🪶 HalRust — Hybrid Adaptive Layered Rust  \n\
\"LLVM and Freedom can coexist.\"\n";
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_render_custom_branding() {
        let branding = Branding {
            project: "Acme".to_string(),
            footer: vec!["Acme Corp".to_string()],
        };
        let doc = render("Overview", &branding);
        assert!(doc.contains("part of the Acme Docs Portal."));
        assert!(doc.ends_with("---\n\nAcme Corp\n"));
    }

    #[test]
    fn test_render_without_footer() {
        let branding = Branding {
            project: "Bare".to_string(),
            footer: vec![],
        };
        assert!(render("X", &branding).ends_with("---\n\n"));
    }
}
