//! The documentation tree, as a static table.
//!
//! Section order and file order are both significant: the scaffolder walks
//! the table front to back, so output and logs are deterministic.

/// Ordered mapping from section directory to its markdown files.
pub const STRUCTURE: &[(&str, &[&str])] = &[
    (
        "00_INTRODUCTION",
        &["overview.md", "design_goals.md", "philosophy.md"],
    ),
    (
        "01_ARCHITECTURE",
        &[
            "architecture_diagram.md",
            "compiler_flow.md",
            "llvm_path.md",
            "asm_path.md",
            "dual_mode.md",
        ],
    ),
    (
        "02_BUILD_SYSTEM",
        &[
            "setup.md",
            "build_hybrid.md",
            "build_no_llvm.md",
            "ci_cd_pipeline.md",
        ],
    ),
    (
        "03_COMPONENTS",
        &[
            "hal_core.md",
            "hal_codegen.md",
            "hal_direct_asm.md",
            "llvm_adapter.md",
            "asm_emitter.md",
        ],
    ),
    (
        "04_GUIDES",
        &[
            "hybrid_mode_guide.md",
            "pure_asm_guide.md",
            "debug_mode_guide.md",
            "transition_from_rustc.md",
            "migration_to_r3c.md",
        ],
    ),
    (
        "05_ECOSYSTEM",
        &[
            "relation_to_r3c.md",
            "relation_to_ltss.md",
            "cpppm_integration.md",
            "rust_vm_no_llvm.md",
        ],
    ),
    (
        "06_PHILOSOPHY_AND_MANIFESTOS",
        &[
            "coexistence_manifesto.md",
            "independence_statement.md",
            "future_of_rust.md",
            "beyond_llvm_thesis.md",
        ],
    ),
    (
        "07_API_REFERENCE",
        &[
            "halrust_cli.md",
            "config_options.md",
            "llvm_hooks.md",
            "asm_emitter_api.md",
        ],
    ),
    (
        "08_EXAMPLES",
        &[
            "example_hybrid_project.md",
            "example_no_llvm_project.md",
            "performance_comparison.md",
            "debugging_samples.md",
        ],
    ),
    (
        "09_APPENDIX",
        &[
            "glossary.md",
            "versioning_policy.md",
            "license_notice.md",
            "contributors.md",
        ],
    ),
];

/// Section directory names, in table order
pub fn sections() -> impl Iterator<Item = &'static str> {
    STRUCTURE.iter().map(|(section, _)| *section)
}

/// Every (section, file) pair, in table order
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    STRUCTURE
        .iter()
        .flat_map(|(section, files)| files.iter().map(move |file| (*section, *file)))
}

pub fn section_count() -> usize {
    STRUCTURE.len()
}

/// Total number of placeholder files across all sections
pub fn file_count() -> usize {
    STRUCTURE.iter().map(|(_, files)| files.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ten_sections_in_order() {
        let names: Vec<_> = sections().collect();
        assert_eq!(names.len(), 10);
        assert_eq!(names.first(), Some(&"00_INTRODUCTION"));
        assert_eq!(names.last(), Some(&"09_APPENDIX"));

        // Numeric prefixes run 00..09 without gaps
        for (i, name) in names.iter().enumerate() {
            assert!(name.starts_with(&format!("{i:02}_")), "bad prefix: {name}");
        }
    }

    #[test]
    fn test_file_count_matches_entries() {
        assert_eq!(entries().count(), file_count());
        assert_eq!(file_count(), 42);
        assert_eq!(section_count(), 10);
    }

    #[test]
    fn test_every_file_is_markdown() {
        for (section, file) in entries() {
            assert!(file.ends_with(".md"), "{section}/{file} is not markdown");
        }
    }

    #[test]
    fn test_no_duplicate_files_within_a_section() {
        for (section, files) in STRUCTURE {
            let unique: HashSet<_> = files.iter().collect();
            assert_eq!(unique.len(), files.len(), "duplicates in {section}");
        }
    }

    #[test]
    fn test_entries_preserve_file_order() {
        let intro: Vec<_> = entries()
            .filter(|(section, _)| *section == "00_INTRODUCTION")
            .map(|(_, file)| file)
            .collect();
        assert_eq!(intro, vec!["overview.md", "design_goals.md", "philosophy.md"]);
    }
}
