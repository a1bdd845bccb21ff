//! Print the documentation structure table

use anyhow::Result;
use serde::Serialize;

use docs_portal::structure;
use docs_portal::template::derive_title;

#[derive(Serialize)]
struct SectionListing {
    section: &'static str,
    files: Vec<FileListing>,
}

#[derive(Serialize)]
struct FileListing {
    file: &'static str,
    title: String,
}

fn listing() -> Vec<SectionListing> {
    structure::STRUCTURE
        .iter()
        .map(|(section, files)| SectionListing {
            section: *section,
            files: files
                .iter()
                .map(|file| FileListing {
                    file: *file,
                    title: derive_title(file),
                })
                .collect(),
        })
        .collect()
}

pub fn execute(json: bool) -> Result<()> {
    let sections = listing();

    if json {
        println!("{}", serde_json::to_string_pretty(&sections)?);
        return Ok(());
    }

    for section in &sections {
        println!("{}/", section.section);
        for entry in &section.files {
            println!("  {:<32} {}", entry.file, entry.title);
        }
    }
    println!(
        "\n{} sections, {} files",
        structure::section_count(),
        structure::file_count()
    );
    Ok(())
}
