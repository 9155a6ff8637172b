//! The `gradebook init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    let path = std::path::Path::new("gradebook.toml");
    if path.exists() {
        println!("gradebook.toml already exists, skipping.");
    } else {
        std::fs::write(path, SAMPLE_CONFIG)?;
        println!("Created gradebook.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit gradebook.toml to choose the data file and grade scale");
    println!("  2. Run: gradebook add-course --name Algebra --term Fall --credits 3");
    println!("  3. Run: gradebook shell");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradebook configuration

# Snapshot file, read at startup and replaced on save.
# ${VAR} references are expanded from the environment.
data_file = "gradebook_data.json"

# Decimal places for GPAs in rankings and summaries.
gpa_precision = 2

[grade_scale]
min = 0.0
max = 100.0
"#;
