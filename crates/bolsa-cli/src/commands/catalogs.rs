use bolsa_core::catalog::builtin;
use std::path::Path;

pub fn list() -> Result<(), bolsa_core::error::BolsaError> {
    println!("Built-in catalogs:\n");
    for name in builtin::PRESETS {
        let entries = builtin::load_preset(name)?;
        println!("  {:<12} {} entries", name, entries.len());
    }
    println!();
    Ok(())
}

pub fn show(preset: &str) -> Result<(), bolsa_core::error::BolsaError> {
    let entries = builtin::load_preset(preset)?;

    let code_width = entries
        .iter()
        .map(|e| e.code.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    println!("{} ({} entries)\n", preset, entries.len());
    println!("  {:>5}  {:<width$}  Description", "Id", "Code", width = code_width);
    println!("  {}", "-".repeat(5 + 2 + code_width + 2 + 11));
    for entry in &entries {
        println!(
            "  {:>5}  {:<width$}  {}",
            entry.id,
            entry.code,
            entry.description,
            width = code_width
        );
    }
    println!();

    Ok(())
}

pub fn validate(file: &Path) -> Result<(), bolsa_core::error::BolsaError> {
    let entries = bolsa_core::catalog::load_catalog(file)?;

    println!("Catalog '{}' is valid.", file.display());
    println!("  Entries: {}", entries.len());

    let missing_codes = entries.iter().filter(|e| e.code.trim().is_empty()).count();
    if missing_codes > 0 {
        println!("\nWarnings:");
        println!(
            "  - {} entr{} without a code; only descriptions will be matched",
            missing_codes,
            if missing_codes == 1 { "y" } else { "ies" }
        );
    }

    Ok(())
}
