use bolsa_core::classify::{ClassificationResult, ClassifyOutcome};
use bolsa_core::model::KeywordSet;
use bolsa_core::validation::header::HeaderMapping;
use bolsa_core::validation::report::{StructureCheck, StructureReport};
use bolsa_core::UploadAnalysis;

pub fn print_structure(report: &StructureReport) {
    println!("=== Structure ===\n");

    match &report.check {
        StructureCheck::EmptyInput => println!("  Status: EMPTY"),
        StructureCheck::InsufficientColumns { found, expected } => {
            println!("  Status: TOO FEW COLUMNS ({found} of {expected})")
        }
        StructureCheck::Analyzed(viability) => {
            let status = if viability.is_valid { "VALID" } else { "LOW VIABILITY" };
            println!("  Status: {} ({}%)", status, viability.percentage);
            println!(
                "  Header row: {}",
                if viability.looks_like_header_row {
                    "yes"
                } else {
                    "no"
                }
            );
            println!("  Analyzed row: {}\n", viability.analyzed_row + 1);

            let width = viability
                .per_field
                .iter()
                .map(|c| c.field.to_string().chars().count())
                .max()
                .unwrap_or(10);
            for check in viability.per_field.iter() {
                let mark = if check.passed { "ok" } else { "FAIL" };
                println!(
                    "  {:<width$}  {}",
                    check.field.to_string(),
                    mark,
                    width = width
                );
            }
        }
    }

    println!("\n  {}\n", report.recommendation);
}

pub fn print_classify(outcome: &ClassifyOutcome) {
    print_keywords(&outcome.file_name, &outcome.keywords);
    print_suggestions(&outcome.bolsa_type, &outcome.service);
}

pub fn print_analysis(analysis: &UploadAnalysis) {
    print_structure(&analysis.structure);

    if let Some(ref mapping) = analysis.header_mapping {
        print_header_mapping(mapping);
    }

    print_keywords(&analysis.file_name, &analysis.keywords);
    print_suggestions(&analysis.bolsa_type, &analysis.service);
}

fn print_header_mapping(mapping: &HeaderMapping) {
    println!("=== Header columns ===\n");
    for m in mapping.iter() {
        match m.column {
            Some(col) => println!("  {:<18} column {}", m.field.to_string(), col + 1),
            None => println!("  {:<18} -", m.field.to_string()),
        }
    }
    println!();
}

fn print_keywords(file_name: &str, keywords: &KeywordSet) {
    println!("=== {} ===\n", file_name);
    if keywords.all_keywords.is_empty() {
        println!("  Keywords: (none)\n");
    } else {
        println!("  Keywords: {}\n", keywords.all_keywords.join(", "));
    }
}

fn print_suggestions(bolsa_type: &ClassificationResult, service: &ClassificationResult) {
    print_suggestion("Bolsa type", bolsa_type);
    print_suggestion("Service", service);
    println!();
}

fn print_suggestion(label: &str, result: &ClassificationResult) {
    match result {
        Some(c) => println!(
            "  {:<11} {} [{}] via {:?} on '{}' ({:.2})",
            format!("{label}:"),
            c.description,
            c.catalog_entry_id,
            c.method,
            c.matched_keyword,
            c.score
        ),
        None => println!("  {:<11} (select manually)", format!("{label}:")),
    }
}
