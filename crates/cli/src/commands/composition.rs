use anyhow::{Context, Result};
use longrep_analysis::Composition;
use longrep_sim::source::read_dna;
use std::path::Path;

use crate::printing::format_composition;

pub fn show_composition(path: &Path, json: bool) -> Result<()> {
    let bases =
        read_dna(path).with_context(|| format!("Failed to read DNA from {}", path.display()))?;
    let composition = Composition::from_bases(bases);

    if json {
        let ratios: serde_json::Map<String, serde_json::Value> = composition
            .proportions()
            .iter()
            .map(|(base, ratio)| (base.to_string(), serde_json::json!(ratio)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&ratios)?);
    } else {
        print!("{}", format_composition(&composition));
        if let Ok(distribution) = composition.to_distribution() {
            println!("\n💡 Simulate with: --weights {distribution}");
        }
    }

    Ok(())
}
