use longrep_analysis::{Composition, KSummary};
use longrep_sim::simulation::SimulationConfig;

pub fn print_parameters(config: &SimulationConfig, lengths: &[usize]) {
    let lengths: Vec<String> = lengths.iter().map(ToString::to_string).collect();
    println!("\n📋 Simulation Configuration");
    println!("  • Sequence Length: {} bp [-l]", lengths.join(", "));
    println!("  • Trials: {} [-n, --trials]", config.trials);
    println!("  • Base Weights: {} [-w, --weights]", config.distribution);
    if let Some(seed) = config.seed {
        println!("  • Random Seed: {seed} [--seed]");
    } else {
        println!("  • Random Seed: Random [--seed]");
    }
    println!(
        "  • Execution: {} [--sequential]",
        if config.parallel { "Parallel" } else { "Sequential" }
    );
    println!();
}

/// Human-readable report of one batch of trials.
pub fn format_summary(summary: &KSummary, values: Option<&[usize]>) -> String {
    let mut out = format!("📊 Length {} ({} trials)\n", summary.length, summary.trials);
    if let (Some(min), Some(max)) = (summary.min, summary.max) {
        out.push_str(&format!("  • K range: {min}..={max}\n"));
    }
    out.push_str(&format!(
        "  • Mean K: {:.3} (sd {:.3})\n",
        summary.mean, summary.std_dev
    ));
    if let Some(mode) = summary.mode() {
        out.push_str(&format!("  • Mode: {mode}\n"));
    }
    match summary.lower_bound {
        Some(bound) => out.push_str(&format!("  • Lower bound on K - 1: {bound:.3}\n")),
        None => out.push_str("  • Lower bound on K - 1: none (single-base weights)\n"),
    }

    out.push_str("\n  K     Trials\n");
    for &(k, count) in &summary.histogram {
        out.push_str(&format!("  {k:<5} {count}\n"));
    }

    if let Some(values) = values {
        let joined: Vec<String> = values.iter().map(ToString::to_string).collect();
        out.push_str(&format!("\n  Values: {}\n", joined.join(" ")));
    }
    out
}

pub fn format_composition(composition: &Composition) -> String {
    let mut out = format!("🧬 Base Composition ({} bp)\n", composition.total());
    for (base, ratio) in composition.proportions() {
        out.push_str(&format!(
            "  • {base}: {ratio:.4} ({})\n",
            composition.count(base)
        ));
    }
    out.push_str(&format!("  • GC content: {:.4}\n", composition.gc_content()));
    out
}
