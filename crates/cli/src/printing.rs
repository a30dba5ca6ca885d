use aequor_sim::analysis::nucleotide_counts;
use aequor_sim::simulation::{Configuration, Population};

pub fn print_parameters(config: &Configuration) {
    let population = &config.population;
    println!("\n📋 Population Parameters");
    println!("  • Specimens: {} [-n, --count]", population.target_count);
    println!("  • Strand Length: {} bp [-l, --length]", population.strand_length);
    println!(
        "  • Survival Threshold: {}% GC [-t, --threshold]",
        population.survival_threshold
    );
    match population.max_attempts {
        Some(max) => println!("  • Max Attempts: {max} [--max-attempts]"),
        None => println!("  • Max Attempts: Unlimited [--max-attempts]"),
    }
    match config.seed {
        Some(seed) => println!("  • Random Seed: {seed} [--seed]"),
        None => println!("  • Random Seed: Random [--seed]"),
    }
    println!();
}

/// Render a population as one line per specimen.
pub fn format_population_text(population: &Population) -> String {
    let mut content = String::from("id\tstrand\tgc\tA\tC\tG\tT\n");
    for specimen in population.specimens() {
        let [a, c, g, t] = nucleotide_counts(specimen.strand());
        content.push_str(&format!(
            "{}\t{}\t{}\t{a}\t{c}\t{g}\t{t}\n",
            specimen.id(),
            specimen.strand(),
            specimen.gc_content()
        ));
    }
    content
}

pub fn format_population_fasta(population: &Population) -> String {
    let mut content = String::new();
    for specimen in population.specimens() {
        content.push_str(&format!(
            ">specimen_{} gc={}\n{}\n",
            specimen.id(),
            specimen.gc_content(),
            specimen.strand()
        ));
    }
    content
}
