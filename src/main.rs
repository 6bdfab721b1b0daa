use anyhow::Context;
use kinpath::{annotate, FamilyGraph, FamilyRecord, LineageConfig, Lineage};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => LineageConfig::from_file(&path)
            .with_context(|| format!("loading config from {}", path))?,
        None => LineageConfig::default(),
    };

    println!("Kinpath v{}", kinpath::version());
    println!("==========================================");
    println!();

    let records = sample_family();
    let graph = FamilyGraph::from_records(&records, &config.unknown_marker)?;
    println!(
        "Family graph: {} individuals, {} parent-child edges",
        graph.individual_count(),
        graph.edge_count()
    );

    let lineage = Lineage::compute(&graph, &config.source)?;
    let paths = lineage.canonical_paths();
    let marks = annotate(&paths);

    println!("\n=== Canonical paths from {} ===", lineage.source());
    for path in &paths {
        let rendered: Vec<String> = path.iter().map(|name| format!("*{}", name)).collect();
        println!("  {:>2}  {}", path.edge_count(), rendered.join(" -> "));
    }

    println!("\n=== Lineage report ===");
    println!("{}", serde_json::to_string_pretty(&lineage.report(&marks))?);

    Ok(())
}

/// Sample family with several equally short routes between relatives
fn sample_family() -> Vec<FamilyRecord> {
    let card = |name: &str, father: &str, mother: &str, children: &[&str]| {
        FamilyRecord::new(name)
            .with_father(father)
            .with_mother(mother)
            .with_children(children.iter().copied())
    };

    vec![
        card("Alice", "Arlo", "Madeline", &[]),
        card("Bob", "Charlie", "Eve", &[]),
        card("Eve", "Oliver", "Aurora", &["Bob"]),
        card("Charlie", "Jack", "Luna", &["Bob"]),
        card("Madeline", "Jack", "Aurora", &["Alice"]),
        card("Arlo", "Oscar", "Isla", &["Alice"]),
        card("Oliver", "Hugo", "Rose", &["Eve"]),
        card("Luna", "Oscar", "Isla", &["Charlie"]),
        card("Aurora", "Hugo", "Rose", &["Eve", "Madeline"]),
        card("Jack", "Oscar", "Rose", &["Charlie", "Madeline"]),
        card("Hugo", "Unknown", "Unknown", &["Oliver", "Aurora"]),
        card("Rose", "Unknown", "Unknown", &["Oliver", "Aurora", "Jack"]),
        card("Isla", "Unknown", "Unknown", &["Luna", "Arlo"]),
        card("Oscar", "Unknown", "Unknown", &["Luna", "Jack", "Arlo"]),
    ]
}
