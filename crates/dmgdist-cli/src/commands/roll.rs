use colored::Colorize;
use dmgdist_core::build_distribution;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn run(base: &str, def: &str, count: usize, seed: u64) -> Result<(), String> {
    let (base, def) = super::parse_inputs(base, def)?;
    let dist = build_distribution(base, def);

    let mut rng = StdRng::seed_from_u64(seed);
    let rolls = dist.sample_n(&mut rng, count);

    println!(
        "  {} {}",
        "Rolls".bold(),
        format!("({count} rolls, seed={seed})").dimmed()
    );
    if rolls.is_empty() {
        println!("  {}", "(no rolls)".dimmed());
        return Ok(());
    }

    let listed: Vec<String> = rolls.iter().map(u64::to_string).collect();
    println!("  {}", listed.join(", "));

    let mean = rolls.iter().sum::<u64>() as f64 / rolls.len() as f64;
    let lo = rolls.iter().min().copied().unwrap_or_default();
    let hi = rolls.iter().max().copied().unwrap_or_default();
    println!("  mean: {mean:.2}  range: {lo} - {hi}");
    Ok(())
}
