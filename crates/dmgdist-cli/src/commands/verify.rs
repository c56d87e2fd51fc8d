use std::thread;

use colored::Colorize;
use dmgdist_core::Distribution;
use dmgdist_core::distribution::{fast, reference};

pub fn run(base: &str, def: &str) -> Result<(), String> {
    let (base, def) = super::parse_inputs(base, def)?;

    let (slow, quick) = thread::scope(|s| {
        let slow = s.spawn(|| reference::build(base, def));
        let quick = fast::build(base, def);
        (slow.join(), quick)
    });
    let slow = slow.map_err(|_| "reference builder panicked".to_string())?;

    if let Some(diff) = first_difference(&slow, &quick) {
        return Err(format!("reference and fast disagree: {diff}"));
    }

    println!(
        "  {} reference and fast agree ({} rows, {} outcomes)",
        "OK:".green().bold(),
        quick.rows.len(),
        quick.total_outcomes
    );
    Ok(())
}

/// Describe the first field where two distributions differ.
fn first_difference(a: &Distribution, b: &Distribution) -> Option<String> {
    if a.avg != b.avg {
        return Some(format!("avg {} vs {}", a.avg, b.avg));
    }
    if a.width != b.width {
        return Some(format!("width {} vs {}", a.width, b.width));
    }
    if a.total_outcomes != b.total_outcomes {
        return Some(format!(
            "total outcomes {} vs {}",
            a.total_outcomes, b.total_outcomes
        ));
    }
    if let Some((i, (ra, rb))) = a
        .rows
        .iter()
        .zip(&b.rows)
        .enumerate()
        .find(|(_, (ra, rb))| ra != rb)
    {
        return Some(format!(
            "row {i}: damage {} x{} vs damage {} x{}",
            ra.damage, ra.count, rb.damage, rb.count
        ));
    }
    if a.rows.len() != b.rows.len() {
        return Some(format!("{} rows vs {} rows", a.rows.len(), b.rows.len()));
    }
    None
}
