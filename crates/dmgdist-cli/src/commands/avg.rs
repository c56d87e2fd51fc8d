use colored::Colorize;
use dmgdist_core::apply_defense;

use crate::config::RenderConfig;
use crate::render::format_average;

pub fn run(base: &str, def: &str, cfg: &RenderConfig) -> Result<(), String> {
    let (base, def) = super::parse_inputs(base, def)?;
    let avg = apply_defense(base, def);
    println!("  {} {}", "average:".bold(), format_average(avg, cfg.digits));
    Ok(())
}
