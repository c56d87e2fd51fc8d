pub mod avg;
pub mod calc;
pub mod roll;
pub mod verify;

use std::path::Path;

use dmgdist_core::parse_request;

/// Validate raw base and defense text before anything reaches the engine.
fn parse_inputs(base: &str, def: &str) -> Result<(u32, u32), String> {
    parse_request(base, def).map_err(|e| e.to_string())
}

/// Write rendered output to a file, or to stdout if no path is given.
fn write_output(content: &str, output: Option<&Path>) -> Result<(), String> {
    if let Some(path) = output {
        std::fs::write(path, content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Wrote {}", path.display());
    } else {
        print!("{content}");
    }
    Ok(())
}
