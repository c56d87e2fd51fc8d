use std::path::Path;

use crate::config::RenderConfig;
use crate::render;

pub fn run(
    base: &str,
    def: &str,
    cfg: &RenderConfig,
    output: Option<&Path>,
) -> Result<(), String> {
    let (base, def) = super::parse_inputs(base, def)?;
    let dist = cfg.algorithm.build(base, def);
    let content = render::render(&dist, cfg)?;
    super::write_output(&content, output)
}
