//! Output configuration.

use dmgdist_core::Algorithm;

/// Environment variable holding the default number of decimal places.
pub const DIGITS_ENV: &str = "DMGDIST_DIGITS";

/// Largest accepted number of decimal places.
pub const MAX_DIGITS: usize = 12;

/// How a distribution is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// A terminal table with a summary header.
    #[default]
    Table,
    /// Pretty-printed JSON of the whole distribution.
    Json,
    /// A Markdown document with a summary list and a table.
    Markdown,
}

impl OutputFormat {
    /// Parse a format name like "table", "json" or "md".
    pub fn from_str_tag(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            _ => None,
        }
    }
}

/// Settings shared by the rendering commands.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Decimal places for the average and for percentages.
    pub digits: usize,
    /// Output format.
    pub format: OutputFormat,
    /// Builder used to compute the distribution.
    pub algorithm: Algorithm,
    /// Whether to style labels for a terminal.
    pub color: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            digits: 4,
            format: OutputFormat::Table,
            algorithm: Algorithm::Fast,
            color: true,
        }
    }
}

impl RenderConfig {
    /// Defaults, with the digit count taken from `DMGDIST_DIGITS` if set.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(DIGITS_ENV).ok().as_deref())
    }

    /// Defaults, with the digit count taken from `value` if it parses.
    pub fn from_env_value(value: Option<&str>) -> Self {
        let cfg = Self::default();
        match value.and_then(|v| v.trim().parse::<usize>().ok()) {
            Some(digits) => cfg.with_digits(digits),
            None => {
                if let Some(v) = value {
                    tracing::warn!(value = v, "ignoring unparsable {DIGITS_ENV}");
                }
                cfg
            }
        }
    }

    /// Set the number of decimal places (clamped to 0-12).
    pub fn with_digits(mut self, digits: usize) -> Self {
        self.digits = digits.min(MAX_DIGITS);
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the builder.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Enable or disable terminal styling.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Layer command-line options over this configuration.
    pub fn apply_cli(
        self,
        algorithm: Option<&str>,
        format: Option<&str>,
        digits: Option<usize>,
    ) -> Result<Self, String> {
        let mut cfg = self;
        if let Some(name) = algorithm {
            let algorithm = Algorithm::from_str_tag(name).ok_or_else(|| {
                format!("unsupported algorithm: \"{name}\". Use: fast, reference")
            })?;
            cfg = cfg.with_algorithm(algorithm);
        }
        if let Some(name) = format {
            let format = OutputFormat::from_str_tag(name).ok_or_else(|| {
                format!("unsupported format: \"{name}\". Use: table, json, markdown")
            })?;
            cfg = cfg.with_format(format);
        }
        if let Some(digits) = digits {
            cfg = cfg.with_digits(digits);
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = RenderConfig::default();
        assert_eq!(cfg.digits, 4);
        assert_eq!(cfg.format, OutputFormat::Table);
        assert_eq!(cfg.algorithm, Algorithm::Fast);
        assert!(cfg.color);
    }

    #[test]
    fn builder_methods() {
        let cfg = RenderConfig::default()
            .with_digits(2)
            .with_format(OutputFormat::Json)
            .with_algorithm(Algorithm::Reference)
            .with_color(false);
        assert_eq!(cfg.digits, 2);
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(cfg.algorithm, Algorithm::Reference);
        assert!(!cfg.color);
    }

    #[test]
    fn digits_clamped() {
        assert_eq!(RenderConfig::default().with_digits(40).digits, MAX_DIGITS);
    }

    #[test]
    fn env_value() {
        assert_eq!(RenderConfig::from_env_value(Some("2")).digits, 2);
        assert_eq!(RenderConfig::from_env_value(Some(" 6 ")).digits, 6);
        assert_eq!(RenderConfig::from_env_value(Some("lots")).digits, 4);
        assert_eq!(RenderConfig::from_env_value(None).digits, 4);
    }

    #[test]
    fn cli_overrides() {
        let cfg = RenderConfig::from_env_value(Some("2"))
            .apply_cli(Some("reference"), Some("md"), Some(3))
            .unwrap();
        assert_eq!(cfg.algorithm, Algorithm::Reference);
        assert_eq!(cfg.format, OutputFormat::Markdown);
        assert_eq!(cfg.digits, 3);

        let cfg = RenderConfig::from_env_value(Some("2"))
            .apply_cli(None, None, None)
            .unwrap();
        assert_eq!(cfg.digits, 2);
    }

    #[test]
    fn cli_rejects_unknown_names() {
        let err = RenderConfig::default()
            .apply_cli(Some("quick"), None, None)
            .unwrap_err();
        assert!(err.contains("unsupported algorithm"));
        let err = RenderConfig::default()
            .apply_cli(None, Some("xml"), None)
            .unwrap_err();
        assert!(err.contains("unsupported format"));
    }

    #[test]
    fn format_parse() {
        assert_eq!(OutputFormat::from_str_tag("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str_tag("markdown"), Some(OutputFormat::Markdown));
        assert_eq!(OutputFormat::from_str_tag("html"), None);
    }
}
