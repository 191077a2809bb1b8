use crate::config::toml_config::PlanConfig;
use crate::domain::model::DisplayUnits;
use crate::utils::error::Result;
use crate::utils::validation::{parse_decimal, parse_optional_decimal, parse_weight_code};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "yarn-sub")]
#[command(about = "Work out how many skeins of a substitute yarn a pattern needs")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Print results as JSON")]
    pub json: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

// Numbers stay as text here so the input mask in `utils::validation` can
// reject anything that is not a plain non-negative decimal.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Skeins needed for a pattern yardage
    Skeins {
        #[arg(allow_negative_numbers = true)]
        pattern_yardage: String,
        #[arg(allow_negative_numbers = true)]
        skein_yardage: String,
        /// Lengths are in meters
        #[arg(long)]
        metric: bool,
    },
    /// Scale pattern yardage for a different stitch gauge
    Gauge {
        #[arg(allow_negative_numbers = true)]
        pattern_yardage: String,
        /// Pattern stitches per 4 inches
        #[arg(allow_negative_numbers = true)]
        pattern_gauge: String,
        /// Substitute stitches per 4 inches
        #[arg(allow_negative_numbers = true)]
        substitute_gauge: String,
        #[arg(long)]
        metric: bool,
    },
    /// Convert yards <-> meters or inches <-> cm
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: String,
        from: String,
        to: String,
    },
    /// Total cost for a number of skeins
    Cost {
        #[arg(allow_negative_numbers = true)]
        skeins: String,
        #[arg(allow_negative_numbers = true)]
        price: String,
    },
    /// Check whether two CYC weight categories are too far apart
    Warn {
        #[arg(allow_negative_numbers = true)]
        pattern_weight: String,
        #[arg(allow_negative_numbers = true)]
        substitute_weight: String,
    },
    /// Full substitution plan from flags and/or a TOML plan file
    Plan(PlanArgs),
    /// Print the CYC yarn weight reference
    Weights {
        #[arg(long)]
        metric: bool,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct PlanArgs {
    /// TOML plan file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub pattern_yardage: Option<String>,

    #[arg(long)]
    pub skein_yardage: Option<String>,

    /// CYC category 0-7 (default 3, DK)
    #[arg(long)]
    pub pattern_weight: Option<String>,

    /// CYC category 0-7 (default 3, DK)
    #[arg(long)]
    pub substitute_weight: Option<String>,

    #[arg(long)]
    pub pattern_gauge: Option<String>,

    #[arg(long)]
    pub substitute_gauge: Option<String>,

    /// Price per skein
    #[arg(long)]
    pub price: Option<String>,

    /// Lengths are in meters
    #[arg(long)]
    pub metric: bool,
}

impl PlanArgs {
    /// Loads the plan file (if any) and layers the command-line values on top.
    pub fn into_plan_config(self) -> Result<PlanConfig> {
        let mut config = match &self.config {
            Some(path) => PlanConfig::from_file(path)?,
            None => PlanConfig::default(),
        };

        if self.metric {
            config.display.units = DisplayUnits::Metric;
        }
        if let Some(text) = &self.pattern_yardage {
            config.pattern.yardage = Some(parse_decimal("pattern_yardage", text)?);
        }
        if let Some(text) = &self.skein_yardage {
            config.substitute.skein_yardage = Some(parse_decimal("skein_yardage", text)?);
        }
        if let Some(text) = &self.pattern_weight {
            config.pattern.weight = Some(parse_weight_code("pattern_weight", text)?.code());
        }
        if let Some(text) = &self.substitute_weight {
            config.substitute.weight = Some(parse_weight_code("substitute_weight", text)?.code());
        }
        if let Some(text) = &self.pattern_gauge {
            if let Some(gauge) = parse_optional_decimal("pattern_gauge", text)? {
                config.pattern.gauge = Some(gauge);
            }
        }
        if let Some(text) = &self.substitute_gauge {
            if let Some(gauge) = parse_optional_decimal("substitute_gauge", text)? {
                config.substitute.gauge = Some(gauge);
            }
        }
        if let Some(text) = &self.price {
            if let Some(price) = parse_optional_decimal("price", text)? {
                config.substitute.price_per_skein = Some(price);
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::PlanSource;
    use crate::utils::error::YarnError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_plan_subcommand() {
        let cli = CliConfig::parse_from([
            "yarn-sub",
            "plan",
            "--pattern-yardage",
            "1200",
            "--skein-yardage",
            "220",
            "--price",
            "9.50",
            "--json",
        ]);
        assert!(cli.json);

        let Command::Plan(args) = cli.command else {
            panic!("expected plan subcommand");
        };
        let config = args.into_plan_config().unwrap();
        let request = config.substitution_request().unwrap();
        assert_eq!(request.pattern_yardage, 1200.0);
        assert_eq!(request.skein_yardage, 220.0);
        assert_eq!(request.price_per_skein, Some(9.5));
    }

    #[test]
    fn test_flags_override_plan_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[pattern]\nyardage = 800\nweight = 1\n\n[substitute]\nskein_yardage = 200\n")
            .unwrap();

        let args = PlanArgs {
            config: Some(temp_file.path().to_path_buf()),
            skein_yardage: Some("400".to_string()),
            substitute_weight: Some("5".to_string()),
            ..PlanArgs::default()
        };
        let config = args.into_plan_config().unwrap();
        assert_eq!(config.pattern.yardage, Some(800.0));
        assert_eq!(config.substitute.skein_yardage, Some(400.0));
        assert_eq!(config.pattern.weight, Some(1));
        assert_eq!(config.substitute.weight, Some(5));
    }

    #[test]
    fn test_masked_flag_rejected() {
        let args = PlanArgs {
            pattern_yardage: Some("-1200".to_string()),
            ..PlanArgs::default()
        };
        assert!(matches!(
            args.into_plan_config(),
            Err(YarnError::InvalidFieldValue { .. })
        ));
    }
}
