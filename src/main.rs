use clap::Parser;
use serde_json::json;
use yarn_sub::app::report::{render_json, render_text, render_weight_table, CROSS_WEIGHT_WARNING};
use yarn_sub::config::Command;
use yarn_sub::core::calculator;
use yarn_sub::utils::error::ErrorSeverity;
use yarn_sub::utils::logger;
use yarn_sub::utils::validation::{parse_decimal, parse_skein_count, parse_weight_code};
use yarn_sub::{convert_units, CliConfig, DisplayUnits, Result, SubstitutionPlanner};

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    match run(config) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            tracing::error!(
                "Calculation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("Error: {}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low | ErrorSeverity::High => 1,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}

fn run(config: CliConfig) -> Result<String> {
    let as_json = config.json;

    match config.command {
        Command::Skeins {
            pattern_yardage,
            skein_yardage,
            metric,
        } => {
            let units = DisplayUnits::from_metric_flag(metric);
            let pattern = units.to_yards(parse_decimal("pattern_yardage", &pattern_yardage)?)?;
            let skein = units.to_yards(parse_decimal("skein_yardage", &skein_yardage)?)?;

            let result = calculator::calculate_skeins(pattern, skein)?;
            let total = units.display_length(result.total_yardage)?;
            let surplus = units.display_length(result.surplus)?;
            let unit = units.length_unit();

            if as_json {
                return to_json(json!({
                    "units": unit,
                    "skeins": result.skeins,
                    "total_length": total,
                    "surplus": surplus,
                }));
            }
            Ok(format!(
                "Skeins needed: {}\nTotal {unit}: {:.1}\nSurplus {unit}: {:.1}\n",
                result.skeins, total, surplus
            ))
        }
        Command::Gauge {
            pattern_yardage,
            pattern_gauge,
            substitute_gauge,
            metric,
        } => {
            let units = DisplayUnits::from_metric_flag(metric);
            let pattern = units.to_yards(parse_decimal("pattern_yardage", &pattern_yardage)?)?;
            let pattern_gauge = parse_decimal("pattern_gauge", &pattern_gauge)?;
            let substitute_gauge = parse_decimal("substitute_gauge", &substitute_gauge)?;

            let adjusted = units.display_length(calculator::adjust_yardage_for_gauge(
                pattern,
                pattern_gauge,
                substitute_gauge,
            )?)?;
            let unit = units.length_unit();

            if as_json {
                return to_json(json!({ "units": unit, "adjusted_length": adjusted }));
            }
            Ok(format!("Adjusted pattern {}: {:.1}\n", unit, adjusted))
        }
        Command::Convert { value, from, to } => {
            let value = parse_decimal("value", &value)?;
            let converted = convert_units(value, &from, &to)?;

            if as_json {
                return to_json(json!({ "value": converted, "unit": to.to_lowercase() }));
            }
            Ok(format!("{} {}\n", converted, to.to_lowercase()))
        }
        Command::Cost { skeins, price } => {
            let skeins = parse_skein_count("skeins", &skeins)?;
            let price = parse_decimal("price", &price)?;
            let cost = calculator::calculate_cost(skeins, price)?;

            if as_json {
                return to_json(json!({ "cost": cost }));
            }
            Ok(format!("Estimated cost: ${:.2}\n", cost))
        }
        Command::Warn {
            pattern_weight,
            substitute_weight,
        } => {
            let pattern = parse_weight_code("pattern_weight", &pattern_weight)?;
            let substitute = parse_weight_code("substitute_weight", &substitute_weight)?;
            let warn =
                calculator::should_show_cross_weight_warning(pattern.code(), substitute.code());

            if as_json {
                return to_json(json!({
                    "pattern_weight": pattern,
                    "substitute_weight": substitute,
                    "cross_weight_warning": warn,
                }));
            }
            if warn {
                Ok(format!("{} -> {}: {}\n", pattern, substitute, CROSS_WEIGHT_WARNING))
            } else {
                Ok(format!("{} -> {}: weights are compatible\n", pattern, substitute))
            }
        }
        Command::Plan(args) => {
            let plan_config = args.into_plan_config()?;
            let planner = SubstitutionPlanner::new(plan_config);
            let report = planner.run()?;

            if as_json {
                render_json(&report, planner.display_units()).map(|s| s + "\n")
            } else {
                render_text(&report, planner.display_units())
            }
        }
        Command::Weights { metric } => {
            Ok(render_weight_table(DisplayUnits::from_metric_flag(metric)))
        }
    }
}

fn to_json(value: serde_json::Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(&value)? + "\n")
}
