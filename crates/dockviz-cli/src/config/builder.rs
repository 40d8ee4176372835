use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::{CanvasArgs, TableArgs};
use crate::error::{CliError, Result};
use crate::utils::parser;
use dockviz::core::io::columns::TableLayout;
use dockviz::workflows::config::PlotConfigBuilder;
use std::path::Path;
use std::str::FromStr;

/// Values given directly on the command line for one invocation.
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub table: Option<&'a TableArgs>,
    pub threshold: Option<f64>,
    pub bins: Option<usize>,
    pub top_n: Option<usize>,
    pub canvas: CanvasArgs,
}

pub fn build_config(
    input: &Path,
    output: Option<&Path>,
    overrides: &CliOverrides<'_>,
) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();
    let table_args = overrides.table.cloned().unwrap_or_default();

    let file_config = if let Some(config_path) = &table_args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let file_config = apply_set_values(file_config, &table_args.set_values)?;

    let table_file = file_config.table.unwrap_or_default();
    let analysis_file = file_config.analysis.unwrap_or_default();
    let chart_file = file_config.chart.unwrap_or_default();

    let threshold = overrides
        .threshold
        .or(analysis_file.threshold)
        .unwrap_or(defaults.threshold);

    let delimiter = match table_args.delimiter.or(table_file.delimiter) {
        Some(raw) => {
            parser::parse_delimiter(&raw).map_err(|e| CliError::Argument(e.to_string()))?
        }
        None => defaults.delimiter,
    };

    let layout = TableLayout {
        ligand_column: table_args.ligand_column.or(table_file.ligand_column),
        mode_column: table_args.mode_column.or(table_file.mode_column),
        affinity_column: table_args.affinity_column.or(table_file.affinity_column),
        delimiter,
    };

    let plot_config = PlotConfigBuilder::new()
        .threshold(threshold)
        .layout(layout)
        .bins(overrides.bins.or(chart_file.bins).unwrap_or(defaults.bins))
        .width(
            overrides
                .canvas
                .width
                .or(chart_file.width)
                .unwrap_or(defaults.width),
        )
        .height(
            overrides
                .canvas
                .height
                .or(chart_file.height)
                .unwrap_or(defaults.height),
        )
        .top_n(overrides.top_n.or(chart_file.top_n).unwrap_or(defaults.top_n))
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        input_path: input.to_path_buf(),
        output_path: output.map(Path::to_path_buf),
        plot_config,
    })
}

fn parse_number<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) =
            parser::parse_set_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "analysis.threshold" => {
                config
                    .analysis
                    .get_or_insert_with(Default::default)
                    .threshold = Some(parse_number(key, value, "float")?);
            }
            "chart.bins" => {
                config.chart.get_or_insert_with(Default::default).bins =
                    Some(parse_number(key, value, "integer")?);
            }
            "chart.width" => {
                config.chart.get_or_insert_with(Default::default).width =
                    Some(parse_number(key, value, "integer")?);
            }
            "chart.height" => {
                config.chart.get_or_insert_with(Default::default).height =
                    Some(parse_number(key, value, "integer")?);
            }
            "chart.top-n" => {
                config.chart.get_or_insert_with(Default::default).top_n =
                    Some(parse_number(key, value, "integer")?);
            }
            "table.ligand-column" => {
                config
                    .table
                    .get_or_insert_with(Default::default)
                    .ligand_column = Some(value.to_string());
            }
            "table.mode-column" => {
                config.table.get_or_insert_with(Default::default).mode_column =
                    Some(value.to_string());
            }
            "table.affinity-column" => {
                config
                    .table
                    .get_or_insert_with(Default::default)
                    .affinity_column = Some(value.to_string());
            }
            "table.delimiter" => {
                config.table.get_or_insert_with(Default::default).delimiter =
                    Some(value.to_string());
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dockviz::workflows::config::ChartConfig;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("dockviz.toml");
        fs::write(&path, content).unwrap();
        path
    }

    fn build(overrides: &CliOverrides<'_>) -> Result<AppConfig> {
        build_config(Path::new("in.csv"), Some(Path::new("out.svg")), overrides)
    }

    #[test]
    fn defaults_apply_when_nothing_is_given() {
        let app = build(&CliOverrides::default()).unwrap();

        assert_eq!(app.input_path, PathBuf::from("in.csv"));
        assert_eq!(app.output_path, Some(PathBuf::from("out.svg")));
        let config = app.plot_config;
        assert_eq!(config.analysis.threshold.value(), -8.0);
        assert_eq!(config.analysis.layout, TableLayout::default());
        assert_eq!(config.chart, ChartConfig::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
            [table]
            affinity-column = "Score"
            delimiter = ";"
            [analysis]
            threshold = -7.0
            [chart]
            bins = 12
            "#,
        );
        let table = TableArgs {
            config: Some(path),
            ..Default::default()
        };

        let config = build(&CliOverrides {
            table: Some(&table),
            ..Default::default()
        })
        .unwrap()
        .plot_config;

        assert_eq!(config.analysis.threshold.value(), -7.0);
        assert_eq!(config.analysis.layout.affinity_column.as_deref(), Some("Score"));
        assert_eq!(config.analysis.layout.delimiter, b';');
        assert_eq!(config.chart.bins, 12);
        assert_eq!(config.chart.top_n, 20);
    }

    #[test]
    fn set_values_override_file_and_cli_overrides_both() {
        let dir = tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
            [analysis]
            threshold = -7.0
            [chart]
            bins = 12
            top-n = 5
            "#,
        );
        let table = TableArgs {
            config: Some(path),
            ligand_column: Some("Compound".to_string()),
            set_values: vec![
                "analysis.threshold=-9.5".to_string(),
                "chart.bins=40".to_string(),
                "chart.width=800".to_string(),
                "table.ligand-column=Name".to_string(),
                "table.delimiter=tab".to_string(),
            ],
            ..Default::default()
        };

        let config = build(&CliOverrides {
            table: Some(&table),
            bins: Some(25),
            canvas: CanvasArgs {
                width: None,
                height: Some(700),
            },
            ..Default::default()
        })
        .unwrap()
        .plot_config;

        assert_eq!(config.analysis.threshold.value(), -9.5);
        assert_eq!(config.chart.bins, 25);
        assert_eq!(config.chart.width, 800);
        assert_eq!(config.chart.height, 700);
        assert_eq!(config.chart.top_n, 5);
        assert_eq!(config.analysis.layout.ligand_column.as_deref(), Some("Compound"));
        assert_eq!(config.analysis.layout.delimiter, b'\t');
    }

    #[test]
    fn positional_threshold_wins() {
        let table = TableArgs {
            set_values: vec!["analysis.threshold=-9.5".to_string()],
            ..Default::default()
        };
        let config = build(&CliOverrides {
            table: Some(&table),
            threshold: Some(-6.0),
            ..Default::default()
        })
        .unwrap()
        .plot_config;
        assert_eq!(config.analysis.threshold.value(), -6.0);
    }

    #[test]
    fn unknown_set_key_is_rejected() {
        let table = TableArgs {
            set_values: vec!["chart.colour=red".to_string()],
            ..Default::default()
        };
        let result = build(&CliOverrides {
            table: Some(&table),
            ..Default::default()
        });
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("chart.colour")));
    }

    #[test]
    fn malformed_set_value_is_rejected() {
        for pair in ["chart.bins=many", "analysis.threshold", "chart.width=-3"] {
            let table = TableArgs {
                set_values: vec![pair.to_string()],
                ..Default::default()
            };
            let result = build(&CliOverrides {
                table: Some(&table),
                ..Default::default()
            });
            assert!(
                matches!(result, Err(CliError::Config(_))),
                "{pair} should be rejected"
            );
        }
    }

    #[test]
    fn invalid_delimiter_is_an_argument_error() {
        let table = TableArgs {
            delimiter: Some("::".to_string()),
            ..Default::default()
        };
        let result = build(&CliOverrides {
            table: Some(&table),
            ..Default::default()
        });
        assert!(matches!(result, Err(CliError::Argument(_))));
    }

    #[test]
    fn zero_bins_is_a_config_error() {
        let result = build(&CliOverrides {
            bins: Some(0),
            ..Default::default()
        });
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("bins")));
    }

    #[test]
    fn non_finite_threshold_is_a_config_error() {
        let result = build(&CliOverrides {
            threshold: Some(f64::INFINITY),
            ..Default::default()
        });
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
