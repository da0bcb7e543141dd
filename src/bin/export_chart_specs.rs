use std::fs;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;
use survey_charts::DashboardConfig;
use survey_charts::charts::{ChartId, catalog};
use survey_charts::spec::ChartSpec;

const USAGE: &str = concat!(
    "usage: export_chart_specs --width <px> [--chart <id>] ",
    "[--config <path>] [--output <path>]"
);

#[derive(Debug)]
struct CliArgs {
    width: f64,
    chart: Option<ChartId>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ExportedChart {
    element_id: String,
    actions: bool,
    spec: ChartSpec,
}

fn main() {
    let _ = survey_charts::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            DashboardConfig::from_json_compat_str(&raw).map_err(|err| err.to_string())?
        }
        None => DashboardConfig::default(),
    };

    let charts = catalog(&config.catalog_options()).map_err(|err| err.to_string())?;
    let mut exported = IndexMap::new();
    for chart in charts
        .iter()
        .filter(|chart| args.chart.is_none_or(|id| id == chart.id))
    {
        let spec = chart
            .resolve(Some(args.width))
            .map_err(|err| format!("chart `{}`: {err}", chart.id))?;
        exported.insert(
            chart.id.as_str(),
            ExportedChart {
                element_id: chart.element_id.clone(),
                actions: chart.embed.actions,
                spec,
            },
        );
    }

    let json = serde_json::to_string_pretty(&exported)
        .map_err(|err| format!("failed to serialize specs: {err}"))?;
    match &args.output {
        Some(path) => fs::write(path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut width = None::<f64>;
    let mut chart = None::<ChartId>;
    let mut config = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--width" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --width".to_owned())?;
                let parsed = value
                    .parse::<f64>()
                    .map_err(|err| format!("invalid --width `{value}`: {err}"))?;
                width = Some(parsed);
            }
            "--chart" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --chart".to_owned())?;
                chart = Some(value.parse::<ChartId>().map_err(|err| err.to_string())?);
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    let width = width.ok_or_else(|| USAGE.to_owned())?;
    Ok(CliArgs {
        width,
        chart,
        config,
        output,
    })
}
