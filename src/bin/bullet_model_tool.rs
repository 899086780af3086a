use bullet_chart::core::{CategoricalDataset, Viewport};
use bullet_chart::render::{NullRenderer, Renderer};
use bullet_chart::{BulletChartSettings, BulletModelBuilder, telemetry};
use std::fs;
use std::path::PathBuf;
use tracing::info;

const USAGE: &str = "usage: bullet_model_tool --input <dataset.json> [--settings <settings.json>] --width <px> --height <px> --output <model.json>";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    settings: Option<PathBuf>,
    output: PathBuf,
    viewport: Viewport,
}

fn main() {
    let _ = telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let raw = read_file(&args.input)?;
    let dataset = CategoricalDataset::from_json_str(&raw).map_err(|err| err.to_string())?;
    let settings = match &args.settings {
        Some(path) => {
            BulletChartSettings::from_json_str(&read_file(path)?).map_err(|err| err.to_string())?
        }
        None => BulletChartSettings::default(),
    };

    let model = BulletModelBuilder::default().build(&dataset, args.viewport, &settings);
    let payload = match &model {
        Some(model) => {
            NullRenderer::default()
                .render(model)
                .map_err(|err| err.to_string())?;
            info!(rows = model.row_count(), "writing bullet view model");
            model.to_json_contract_v1_pretty().map_err(|err| err.to_string())?
        }
        None => {
            info!("dataset has no value rows; writing null model");
            "null".to_owned()
        }
    };

    fs::write(&args.output, payload)
        .map_err(|err| format!("failed to write `{}`: {err}", args.output.display()))
}

fn read_file(path: &PathBuf) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn parse_pixels(flag: &str, value: Option<String>) -> Result<f64, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    value
        .parse()
        .map_err(|err| format!("invalid {flag} `{value}`: {err}"))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);

    let mut input = None::<PathBuf>;
    let mut settings = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut width = None::<f64>;
    let mut height = None::<f64>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--settings" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --settings".to_owned())?;
                settings = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--width" => width = Some(parse_pixels("--width", args.next())?),
            "--height" => height = Some(parse_pixels("--height", args.next())?),
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    let (Some(input), Some(output), Some(width), Some(height)) = (input, output, width, height)
    else {
        return Err(USAGE.to_owned());
    };

    let viewport = Viewport::new(width, height);
    viewport.validate().map_err(|err| err.to_string())?;

    Ok(CliArgs {
        input,
        settings,
        output,
        viewport,
    })
}
