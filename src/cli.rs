//! Command-line argument handling for the `pathease` binary.

use anyhow::{bail, Context};
use pathease_core::{ManipulationParameters, PathBuilder, PARAMETER_NAMES};
use pathease_gcode::ProgramProcessor;
use std::path::PathBuf;
use tracing::info;

/// Usage text printed by `--help`
pub const USAGE: &str = "\
Usage: pathease <INPUT> <OUTPUT> [OPTIONS]

Eases every drawing move of a pen/brush G-code program.

Options:
  --params <FILE>            Load parameters from a .json or .toml file
  --<PARAMETER> <VALUE>      Override one parameter, e.g. --start-shift -0.5
  --cull-tolerance <VALUE>   Treat vertices closer than VALUE as duplicates
  -h, --help                 Print this help
  -V, --version              Print version and build date

Parameters:
  start-shift, end-shift, start-extend, end-extend,
  start-extend-height, end-extend-height,
  start-pushthrough-inset, end-pushthrough-inset,
  start-pushthrough-z, end-pushthrough-z
";

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Help,
    Version,
    Run(CliArgs),
}

/// Arguments of a processing run
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub params_file: Option<PathBuf>,
    /// Parameter overrides in command-line order
    pub overrides: Vec<(String, f64)>,
    pub cull_tolerance: f64,
}

impl CliCommand {
    /// Parse the arguments following the program name
    pub fn parse<I, S>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let mut positional = Vec::new();
        let mut params_file = None;
        let mut overrides = Vec::new();
        let mut cull_tolerance = 0.0;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Self::Help),
                "-V" | "--version" => return Ok(Self::Version),
                _ => {}
            }

            let Some(flag) = arg.strip_prefix("--") else {
                positional.push(arg);
                continue;
            };

            let (name, inline_value) = match flag.split_once('=') {
                Some((name, value)) => (name.to_string(), Some(value.to_string())),
                None => (flag.to_string(), None),
            };
            // Values are taken verbatim so negative numbers are not read as flags.
            let value = match inline_value.or_else(|| args.next()) {
                Some(value) => value,
                None => bail!("missing value for --{}", name),
            };

            match name.as_str() {
                "params" => params_file = Some(PathBuf::from(value)),
                "cull-tolerance" | "cull_tolerance" => {
                    cull_tolerance = parse_number(&name, &value)?;
                }
                _ => {
                    let key = name.replace('-', "_");
                    if !PARAMETER_NAMES.contains(&key.as_str()) {
                        bail!("unknown option --{}", name);
                    }
                    overrides.push((key, parse_number(&name, &value)?));
                }
            }
        }

        let mut positional = positional.into_iter();
        let (Some(input), Some(output), None) =
            (positional.next(), positional.next(), positional.next())
        else {
            bail!("expected exactly two paths: <INPUT> <OUTPUT>");
        };

        Ok(Self::Run(CliArgs {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            params_file,
            overrides,
            cull_tolerance,
        }))
    }
}

fn parse_number(name: &str, value: &str) -> anyhow::Result<f64> {
    value
        .parse()
        .with_context(|| format!("invalid number for --{}: {}", name, value))
}

/// Resolve parameters: defaults, then the parameter file, then overrides
pub fn resolve_parameters(args: &CliArgs) -> anyhow::Result<ManipulationParameters> {
    let mut params = match &args.params_file {
        Some(path) => ManipulationParameters::load_from_file(path)
            .with_context(|| format!("failed to load parameters from {}", path.display()))?,
        None => ManipulationParameters::default(),
    };

    for (name, value) in &args.overrides {
        params.set(name, *value)?;
    }
    params.validate()?;

    Ok(params)
}

/// Process the input program into the output file
pub fn run(args: &CliArgs) -> anyhow::Result<()> {
    let params = resolve_parameters(args)?;
    for (name, value) in params.entries() {
        info!(parameter = name, value, "Manipulation parameter");
    }

    let builder = PathBuilder::new(params).with_cull_tolerance(args.cull_tolerance);
    let processed = ProgramProcessor::with_builder(builder)
        .process_file(&args.input, &args.output)
        .with_context(|| format!("failed to process {}", args.input.display()))?;

    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        moves = processed.moves_manipulated,
        "Done"
    );
    Ok(())
}
