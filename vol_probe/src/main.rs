use std::process::ExitCode;

use config::Config;
use curvature_lib::{
    histogram::Histogram,
    volumetric::DerivativeOptions,
    CurvatureVolume, GradientVolume,
};

mod args;
mod config;
mod generators;
mod report;

use crate::{args::get_command, generators::generate_volume};

fn derivative_options(cfg: &Config) -> Result<DerivativeOptions, String> {
    let builder = DerivativeOptions::builder().interpolation(cfg.interpolation);
    let builder = match cfg.threads {
        Some(n) => builder.worker_count(n),
        None => builder,
    };
    builder.build().map_err(|e| e.to_string())
}

fn run(cfg: Config) -> Result<(), String> {
    let volume = generate_volume(&cfg)?;
    let options = derivative_options(&cfg)?;
    log::info!("Deriving with {} workers", options.workers());

    let gradients = GradientVolume::with_options(&volume, &options);
    let curvature =
        CurvatureVolume::from_gradients(&volume, &gradients, &options).map_err(|e| e.to_string())?;

    print!("{}", report::summary(&volume, &gradients, &curvature));
    print!("{}", report::probes(&cfg, &volume, &gradients, &curvature));

    if let Some(resolution) = cfg.histogram {
        let histogram =
            Histogram::from_volumes(&volume, &curvature, resolution).map_err(|e| e.to_string())?;
        print!("{}", report::histogram(&histogram));
    }

    Ok(())
}

pub fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = get_command().get_matches();

    let cfg = match Config::from_args(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!("{:?}", cfg);

    match run(cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
