use galilean_orbits::config::moons::MoonCatalog;
use galilean_orbits::driver;
use galilean_orbits::plotting::SvgPresenter;
use log::{error, info};
use std::error::Error;
use std::process::ExitCode;

const OUTPUT_DIR: &str = "output";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let catalog = MoonCatalog::galilean();
    let mut presenter = SvgPresenter::new(OUTPUT_DIR);

    match driver::run(&catalog, &mut presenter) {
        Ok(count) => {
            info!(
                "Presented {} charts, {} files written to {}/",
                count,
                presenter.presented().len(),
                OUTPUT_DIR
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            let mut message = e.to_string();
            let mut cause = e.source();
            while let Some(inner) = cause {
                message.push_str(&format!(": {inner}"));
                cause = inner.source();
            }
            error!("Aborted at {}: {message}", e.moon());
            ExitCode::FAILURE
        }
    }
}
