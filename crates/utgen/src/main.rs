use crate::prelude::*;
use clap::Parser;

mod generate;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Generate JUnit test stubs for the annotated functions of a Kotlin source file"
)]
pub struct App {
    #[clap(flatten)]
    pub options: generate::GenerateOptions,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "UTGEN_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

fn main() -> Result<()> {
    let app = App::parse();

    let default_filter = if app.global.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    color_eyre::install()?;

    generate::run(app.options, app.global).map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
