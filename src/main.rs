use clap::Parser;
use color_eyre::eyre;

use crate::app::App;
use crate::config::Config;

pub mod api;
pub mod app;
pub mod config;
pub mod form;
pub mod logging;
pub mod widgets;

#[cfg(test)]
mod test_server;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    config::load_dotenv()?;

    let config = Config::parse();
    let _log_guard = logging::init(config.log_file.as_deref())?;

    let app = App::new(&config)?;

    let terminal = ratatui::init();
    let result = app.run(terminal).await;
    ratatui::restore();

    result
}
