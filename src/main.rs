pub use error::Error;
mod client;
mod command;
mod conf;
mod editor;
mod error;
mod model;
mod report;
mod rest;
mod store;
use conf::Conf;
use std::env;
use tracing_subscriber::EnvFilter;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[actix_web::main]
async fn main() -> Result<()> {
    init_logging();

    let conf = Conf::from_env()?;

    let args: Vec<String> = env::args().collect();

    let command = match args.get(1) {
        Some(some) => some,
        None => Err(Error::CLI("No actions passed".into()))?,
    };

    match command.as_str() {
        "server" => command::server::run(&conf).await?,
        "show" => command::edit::show(&conf).await?,
        "report" => command::report::run(&conf, args.get(2)).await?,
        "add-row" => command::edit::add_row(&conf).await?,
        "delete-row" => command::edit::delete_row(&conf, &args[2..]).await?,
        "set-field" => command::edit::set_field(&conf, &args[2..]).await?,
        "set-header" => command::edit::set_header(&conf, &args[2..]).await?,
        first_arg => Err(Error::CLI(format!("Unknown command: {first_arg}")))?,
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if cfg!(debug_assertions) {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
