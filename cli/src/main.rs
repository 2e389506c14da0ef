//! eamctl - vSphere ESX Agent Manager command line

use clap::Parser;

use eam_cli::cli::Cli;
use eam_cli::logging;
use eam_cli::output::{OutputContext, json};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.debug);

    let (is_json, no_color, quiet) = (cli.json, cli.no_color, cli.quiet);
    if let Err(e) = cli.run().await {
        let message = format!("{e:#}");
        if is_json {
            match json::format_error(&message, json::error_code(&e)) {
                Ok(doc) => println!("{doc}"),
                Err(_) => eprintln!("Error: {message}"),
            }
        } else {
            OutputContext::new(no_color, quiet).error(&message);
        }
        std::process::exit(1);
    }
}
