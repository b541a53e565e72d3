use clap::Parser;
use todos::cli::{handle_add, handle_delete, handle_list, Cli, Commands};
use todos::logging::init_logging;
use todos::Config;

fn main() {
    let cli = Cli::parse();
    let config = Config::from_options(cli.data_dir, cli.log_level);
    init_logging(&config.log_level);

    let result = match cli.command {
        Commands::List { category, json } => handle_list(&config, category, json),
        Commands::Add {
            text,
            category,
            json,
        } => handle_add(&config, text, category, json),
        Commands::Delete { id, force } => handle_delete(&config, id, force),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
