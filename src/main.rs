use anyhow::Result;
use clap::Parser;
use daily_tools::cli::Args;
use daily_tools::config::Config;
use daily_tools::constants::ERROR_INPUT_REQUIRED;
use daily_tools::logger;
use daily_tools::menu::Menu;
use daily_tools::tools::{DateTimeConverter, FormatSet};

fn main() -> Result<()> {
    let args = Args::parse();

    if args.generate_config {
        let path = match &args.config {
            Some(path) => path.clone(),
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    logger::init(&config.logging)?;

    let Some(action) = args.action else {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        return Menu::new(stdin.lock(), stdout.lock(), &config.menu).run();
    };

    let converter = DateTimeConverter::new(FormatSet::Standard);
    match action.output(args.input.as_deref(), &converter) {
        Some(output) => println!("{}", output),
        None => {
            eprintln!("{}", ERROR_INPUT_REQUIRED);
            std::process::exit(1);
        }
    }

    Ok(())
}
