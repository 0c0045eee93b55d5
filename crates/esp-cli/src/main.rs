use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

use esp::config::Operation;
use esp_cli::eval::{load_eval_config, run_eval, run_repeat};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("ESP_LOG", "error,esp=info"))
        .init();

    let matches = Command::new("esp")
        .version(clap::crate_version!())
        .author("Nathan Alday <n.c.alday@gmail.com>")
        .about("ESP - A modeling and simulation package")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("eval")
                .about("Evaluate a vector expression described by a JSON configuration")
                .arg(
                    Arg::new("config")
                        .help("Path to the JSON expression configuration")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("operation")
                        .short('o')
                        .long("operation")
                        .help("Override the operation from the JSON config.")
                        .value_parser(["add", "subtract", "multiply", "norm"])
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("reflected")
                        .long("reflected")
                        .help("Swap operands so the right-hand side comes first.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("repeat")
                .about("Build a vector by repeating one value")
                .arg(
                    Arg::new("value")
                        .help("Value stored in every slot")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("length")
                        .help("Number of elements")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Written by {author-with-newline}Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("eval", sub_m)) => handle_eval(sub_m),
        Some(("repeat", sub_m)) => handle_repeat(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_eval(matches: &ArgMatches) -> Result<()> {
    let config_path: &PathBuf = matches
        .get_one("config")
        .expect("config is a required argument");
    log::info!("[ESP::Eval] Evaluating config: {:?}", config_path);

    let mut config = load_eval_config(config_path)?;
    if let Some(operation) = matches.get_one::<String>("operation") {
        config.operation = Operation::from_str(operation).map_err(anyhow::Error::msg)?;
    }
    if matches.get_flag("reflected") {
        config.reflected = true;
    }

    match run_eval(&config) {
        Ok(rendered) => {
            println!("{}", rendered);
            Ok(())
        }
        Err(e) => {
            log::error!("Evaluation failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn handle_repeat(matches: &ArgMatches) -> Result<()> {
    let value: f64 = *matches
        .get_one("value")
        .expect("value is a required argument");
    let length: usize = *matches
        .get_one("length")
        .expect("length is a required argument");

    match run_repeat(value, length) {
        Ok(rendered) => {
            println!("{}", rendered);
            Ok(())
        }
        Err(e) => {
            log::error!("Repeat failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
