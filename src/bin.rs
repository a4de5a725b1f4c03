use anyhow::{anyhow, Result};
use clap::{App, Arg};
use csvcloak::{
    anonymization_report, apply_differential_privacy, apply_k_anonymity, load_config, load_dataset,
    render_report, save_dataset, ColumnConfiguration, Strategy,
};
use std::path::Path;
use std::str::FromStr;
use tracing::{subscriber::set_global_default, Level};

fn main() -> Result<()> {
    let matches = App::new("csvcloak")
        .version("0.1.0")
        .about("An anonymizing csv toolkit")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .takes_value(true)
                .default_value("./csvcloak.toml")
                .help("Path to the config file to use"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .takes_value(true)
                .default_value("INFO")
                .help("Sets the level of verbosity"),
        )
        .arg(Arg::new("dataset").help("Path to the csv file to anonymize"))
        .get_matches();

    let tracing_level = Level::from_str(
        matches
            .value_of("verbosity")
            .expect("Missing value for 'verbosity' argument"),
    )?;

    let collector = tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .finish();

    set_global_default(collector)?;

    let config_file_path = Path::new(
        matches
            .value_of("config")
            .expect("Missing value for 'config' argument"),
    );

    let config_file_path = std::env::current_dir()?.join(config_file_path);
    let config = load_config(&config_file_path)?;

    let input = matches
        .value_of("dataset")
        .map(str::to_string)
        .or(config.input)
        .ok_or_else(|| anyhow!("no input dataset given on the command line or in the config"))?;

    let mut numeric_columns = vec![];
    let mut quasi_identifier_columns = vec![];
    for column in config.columns {
        match column {
            ColumnConfiguration::Numeric { name } => numeric_columns.push(name),
            ColumnConfiguration::QuasiIdentifier { name } => quasi_identifier_columns.push(name),
        }
    }

    let original = load_dataset(Path::new(&input))?;
    let mut rng = rand::thread_rng();

    let mut anonymized = original.clone();
    if !numeric_columns.is_empty() {
        anonymized =
            apply_differential_privacy(&anonymized, &numeric_columns, config.epsilon, &mut rng)?;
    }
    if !quasi_identifier_columns.is_empty() {
        let strategy = Strategy::from_str(&config.strategy)?;
        anonymized = apply_k_anonymity(
            &anonymized,
            &quasi_identifier_columns,
            config.k,
            strategy,
            &mut rng,
        )?;
    }

    let report = anonymization_report(&original, &anonymized);
    println!("\nAnonymization Report:");
    print!("{}", render_report(&report));

    save_dataset(&anonymized, Path::new(&config.output))?;

    Ok(())
}
