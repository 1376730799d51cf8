use escape_time_explorer::RunCliCommand;
use escape_time_explorer::input::cli::{build_command, cli_options_from_matches, init_logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = build_command().get_matches();
    let options = cli_options_from_matches(&matches)?;

    init_logging(&options.verbosity);
    RunCliCommand::new(options).execute()?;

    Ok(())
}
