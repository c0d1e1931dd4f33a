use pathease::cli::{self, CliCommand};
use pathease::{init_logging, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    match CliCommand::parse(std::env::args().skip(1))? {
        CliCommand::Help => print!("{}", cli::USAGE),
        CliCommand::Version => println!("pathease {} (built {})", VERSION, BUILD_DATE),
        CliCommand::Run(args) => {
            init_logging()?;
            cli::run(&args)?;
        }
    }

    Ok(())
}
