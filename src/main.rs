use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use ideal_gas_calculator::{
    app::{self, AppError},
    config::{self, Config},
    i18n::{self, Translator},
    logging,
    quantity::Quantity,
    ui_cli::Console,
};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "ideal_gas_cli",
    version,
    about = "Ideal gas law calculator: solves PV = nRT for one unknown (atm, L, mol, K)."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Path to the TOML configuration file
    #[arg(long, global = true, value_name = "PATH", default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Language (auto, en, ko)
    #[arg(short = 'L', long, global = true, value_name = "CODE", default_value = "auto")]
    lang: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve once from command-line values and print the result.
    Solve(SolveArgs),
    /// Interactive menu (default).
    Interactive,
}

/// Known values may carry a unit suffix, e.g. "22.4 L" or "273K".
#[derive(Args, Debug)]
struct SolveArgs {
    /// Quantity to calculate: pressure, volume, moles or temperature
    #[arg(short, long, value_name = "QUANTITY")]
    target: Quantity,

    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    pressure: Option<String>,

    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    volume: Option<String>,

    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    moles: Option<String>,

    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    temperature: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::setup_logging(cli.verbose, cli.quiet) {
        eprintln!("{}", AppError::Logging(e));
    }

    let cfg = match app::load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", e.user_message(&Translator::default()));
            warn!("using default configuration");
            Config::default()
        }
    };
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    info!(language = %lang, config = %cli.config.display(), "starting");

    match try_run(cli.command, &cfg, &tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.user_message(&tr));
            ExitCode::FAILURE
        }
    }
}

fn try_run(command: Option<Commands>, cfg: &Config, tr: &Translator) -> Result<(), AppError> {
    match command {
        Some(Commands::Solve(args)) => {
            let inputs = [
                (Quantity::Pressure, args.pressure),
                (Quantity::Volume, args.volume),
                (Quantity::Moles, args.moles),
                (Quantity::Temperature, args.temperature),
            ];
            let result = app::run_solve(args.target, &inputs, cfg)?;
            println!("{result}");
            Ok(())
        }
        Some(Commands::Interactive) | None => app::run_interactive(&mut Console::stdio(), cfg, tr),
    }
}
