//! Entry point for the uninstaller
use clap::Parser;
use discord_web::common::{install_logger, report_error, APP_NAME};
use discord_web::paths::InstallPaths;
use discord_web::uninstall::{uninstall, UninstallOptions};
use discord_web::Error;

#[derive(Parser, Debug)]
#[command(author, version, about = "Removes the Discord Web launcher and desktop entry")]
struct Args {
    /// Describe what is being done at each step
    #[arg(short, long)]
    debug: bool,
    /// Don't change anything, implies --debug
    #[arg(long)]
    dry_run: bool,
    /// Skip refreshing the desktop menu
    #[arg(long)]
    no_refresh: bool,
}

fn run(args: Args) -> Result<(), Error> {
    let paths = InstallPaths::from_env()?;
    let options = UninstallOptions {
        dry_run: args.dry_run,
        refresh_menu: !args.no_refresh,
    };
    uninstall(&paths, &options)?;
    println!("{} was uninstalled.", APP_NAME);
    Ok(())
}

fn main() {
    let args: Args = Args::parse();

    if let Err(e) = install_logger(args.debug || args.dry_run) {
        eprintln!("Unable to install logger: {:#}", e);
        std::process::exit(1);
    }
    if let Err(e) = run(args) {
        report_error(e);
    }
}
