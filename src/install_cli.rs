//! Entry point for the installer
use clap::Parser;
use discord_web::channel::ChannelSelection;
use discord_web::common::{install_logger, report_error, APP_NAME, DEFAULT_APP_URL};
use discord_web::detect::PathSearch;
use discord_web::install::{install, InstallOptions};
use discord_web::paths::InstallPaths;
use discord_web::templates::parse_app_url;
use discord_web::Error;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Chrome release channel to use, 'auto' picks the most stable one installed
    #[arg(short = 'c', long, value_enum, default_value_t = ChannelSelection::Auto)]
    chrome_release_channel: ChannelSelection,
    /// Page to open in the app window
    #[arg(long, env = "DISCORD_WEB_URL", default_value = DEFAULT_APP_URL)]
    url: String,
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
    let options = InstallOptions {
        channel: args.chrome_release_channel,
        url: parse_app_url(&args.url)?,
        dry_run: args.dry_run,
        refresh_menu: !args.no_refresh,
    };
    let installation = install(&paths, &PathSearch::from_env(), &options)?;
    println!(
        "{} ({}) was installed.",
        APP_NAME,
        installation.channel.binary_name()
    );
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
