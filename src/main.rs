use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_parser, Arg, ArgAction,
    ArgMatches, Command,
};
use std::path::PathBuf;
use storefront_scaffold::{api, ScaffoldOptions};

fn cli() -> Command {
    Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("root")
                .help("The directory the project is written into")
                .value_parser(value_parser!(PathBuf))
                .default_value("."),
        )
        .arg(
            Arg::new("blueprint")
                .short('b')
                .long("blueprint")
                .value_name("FILE")
                .help("TOML blueprint to write instead of the built-in storefront")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("Print the tree that would be written and exit")
                .action(ArgAction::SetTrue)
                .conflicts_with("interactive"),
        )
        .arg(
            Arg::new("interactive")
                .short('i')
                .long("interactive")
                .help("Preview the tree and ask before writing")
                .action(ArgAction::SetTrue),
        )
}

fn init_logging(is_verbose: bool) {
    let level = if is_verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn options_from(matches: &ArgMatches) -> ScaffoldOptions {
    ScaffoldOptions {
        root: matches
            .get_one::<PathBuf>("root")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(".")),
        blueprint: matches.get_one::<PathBuf>("blueprint").cloned(),
        dry_run: matches.get_flag("dry-run"),
        interactive: matches.get_flag("interactive"),
    }
}

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = cli().get_matches();

    init_logging(matches.get_flag("verbose"));

    api::scaffold(&options_from(&matches))?;

    Ok(())
}
