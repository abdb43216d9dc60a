use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, Command,
};
use mernforge::options::Options;

// The CLI layer should only parse inputs and forward them to library code.
fn main() {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(Arg::new("name").help("Name of the project directory to create"))
        .arg(
            Arg::new("typescript")
                .long("typescript")
                .help("Use TypeScript")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("redux")
                .long("redux")
                .help("Include Redux Toolkit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("socketio")
                .long("socketio")
                .help("Include Socket.IO")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("docker")
                .long("docker")
                .help("Include Docker configuration")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut logger = env_logger::Builder::from_default_env();
    if matches.get_flag("verbose") {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    // Checked by hand instead of clap's `required` so a missing name exits
    // with code 1 before anything touches the filesystem.
    let Some(name) = matches.get_one::<String>("name") else {
        eprintln!("Please provide a project name");
        eprintln!(
            "Usage: {} <project-name> [--typescript] [--redux] [--socketio] [--docker]",
            crate_name!()
        );
        std::process::exit(1);
    };

    let options = Options {
        typescript: matches.get_flag("typescript"),
        redux: matches.get_flag("redux"),
        socketio: matches.get_flag("socketio"),
        docker: matches.get_flag("docker"),
    };

    let target_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(error) => {
            eprintln!("Unable to resolve the current directory: {error}");
            std::process::exit(1);
        }
    };

    if let Err(error) = mernforge::actions::create_project(name, &options, &target_dir) {
        eprintln!("{:?}", miette::Report::new(error));
        std::process::exit(1);
    }
}
