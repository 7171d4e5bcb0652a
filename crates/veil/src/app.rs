use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("veil")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Hide and show the mouse cursor, even from a background process")
        .long_about(
            "veil hides the system mouse cursor on the primary display. On macOS it first \
             marks its window-server connection so the hide takes effect while another \
             application is frontmost. The OS restores the cursor when the process exits, \
             so use `veil hold` to keep it hidden for a while.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("backend")
                .long("backend")
                .short('b')
                .help("Cursor backend to use (overrides config)")
                .value_parser(["skylight", "public", "none"])
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("hide").about("Hide the cursor on the primary display"))
        .subcommand(Command::new("show").about("Show the cursor on the primary display"))
        .subcommand(
            Command::new("hold")
                .about("Hide the cursor, wait, then show it again")
                .arg(
                    Arg::new("ms")
                        .long("ms")
                        .help("How long to keep the cursor hidden, in milliseconds (overrides config)")
                        .value_parser(clap::value_parser!(u64).range(1..)),
                ),
        )
        .subcommand(
            Command::new("patch")
                .about("Allow this process to hide the cursor while in the background"),
        )
        .subcommand(
            Command::new("backends").about("List cursor backends").arg(
                Arg::new("json")
                    .long("json")
                    .help("Output in JSON format")
                    .action(ArgAction::SetTrue),
            ),
        )
}
