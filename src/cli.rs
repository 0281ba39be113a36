//! Command line interface definitions

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "kswitch",
    version,
    about = "Interactive picker for kubectl contexts",
    long_about = "kswitch lists the contexts known to kubectl and activates the one you pick.\n\n\
                  Keys:\n  \
                  up/down, k/j       Move the highlight\n  \
                  left/right, h/l    Change page\n  \
                  /                  Filter by name\n  \
                  enter              Activate the highlighted context\n  \
                  q, esc, ctrl+c     Quit without changes"
)]
pub struct Cli {
    /// Enable verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}
