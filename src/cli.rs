use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "fixitnow", version, about = "TUI client for the FixitNow home services marketplace")]
pub struct Args {
    /// Server base URL (e.g., "http://127.0.0.1:5000")
    #[arg(short, long)]
    pub server: Option<String>,

    /// Prefill the sign-in username
    #[arg(short, long)]
    pub username: Option<String>,
}
