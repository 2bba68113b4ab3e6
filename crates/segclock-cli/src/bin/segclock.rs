use clap::Parser;
use segclock_core::DisplayMode;

#[derive(Parser)]
#[command(name = "segclock", version, about = "Seven-segment wall clock")]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    if let Err(e) = segclock_cli::run(DisplayMode::Clock) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
