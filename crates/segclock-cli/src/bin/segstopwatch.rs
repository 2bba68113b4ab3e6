use clap::Parser;
use segclock_core::DisplayMode;

#[derive(Parser)]
#[command(name = "segstopwatch", version, about = "Seven-segment stopwatch")]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    if let Err(e) = segclock_cli::run(DisplayMode::Stopwatch) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
