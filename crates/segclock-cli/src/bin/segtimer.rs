use clap::Parser;
use segclock_core::DisplayMode;

#[derive(Parser)]
#[command(name = "segtimer", version, about = "Seven-segment count-up timer")]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    if let Err(e) = segclock_cli::run(DisplayMode::Timer) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
