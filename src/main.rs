use clap::Parser;

fn main() {
    let cli = deckurl::cli::Cli::parse();

    if let Err(err) = deckurl::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
