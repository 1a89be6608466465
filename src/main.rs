use reap::commands::Cli;

fn main() {
    std::process::exit(Cli::menu());
}
