use fontsnip::cli;

fn main() {
    // RUST_LOG controls verbosity; default is warnings only so command
    // output stays clean.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    log::debug!("Starting fontsnip {}", fontsnip::VERSION);

    if let Err(e) = cli::run() {
        // Environment and network errors alike: one message, abort,
        // nothing retried.
        eprintln!("fontsnip: error: {e:#}");
        std::process::exit(1);
    }
}
