fn main() {
    #[cfg(feature = "cli")]
    chardiff::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("chardiff: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
