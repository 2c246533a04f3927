fn main() {
    heatmask::logging::init();

    if let Err(error) = heatmask::run_cli() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
