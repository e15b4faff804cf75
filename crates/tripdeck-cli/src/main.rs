fn main() {
    if let Err(error) = tripdeck_cli::run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}
