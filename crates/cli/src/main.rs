fn main() {
    if let Err(e) = typex_cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
