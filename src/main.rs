fn main() {
    if let Err(e) = isotherms_rs::adapters::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
