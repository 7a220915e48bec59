fn main() {
    faasd::app::cli::run();
}
