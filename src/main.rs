fn main() {
    plumbline::cli::run();
}
