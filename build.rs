fn main() {
    // Only emit ESP-IDF link/env output when building for the board.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
