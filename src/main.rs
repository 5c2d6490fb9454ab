fn main() {
    publish_trigger::app::cli::run();
}
