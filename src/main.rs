fn main() {
    logbook::run()
}
