fn main() {
    velomart_frontend::run();
}
