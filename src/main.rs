fn main() -> Result<(), Box<dyn std::error::Error>> {
    multifilter::run()
}
