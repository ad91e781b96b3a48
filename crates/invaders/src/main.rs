use invaders::Options;

fn main() {
    env_logger::init();

    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}\nUsage: invaders [--scale N] [--demo]", message);
            std::process::exit(1);
        }
    };
    log::info!("Starting with {:?}", options);

    if let Err(e) = invaders::run(&options) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
