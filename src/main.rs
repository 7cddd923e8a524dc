use std::io;
use std::process::ExitCode;

use bikeshare_explorer::config::DATA_DIR;
use bikeshare_explorer::console::Console;
use bikeshare_explorer::session::Session;

fn main() -> ExitCode {
    env_logger::init();

    let console = Console::new(io::stdin().lock(), io::stdout());
    let mut session = Session::new(console, DATA_DIR);

    match session.run() {
        Ok(end) => {
            log::debug!("exiting after {end:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Bikeshare session failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}
