//! rTimeSince main entrypoint.

use rtimesince::run;
use rtimesince::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        if e.is_fatal() {
            error("Initialization failed, nothing can be done without storage.");
        }
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
