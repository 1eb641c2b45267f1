//! roadlogger main entrypoint.

use roadlogger::run;

fn main() {
    if let Err(e) = run() {
        roadlogger::ui::messages::error(&e);
        std::process::exit(1);
    }
}
