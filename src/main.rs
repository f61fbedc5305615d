//! workhistory main entrypoint.

use workhistory::run;
use workhistory::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
