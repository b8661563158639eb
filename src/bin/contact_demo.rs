use std::io::{self, Write};

use contact_table::demo::{self, DemoError};
use contact_table::logger::initialize_logger;

fn main() -> Result<(), DemoError> {
    initialize_logger();
    let mut out = io::stdout().lock();
    demo::run(&mut out)?;
    out.flush()?;
    Ok(())
}
