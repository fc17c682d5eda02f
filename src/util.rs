use std::{fmt::Display, process::exit};

use crate::{Logger, FATAL_EXIT_CODE};

/// Prints `[FATAL]<msg>` to stdout and exits.
pub fn fatal(msg: impl Display) -> ! {
    Logger::fatal().append(msg);
    // unreachable, the fatal logger exits on drop
    exit(FATAL_EXIT_CODE);
}
