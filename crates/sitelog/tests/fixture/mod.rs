//! Fixed-position logging calls; keep line numbers stable.

use sitelog::{Logger, args};

pub const FILE: &str = file!();
pub const START_LINE: u32 = 9;

pub fn start(logger: &Logger) {
    logger.info(&args!["Hello world!"]);
}
