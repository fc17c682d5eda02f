use std::process::exit;

/// Status a fatal logger exits with. This is what a POSIX parent sees for
/// `exit(-1)`.
pub const FATAL_EXIT_CODE: i32 = 255;

pub trait Terminate {
    fn terminate(&self, status: i32);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessExit;

impl Terminate for ProcessExit {
    fn terminate(&self, status: i32) {
        exit(status);
    }
}

impl<T: Terminate + ?Sized> Terminate for &T {
    fn terminate(&self, status: i32) {
        (**self).terminate(status)
    }
}
