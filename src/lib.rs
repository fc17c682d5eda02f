//! Tagged stdout logger with fatal checks.
//!
//! A [`Logger`] collects fragments and prints `[TAG]message` once, when it is
//! dropped. A fatal logger then ends the process with [`FATAL_EXIT_CODE`].
//!
//! ```no_run
//! use taglog::{check_eq, logger};
//!
//! logger!(INFO).append("loaded ").append(3).append(" shaders");
//! let width = 640;
//! check_eq!(width % 8, 0, "width {} is not a multiple of 8", width);
//! ```

mod check;
pub mod facade;
mod logger;
mod severity;
mod terminate;
pub mod util;

pub use check::{
    ensure, ensure_eq, ensure_ge, ensure_gt, ensure_le, ensure_lt, ensure_ne, ensure_op, BinaryOp,
    CheckFailure,
};
pub use logger::Logger;
pub use severity::Severity;
pub use terminate::{ProcessExit, Terminate, FATAL_EXIT_CODE};

/// Obtains a stdout logger for `INFO`, `WARNING` or `FATAL`.
#[macro_export]
macro_rules! logger {
    (INFO) => {
        $crate::Logger::info()
    };
    (WARNING) => {
        $crate::Logger::warning()
    };
    (FATAL) => {
        $crate::Logger::fatal()
    };
}

/// Logs `Check Failed: <condition>` as fatal and exits when `condition` is
/// false. Extra arguments are formatted and appended after a space.
#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {
        if let ::core::result::Result::Err(failure) =
            $crate::ensure($cond, ::core::stringify!($cond))
        {
            $crate::Logger::fatal().append(failure);
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if let ::core::result::Result::Err(failure) =
            $crate::ensure($cond, ::core::stringify!($cond))
        {
            $crate::Logger::fatal()
                .append(failure)
                .append(" ")
                .append(::core::format_args!($($arg)+));
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __check_op {
    ($check:ident, $lhs:expr, $rhs:expr) => {
        match (&$lhs, &$rhs) {
            (lhs, rhs) => {
                if let ::core::result::Result::Err(failure) = $crate::$check(
                    lhs,
                    rhs,
                    ::core::stringify!($lhs),
                    ::core::stringify!($rhs),
                ) {
                    $crate::Logger::fatal().append(failure);
                }
            }
        }
    };
    ($check:ident, $lhs:expr, $rhs:expr, $($arg:tt)+) => {
        match (&$lhs, &$rhs) {
            (lhs, rhs) => {
                if let ::core::result::Result::Err(failure) = $crate::$check(
                    lhs,
                    rhs,
                    ::core::stringify!($lhs),
                    ::core::stringify!($rhs),
                ) {
                    $crate::Logger::fatal()
                        .append(failure)
                        .append(::core::format_args!($($arg)+));
                }
            }
        }
    };
}

#[macro_export]
macro_rules! check_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::__check_op!(ensure_eq, $lhs, $rhs)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::__check_op!(ensure_eq, $lhs, $rhs, $($arg)+)
    };
}

#[macro_export]
macro_rules! check_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::__check_op!(ensure_ne, $lhs, $rhs)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::__check_op!(ensure_ne, $lhs, $rhs, $($arg)+)
    };
}

#[macro_export]
macro_rules! check_lt {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::__check_op!(ensure_lt, $lhs, $rhs)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::__check_op!(ensure_lt, $lhs, $rhs, $($arg)+)
    };
}

#[macro_export]
macro_rules! check_le {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::__check_op!(ensure_le, $lhs, $rhs)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::__check_op!(ensure_le, $lhs, $rhs, $($arg)+)
    };
}

#[macro_export]
macro_rules! check_gt {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::__check_op!(ensure_gt, $lhs, $rhs)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::__check_op!(ensure_gt, $lhs, $rhs, $($arg)+)
    };
}

#[macro_export]
macro_rules! check_ge {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::__check_op!(ensure_ge, $lhs, $rhs)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::__check_op!(ensure_ge, $lhs, $rhs, $($arg)+)
    };
}
