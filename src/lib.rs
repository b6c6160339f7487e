#![warn(clippy::all, clippy::pedantic)]

// disable some style lints
#![allow(clippy::needless_return, clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

// Tests lints
#![cfg_attr(test, allow(clippy::float_cmp))]

mod errors;
pub use self::errors::Error;

mod samples;

mod lagrange;
pub use self::lagrange::lagrange_interpolate;

mod neville;
pub use self::neville::neville_interpolate;
