#![crate_name = "sss_math"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Mathematical utilities for the sss library, providing exact modular
//! arithmetic over prime fields `Z_p`.

mod errors;
pub mod zp;

pub use errors::{Error, Result};
