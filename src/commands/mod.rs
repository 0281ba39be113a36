//! Command handlers for kswitch

mod interactive;

pub use interactive::*;
