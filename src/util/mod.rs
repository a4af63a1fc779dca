//! Small browser utilities.

pub mod clock;
