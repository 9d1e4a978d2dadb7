//! Constants shared by the transforms

pub mod hash;
