//! View validators: parallel-edge layout and collapse visibility.

pub mod collapse;
pub mod layout;
