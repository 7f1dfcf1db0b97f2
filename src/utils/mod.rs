pub mod navigate;
pub mod scroll;
