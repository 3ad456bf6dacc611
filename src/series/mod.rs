pub(crate) mod extract;
pub mod fill;
