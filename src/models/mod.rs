pub mod shareholder;
pub mod slide;
