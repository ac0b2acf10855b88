pub mod avatar;
pub mod parse;
