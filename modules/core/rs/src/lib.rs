pub mod num;
pub mod seq;
