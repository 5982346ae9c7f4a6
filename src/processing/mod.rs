pub mod limits;
pub mod normalize;
pub mod validate;
