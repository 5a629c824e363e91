pub mod consts;
pub mod model;
