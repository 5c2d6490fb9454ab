pub mod configure;
pub mod event;
pub mod status;
pub mod validate;
