//! Shopcart Domain Concerns

pub mod shopcarts;
