//! Extension traits

mod depot;
mod json;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use json::RequestJsonExt as _;
pub(crate) use result::ResultExt as _;
