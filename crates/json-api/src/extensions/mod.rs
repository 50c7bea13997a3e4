//! Extension traits

mod depot;
mod pagination;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use pagination::PageQueryExt as _;
pub(crate) use result::{CreatedExt as _, ResultExt as _};
