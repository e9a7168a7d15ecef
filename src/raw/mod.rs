mod position;
mod raw_linkless_tree;
mod size;
mod slots;

pub(crate) use position::Position;
pub(crate) use raw_linkless_tree::RawLinklessTree;
