/// Index of a node inside a [`crate::ComponentTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIdx(pub u32);

impl NodeIdx {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}
