//! Opaque handle into a [`crate::table::SymbolTable`]'s backing arena.

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(u32);

impl SymbolId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(u32::try_from(index).expect("symbol table exceeded u32::MAX entries"))
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}
