//! Task thread-state lattice (§3.2): `NORMAL | PENDING | SYNCHRONIZED`.

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThreadState {
    #[default]
    Normal,
    Pending,
    Synchronized,
}

impl ThreadState {
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}
