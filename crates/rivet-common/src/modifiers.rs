//! Small, dependency-free enums shared by the AST, symbol table, and
//! checker layers. Kept in `rivet-common`, the lowest-level crate, since
//! several higher crates need the same tiny enum and none of them should
//! have to depend on each other just to share it.

/// `DEFAULT | SHARED | PRIVATE`, attached to function declarations, block
/// statements, and spawn expressions (§3.4, §4.3.6).
///
/// The same three-valued modifier is reused across all three syntactic
/// positions rather than defining `FuncMod`/`BlockMod`/`SpawnModifier` as
/// separate types: all three positions share the same variant set and
/// the same meaning (`PRIVATE` triggers escape analysis or the
/// private-return restriction; `SHARED` marks code that may run inside a
/// spawned task).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Modifier {
    #[default]
    Default,
    Shared,
    Private,
}

impl Modifier {
    pub const fn is_private(self) -> bool {
        matches!(self, Self::Private)
    }

    pub const fn is_shared(self) -> bool {
        matches!(self, Self::Shared)
    }
}

/// `DEFAULT | AS_VAL | AS_REF`, attached to declarations and parameters
/// (§3.3). Consulted by the concurrency analyzer to decide whether a
/// primitive argument must be frozen on spawn even though primitives are
/// normally exempt from freezing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MemQual {
    #[default]
    Default,
    AsVal,
    AsRef,
}

impl MemQual {
    /// Whether this qualifier implies reference semantics on its own,
    /// independent of the argument's static type. `AS_REF` forces a
    /// primitive to be captured by reference (and thus frozen on spawn);
    /// `DEFAULT`/`AS_VAL` leave that decision to the argument's type.
    pub const fn implies_reference(self) -> bool {
        matches!(self, Self::AsRef)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_modifier_is_neither_private_nor_shared() {
        assert!(!Modifier::default().is_private());
        assert!(!Modifier::default().is_shared());
    }

    #[test]
    fn only_as_ref_implies_reference() {
        assert!(MemQual::AsRef.implies_reference());
        assert!(!MemQual::AsVal.implies_reference());
        assert!(!MemQual::Default.implies_reference());
    }
}
