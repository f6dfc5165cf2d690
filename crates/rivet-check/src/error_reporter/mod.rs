//! Error reporting methods for [`CheckContext`], split by the diagnostic
//! category they raise rather than kept as one monolithic `impl` block.
//!
//! - `core`: the lowest-level emission helper every other submodule funnels through.
//! - `name_resolution`: `UndefinedName`, `ImportError`.
//! - `type_errors`: `TypeMismatch`, `InvalidOperator`.
//! - `call_errors`: `ArityMismatch`, `SpawnShape`.
//! - `properties`: `InvalidMember`, `UnknownStaticType`.
//! - `concurrency_errors`: `FrozenMutation`, `PendingAccess`, `PrivateSpawnReturn`.
//! - `escape_errors`: `EscapeViolation`.

mod call_errors;
mod concurrency_errors;
mod core;
mod escape_errors;
mod name_resolution;
mod properties;
mod type_errors;
