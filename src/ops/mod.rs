//! # Layer 3: Operator Forwarding
//!
//! Wrappers behave like the entity they capture. Each std operator is
//! forwarded through an impl whose bounds mirror the captured type: if `T`
//! has no `Add`, neither does any wrapper over `T`.
//!
//! ```text
//! wrapper ⊗ R      R: Operand            (forward)
//! plain   ⊗ W      primitive left side   (plain)
//! w.invoke(args)   Callable               (call)
//! w.apply_member   MemberPtr              (member)
//! ```
//!
//! Rust has no overloadable `&&`, `||`, `,`, `++` or `--`. Compound
//! assignment exists only on the alias wrappers, where it writes through.

pub mod call;
mod forward;
pub mod member;
pub mod operand;
mod plain;

pub use call::Callable;
pub use member::{BoundMember, Field, MemberPtr, MemberReceiver, Method, apply_member};
pub use operand::Operand;
