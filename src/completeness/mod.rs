//! Interface completeness
//!
//! Determines which members a container still has to provide to satisfy the
//! interfaces it declares.
//!
//! 1. Collect the container's comparable members: its own, plus its base
//!    class chain (for an interface, its inherited interfaces).
//! 2. Collect the members required by each directly inherited interface,
//!    including what those interfaces inherit. The first member seen for a
//!    key wins.
//! 3. Everything required without a local counterpart is missing.
//!
//! The inheritance walk keeps a visited set, so a cyclic model terminates
//! (with a warning) instead of recursing forever.
//!
//! ## Example
//!
//! ```
//! use codemodel::completeness::find_missing_interface_members;
//! use codemodel::model::{CodeModel, Container, Method, TypeRef};
//!
//! let mut model = CodeModel::new();
//! model.add_container(Container::interface("Demo", "IRun").with_member(Method::new("Run")));
//! let job = model.add_container(
//!     Container::class("Demo", "Job").implementing(TypeRef::named("Demo", "IRun")),
//! );
//!
//! let missing = find_missing_interface_members(&model, job).unwrap();
//! assert_eq!(missing[0].name(), "Run");
//! ```

mod analysis;
mod keys;

pub use analysis::{
    find_missing_interface_members, CompletenessReport, InterfaceCompletenessAnalyzer,
    MissingMember,
};
