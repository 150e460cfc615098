//! # readmend-repo
//!
//! Repository context gathering for readmend.
//!
//! Everything the prompt needs to know about the repository under review
//! is collected here: the README contents, a tree-style folder listing,
//! and owner/repo metadata from the `origin` remote.
//!
//! ## Key Types
//!
//! - [`RepoContext`] - All gathered context for one repository
//! - [`RemoteInfo`] - Owner/repo parsed from the origin remote
//! - [`RepoError`] - Gathering failures

mod context;
mod remote;
mod tree;

pub use context::{RepoContext, RepoError};
pub use remote::RemoteInfo;
pub use tree::folder_tree;
