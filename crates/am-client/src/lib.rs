//! am-client
//!
//! The remote-authority contract and its HTTP implementation. Everything
//! the synchronization core knows about the account service goes through
//! the [`RemoteAuthority`] trait; [`HttpRemote`] is the production
//! implementation over the service's REST surface.

pub(crate) mod error;
pub(crate) mod http_remote;
pub(crate) mod remote;

pub use error::{RemoteError, RemoteResult};
pub use http_remote::HttpRemote;
pub use remote::{AccountPatch, RemoteAuthority};
