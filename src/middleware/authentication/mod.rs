//! Bearer-token authentication for the protected scopes.
//!
//! `Manager` wraps a scope; every request in it must carry a valid access token.
//! On success the resolved `Arc<models::User>` is placed in request extensions,
//! where handlers pick it up with `web::ReqData<Arc<models::User>>`.

mod getheader;
mod manager;
mod manager_middleware;
mod method;

pub use getheader::*;
pub use manager::*;
pub use manager_middleware::*;
