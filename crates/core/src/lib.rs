//! Hearth core: roles, the auth signal, the role gate and the route table

pub mod access;
pub mod error;
pub mod role;
pub mod routes;
pub mod signal;

pub use access::{decide, Access, RedirectTarget};
pub use error::{CoreError, CoreResult};
pub use role::{Role, RoleSet};
pub use routes::{
    navigate, render_navigation, resolve, Guard, Navigation, Resolved, RouteEntry, RouteParams,
    RouteTarget, ViewId, ViewRegistry, ROUTE_TABLE,
};
pub use signal::{AuthSignal, UserId};
