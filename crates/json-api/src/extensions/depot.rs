//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use showfloor_app::auth::{Permission, Principal};

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_principal(&mut self, principal: Principal);

    fn principal_or_401(&self) -> Result<&Principal, StatusError>;

    /// The signed-in admin, provided their role grants `permission`.
    fn require(&self, permission: Permission) -> Result<&Principal, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_principal(&mut self, principal: Principal) {
        self.inject(principal);
    }

    fn principal_or_401(&self) -> Result<&Principal, StatusError> {
        self.obtain::<Principal>()
            .map_err(|_ignored| StatusError::unauthorized())
    }

    fn require(&self, permission: Permission) -> Result<&Principal, StatusError> {
        let principal = self.principal_or_401()?;

        if !principal.permissions.allows(permission) {
            return Err(StatusError::forbidden().brief(format!("Missing permission {permission}")));
        }

        Ok(principal)
    }
}
