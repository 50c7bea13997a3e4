//! Admin Config

use clap::Args;
use jiff::SignedDuration;
use zeroize::Zeroizing;

use showfloor_app::auth::{AuthSettings, EnvAdmin};

/// Admin login settings.
#[derive(Debug, Args)]
pub struct AdminConfig {
    /// Username of the built-in administrator
    #[arg(long, env = "ADMIN_USERNAME", requires = "admin_password")]
    pub admin_username: Option<String>,

    /// Password of the built-in administrator
    #[arg(
        long,
        env = "ADMIN_PASSWORD",
        hide_env_values = true,
        requires = "admin_username"
    )]
    pub admin_password: Option<String>,

    /// Lifetime of an admin session in minutes
    #[arg(long, env = "SESSION_TTL_MINUTES", default_value_t = 720_u32)]
    pub session_ttl_minutes: u32,
}

impl AdminConfig {
    /// The built-in administrator, when both halves of the pair are set.
    #[must_use]
    pub fn env_admin(&self) -> Option<EnvAdmin> {
        let username = self.admin_username.as_ref()?;
        let password = self.admin_password.as_ref()?;

        Some(EnvAdmin {
            username: username.clone(),
            password: Zeroizing::new(password.clone()),
        })
    }

    #[must_use]
    pub fn auth_settings(&self) -> AuthSettings {
        AuthSettings {
            env_admin: self.env_admin(),
            session_ttl: SignedDuration::from_mins(i64::from(self.session_ttl_minutes)),
        }
    }
}
