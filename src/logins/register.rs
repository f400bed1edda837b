//! Registration of new logins.
//!
//! Appends one entry to the stored list. This is the only code path that
//! writes under the logins key.

use crate::db::KeyValueStore;

use super::login::{parse_logins, serialize_logins, LoginData};
use super::{LoginError, LoginResult, LOGINS_KEY};

/// User input for a new login, before an id is assigned
#[derive(Debug, Clone, Default)]
pub struct NewLogin {
    pub service_name: String,
    pub email: String,
    pub password: String,
}

impl NewLogin {
    pub fn validate(&self) -> LoginResult<()> {
        let required = [
            ("Service name", &self.service_name),
            ("E-mail", &self.email),
            ("Password", &self.password),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(LoginError::Validation(format!("{} is required", label)));
            }
        }

        if !is_valid_email(self.email.trim()) {
            return Err(LoginError::Validation("Not a valid e-mail".to_string()));
        }

        Ok(())
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

/// Validate `new`, give it a fresh id and append it to the stored list.
///
/// A corrupt stored list is left in place and reported rather than
/// overwritten.
pub fn register_login<S: KeyValueStore>(store: &S, new: NewLogin) -> LoginResult<LoginData> {
    new.validate()?;

    let stored = store.get_item(LOGINS_KEY)?;
    let mut logins = match stored.filter(|raw| !raw.is_empty()) {
        Some(raw) => parse_logins(&raw)?,
        None => Vec::new(),
    };

    let login = LoginData {
        id: uuid::Uuid::new_v4().to_string(),
        service_name: new.service_name.trim().to_string(),
        email: new.email.trim().to_string(),
        password: new.password,
    };
    logins.push(login.clone());

    store.set_item(LOGINS_KEY, &serialize_logins(&logins)?)?;
    tracing::info!(id = %login.id, service = %login.service_name, "login registered");

    Ok(login)
}
