use crate::util::random_token;

/// Signing key material
///
/// Defaults to fresh random material so a default-constructed engine
/// signs with keys nobody else knows. Deployments that need tokens to
/// survive restarts supply their own value.
#[derive(Serialize, Deserialize, Clone)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: String) -> Secret {
        Secret(value)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Default for Secret {
    fn default() -> Secret {
        Secret(random_token(32))
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Secret {
        Secret(value.to_string())
    }
}

// Keep key material out of logs
impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Secret").field(&"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_key_material() {
        let secret = Secret::from("super secret value");
        assert!(!format!("{:?}", secret).contains("super secret value"));
    }

    #[test]
    fn default_secrets_are_distinct() {
        assert_ne!(Secret::default().expose(), Secret::default().expose());
    }
}
