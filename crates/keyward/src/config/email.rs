/// SMTP mail server configuration
#[derive(Serialize, Deserialize, Clone)]
pub struct SmtpSettings {
    /// Sender address
    pub from: String,

    /// Reply-To address
    pub reply_to: Option<String>,

    /// SMTP host
    pub host: String,

    /// SMTP port
    pub port: Option<i32>,

    /// SMTP username
    pub username: String,

    /// SMTP password
    pub password: String,

    /// Whether to use TLS
    pub use_tls: Option<bool>,
}

/// Email template
///
/// `{{name}}` and `{{code}}` are filled at render time.
#[derive(Serialize, Deserialize, Clone)]
pub struct Template {
    /// Subject line of the email
    pub title: String,
    /// Plain text version of this email
    pub text: String,
    /// HTML version of this email
    pub html: Option<String>,
}

/// Email templates
#[derive(Serialize, Deserialize, Clone)]
pub struct Templates {
    /// Template for email verification codes
    pub verify: Template,
    /// Template for password reset codes
    pub reset: Template,
    /// Template for the welcome email
    ///
    /// Not dispatched by any flow at present; kept so deployments can
    /// configure it ahead of time.
    pub welcome: Option<Template>,
}

impl Default for Templates {
    fn default() -> Templates {
        Templates {
            verify: Template {
                title: "Verify your account".into(),
                text: "Hi {{name}},\n\nYour verification code is: {{code}}\n\nThis code will expire in 30 minutes. If you did not request this, ignore this email.".into(),
                html: None,
            },
            reset: Template {
                // The copy advertises an hour; the enforced window is
                // OtpExpiryConfig::expire_password_reset.
                title: "Password reset code".into(),
                text: "Hi {{name}},\n\nYour password reset code is: {{code}}\n\nThis code will expire in 1 hour. If you did not request this, ignore this email.".into(),
                html: None,
            },
            welcome: None,
        }
    }
}

/// One-time code expiration config
#[derive(Serialize, Deserialize, Clone)]
pub struct OtpExpiryConfig {
    /// How long email verification codes should last for (in seconds)
    pub expire_verification: i64,
    /// How long password reset codes should last for (in seconds)
    pub expire_password_reset: i64,
}

impl Default for OtpExpiryConfig {
    fn default() -> OtpExpiryConfig {
        OtpExpiryConfig {
            expire_verification: 30 * 60,
            expire_password_reset: 30 * 60,
        }
    }
}
