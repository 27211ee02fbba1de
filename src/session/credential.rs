use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Access level assigned to an account. Closed set; anything else on the wire is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    NonResident,
    Resident,
    Guard,
    Manager,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::NonResident, Role::Resident, Role::Guard, Role::Manager];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::NonResident => "NON_RESIDENT",
            Role::Resident => "RESIDENT",
            Role::Guard => "GUARD",
            Role::Manager => "MANAGER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role '{}'", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Payload as it appears on the wire. Every claim is optional here so that a missing
/// claim is a rejection rather than a parse error with a different meaning.
#[derive(Debug, Deserialize)]
struct RawClaims {
    sub: Option<String>,
    role: Option<String>,
    exp: Option<i64>,
}

/// The three claims every credential must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Login of the account.
    pub sub: String,
    pub role: Role,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    /// Reads the claims out of a compact JWT. The signature is not verified; only the
    /// shape of the payload is. Returns `None` for anything malformed or incomplete.
    pub fn decode(token: &str) -> Option<Self> {
        match Self::try_decode(token) {
            Ok(claims) => Some(claims),
            Err(reason) => {
                tracing::debug!(reason = %reason, "Rejected stored credential");
                None
            }
        }
    }

    fn try_decode(token: &str) -> Result<Self, String> {
        let mut segments = token.trim().split('.');
        let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
            (Some(_), Some(payload), Some(_), None) => payload,
            _ => return Err("credential is not a three-segment token".to_string()),
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| format!("payload is not base64url: {}", e))?;
        let raw: RawClaims =
            serde_json::from_slice(&bytes).map_err(|e| format!("payload is not JSON: {}", e))?;

        let sub = raw.sub.ok_or("missing 'sub' claim")?;
        let role = raw.role.ok_or("missing 'role' claim")?;
        let exp = raw.exp.ok_or("missing 'exp' claim")?;
        let role = role.parse::<Role>().map_err(|e| e.to_string())?;

        Ok(Claims { sub, role, exp })
    }

    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now
    }
}
