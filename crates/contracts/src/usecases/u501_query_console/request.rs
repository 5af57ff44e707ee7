use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the connection fields the console collects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionField {
    Host,
    Port,
    User,
    Password,
    Database,
}

impl ConnectionField {
    /// Form order
    pub const ALL: [ConnectionField; 5] = [
        ConnectionField::Host,
        ConnectionField::Port,
        ConnectionField::User,
        ConnectionField::Password,
        ConnectionField::Database,
    ];

    /// Wire name, also used as the input `name` attribute
    pub fn name(&self) -> &'static str {
        match self {
            ConnectionField::Host => "host",
            ConnectionField::Port => "port",
            ConnectionField::User => "user",
            ConnectionField::Password => "password",
            ConnectionField::Database => "database",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConnectionField::Host => "Host",
            ConnectionField::Port => "Port",
            ConnectionField::User => "User",
            ConnectionField::Password => "Password",
            ConnectionField::Database => "Database",
        }
    }

    /// Masked in the form and in `Debug` output
    pub fn is_secret(&self) -> bool {
        matches!(self, ConnectionField::Password)
    }
}

/// Target database parameters, forwarded opaquely to the Query Service.
///
/// No field is validated; any of them may be empty.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl ConnectionConfig {
    pub fn get(&self, field: ConnectionField) -> &str {
        match field {
            ConnectionField::Host => &self.host,
            ConnectionField::Port => &self.port,
            ConnectionField::User => &self.user,
            ConnectionField::Password => &self.password,
            ConnectionField::Database => &self.database,
        }
    }

    pub fn set(&mut self, field: ConnectionField, value: String) {
        let slot = match field {
            ConnectionField::Host => &mut self.host,
            ConnectionField::Port => &mut self.port,
            ConnectionField::User => &mut self.user,
            ConnectionField::Password => &mut self.password,
            ConnectionField::Database => &mut self.database,
        };
        *slot = value;
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .finish()
    }
}

/// Body of `POST /query`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Sent exactly as typed, without trimming
    pub prompt: String,
    pub connection: ConnectionConfig,
}
