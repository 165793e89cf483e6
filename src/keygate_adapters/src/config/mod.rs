pub mod settings;

pub use settings::{
    AllowedOrigins, ApplicationSettings, AuthSettings, EmailClientSettings, PostgresSettings,
    Settings,
};
