//! Server Module
//!
//! This module contains all code for initializing and configuring the Axum
//! HTTP server. It provides the foundation for the application's backend
//! infrastructure.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading from the environment
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: Reads port, database URL, signing secret
//!    and upload directory from the environment
//! 2. **Store Selection**: Connects to PostgreSQL and runs migrations, or
//!    falls back to the in-memory store when no database is configured
//! 3. **State Creation**: Builds `AppState` (store, token service, avatar
//!    storage)
//! 4. **Router Creation**: Configures all routes and middleware

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
