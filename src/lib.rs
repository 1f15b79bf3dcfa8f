//! Shopfront - Main Library
//!
//! Re-exports the `shop-api` workspace crate and the helpers shared by
//! the binaries.
//!
//! ## Usage in Binaries
//!
//! ```rust
//! use shopfront::bin_common::{load_config_from_env, ConfigType};
//! use shopfront::shop_api::ShopClient;
//! ```

// Re-export workspace libraries for convenience
pub use shop_api;

// Binary common utilities
pub mod bin_common {
    //! Common utilities for binary executables

    pub mod cli;

    pub use cli::{
        load_client_config, load_client_config_with, load_config_from_env, parse_args, ConfigType,
    };
}
