//! Kernel utilities shared by the auto-configuration crates.
//! Keep this crate lightweight; today it owns property loading only.
//!
//! ## Property loading
//! ```rust,no_run
//! use qpid_kernel::config::load_properties;
//!
//! // `qpidjms.{toml,yaml,json}` in the working directory (optional) + `QPIDJMS__*` variables.
//! let props = load_properties(None::<&str>).unwrap();
//! println!("{:?}", props.remote_url());
//! ```
pub mod config;

pub use qpid_domain as domain;
