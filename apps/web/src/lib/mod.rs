//! Shared browser utilities: HTTP helpers, configuration loading and build
//! metadata. The screens themselves live in the `storefront-auth` core; this
//! module only adapts it to `fetch`, `window` and the build.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;

pub(crate) use storefront_auth::AppError;
