//! Global constants used throughout the devboard codebase.
//!
//! Sentinel strings, separators and default locations live here so that the
//! manifest resolver, the review normalizer and the CLI agree on them.

/// Version reported for a dependency that declares no `<version>` element.
///
/// Distinct from [`UNRESOLVED_VERSION`]: this one means "the manifest did not
/// say", typically because the version is managed by a parent or a BOM.
pub const DEFAULT_VERSION: &str = "Default";

/// Version reported for a `${key}` reference whose key is not declared in
/// `<properties>`.
///
/// The upstream manifest format offers no way to tell a missing property from
/// one inherited through the parent, so this sentinel covers both.
pub const UNRESOLVED_VERSION: &str = "N/A";

/// Opening marker of a property reference.
pub const PROPERTY_REF_OPEN: &str = "${";

/// Closing marker of a property reference.
pub const PROPERTY_REF_CLOSE: &str = "}";

/// Marks domain-qualified service accounts (`DOMAIN\account`) in reviewer names.
pub const DOMAIN_SEPARATOR: char = '\\';

/// Separator used when joining reviewer display names.
pub const REVIEWER_SEPARATOR: &str = ", ";

/// Host used to derive the link prefix from an organization name.
pub const DEFAULT_SERVICE_HOST: &str = "https://dev.azure.com";

/// Name of the configuration directory under the user's home directory.
pub const CONFIG_DIR_NAME: &str = ".devboard";

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";
