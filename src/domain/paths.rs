//! Fixed names and modes inside the install layout.

/// Subdirectory of the base directory holding credentials.
pub const SECRETS_DIR: &str = "secrets";

/// Binary both units execute; must be installed before units are touched.
pub const FAASD_BINARY: &str = "faasd";

pub const FAASD_UNIT: &str = "faasd";
pub const PROVIDER_UNIT: &str = "faasd-provider";

pub const DOCKER_COMPOSE_FILE: &str = "docker-compose.yaml";
pub const PROMETHEUS_FILE: &str = "prometheus.yml";
pub const RESOLV_CONF_FILE: &str = "resolv.conf";

/// Unit template placeholders.
pub const CWD_PARAM: &str = "Cwd";
pub const SECRET_MOUNT_PATH_PARAM: &str = "SecretMountPath";
pub const FAASD_BIN_PARAM: &str = "FaasdBin";

pub const WORKING_DIR_MODE: u32 = 0o755;
pub const SECRETS_DIR_MODE: u32 = 0o700;
pub const ASSET_FILE_MODE: u32 = 0o644;
pub const UNIT_FILE_MODE: u32 = 0o644;
