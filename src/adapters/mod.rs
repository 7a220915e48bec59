pub mod assets;
pub mod os_credential_source;
pub mod systemctl_command;
pub mod template;
