mod fails_without_prerequisite_binary_contract;
mod provisions_clean_host_contract;
mod rejects_invalid_config_contract;
