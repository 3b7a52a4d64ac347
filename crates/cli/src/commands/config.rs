use std::path::Path;

use palletizer_core::PalletConfig;

use super::CommandResult;

pub fn run(path: Option<&Path>) -> CommandResult {
    match PalletConfig::load(path) {
        Ok(config) => match serde_json::to_string_pretty(&config) {
            Ok(output) => CommandResult::success(output),
            Err(error) => CommandResult::failure("config", "serialization", error.to_string(), 3),
        },
        Err(error) => CommandResult::failure("config", "config", error.to_string(), 2),
    }
}
