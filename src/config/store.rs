/// Store configuration constants.
///
/// Location of the flat JSON file that holds every saved game.
pub const DATA_FOLDER: &str = "App_Data";

/// Name of the backing file inside the data folder.
pub const FILE_NAME: &str = "games.json";

/// Environment variable overriding the data folder.
pub const DATA_DIR_ENV: &str = "BATTLESHIPS_DATA_DIR";
