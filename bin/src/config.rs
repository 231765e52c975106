use std::{fs, path::PathBuf};

use directories::ProjectDirs;
use serde_derive::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Config {
    pub corpus_location: String,
    pub model_location: String,
    pub class: String,
    pub chunk_count: usize,
    pub port: u16,
}

pub fn get_config_location() -> (PathBuf, PathBuf) {
    let project_dir = ProjectDirs::from("", "", "newswire").unwrap();
    let config_dir = project_dir.config_dir();
    let mut config_path = PathBuf::from(config_dir);
    config_path.push("config.toml");
    (config_dir.to_owned(), config_path)
}

pub fn read_config() -> Config {
    let (config_dir, config_path) = get_config_location();
    if !config_path.exists() {
        fs::create_dir_all(config_dir).unwrap();
        let default_conf = "corpus_location = \"./data.json\"\nmodel_location = \"./models\"\nclass = \"BUSINESS\"\nchunk_count = 100\nport = 6683\n";
        fs::write(&config_path, default_conf).unwrap();
    }
    let config: Config = toml::from_str(&fs::read_to_string(config_path).unwrap()).unwrap();
    config
}
