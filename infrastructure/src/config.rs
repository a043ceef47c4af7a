use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

pub struct Config {
    pub endpoint: String,
    pub state_dir: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        dotenv().ok();
        Self {
            endpoint: env::var("CHATBOX_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            state_dir: env::var("CHATBOX_STATE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| Self::default_state_dir()),
        }
    }

    fn default_state_dir() -> PathBuf {
        let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
        let mut path = PathBuf::from(home);
        path.push(".local");
        path.push("share");
        path.push("chatbox_cli");
        path
    }
}
