/// Runtime configuration, read from the environment. A `.env` file is
/// honoured when present.
#[derive(Debug, Clone)]
pub struct Config {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            uri: env_or("MONGODB_URI", "mongodb://localhost:27017"),
            database: env_or("TASK_DATABASE", "TaskDatabase"),
            collection: env_or("TASK_COLLECTION", "myTasks"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
