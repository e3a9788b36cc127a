use std::sync::LazyLock;

use derive_from_env::FromEnv;

#[derive(FromEnv)]
#[from_env(prefix = "LINELOG")]
#[allow(non_snake_case)]
pub struct LineLogConfig {
    /// Default color flag for newly constructed loggers.
    #[from_env(default = "true")]
    pub COLORS: bool,
}

pub static LINELOG_CONFIG: LazyLock<LineLogConfig> =
    LazyLock::new(|| LineLogConfig::from_env().unwrap());
