use std::path::PathBuf;

use crate::error::ClientError;

/// Environment inputs that decide where the cmus socket lives.
///
/// Empty values are treated the same as unset ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocketEnv {
    pub cmus_socket: Option<String>,
    pub home: Option<String>,
    pub xdg_runtime_dir: Option<String>,
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

impl SocketEnv {
    pub fn from_process() -> Self {
        Self {
            cmus_socket: non_empty_var("CMUS_SOCKET"),
            home: non_empty_var("HOME"),
            xdg_runtime_dir: non_empty_var("XDG_RUNTIME_DIR"),
        }
    }

    /// Resolves the socket path using the same lookup order cmus uses when
    /// it creates the socket.
    pub fn resolve(&self) -> Result<PathBuf, ClientError> {
        if let Some(socket) = self.cmus_socket.as_deref().filter(|s| !s.is_empty()) {
            return Ok(PathBuf::from(socket));
        }

        let home = self
            .home
            .as_deref()
            .filter(|h| !h.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| ClientError::config("environment variable $HOME not set"))?;

        let legacy_dir = home.join(".cmus");
        let legacy_exists = legacy_dir.try_exists().map_err(|e| {
            ClientError::config(format!("unable to inspect {}: {}", legacy_dir.display(), e))
        })?;
        if legacy_exists {
            return Ok(legacy_dir);
        }

        match self.xdg_runtime_dir.as_deref().filter(|d| !d.is_empty()) {
            Some(runtime_dir) => Ok(PathBuf::from(runtime_dir).join("cmus-socket")),
            None => Ok(home.join(".config").join("cmus").join("socket")),
        }
    }
}

pub fn socket_path() -> Result<PathBuf, ClientError> {
    SocketEnv::from_process().resolve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn env(home: &TempDir, xdg: Option<&str>) -> SocketEnv {
        SocketEnv {
            cmus_socket: None,
            home: Some(home.path().to_string_lossy().into_owned()),
            xdg_runtime_dir: xdg.map(str::to_string),
        }
    }

    #[test]
    fn test_explicit_socket_wins() {
        let env = SocketEnv {
            cmus_socket: Some("/path/to/socket".to_string()),
            home: None,
            xdg_runtime_dir: Some("/run/user/1000".to_string()),
        };
        assert_eq!(env.resolve().unwrap(), PathBuf::from("/path/to/socket"));
    }

    #[test]
    fn test_missing_home_is_config_error() {
        let env = SocketEnv::default();
        let err = env.resolve().unwrap_err();
        assert!(matches!(err, ClientError::Config { .. }));
        assert!(err.to_string().contains("environment variable $HOME not set"));
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let env = SocketEnv {
            cmus_socket: Some(String::new()),
            home: Some(String::new()),
            xdg_runtime_dir: None,
        };
        assert!(matches!(env.resolve(), Err(ClientError::Config { .. })));
    }

    #[test]
    fn test_legacy_dot_cmus_preferred_when_present() {
        let home = TempDir::new().unwrap();
        std::fs::create_dir(home.path().join(".cmus")).unwrap();

        let resolved = env(&home, Some("/run/user/1000")).resolve().unwrap();
        assert_eq!(resolved, home.path().join(".cmus"));
    }

    #[test]
    fn test_runtime_dir_used_without_legacy_dir() {
        let home = TempDir::new().unwrap();

        let resolved = env(&home, Some("/run/user/1000")).resolve().unwrap();
        assert_eq!(resolved, PathBuf::from("/run/user/1000/cmus-socket"));
    }

    #[test]
    fn test_config_dir_fallback() {
        let home = TempDir::new().unwrap();

        let resolved = env(&home, None).resolve().unwrap();
        assert_eq!(resolved, home.path().join(".config/cmus/socket"));
    }

    #[test]
    fn test_empty_runtime_dir_falls_back_to_config_dir() {
        let home = TempDir::new().unwrap();

        let resolved = env(&home, Some("")).resolve().unwrap();
        assert_eq!(resolved, home.path().join(".config/cmus/socket"));
    }
}
