//! SFTP report source (requires the `sftp` feature)

use super::ReportSource;
use crate::config::SourceConfig;
use crate::{Error, Result};
use ssh2::{Session, Sftp};
use std::io::Read;
use std::net::TcpStream;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reports stored in a directory on an SFTP server
pub struct SftpSource {
    // Keeps the SSH session alive for the lifetime of the SFTP channel
    _session: Session,
    sftp: Sftp,
    remote_dir: PathBuf,
    location: String,
}

impl SftpSource {
    /// Connect and authenticate with a password
    pub fn connect(config: &SourceConfig, password: &str) -> Result<Self> {
        let address = format!("{}:{}", config.server, config.port);
        info!("Connecting to {} as {}", address, config.username);

        let tcp = TcpStream::connect(&address)
            .map_err(|e| Error::remote_session(format!("cannot reach {}: {}", address, e)))?;

        let mut session = Session::new()?;
        session.set_tcp_stream(tcp);
        session.handshake()?;
        session.userauth_password(&config.username, password)?;

        if !session.authenticated() {
            return Err(Error::remote_session(format!(
                "authentication failed for {}",
                config.username
            )));
        }

        let sftp = session.sftp()?;
        debug!("SFTP channel open on {}", address);

        Ok(Self {
            _session: session,
            sftp,
            remote_dir: PathBuf::from(&config.remote_dir),
            location: format!("sftp://{}@{}/{}", config.username, address, config.remote_dir),
        })
    }
}

impl ReportSource for SftpSource {
    fn location(&self) -> String {
        self.location.clone()
    }

    fn list_reports(&self) -> Result<Vec<String>> {
        let entries = self.sftp.readdir(&self.remote_dir)?;

        Ok(entries
            .into_iter()
            .filter(|(_, stat)| stat.is_file())
            .filter_map(|(path, _)| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .map(|name| name.to_string())
            })
            .collect())
    }

    fn open_report(&self, name: &str) -> Result<Box<dyn Read>> {
        let path = self.remote_dir.join(Path::new(name));
        let file = self.sftp.open(&path)?;
        Ok(Box::new(file))
    }
}
