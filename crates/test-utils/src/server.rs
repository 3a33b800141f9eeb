use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use tasksort::config::{ConfigFile, RawConfigFile};
use tasksort::server::serve_on;
use tasksort::service::TaskService;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A sorting server bound to an ephemeral local port.
///
/// The server shuts down when this handle is dropped.
pub struct TestServer {
    addr: SocketAddr,
    _shutdown: oneshot::Sender<()>,
}

impl TestServer {
    pub fn url(&self, route: &str) -> String {
        format!("http://{}{}", self.addr, route)
    }
}

/// Config with default settings except for the request body limit.
pub fn config_with_body_limit(body_limit_bytes: usize) -> Result<ConfigFile, Box<dyn Error>> {
    let mut raw = RawConfigFile::default();
    raw.server.body_limit_bytes = body_limit_bytes;
    Ok(ConfigFile::try_from(raw)?)
}

/// Start a server with the default config.
pub async fn spawn_server(service: Arc<dyn TaskService>) -> Result<TestServer, Box<dyn Error>> {
    spawn_server_with(service, ConfigFile::default()).await
}

/// Start a server with `config`; its bind address is replaced by port 0.
pub async fn spawn_server_with(
    service: Arc<dyn TaskService>,
    config: ConfigFile,
) -> Result<TestServer, Box<dyn Error>> {
    crate::init_tracing();

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (tx, rx) = oneshot::channel::<()>();
    let config = config.with_bind_addr(addr);

    tokio::spawn(async move {
        let shutdown = async {
            let _ = rx.await;
        };
        if let Err(e) = serve_on(listener, &config, service, shutdown).await {
            eprintln!("test server failed: {e}");
        }
    });

    Ok(TestServer {
        addr,
        _shutdown: tx,
    })
}
