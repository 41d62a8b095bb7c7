//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Acepta conexiones y atiende cada una en su propio thread. Con
//! `max_connections = 0` (por defecto) se crea un thread por conexión, sin
//! límite. Con `max_connections > 0` los threads salen de un pool fijo y,
//! si todos están ocupados, la conexión nueva se rechaza en el acto con un
//! 503: nunca queda esperando detrás de otra.

use crate::config::Config;
use crate::error::ServerError;
use crate::http::{Response, StatusCode};
use crate::router::Router;
use crate::server::connection::{Connection, ConnectionLimits};
use std::io::{self, Write};
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use threadpool::ThreadPool;

/// Tiempo máximo para escribir el 503 a una conexión rechazada
const REFUSAL_WRITE_TIMEOUT: Duration = Duration::from_secs(1);

/// Servidor HTTP/1.1 concurrente
pub struct Server {
    listener: TcpListener,
    router: Arc<Router>,
    limits: ConnectionLimits,
    pool: Option<ThreadPool>,
    max_connections: usize,
    active: Arc<AtomicUsize>,
}

/// Descuenta una conexión activa al terminar su job
struct ActiveGuard(Arc<AtomicUsize>);

impl ActiveGuard {
    fn acquire(active: &Arc<AtomicUsize>) -> Self {
        active.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(active))
    }
}

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl Server {
    /// Abre el puerto con las rutas por defecto
    pub fn bind(config: Config) -> Result<Self, ServerError> {
        let router = Router::with_default_routes(config.directory.clone());
        Self::with_router(config, router)
    }

    /// Abre el puerto con una tabla de rutas propia
    pub fn with_router(config: Config, router: Router) -> Result<Self, ServerError> {
        config.validate().map_err(ServerError::Config)?;

        let address = config.address();
        let listener = TcpListener::bind(&address).map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;

        let pool = (config.max_connections > 0)
            .then(|| ThreadPool::with_name("connection".to_string(), config.max_connections));

        Ok(Self {
            listener,
            router: Arc::new(router),
            limits: ConnectionLimits::from(&config),
            pool,
            max_connections: config.max_connections,
            active: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Dirección real en la que escucha (útil con puerto 0)
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Conexiones que se están atendiendo en este momento
    pub fn active_connections(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    /// Loop de aceptación; no retorna en operación normal
    pub fn run(self) -> Result<(), ServerError> {
        log::info!("[+] listening on {}", self.local_addr()?);

        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => self.spawn_connection(stream),
                Err(e) => log::error!("error accepting connection: {}", e),
            }
        }

        Ok(())
    }

    fn spawn_connection(&self, stream: TcpStream) {
        let peer = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        log::info!("new connection from {}", peer);

        // Solo el loop de aceptación incrementa el contador: el chequeo no
        // compite con otro acquire
        if self.pool.is_some() && self.active_connections() >= self.max_connections {
            refuse(stream, &peer, self.max_connections);
            return;
        }

        let guard = ActiveGuard::acquire(&self.active);
        let router = Arc::clone(&self.router);
        let limits = self.limits;
        let job = move || {
            let _guard = guard;
            let served = Connection::new(peer.clone(), stream, &router, limits).serve();
            log::debug!("[{}] closed after {} responses", peer, served);
        };

        match &self.pool {
            Some(pool) => pool.execute(job),
            None => {
                if let Err(e) = thread::Builder::new().name("connection".to_string()).spawn(job) {
                    log::error!("failed to spawn connection thread: {}", e);
                }
            }
        }
    }
}

/// Contesta 503 y cierra una conexión que no tiene worker libre
fn refuse(mut stream: TcpStream, peer: &str, max_connections: usize) {
    log::warn!(
        "[{}] all {} workers busy, refusing connection",
        peer,
        max_connections
    );

    let response = Response::new(StatusCode::SERVICE_UNAVAILABLE, "too many connections");
    let result = stream
        .set_write_timeout(Some(REFUSAL_WRITE_TIMEOUT))
        .and_then(|_| stream.write_all(&response.to_bytes()))
        .and_then(|_| stream.flush())
        .and_then(|_| stream.shutdown(Shutdown::Write));

    if let Err(e) = result {
        log::debug!("[{}] failed writing refusal: {}", peer, e);
    }
}
