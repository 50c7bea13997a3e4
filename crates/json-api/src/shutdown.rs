//! Stop signals

use std::{fmt, io, time::Duration};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install interrupt handler: {0}")]
    Interrupt(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    Terminate(#[source] io::Error),
}

/// The signal that ended the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StopSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for StopSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Interrupt => "interrupt",
            Self::Terminate => "terminate",
        })
    }
}

#[cfg(unix)]
async fn terminated() -> Result<(), ShutdownSignalError> {
    signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(ShutdownSignalError::Terminate)?
        .recv()
        .await;

    Ok(())
}

/// Only Ctrl+C stops the server off Unix.
#[cfg(not(unix))]
async fn terminated() -> Result<(), ShutdownSignalError> {
    std::future::pending().await
}

async fn next_signal() -> Result<StopSignal, ShutdownSignalError> {
    tokio::select! {
        result = signal::ctrl_c() => {
            result.map_err(ShutdownSignalError::Interrupt)?;

            Ok(StopSignal::Interrupt)
        }
        result = terminated() => {
            result?;

            Ok(StopSignal::Terminate)
        }
    }
}

/// Wait for a stop signal, then let in-flight check-ins and orders finish
/// within `grace` before the listener closes.
pub(crate) async fn listen(
    handle: ServerHandle,
    grace: Option<Duration>,
) -> Result<StopSignal, ShutdownSignalError> {
    let stop = next_signal().await?;

    info!(
        signal = %stop,
        grace_seconds = grace.map(|grace| grace.as_secs()),
        "stopping showfloor api"
    );

    handle.stop_graceful(grace);

    Ok(stop)
}
