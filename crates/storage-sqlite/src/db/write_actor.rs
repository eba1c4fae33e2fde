use std::any::Any;

use diesel::SqliteConnection;
use log::{debug, error};
use tokio::sync::{mpsc, oneshot};

use super::DbPool;
use crate::errors::StorageError;
use streakwise_core::errors::{Error, Result};

// A job runs on the writer's connection and returns a core Result.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;
type AnyBox = Box<dyn Any + Send + 'static>;
type Envelope = (Job<AnyBox>, oneshot::Sender<Result<AnyBox>>);

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<Envelope>,
}

impl WriteHandle {
    /// Executes `job` inside an immediate transaction on the writer's
    /// dedicated connection and waits for its result.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as AnyBox)),
                ret_tx,
            ))
            .await
            .map_err(|_| {
                Error::from(StorageError::WriterUnavailable(
                    "writer actor has stopped".to_string(),
                ))
            })?;

        let boxed = ret_rx.await.map_err(|_| {
            Error::from(StorageError::WriterUnavailable(
                "writer actor dropped the reply".to_string(),
            ))
        })??;

        boxed.downcast::<T>().map(|v| *v).map_err(|_| {
            Error::from(StorageError::WriterUnavailable(
                "unexpected result type from writer actor".to_string(),
            ))
        })
    }
}

/// Spawns a background task that owns one pooled connection and applies
/// write jobs serially.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<Envelope>(1024);

    tokio::spawn(async move {
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                // Dropping `rx` makes every exec() report WriterUnavailable.
                error!("Writer actor could not acquire a connection: {}", e);
                return;
            }
        };

        while let Some((job, reply_tx)) = rx.recv().await {
            let result: Result<AnyBox> = conn
                .immediate_transaction::<_, StorageError, _>(|c| {
                    job(c).map_err(StorageError::from)
                })
                .map_err(Error::from);

            // The caller may have gone away (cancelled request).
            let _ = reply_tx.send(result);
        }
        debug!("Writer actor shutting down");
    });

    WriteHandle { tx }
}
