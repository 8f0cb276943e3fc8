use std::sync::Arc;

use tracing::{error, info};

use crate::config::{ConfigError, ConsoleConfig};
use crate::forms::{DeleteForm, LookupForm, UpdateForm, UploadForm};
use crate::framework::{Confirm, FormAction, FormActor, FormClient};
use crate::transport::{HttpTransport, Transport, TransportError};

/// Queue depth of each form's request channel.
const FORM_BUFFER: usize = 8;

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("Form task failed: {0}")]
    Task(String),
}

/// The running set of product forms.
///
/// `ProductConsole` is responsible for:
/// - **Lifecycle Management**: Starting one actor task per form and stopping them
/// - **Dependency Wiring**: Handing every form the same transport and confirmer
///
/// # Example
///
/// ```ignore
/// let console = ProductConsole::connect(&ConsoleConfig::from_env()?, Arc::new(AlwaysConfirm))?;
///
/// let snapshot = console.lookup.submit(LookupInput::new("7")).await?;
/// println!("{}", snapshot.status.text);
///
/// console.shutdown().await?;
/// ```
pub struct ProductConsole {
    pub upload: FormClient<UploadForm>,
    pub lookup: FormClient<LookupForm>,
    pub update: FormClient<UpdateForm>,
    pub delete: FormClient<DeleteForm>,

    /// Task handles for all running forms (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ProductConsole {
    /// Spawns every form against `transport`. Must be called inside a Tokio runtime.
    pub fn new(transport: Arc<dyn Transport>, confirm: Arc<dyn Confirm>) -> Self {
        let mut handles = Vec::with_capacity(4);
        let upload = spawn(UploadForm, &transport, &confirm, &mut handles);
        let lookup = spawn(LookupForm, &transport, &confirm, &mut handles);
        let update = spawn(UpdateForm, &transport, &confirm, &mut handles);
        let delete = spawn(DeleteForm, &transport, &confirm, &mut handles);

        Self {
            upload,
            lookup,
            update,
            delete,
            handles,
        }
    }

    /// Validates `config` and starts every form against the HTTP API it names.
    pub fn connect(config: &ConsoleConfig, confirm: Arc<dyn Confirm>) -> Result<Self, ConsoleError> {
        config.validate()?;
        let transport = HttpTransport::new(config)?;
        info!(base_url = transport.base_url(), "Connecting");
        Ok(Self::new(Arc::new(transport), confirm))
    }

    /// Drops every client and waits for the form tasks to finish.
    ///
    /// Clones of the clients handed out earlier keep their form alive, so drop
    /// them first.
    pub async fn shutdown(self) -> Result<(), ConsoleError> {
        info!("Shutting down forms...");

        drop(self.upload);
        drop(self.lookup);
        drop(self.update);
        drop(self.delete);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Form task failed: {:?}", e);
                return Err(ConsoleError::Task(e.to_string()));
            }
        }

        info!("Shutdown complete.");
        Ok(())
    }
}

fn spawn<A: FormAction>(
    action: A,
    transport: &Arc<dyn Transport>,
    confirm: &Arc<dyn Confirm>,
    handles: &mut Vec<tokio::task::JoinHandle<()>>,
) -> FormClient<A> {
    let (actor, client) = FormActor::new(FORM_BUFFER, action, transport.clone(), confirm.clone());
    handles.push(tokio::spawn(actor.run()));
    client
}
