// System Layer
pub mod credential_gate;
pub mod local_model;
pub mod model;

pub use credential_gate::{CredentialGate, Credentials};
pub use local_model::LocalFsModel;
pub use model::{FsbModel, ModelEvent, Notifier};
