//! leaveline-core: leave-policy advisor core.
//!
//! Policy prompt catalog, canned response set, mock/live dispatch, upstream
//! chat-completion client, and the request handler that ties them behind
//! ordered precondition checks. The gateway add-on exposes this over HTTP.

mod config;
mod directory;
mod dispatch;
mod error;
mod handler;
mod mock;
pub mod prompts;
mod types;
mod upstream;

pub use config::AdvisorConfig;
pub use directory::{Account, AccountDirectory};
pub use dispatch::{CompletionBackend, Dispatcher};
pub use error::{AdvisorError, AdvisorResult};
pub use handler::LeaveAdvisor;
pub use mock::mock_response;
pub use types::{
    CredentialClass, GenerationRequest, Jurisdiction, Mode, SENTINEL_CREDENTIAL,
};
pub use upstream::UpstreamClient;
