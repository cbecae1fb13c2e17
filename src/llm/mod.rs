pub mod azure;

pub use azure::{AZURE_DEPLOYMENT_NAME, AZURE_MODEL_VERSION, AzureChatModel};
