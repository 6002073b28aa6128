//! AWS SDK client setup (Imperative Shell).

use aws_sdk_dynamodb::config::Credentials;
use aws_sdk_dynamodb::types::TableStatus as SdkTableStatus;
use aws_sdk_dynamodb::Client;

use notes_core::table::TableStatus;

use crate::config::StoreConfig;

/// Creates a DynamoDB client with the given configuration.
///
/// Static credentials take precedence over the SDK default chain, which is
/// how DynamoDB Local is usually reached.
pub async fn create_client(config: &StoreConfig) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    if let Some(credentials) = &config.credentials {
        sdk_config_loader = sdk_config_loader.credentials_provider(Credentials::new(
            credentials.access_key_id.clone(),
            credentials.secret_access_key.clone(),
            credentials.session_token.clone(),
            None,
            "notes-config",
        ));
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}

/// Maps the SDK table status onto the domain status.
pub fn to_table_status(status: Option<&SdkTableStatus>) -> TableStatus {
    match status {
        Some(SdkTableStatus::Active) => TableStatus::Active,
        Some(SdkTableStatus::Creating) => TableStatus::Creating,
        Some(SdkTableStatus::Updating) => TableStatus::Updating,
        Some(SdkTableStatus::Deleting) => TableStatus::Deleting,
        _ => TableStatus::Unknown,
    }
}
