//! OpenAI-compatible client configuration.

use async_openai::{config::OpenAIConfig, Client};

/// Create a client bound to an OpenAI-compatible server.
///
/// The client library appends the API path (e.g. `/chat/completions`) to
/// `base_url`. No timeout is set; the HTTP layer default applies.
pub fn create_client(base_url: &str, api_key: &str) -> Client<OpenAIConfig> {
    let config = OpenAIConfig::new()
        .with_api_base(base_url)
        .with_api_key(api_key);

    Client::with_config(config)
}
