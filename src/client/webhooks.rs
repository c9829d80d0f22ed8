use crate::client::{endpoint, require_id, require_text, Client};
use crate::core::error::Result;
use crate::models::Webhook;
use serde::Serialize;

#[derive(Serialize)]
struct NewWebhook<'a> {
    list_id: u64,
    url: &'a str,
    processor_type: &'a str,
    configuration: &'a str,
}

impl Client {
    /// Webhooks, optionally restricted to one list.
    pub async fn webhooks(&self, list_id: Option<u64>) -> Result<Vec<Webhook>> {
        match list_id {
            Some(list_id) => {
                require_id("list_id", list_id)?;
                self.get(&endpoint("webhooks", &[("list_id", list_id.to_string())]))
                    .await
            }
            None => self.get("webhooks").await,
        }
    }

    pub async fn create_webhook(
        &self,
        list_id: u64,
        url: &str,
        processor_type: &str,
        configuration: &str,
    ) -> Result<Webhook> {
        require_id("list_id", list_id)?;
        require_text("url", url)?;
        let body = NewWebhook {
            list_id,
            url,
            processor_type,
            configuration,
        };
        self.post("webhooks", &body).await
    }

    /// Webhooks carry no revision; the delete is unconditional.
    pub async fn delete_webhook(&self, webhook: &Webhook) -> Result<()> {
        require_id("webhook.id", webhook.id)?;
        self.delete(&format!("webhooks/{}", webhook.id)).await
    }
}
