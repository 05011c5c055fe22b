/*
[INPUT]:  Webhook subscription management
[OUTPUT]: Webhook subscription state
[POS]:    HTTP layer - webhook endpoints
[UPDATE]: When webhook endpoints change
*/

use reqwest::Method;

use crate::http::{Result, RiverClient};
use crate::types::{SubscribeWebhookRequest, Webhook};

impl RiverClient {
    /// Subscribe the account to a webhook callback URL.
    ///
    /// POST /accounts/{account_id}/webhooks
    ///
    /// The signing secret is only ever returned by this call; store it if
    /// inbound events are to be verified.
    pub async fn subscribe_to_webhook(&self, callback_url: &str) -> Result<Webhook> {
        let body = SubscribeWebhookRequest {
            url: callback_url.to_string(),
        };
        let url = self.account_url("webhooks")?;
        let builder = self.json_body(self.request(Method::POST, url), &body)?;
        self.send_json(builder).await
    }

    /// Query the currently subscribed webhook. The secret is omitted from
    /// this response and left empty.
    ///
    /// GET /accounts/{account_id}/webhooks
    pub async fn get_subscribed_webhook(&self) -> Result<Webhook> {
        let url = self.account_url("webhooks")?;
        let builder = self.request(Method::GET, url);
        self.send_json(builder).await
    }

    /// Delete the existing webhook subscription
    ///
    /// DELETE /accounts/{account_id}/webhooks
    pub async fn delete_webhook(&self) -> Result<()> {
        let url = self.account_url("webhooks")?;
        let builder = self.request(Method::DELETE, url);
        self.send_empty(builder).await
    }
}
