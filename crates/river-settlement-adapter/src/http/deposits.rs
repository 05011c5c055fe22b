/*
[INPUT]:  Deposit intents and deposit queries
[OUTPUT]: Invoices, deposits, and paginated deposit lists
[POS]:    HTTP layer - deposit endpoints
[UPDATE]: When deposit endpoints or pagination change
*/

use reqwest::Method;

use crate::http::client::page_query;
use crate::http::{Result, RiverClient};
use crate::types::{Deposit, DepositList, Invoice, LN, NewInvoiceRequest};

impl RiverClient {
    /// Request a new deposit invoice.
    ///
    /// POST /accounts/{account_id}/deposit_intents
    ///
    /// An empty network defaults to `LN`.
    pub async fn new_invoice(&self, amount: i64, label: &str, network: &str) -> Result<Invoice> {
        let body = NewInvoiceRequest {
            amount,
            label: label.to_string(),
            network: if network.is_empty() {
                LN.to_string()
            } else {
                network.to_string()
            },
        };
        let url = self.account_url("deposit_intents")?;
        let builder = self.json_body(self.request(Method::POST, url), &body)?;
        self.send_json(builder).await
    }

    /// Query a deposit by id.
    ///
    /// GET /accounts/{account_id}/deposits/{deposit_id}
    ///
    /// A deposit the server does not know about is reported as `Ok(None)`,
    /// not as an error.
    pub async fn get_deposit(&self, deposit_id: &str) -> Result<Option<Deposit>> {
        let url = self.account_url(&format!("deposits/{deposit_id}"))?;
        let builder = self.request(Method::GET, url);
        match self.send_json(builder).await {
            Ok(deposit) => Ok(Some(deposit)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Query a page of deposits (settled invoices).
    ///
    /// GET /accounts/{account_id}/deposits?limit={limit}&next_timestamp={cursor}
    ///
    /// Pass the previous page's `next_timestamp` back verbatim to continue;
    /// `None` (or zero) starts from the latest.
    pub async fn get_deposits(
        &self,
        limit: Option<i64>,
        next_timestamp: Option<i64>,
    ) -> Result<DepositList> {
        let url = self.account_url("deposits")?;
        let builder = self
            .request(Method::GET, url)
            .query(&page_query(limit, next_timestamp));
        self.send_json(builder).await
    }
}
