/*
[INPUT]:  BOLT-11 invoice strings
[OUTPUT]: Decoded invoices and fee estimates
[POS]:    HTTP layer - global lightning endpoints (not account-scoped)
[UPDATE]: When lightning endpoints or request bodies change
*/

use reqwest::Method;

use crate::http::{Result, RiverClient};
use crate::types::{DecodeInvoiceRequest, DecodedInvoice, EstimateFeeRequest, FeeEstimate};

impl RiverClient {
    /// Decode a BOLT-11 invoice via the API's node
    ///
    /// PUT /lightning/parse_invoice
    pub async fn decode_invoice(&self, invoice: &str) -> Result<DecodedInvoice> {
        let body = DecodeInvoiceRequest {
            destination: invoice.to_string(),
        };
        let url = self.global_url("lightning/parse_invoice")?;
        let builder = self.json_body(self.request(Method::PUT, url), &body)?;
        self.send_json(builder).await
    }

    /// Estimate the routing fee for paying an invoice
    ///
    /// PUT /lightning/estimate_fee
    pub async fn estimate_lightning_fee(&self, invoice: &str, amount: i64) -> Result<FeeEstimate> {
        let body = EstimateFeeRequest {
            destination: invoice.to_string(),
            amount,
        };
        let url = self.global_url("lightning/estimate_fee")?;
        let builder = self.json_body(self.request(Method::PUT, url), &body)?;
        self.send_json(builder).await
    }
}
