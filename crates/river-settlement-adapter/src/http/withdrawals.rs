/*
[INPUT]:  Withdrawal submissions and queries
[OUTPUT]: Withdrawals and paginated withdrawal lists
[POS]:    HTTP layer - withdrawal endpoints
[UPDATE]: When withdrawal endpoints or fee limit handling change
*/

use reqwest::Method;

use crate::http::client::page_query;
use crate::http::{Result, RiverClient};
use crate::types::{DEFAULT_FEE_LIMIT, Withdrawal, WithdrawalList};

impl RiverClient {
    /// Submit a withdrawal paying the given invoice.
    ///
    /// POST /accounts/{account_id}/withdrawals
    ///
    /// A zero fee limit is replaced with [`DEFAULT_FEE_LIMIT`] before the
    /// request is sent; the server treats the submitted limit as final.
    pub async fn new_withdrawal(&self, mut withdrawal: Withdrawal) -> Result<Withdrawal> {
        if withdrawal.details.fee_limit == 0 {
            withdrawal.details.fee_limit = DEFAULT_FEE_LIMIT;
        }
        let url = self.account_url("withdrawals")?;
        let builder = self.json_body(self.request(Method::POST, url), &withdrawal)?;
        self.send_json(builder).await
    }

    /// Query a withdrawal by id
    ///
    /// GET /accounts/{account_id}/withdrawals/{withdrawal_id}
    pub async fn get_withdrawal(&self, withdrawal_id: &str) -> Result<Withdrawal> {
        let url = self.account_url(&format!("withdrawals/{withdrawal_id}"))?;
        let builder = self.request(Method::GET, url);
        self.send_json(builder).await
    }

    /// Query a page of withdrawals.
    ///
    /// GET /accounts/{account_id}/withdrawals?limit={limit}&next_timestamp={cursor}
    pub async fn list_withdrawals(
        &self,
        limit: Option<i64>,
        next_timestamp: Option<i64>,
    ) -> Result<WithdrawalList> {
        let url = self.account_url("withdrawals")?;
        let builder = self
            .request(Method::GET, url)
            .query(&page_query(limit, next_timestamp));
        self.send_json(builder).await
    }
}
