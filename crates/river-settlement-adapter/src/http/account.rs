/*
[INPUT]:  Account-scoped balance queries
[OUTPUT]: Account balances
[POS]:    HTTP layer - account endpoint
[UPDATE]: When the account resource gains new operations
*/

use reqwest::Method;

use crate::http::{Result, RiverClient};
use crate::types::Account;

impl RiverClient {
    /// Query the account's balance and available balance
    ///
    /// GET /accounts/{account_id}
    pub async fn get_account(&self) -> Result<Account> {
        let url = self.account_url("")?;
        let builder = self.request(Method::GET, url);
        self.send_json(builder).await
    }
}
