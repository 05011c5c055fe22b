/*
[INPUT]:  Typed values returned by the adapter
[OUTPUT]: Plain-text output for the terminal
[POS]:    Presentation layer - display formatting
[UPDATE]: When output formats change
*/

use river_settlement_adapter::{
    Account, DecodedInvoice, Deposit, DepositList, FeeEstimate, Invoice, Webhook, Withdrawal,
    WithdrawalList,
};

pub fn print_account(account: &Account) {
    println!("--- Account: {} ---", account.id);
    println!("  Total Balance:     {} sats", account.balance);
    println!("  Available Balance: {} sats", account.available_balance);
    println!("  Reserved Balance:  {} sats", account.reserved_balance());
    println!("-----------------------------");
}

pub fn print_deposit_invoice(invoice: &Invoice) {
    println!("--- Deposit Invoice: {} ---", invoice.id);
    println!("  Network:    {}", invoice.network);
    println!("  Timestamp:  {}", invoice.timestamp);
    println!("  Invoice: {}", invoice.invoice);
    println!("-------------------------------------");
}

pub fn print_deposit(deposit: &Deposit) {
    println!("--- Deposit: {} ---", deposit.id);
    println!("  Amount:     {}", deposit.amount);
    println!("  State:      {}", deposit.state);
    println!("  Network:    {}", deposit.detail.network);
    println!("  Timestamp:  {}", deposit.timestamp);
    println!("  Invoice ID: {}", deposit.invoice.id);
    println!("  Invoice:    {}", deposit.invoice.invoice);
    println!("-------------------------------------");
}

pub fn print_deposit_list(page: &DepositList) {
    for deposit in &page.deposits {
        print_deposit(deposit);
    }
    println!("Next Timestamp: {}", page.next_timestamp);
    println!("-------------------------------------");
}

pub fn print_withdrawal(withdrawal: &Withdrawal) {
    println!("----- Withdrawal: {} -----", withdrawal.id);
    println!(
        "  Currency/Network: {}/{}",
        withdrawal.currency,
        withdrawal.network()
    );
    println!("  State:            {}", withdrawal.state);
    println!("  Invoice: {}", withdrawal.invoice());
    println!("  Fee Limit: {}", withdrawal.fee_limit());
    println!("  Fee Paid: {}", withdrawal.fee_paid);
    println!("  Timestamp: {}", withdrawal.timestamp);
    println!("-------------------------------------");
}

pub fn print_withdrawal_list(page: &WithdrawalList) {
    for withdrawal in &page.withdrawals {
        print_withdrawal(withdrawal);
    }
    println!("Next Timestamp: {}", page.next_timestamp);
    println!("-------------------------------------");
}

pub fn print_webhook(webhook: &Webhook) {
    println!("--- Webhook ---");
    println!("  Enabled: {}", webhook.enabled);
    println!("  URL:     {}", webhook.url);
    if !webhook.secret.is_empty() {
        println!("  Secret:  {}", webhook.secret);
    }
    println!("---------------");
}

pub fn print_decoded_invoice(decoded: &DecodedInvoice) {
    println!("--- Invoice ---");
    println!("  Amount: {}", decoded.amount);
    println!("  Destination: {}", decoded.node_id);
    println!("  Memo: {}", decoded.memo);
    println!("---------------");
}

pub fn print_fee_estimate(estimate: &FeeEstimate) {
    println!("--- Fee Estimate ---");
    println!("  Fee Estimate: {}", estimate.fee);
    println!("  Amount: {}", estimate.amount);
    println!("---------------");
}
