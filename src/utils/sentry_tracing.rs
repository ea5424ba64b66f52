use sentry::{
    Transaction,
    TransactionContext
};

/// Starts a Sentry transaction, only when trace logging is enabled.
pub fn start_trace_transaction(name: &str, operation: &str) -> Option<Transaction> {
    if log::max_level() >= log::LevelFilter::Trace {
        let ctx = TransactionContext::new(name, operation);
        Some(sentry::start_transaction(ctx))
    } else {
        None
    }
}

pub fn finish_trace_transaction(transaction: Option<Transaction>, result: &str) {
    if let Some(txn) = transaction {
        txn.set_tag("result", result);
        txn.finish();
    }
}
