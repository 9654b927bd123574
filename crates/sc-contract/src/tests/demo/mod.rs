mod ledger;
mod wallet;
