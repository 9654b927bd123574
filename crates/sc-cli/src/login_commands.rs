use clap::Subcommand;

#[derive(Subcommand)]
pub enum LoginCommands {
    /// Log in by registered name
    Name { name: String },
    /// Log in by name after connecting the wallet
    Wallet { name: String },
    /// Log in with a recovery code
    Code { code: String },
    /// Log in with a name and its recovery code
    Credentials { name: String, code: String },
}
