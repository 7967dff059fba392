use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Action {
    ConnectWallet,
    WalletDetected,
    WalletMissing,
    /// Carries the first account address the provider granted.
    AccountConnected(String),
    Error(String),
}
