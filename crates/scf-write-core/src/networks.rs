/// Display name for a chain id, used in chain-mismatch warnings.
pub fn network_display_name(chain_id: u64) -> String {
    let name = match chain_id {
        1 => "Ethereum Mainnet",
        3 => "Ropsten Testnet",
        4 => "Rinkeby Testnet",
        5 => "Goerli Testnet",
        10 => "Optimism",
        42 => "Kovan Testnet",
        56 => "BNB Smart Chain",
        77 => "POA Sokol Testnet",
        99 => "POA Core",
        100 => "Gnosis Chain",
        137 => "Polygon Mainnet",
        324 => "zkSync Era",
        8453 => "Base",
        17000 => "Holesky Testnet",
        42161 => "Arbitrum One",
        43114 => "Avalanche C-Chain",
        59144 => "Linea",
        534352 => "Scroll",
        11155111 => "Sepolia Testnet",
        other => return format!("Unknown network ({other})"),
    };
    name.to_owned()
}
