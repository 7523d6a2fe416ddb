//! Contract and network defaults for the GreenLoop tokens.

/// Public Base Sepolia RPC endpoint used when `BASE_RPC_URL` is not set.
pub const DEFAULT_RPC_URL: &str = "https://sepolia.base.org";

/// glPET (ERC-20) deployment used when `GLPET_CONTRACT_ADDRESS` is not set.
pub const DEFAULT_FUNGIBLE_CONTRACT_ADDRESS: &str = "0x35FbA5dE07ed5479c8a151b78013b8Fea0FE67B4";

/// Decimals assumed for glPET amounts unless `GLPET_DECIMALS` overrides it.
pub const DEFAULT_FUNGIBLE_DECIMALS: u8 = 18;

pub const DEFAULT_NETWORK_NAME: &str = "Base Sepolia";

pub const DEFAULT_ENVIRONMENT: &str = "development";

pub const FUNGIBLE_ABI_FILE: &str = "glPET-abi.json";

pub const NON_FUNGIBLE_ABI_FILE: &str = "glPETc-abi.json";

/// Directories searched for ABI files, relative to the working directory.
pub const ABI_SEARCH_DIRS: &[&str] = &["abi", "api/abi", "src/abi", "backend/abi"];

/// Function the glPET ABI must declare.
pub const FUNGIBLE_MINT_SIGNATURE: &str = "mint(address,uint256)";

/// Function the glPETc ABI must declare.
pub const NON_FUNGIBLE_MINT_SIGNATURE: &str = "safeMint(address,string)";

pub const DECIMALS_SIGNATURE: &str = "decimals()";

/// Used when the glPET ABI does not declare `decimals`.
pub const DECIMALS_FALLBACK_DECLARATION: &str = "function decimals() view returns (uint8)";

/// Standard ERC-721 transfer, used when the glPETc ABI does not declare one.
pub const ERC721_TRANSFER_DECLARATION: &str =
    "event Transfer(address indexed from, address indexed to, uint256 indexed tokenId)";

pub const TRANSFER_EVENT: &str = "Transfer";

pub const TOKEN_ID_PARAM: &str = "tokenId";

/// Placeholder reported wherever a value has not been configured.
pub const UNCONFIGURED: &str = "não configurado";
