use serde::{Deserialize, Serialize};

/// Operational snapshot of the relay. Building it never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayStatus {
    pub network: String,
    /// Checksummed signer address, or the "não configurado" placeholder.
    pub signer: String,
    pub contracts: ContractAddresses,
    pub environment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractAddresses {
    #[serde(rename = "glPET")]
    pub fungible: String,
    #[serde(rename = "glPETc")]
    pub non_fungible: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub network: String,
    pub wallet: String,
    pub contracts: ContractAddresses,
    pub environment: String,
}

impl From<RelayStatus> for HealthResponse {
    fn from(status: RelayStatus) -> Self {
        Self {
            status: "ok".to_string(),
            network: status.network,
            wallet: status.signer,
            contracts: status.contracts,
            environment: status.environment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_health_response_wire_shape() {
        let response = HealthResponse::from(RelayStatus {
            network: "Base Sepolia".to_string(),
            signer: "não configurado".to_string(),
            contracts: ContractAddresses {
                fungible: "0x35FbA5dE07ed5479c8a151b78013b8Fea0FE67B4".to_string(),
                non_fungible: "não configurado".to_string(),
            },
            environment: "development".to_string(),
        });

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({
                "status": "ok",
                "network": "Base Sepolia",
                "wallet": "não configurado",
                "contracts": {
                    "glPET": "0x35FbA5dE07ed5479c8a151b78013b8Fea0FE67B4",
                    "glPETc": "não configurado"
                },
                "environment": "development"
            })
        );
    }
}
