use tracing::info;

use super::{failed, SchoolMoney};
use crate::error::{ApiError, ApiResult};
use crate::models::{Collection, Contribution, Envelope, FinanceAccount, Page};
use crate::resources;
use crate::transport::Transport;

impl<T: Transport> SchoolMoney<T> {
    pub async fn get_finance_account(&self) -> ApiResult<FinanceAccount> {
        async {
            let value = resources::finance::get_finance_account(&self.transport).await?;
            let account =
                Envelope::<FinanceAccount>::from_value(value)?.require_data("finance account")?;
            info!("Finance account retrieved");
            Ok::<_, ApiError>(account)
        }
        .await
        .map_err(failed("Get finance account", "Failed to retrieve finance account."))
    }

    pub async fn list_collections(&self, page: u32, limit: u32) -> ApiResult<Page<Collection>> {
        async {
            let value = resources::finance::list_collections(&self.transport, page, limit).await?;
            let collections = Envelope::<Page<Collection>>::from_value(value)?
                .data
                .unwrap_or_default();
            info!("Retrieved {} collections", collections.count);
            Ok::<_, ApiError>(collections)
        }
        .await
        .map_err(failed("Get collections", "Failed to retrieve collections."))
    }

    pub async fn my_contributions(&self) -> ApiResult<Vec<Contribution>> {
        async {
            let value = resources::finance::my_contributions(&self.transport).await?;
            let contributions = Envelope::<Vec<Contribution>>::from_value(value)?
                .data
                .unwrap_or_default();
            Ok::<_, ApiError>(contributions)
        }
        .await
        .map_err(failed("Get contributions", "Failed to retrieve contributions."))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::config::ApiConfig;
    use crate::mock::MockTransport;
    use crate::services::SchoolMoney;

    #[tokio::test]
    async fn test_finance_account() {
        let transport = MockTransport::new(|_| {
            Ok(json!({ "data": { "id": 2, "IBAN": "PL00123", "balance": 15.5 } }))
        });
        let api = SchoolMoney::new(transport.clone(), ApiConfig::default());
        let account = api.get_finance_account().await.unwrap();
        assert_eq!(account.iban, "PL00123");
        assert_eq!(account.balance, 15.5);
        assert!(!account.is_treasurer_account);
        assert_eq!(transport.requests()[0].path, "/api/finance-account/");
    }

    #[tokio::test]
    async fn test_missing_finance_account() {
        let transport = MockTransport::new(|_| Ok(json!({ "data": null })));
        let api = SchoolMoney::new(transport, ApiConfig::default());
        let err = api.get_finance_account().await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected response: No finance account data returned from API"
        );
    }

    #[tokio::test]
    async fn test_collections_and_contributions() {
        let transport = MockTransport::new(|request| match request.path.as_str() {
            "/api/collection/list" => Ok(json!({
                "data": { "count": 1, "data": [{ "id": 1, "title": "Trip", "goal": 100, "totalCollected": 40 }] }
            })),
            _ => Ok(json!({ "data": [{ "id": 9, "amount": 20.0, "status": "PAID" }] })),
        });
        let api = SchoolMoney::new(transport, ApiConfig::default());

        let collections = api.list_collections(1, 10).await.unwrap();
        assert_eq!(collections.count, 1);
        assert_eq!(collections.data[0].progress(), 0.4);

        let contributions = api.my_contributions().await.unwrap();
        assert_eq!(contributions.len(), 1);
        assert_eq!(contributions[0].status, "PAID");
    }
}
