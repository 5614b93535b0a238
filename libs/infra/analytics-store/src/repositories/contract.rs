// [libs/infra/analytics-store/src/repositories/contract.rs]
use crate::client::StoreClient;
use crate::errors::StoreError;
use crate::mapping::map_contract_row;
use libsql::params;
use sentinel_domain_models::Contract;
use tracing::instrument;

/// Optional narrowing for the contracts listing capability (§4.3). Both
/// fields are `AND`-combined when present.
#[derive(Debug, Default, Clone)]
pub struct ContractFilter {
    pub supplier_id: Option<String>,
    pub org_code: Option<String>,
}

pub struct ContractRepository {
    client: StoreClient,
}

impl ContractRepository {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn contracts(
        &self,
        filter: &ContractFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Contract>, StoreError> {
        let conn = self.client.connection()?;

        let mut sql = String::from(
            "SELECT id, supplier_id, org_code, value, subject, tender_number, signing_date, validity_date
             FROM contracts WHERE 1 = 1",
        );
        if filter.supplier_id.is_some() {
            sql.push_str(" AND supplier_id = ?1");
        }
        if filter.org_code.is_some() {
            sql.push_str(" AND org_code = ?2");
        }
        sql.push_str(" ORDER BY signing_date DESC LIMIT ?3 OFFSET ?4");

        let mut rows = conn
            .query(
                &sql,
                params![
                    filter.supplier_id.clone().unwrap_or_default(),
                    filter.org_code.clone().unwrap_or_default(),
                    limit,
                    offset
                ],
            )
            .await?;

        let mut contracts = Vec::new();
        while let Some(row) = rows.next().await? {
            contracts.push(map_contract_row(&row)?);
        }
        Ok(contracts)
    }

    #[instrument(skip(self))]
    pub async fn contracts_for(&self, supplier_id: &str) -> Result<Vec<Contract>, StoreError> {
        let conn = self.client.connection()?;
        let mut rows = conn
            .query(
                "SELECT id, supplier_id, org_code, value, subject, tender_number, signing_date, validity_date
                 FROM contracts WHERE supplier_id = ?1 ORDER BY signing_date ASC",
                params![supplier_id],
            )
            .await?;

        let mut contracts = Vec::new();
        while let Some(row) = rows.next().await? {
            contracts.push(map_contract_row(&row)?);
        }
        Ok(contracts)
    }
}
