// [libs/infra/analytics-store/src/repositories/partner.rs]
use crate::client::StoreClient;
use crate::errors::StoreError;
use crate::mapping::map_partner_row;
use libsql::params;
use sentinel_domain_models::{Partner, PersonIdHash};
use std::collections::HashMap;
use tracing::instrument;

pub struct PartnerRepository {
    client: StoreClient,
}

impl PartnerRepository {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Partners of `supplier_id`, with `qualification` taken from the
    /// `ownership_links` row that ties them to this particular supplier and
    /// `gov_supplier_count` computed as the number of distinct suppliers the
    /// partner holds any link to, government-wide (§4.3 `partnersOf`).
    #[instrument(skip(self))]
    pub async fn partners_of(&self, supplier_id: &str) -> Result<Vec<Partner>, StoreError> {
        let conn = self.client.connection()?;
        let mut rows = conn
            .query(
                "SELECT p.person_id_hash, p.name, l.qualification, p.is_public_servant,
                        p.employing_body, p.is_sanctioned,
                        (SELECT COUNT(DISTINCT supplier_id) FROM ownership_links WHERE partner_id_hash = p.person_id_hash)
                 FROM ownership_links l
                 JOIN partner_profiles p ON p.person_id_hash = l.partner_id_hash
                 WHERE l.supplier_id = ?1
                 ORDER BY p.name ASC",
                params![supplier_id],
            )
            .await?;

        let mut partners = Vec::new();
        while let Some(row) = rows.next().await? {
            partners.push(map_partner_row(&row)?);
        }
        Ok(partners)
    }

    /// Ages for partners of `supplier_id` where `age_years` was captured by
    /// the ingestion pipeline. Missing ages are simply absent from the map;
    /// the rule engine treats an absent entry as unknown, never as zero
    /// (§4.2 `STRAWMAN_BUNDLE`).
    #[instrument(skip(self))]
    pub async fn partner_ages_of(&self, supplier_id: &str) -> Result<HashMap<PersonIdHash, u32>, StoreError> {
        let conn = self.client.connection()?;
        let mut rows = conn
            .query(
                "SELECT p.person_id_hash, p.age_years
                 FROM ownership_links l
                 JOIN partner_profiles p ON p.person_id_hash = l.partner_id_hash
                 WHERE l.supplier_id = ?1 AND p.age_years IS NOT NULL",
                params![supplier_id],
            )
            .await?;

        let mut ages = HashMap::new();
        while let Some(row) = rows.next().await? {
            let hash: String = row.get(0)?;
            let age: i64 = row.get(1)?;
            ages.insert(PersonIdHash::new(hash), age as u32);
        }
        Ok(ages)
    }

    /// Ids of other suppliers sharing at least one partner with `supplier_id`
    /// (§4.2 `TENDER_ROTATION`'s relatedness test).
    #[instrument(skip(self))]
    pub async fn supplier_ids_sharing_partners(&self, supplier_id: &str) -> Result<Vec<String>, StoreError> {
        let conn = self.client.connection()?;
        let mut rows = conn
            .query(
                "SELECT DISTINCT l2.supplier_id
                 FROM ownership_links l1
                 JOIN ownership_links l2 ON l2.partner_id_hash = l1.partner_id_hash
                 WHERE l1.supplier_id = ?1 AND l2.supplier_id != ?1",
                params![supplier_id],
            )
            .await?;

        let mut ids = Vec::new();
        while let Some(row) = rows.next().await? {
            ids.push(row.get::<String>(0)?);
        }
        Ok(ids)
    }
}
