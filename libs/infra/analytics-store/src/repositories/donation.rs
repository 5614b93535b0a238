// [libs/infra/analytics-store/src/repositories/donation.rs]
use crate::client::StoreClient;
use crate::errors::StoreError;
use crate::mapping::map_donation_row;
use libsql::params;
use sentinel_domain_models::Donation;
use tracing::instrument;

pub struct DonationRepository {
    client: StoreClient,
}

impl DonationRepository {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Donations made either by the supplier itself or by any of its current
    /// or former partners (§4.3 `donationsFor`, used by the strawman and
    /// donation-to-award detectors).
    #[instrument(skip(self))]
    pub async fn donations_for(&self, supplier_id: &str) -> Result<Vec<Donation>, StoreError> {
        let conn = self.client.connection()?;
        let mut rows = conn
            .query(
                "SELECT d.id, d.supplier_id, d.partner_id_hash, d.candidate_name, d.candidate_party,
                        d.candidate_office, d.amount, d.election_year, d.resource_type
                 FROM donations d
                 WHERE d.supplier_id = ?1
                    OR d.partner_id_hash IN (SELECT partner_id_hash FROM ownership_links WHERE supplier_id = ?1)
                 ORDER BY d.election_year DESC",
                params![supplier_id],
            )
            .await?;

        let mut donations = Vec::new();
        while let Some(row) = rows.next().await? {
            donations.push(map_donation_row(&row)?);
        }
        Ok(donations)
    }
}
