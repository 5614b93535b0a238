// [apps/api-server/src/services/export.rs]
//! Dossier export encoding (§4.4). JSON re-serializes the dossier in its
//! canonical field order; CSV produces one section per entity with a blank
//! line between sections; PDF is a deliberate stub.

use crate::errors::ApiError;
use crate::validation::ExportFormat;
use sentinel_domain_models::{CompleteDossier, ExportPayload};

pub fn export(dossier: &CompleteDossier, format: ExportFormat) -> Result<ExportPayload, ApiError> {
    match format {
        ExportFormat::Json => Ok(ExportPayload::Json(Box::new(dossier.clone()))),
        ExportFormat::Csv => Ok(ExportPayload::Csv(render_csv(dossier)?)),
        ExportFormat::Pdf => Err(ApiError::Unimplemented),
    }
}

fn render_csv(dossier: &CompleteDossier) -> Result<String, ApiError> {
    let mut out = String::new();

    write_section(&mut out, "cadastral", |w| {
        w.write_record(["company_id", "legal_name", "opening_date", "capital", "primary_activity_code", "cadastral_status"])?;
        w.write_record([
            dossier.supplier.id.as_str(),
            dossier.supplier.legal_name.as_str(),
            &dossier.supplier.opening_date.to_string(),
            &dossier.supplier.capital.as_decimal().to_string(),
            dossier.supplier.primary_activity_code.as_str(),
            dossier.supplier.cadastral_status.as_str(),
        ])
    })?;

    write_section(&mut out, "contracts", |w| {
        w.write_record(["id", "org_code", "value", "subject", "tender_number", "signing_date", "validity_date"])?;
        for contract in &dossier.contracts {
            w.write_record([
                contract.id.as_str(),
                contract.org_code.as_str(),
                &contract.value.as_decimal().to_string(),
                contract.subject.as_str(),
                contract.tender_number.as_deref().unwrap_or(""),
                &contract.signing_date.to_string(),
                &contract.validity_date.map(|d| d.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    })?;

    write_section(&mut out, "partners", |w| {
        w.write_record(["person_id_hash", "name", "qualification", "is_public_servant", "is_sanctioned"])?;
        for partner in &dossier.partners {
            w.write_record([
                partner.id.as_str(),
                partner.name.as_str(),
                partner.qualification.as_str(),
                &partner.is_public_servant.to_string(),
                &partner.is_sanctioned.to_string(),
            ])?;
        }
        Ok(())
    })?;

    write_section(&mut out, "sanctions", |w| {
        w.write_record(["id", "kind", "sanctioning_body", "reason", "start_date", "end_date"])?;
        for sanction in &dossier.sanctions {
            w.write_record([
                sanction.id.as_str(),
                sanction.kind.as_str(),
                sanction.sanctioning_body.as_str(),
                sanction.reason.as_str(),
                &sanction.start_date.to_string(),
                &sanction.end_date.map(|d| d.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    })?;

    write_section(&mut out, "donations", |w| {
        w.write_record(["id", "candidate_name", "candidate_party", "amount", "election_year", "resource_type"])?;
        for donation in &dossier.donations {
            w.write_record([
                donation.id.as_str(),
                donation.candidate.name.as_str(),
                donation.candidate.party.as_str(),
                &donation.amount.as_decimal().to_string(),
                &donation.election_year.to_string(),
                donation.resource_type.as_str(),
            ])?;
        }
        Ok(())
    })?;

    write_section(&mut out, "alerts", |w| {
        w.write_record(["kind", "severity", "description", "detected_at"])?;
        for alert in &dossier.alerts {
            w.write_record([alert.kind.as_str(), alert.severity.as_str(), alert.description.as_str(), &alert.detected_at.to_rfc3339()])?;
        }
        Ok(())
    })?;

    Ok(out)
}

fn write_section(
    out: &mut String,
    name: &str,
    body: impl FnOnce(&mut csv::Writer<Vec<u8>>) -> Result<(), csv::Error>,
) -> Result<(), ApiError> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
    body(&mut writer).map_err(|e| ApiError::Store(sentinel_infra_store::StoreError::Mapping(format!("csv section '{name}' failed: {e}"))))?;
    let bytes = writer.into_inner().map_err(|e| ApiError::Store(sentinel_infra_store::StoreError::Mapping(e.to_string())))?;
    let section = String::from_utf8(bytes).map_err(|e| ApiError::Store(sentinel_infra_store::StoreError::Mapping(e.to_string())))?;

    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&section);
    Ok(())
}
