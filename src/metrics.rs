//! Derived-metrics computation for bidding records.
//!
//! Pure and deterministic: everything here is a function of the record's raw
//! fields. All derived fields are refreshed together in one pass; recomputing
//! only "related" metrics is not allowed because the lead times share date
//! inputs and must stay mutually consistent.

use chrono::NaiveDate;

use crate::domain::BiddingRecord;

/// Absolute number of whole days between two calendar dates.
///
/// Returns `0` when either date is unset. Unknown input yields zero by
/// policy; a missing milestone is not an error.
pub fn days_between(a: Option<NaiveDate>, b: Option<NaiveDate>) -> i64 {
    match (a, b) {
        (Some(a), Some(b)) => (b - a).num_days().abs(),
        _ => 0,
    }
}

/// Ratio of `part` to `whole` as a percentage, `0.0` when `whole` is not
/// positive. The zero-guard keeps empty records NaN-free.
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        (part / whole) * 100.0
    } else {
        0.0
    }
}

/// Recomputes every derived field of `record` from its raw fields.
///
/// Covers the financial metrics (saving and saving percentage), the failed
/// item percentage, the six lead-time day counts, and the indicator lead
/// time. The indicator is defined as `days_between(inicioCCA,
/// resultadoFinal)` and therefore always equals `ccaFinal`; both fields are
/// kept for compatibility with the persisted format.
pub fn refresh_derived(record: &mut BiddingRecord) {
    record.valor_saving = record.valor_referencia - record.valor_disputa;
    record.saving_percent = percent_of(record.valor_saving, record.valor_referencia);

    record.percent_itens_fracassados = if record.itens_solicitados > 0 {
        (record.itens_fracassados as f64 / record.itens_solicitados as f64) * 100.0
    } else {
        0.0
    };

    record.dias_inicio_licitacao = days_between(record.inicio_suprimentos, record.data_disputa);
    record.dias_inicio_cca_publicacao = days_between(record.inicio_cca, record.publicacao);
    record.dias_publicacao_disputa = days_between(record.publicacao, record.data_disputa);
    record.lead_time_orquestra = days_between(record.inicio_suprimentos, record.publicacao);
    record.inicio_suprimentos_final = days_between(record.inicio_suprimentos, record.resultado_final);
    record.cca_final = days_between(record.inicio_cca, record.resultado_final);

    // Headline KPI: same formula as cca_final, surfaced separately.
    record.lead_time_indicador = days_between(record.inicio_cca, record.resultado_final);
}
