//! Record creation and field editing.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{BiddingRecord, StatusDisputa};
use crate::metrics;

/// A raw field value after input coercion.
///
/// Numeric inputs arrive as [`FieldValue::Number`] (parse failures coerce to
/// zero, see [`FieldValue::number_from_str`]), checkboxes as
/// [`FieldValue::Flag`], dates as [`FieldValue::Date`], everything else as
/// [`FieldValue::Text`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Flag(bool),
    Date(Option<NaiveDate>),
}

impl FieldValue {
    /// Coerces numeric form input; non-numeric text becomes `0.0`.
    pub fn number_from_str(raw: &str) -> Self {
        FieldValue::Number(raw.trim().parse().unwrap_or(0.0))
    }

    /// Coerces date form input; an empty or unparseable value is unset.
    pub fn date_from_str(raw: &str) -> Self {
        FieldValue::Date(NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok())
    }
}

/// Stateless helpers for creating and editing bidding records.
pub struct RecordService;

impl RecordService {
    /// Builds a new record from the supplied raw fields: fresh id, one full
    /// derived-field refresh.
    pub fn create(draft: BiddingRecord) -> BiddingRecord {
        let mut record = draft;
        record.id = Uuid::new_v4();
        metrics::refresh_derived(&mut record);
        record
    }

    /// Returns a copy of `record` with exactly one field overwritten and all
    /// derived fields refreshed. The input is never mutated.
    ///
    /// Fields are addressed by wire name. Unknown names and type-mismatched
    /// values are ignored rather than rejected; out-of-range values are
    /// accepted as-is. Derived fields and `id` cannot be targeted.
    pub fn apply_field_change(
        record: &BiddingRecord,
        field: &str,
        value: FieldValue,
    ) -> BiddingRecord {
        let mut updated = record.clone();
        Self::assign(&mut updated, field, value);
        metrics::refresh_derived(&mut updated);
        updated
    }

    fn assign(record: &mut BiddingRecord, field: &str, value: FieldValue) {
        use FieldValue::{Date, Flag, Number, Text};
        match (field, value) {
            ("entidade", Text(v)) => record.entidade = v,
            ("numDisputa", Text(v)) => record.num_disputa = v,
            ("numProcesso", Text(v)) => record.num_processo = v,
            ("dataDisputa", Date(v)) => record.data_disputa = v,
            ("mes", Text(v)) => record.mes = v,
            ("ano", Text(v)) => record.ano = v,
            ("objeto", Text(v)) => record.objeto = v,
            ("categoria", Text(v)) => record.categoria = v,
            ("responsavelTecnico", Text(v)) => record.responsavel_tecnico = v,
            ("gestorImediato", Text(v)) => record.gestor_imediato = v,
            ("regulamento", Text(v)) => record.regulamento = v,
            ("registroPreco", Flag(v)) => record.registro_preco = v,
            ("minuta", Flag(v)) => record.minuta = v,
            ("tipo", Text(v)) => record.tipo = v,
            ("metaDias", Number(v)) => record.meta_dias = v as i64,
            ("statusDisputa", Text(v)) => {
                // An unrecognised label leaves the status unchanged.
                if let Ok(status) = v.parse::<StatusDisputa>() {
                    record.status_disputa = status;
                }
            }
            ("participantes", Number(v)) => record.participantes = v as i64,
            ("valorReferencia", Number(v)) => record.valor_referencia = v,
            ("valorDisputa", Number(v)) => record.valor_disputa = v,
            ("itensSolicitados", Number(v)) => record.itens_solicitados = v as i64,
            ("itensLicitados", Number(v)) => record.itens_licitados = v as i64,
            ("itensFracassados", Number(v)) => record.itens_fracassados = v as i64,
            ("statusSucesso", Text(v)) => record.status_sucesso = v,
            ("observacao", Text(v)) => record.observacao = v,
            ("motivoCancelamento", Text(v)) => record.motivo_cancelamento = v,
            ("inicioSuprimentos", Date(v)) => record.inicio_suprimentos = v,
            ("inicioCCA", Date(v)) => record.inicio_cca = v,
            ("publicacao", Date(v)) => record.publicacao = v,
            ("resultadoFinal", Date(v)) => record.resultado_final = v,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn create_assigns_fresh_id_and_computes_metrics() {
        let mut draft = BiddingRecord::template();
        let stale_id = draft.id;
        draft.valor_referencia = 500.0;
        draft.valor_disputa = 400.0;
        let record = RecordService::create(draft);
        assert_ne!(record.id, stale_id);
        assert_eq!(record.valor_saving, 100.0);
        assert_eq!(record.saving_percent, 20.0);
    }

    #[test]
    fn apply_field_change_refreshes_all_derived_fields() {
        let mut record = BiddingRecord::template();
        record.inicio_cca = date(2024, 1, 1);
        record.resultado_final = date(2024, 1, 31);
        let updated = RecordService::apply_field_change(
            &record,
            "valorReferencia",
            FieldValue::Number(10_000.0),
        );
        // A money edit still refreshes the lead times.
        assert_eq!(updated.lead_time_indicador, 30);
        assert_eq!(updated.cca_final, 30);
        assert_eq!(updated.valor_saving, 10_000.0);
        assert_eq!(updated.saving_percent, 100.0);
    }

    #[test]
    fn apply_field_change_never_mutates_the_input() {
        let record = BiddingRecord::template();
        let before = record.clone();
        let _ = RecordService::apply_field_change(&record, "objeto", FieldValue::Text("X".into()));
        assert_eq!(record, before);
    }

    #[test]
    fn apply_field_change_is_idempotent() {
        let record = BiddingRecord::template();
        let once = RecordService::apply_field_change(
            &record,
            "inicioCCA",
            FieldValue::date_from_str("2024-01-01"),
        );
        let twice = RecordService::apply_field_change(
            &once,
            "inicioCCA",
            FieldValue::date_from_str("2024-01-01"),
        );
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_field_is_ignored() {
        let record = BiddingRecord::template();
        let updated =
            RecordService::apply_field_change(&record, "inexistente", FieldValue::Number(9.0));
        assert_eq!(updated, record);
    }

    #[test]
    fn mismatched_value_type_is_ignored() {
        let mut record = BiddingRecord::template();
        record.valor_referencia = 123.0;
        let updated = RecordService::apply_field_change(
            &record,
            "valorReferencia",
            FieldValue::Text("abc".into()),
        );
        assert_eq!(updated.valor_referencia, 123.0);
    }

    #[test]
    fn status_label_parses_and_unknown_label_keeps_status() {
        let record = BiddingRecord::template();
        let updated = RecordService::apply_field_change(
            &record,
            "statusDisputa",
            FieldValue::Text("CONCLUÍDA".into()),
        );
        assert_eq!(updated.status_disputa, StatusDisputa::Concluida);
        let kept = RecordService::apply_field_change(
            &updated,
            "statusDisputa",
            FieldValue::Text("NADA".into()),
        );
        assert_eq!(kept.status_disputa, StatusDisputa::Concluida);
    }

    #[test]
    fn numeric_coercion_defaults_to_zero() {
        assert_eq!(
            FieldValue::number_from_str("not a number"),
            FieldValue::Number(0.0)
        );
        assert_eq!(FieldValue::number_from_str(" 12.5 "), FieldValue::Number(12.5));
    }

    #[test]
    fn date_coercion_yields_unset_on_failure() {
        assert_eq!(FieldValue::date_from_str(""), FieldValue::Date(None));
        assert_eq!(
            FieldValue::date_from_str("2024-02-29"),
            FieldValue::Date(date(2024, 2, 29))
        );
    }

    #[test]
    fn negative_counts_are_accepted_as_is() {
        let record = BiddingRecord::template();
        let updated = RecordService::apply_field_change(
            &record,
            "itensSolicitados",
            FieldValue::Number(-3.0),
        );
        assert_eq!(updated.itens_solicitados, -3);
        // Negative denominator hits the zero-guard, not a NaN.
        assert_eq!(updated.percent_itens_fracassados, 0.0);
    }
}
