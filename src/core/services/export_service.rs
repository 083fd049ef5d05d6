//! CSV export of record snapshots.

use chrono::NaiveDate;

use crate::domain::{BiddingRecord, WIRE_FIELDS};

/// Serializes record snapshots into downloadable tabular text.
pub struct ExportService;

impl ExportService {
    /// Renders the records as CSV text. An empty input produces an empty
    /// string (a no-op export, not an error).
    ///
    /// The header row is the declared wire-field order. String-typed values
    /// (including dates and the status label) are double-quoted with inner
    /// quotes doubled; numbers and flags render unquoted. Embedded newlines
    /// inside text fields are not escaped; this mirrors the historical
    /// export format and can split rows for multi-line observations.
    pub fn to_csv<'a, I>(records: I) -> String
    where
        I: IntoIterator<Item = &'a BiddingRecord>,
    {
        let mut rows: Vec<String> = records
            .into_iter()
            .map(|record| csv_fields(record).join(","))
            .collect();
        if rows.is_empty() {
            return String::new();
        }
        rows.insert(0, WIRE_FIELDS.join(","));
        rows.join("\n")
    }

    /// Date-stamped file name for an export artifact, e.g.
    /// `relatorio_licitacoes_2024-05-01.csv`.
    pub fn export_filename(prefix: &str, date: NaiveDate) -> String {
        format!("{prefix}_{date}.csv")
    }
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn quoted_date(value: Option<NaiveDate>) -> String {
    quoted(&value.map(|d| d.to_string()).unwrap_or_default())
}

/// One rendered value per [`WIRE_FIELDS`] entry, in the same order.
fn csv_fields(record: &BiddingRecord) -> Vec<String> {
    vec![
        quoted(&record.id.to_string()),
        quoted(&record.entidade),
        quoted(&record.num_disputa),
        quoted(&record.num_processo),
        quoted_date(record.data_disputa),
        quoted(&record.mes),
        quoted(&record.ano),
        quoted(&record.objeto),
        quoted(&record.categoria),
        quoted(&record.responsavel_tecnico),
        quoted(&record.gestor_imediato),
        quoted(&record.regulamento),
        record.registro_preco.to_string(),
        record.minuta.to_string(),
        quoted(&record.tipo),
        record.meta_dias.to_string(),
        quoted(record.status_disputa.label()),
        record.participantes.to_string(),
        record.valor_referencia.to_string(),
        record.valor_disputa.to_string(),
        record.itens_solicitados.to_string(),
        record.itens_licitados.to_string(),
        record.itens_fracassados.to_string(),
        quoted(&record.status_sucesso),
        quoted(&record.observacao),
        quoted(&record.motivo_cancelamento),
        quoted_date(record.inicio_suprimentos),
        quoted_date(record.inicio_cca),
        quoted_date(record.publicacao),
        quoted_date(record.resultado_final),
        record.valor_saving.to_string(),
        record.saving_percent.to_string(),
        record.percent_itens_fracassados.to_string(),
        record.dias_inicio_licitacao.to_string(),
        record.dias_inicio_cca_publicacao.to_string(),
        record.dias_publicacao_disputa.to_string(),
        record.lead_time_orquestra.to_string(),
        record.inicio_suprimentos_final.to_string(),
        record.lead_time_indicador.to_string(),
        record.cca_final.to_string(),
    ]
}
