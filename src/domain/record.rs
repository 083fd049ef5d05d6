//! Domain model for a tracked procurement bidding process.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::status::StatusDisputa;

/// Default goal (in days) for the indicator lead time on new records.
pub const DEFAULT_META_DIAS: i64 = 25;

/// A single bidding process ("licitação") and its derived metrics.
///
/// Raw fields are user-supplied; the fields under the "derived" comment are
/// never edited directly and must always equal what
/// [`crate::metrics::refresh_derived`] produces from the raw fields.
/// Wire names match the persisted collection format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BiddingRecord {
    pub id: Uuid,
    pub entidade: String,
    pub num_disputa: String,
    pub num_processo: String,
    pub data_disputa: Option<NaiveDate>,
    pub mes: String,
    pub ano: String,
    pub objeto: String,
    pub categoria: String,
    pub responsavel_tecnico: String,
    pub gestor_imediato: String,
    pub regulamento: String,
    pub registro_preco: bool,
    pub minuta: bool,
    pub tipo: String,
    pub meta_dias: i64,
    pub status_disputa: StatusDisputa,
    pub participantes: i64,
    pub valor_referencia: f64,
    pub valor_disputa: f64,
    pub itens_solicitados: i64,
    pub itens_licitados: i64,
    pub itens_fracassados: i64,
    pub status_sucesso: String,
    pub observacao: String,
    pub motivo_cancelamento: String,
    pub inicio_suprimentos: Option<NaiveDate>,
    #[serde(rename = "inicioCCA")]
    pub inicio_cca: Option<NaiveDate>,
    pub publicacao: Option<NaiveDate>,
    pub resultado_final: Option<NaiveDate>,
    // Derived fields below. Recomputed atomically on every raw-field change.
    pub valor_saving: f64,
    pub saving_percent: f64,
    pub percent_itens_fracassados: f64,
    pub dias_inicio_licitacao: i64,
    #[serde(rename = "diasInicioCCAPublicacao")]
    pub dias_inicio_cca_publicacao: i64,
    pub dias_publicacao_disputa: i64,
    pub lead_time_orquestra: i64,
    pub inicio_suprimentos_final: i64,
    pub lead_time_indicador: i64,
    pub cca_final: i64,
}

/// Wire-name field order of [`BiddingRecord`], used as the CSV header.
/// Must stay aligned with the struct declaration above.
pub const WIRE_FIELDS: &[&str] = &[
    "id",
    "entidade",
    "numDisputa",
    "numProcesso",
    "dataDisputa",
    "mes",
    "ano",
    "objeto",
    "categoria",
    "responsavelTecnico",
    "gestorImediato",
    "regulamento",
    "registroPreco",
    "minuta",
    "tipo",
    "metaDias",
    "statusDisputa",
    "participantes",
    "valorReferencia",
    "valorDisputa",
    "itensSolicitados",
    "itensLicitados",
    "itensFracassados",
    "statusSucesso",
    "observacao",
    "motivoCancelamento",
    "inicioSuprimentos",
    "inicioCCA",
    "publicacao",
    "resultadoFinal",
    "valorSaving",
    "savingPercent",
    "percentItensFracassados",
    "diasInicioLicitacao",
    "diasInicioCCAPublicacao",
    "diasPublicacaoDisputa",
    "leadTimeOrquestra",
    "inicioSuprimentosFinal",
    "leadTimeIndicador",
    "ccaFinal",
];

impl BiddingRecord {
    /// Blank template for a new entry: current year, 25-day goal, PUBLICADA.
    pub fn template() -> Self {
        Self {
            id: Uuid::new_v4(),
            entidade: String::new(),
            num_disputa: String::new(),
            num_processo: String::new(),
            data_disputa: None,
            mes: String::new(),
            ano: Utc::now().year().to_string(),
            objeto: String::new(),
            categoria: String::new(),
            responsavel_tecnico: String::new(),
            gestor_imediato: String::new(),
            regulamento: String::new(),
            registro_preco: false,
            minuta: false,
            tipo: String::new(),
            meta_dias: DEFAULT_META_DIAS,
            status_disputa: StatusDisputa::Publicada,
            participantes: 0,
            valor_referencia: 0.0,
            valor_disputa: 0.0,
            itens_solicitados: 0,
            itens_licitados: 0,
            itens_fracassados: 0,
            status_sucesso: String::new(),
            observacao: String::new(),
            motivo_cancelamento: String::new(),
            inicio_suprimentos: None,
            inicio_cca: None,
            publicacao: None,
            resultado_final: None,
            valor_saving: 0.0,
            saving_percent: 0.0,
            percent_itens_fracassados: 0.0,
            dias_inicio_licitacao: 0,
            dias_inicio_cca_publicacao: 0,
            dias_publicacao_disputa: 0,
            lead_time_orquestra: 0,
            inicio_suprimentos_final: 0,
            lead_time_indicador: 0,
            cca_final: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_has_default_goal_and_status() {
        let record = BiddingRecord::template();
        assert_eq!(record.meta_dias, DEFAULT_META_DIAS);
        assert_eq!(record.status_disputa, StatusDisputa::Publicada);
        assert_eq!(record.ano, Utc::now().year().to_string());
        assert!(record.inicio_cca.is_none());
    }

    #[test]
    fn wire_field_order_matches_serialized_key_order() {
        let record = BiddingRecord::template();
        let json = serde_json::to_string(&record).unwrap();
        let mut cursor = 0;
        for field in WIRE_FIELDS {
            let key = format!("\"{field}\":");
            let at = json[cursor..]
                .find(&key)
                .unwrap_or_else(|| panic!("field `{field}` missing or out of order"));
            cursor += at + key.len();
        }
    }
}
