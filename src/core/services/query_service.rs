//! Filtering, sorting, and dashboard aggregation over record snapshots.

use std::cmp::Ordering;

use crate::domain::{BiddingRecord, StatusDisputa};

/// Sort direction for table views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Tracks the active sort column and direction for a table view.
///
/// Choosing the active field again toggles the direction; choosing a new
/// field resets it to ascending.
#[derive(Debug, Clone)]
pub struct SortState {
    pub field: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn choose(&mut self, field: &str) {
        if self.field == field {
            self.direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.field = field.to_string();
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Per-status record count for the dashboard histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCount {
    pub status: StatusDisputa,
    pub count: usize,
}

/// Record count per entity name, for the top-volume ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntidadeCount {
    pub entidade: String,
    pub count: usize,
}

/// Aggregated figures backing the summary dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total: usize,
    pub concluidas: usize,
    pub total_saving: f64,
    pub avg_lead_time: f64,
    /// Statuses with zero records are excluded; order follows the enum.
    pub status_counts: Vec<StatusCount>,
    /// Top five entities by record count, ties in first-encounter order.
    pub top_entidades: Vec<EntidadeCount>,
}

/// Read-only queries over the current record snapshot.
pub struct QueryService;

impl QueryService {
    /// Case-insensitive substring filter over entidade, numDisputa,
    /// numProcesso, and objeto. A record matches if any one of the four
    /// contains the search text; an empty search matches everything.
    pub fn filter<'a>(records: &'a [BiddingRecord], search: &str) -> Vec<&'a BiddingRecord> {
        let needle = search.to_lowercase();
        records
            .iter()
            .filter(|record| {
                record.entidade.to_lowercase().contains(&needle)
                    || record.num_disputa.to_lowercase().contains(&needle)
                    || record.num_processo.to_lowercase().contains(&needle)
                    || record.objeto.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Stable sort by a single wire-named field. Text compares
    /// case-insensitively, numbers by value; incomparable pairs (and unknown
    /// field names) keep their relative order.
    pub fn sort<'a>(
        mut rows: Vec<&'a BiddingRecord>,
        field: &str,
        direction: SortDirection,
    ) -> Vec<&'a BiddingRecord> {
        rows.sort_by(|a, b| {
            let ordering = compare_field(a, b, field);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        rows
    }

    /// Dashboard aggregation over the full record set (not a filtered view).
    /// Empty sets produce zeros, never NaN.
    pub fn aggregate(records: &[BiddingRecord]) -> DashboardSummary {
        let total = records.len();
        let concluidas = records
            .iter()
            .filter(|r| r.status_disputa == StatusDisputa::Concluida)
            .count();
        let total_saving = records.iter().map(|r| r.valor_saving).sum();
        let avg_lead_time = if total > 0 {
            records.iter().map(|r| r.lead_time_indicador as f64).sum::<f64>() / total as f64
        } else {
            0.0
        };

        let status_counts = StatusDisputa::ALL
            .into_iter()
            .map(|status| StatusCount {
                status,
                count: records.iter().filter(|r| r.status_disputa == status).count(),
            })
            .filter(|entry| entry.count > 0)
            .collect();

        let mut top_entidades: Vec<EntidadeCount> = Vec::new();
        for record in records {
            match top_entidades
                .iter_mut()
                .find(|entry| entry.entidade == record.entidade)
            {
                Some(entry) => entry.count += 1,
                None => top_entidades.push(EntidadeCount {
                    entidade: record.entidade.clone(),
                    count: 1,
                }),
            }
        }
        // Stable sort keeps first-encounter order among tied counts.
        top_entidades.sort_by(|a, b| b.count.cmp(&a.count));
        top_entidades.truncate(5);

        DashboardSummary {
            total,
            concluidas,
            total_saving,
            avg_lead_time,
            status_counts,
            top_entidades,
        }
    }
}

/// A record field projected into a sortable value.
enum SortValue {
    Text(String),
    Number(f64),
    Unordered,
}

fn compare_field(a: &BiddingRecord, b: &BiddingRecord, field: &str) -> Ordering {
    match (sort_value(a, field), sort_value(b, field)) {
        (SortValue::Text(left), SortValue::Text(right)) => {
            left.to_lowercase().cmp(&right.to_lowercase())
        }
        (SortValue::Number(left), SortValue::Number(right)) => {
            left.partial_cmp(&right).unwrap_or(Ordering::Equal)
        }
        _ => Ordering::Equal,
    }
}

fn sort_value(record: &BiddingRecord, field: &str) -> SortValue {
    use SortValue::{Number, Text};
    match field {
        "id" => Text(record.id.to_string()),
        "entidade" => Text(record.entidade.clone()),
        "numDisputa" => Text(record.num_disputa.clone()),
        "numProcesso" => Text(record.num_processo.clone()),
        "mes" => Text(record.mes.clone()),
        "ano" => Text(record.ano.clone()),
        "objeto" => Text(record.objeto.clone()),
        "categoria" => Text(record.categoria.clone()),
        "responsavelTecnico" => Text(record.responsavel_tecnico.clone()),
        "gestorImediato" => Text(record.gestor_imediato.clone()),
        "regulamento" => Text(record.regulamento.clone()),
        "tipo" => Text(record.tipo.clone()),
        "statusDisputa" => Text(record.status_disputa.to_string()),
        "statusSucesso" => Text(record.status_sucesso.clone()),
        "observacao" => Text(record.observacao.clone()),
        "motivoCancelamento" => Text(record.motivo_cancelamento.clone()),
        // ISO-rendered dates order chronologically as text; unset sorts first.
        "dataDisputa" => Text(iso_date(record.data_disputa)),
        "inicioSuprimentos" => Text(iso_date(record.inicio_suprimentos)),
        "inicioCCA" => Text(iso_date(record.inicio_cca)),
        "publicacao" => Text(iso_date(record.publicacao)),
        "resultadoFinal" => Text(iso_date(record.resultado_final)),
        "metaDias" => Number(record.meta_dias as f64),
        "participantes" => Number(record.participantes as f64),
        "valorReferencia" => Number(record.valor_referencia),
        "valorDisputa" => Number(record.valor_disputa),
        "valorSaving" => Number(record.valor_saving),
        "savingPercent" => Number(record.saving_percent),
        "itensSolicitados" => Number(record.itens_solicitados as f64),
        "itensLicitados" => Number(record.itens_licitados as f64),
        "itensFracassados" => Number(record.itens_fracassados as f64),
        "percentItensFracassados" => Number(record.percent_itens_fracassados),
        "diasInicioLicitacao" => Number(record.dias_inicio_licitacao as f64),
        "diasInicioCCAPublicacao" => Number(record.dias_inicio_cca_publicacao as f64),
        "diasPublicacaoDisputa" => Number(record.dias_publicacao_disputa as f64),
        "leadTimeOrquestra" => Number(record.lead_time_orquestra as f64),
        "inicioSuprimentosFinal" => Number(record.inicio_suprimentos_final as f64),
        "leadTimeIndicador" => Number(record.lead_time_indicador as f64),
        "ccaFinal" => Number(record.cca_final as f64),
        _ => SortValue::Unordered,
    }
}

fn iso_date(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}
