//! Pure row-extraction logic for the movie CSV import.
//!
//! This module has no I/O: the HTTP handler receives the uploaded bytes
//! and hands them here. Each row yields one movie record. The first
//! column must parse as an integer id or the row is skipped entirely
//! (which also drops a header line); a malformed value in any other
//! column aborts the whole import, so a bad file never half-loads.

use serde::Serialize;

use crate::types::DbId;

/// File extension accepted by the import endpoint.
pub const EXTENSAO_IMPORTACAO: &str = ".csv";

/// Column layout of an import file.
///
/// `id,titulo,lancamento,classificacao_indicativa` — no header required;
/// a header line is skipped by the id rule.
const COLUNA_ID: usize = 0;
const COLUNA_TITULO: usize = 1;
const COLUNA_LANCAMENTO: usize = 2;
const COLUNA_CLASSIFICACAO: usize = 3;

/// A movie record extracted from one import row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilmeImportado {
    pub id: DbId,
    pub titulo: String,
    pub lancamento: bool,
    pub classificacao_indicativa: i32,
}

/// Failure while extracting rows from an import file.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("arquivo CSV malformado: {0}")]
    Csv(#[from] csv::Error),

    #[error("linha {linha}: coluna {coluna} ausente")]
    ColunaAusente { linha: usize, coluna: usize },

    #[error("linha {linha}: valor '{valor}' inválido para o campo {campo}")]
    CampoInvalido {
        linha: usize,
        campo: &'static str,
        valor: String,
    },
}

/// Whether an uploaded filename is accepted by the import endpoint.
pub fn formato_suportado(nome_arquivo: &str) -> bool {
    nome_arquivo.ends_with(EXTENSAO_IMPORTACAO)
}

/// Extract movie records from raw CSV bytes.
///
/// Rows whose id column is not an integer are skipped; every other
/// malformed field fails the whole batch.
pub fn extrair_filmes(dados: &[u8]) -> Result<Vec<FilmeImportado>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(dados);

    let mut filmes = Vec::new();

    for (indice, registro) in reader.records().enumerate() {
        let registro = registro?;
        let linha = indice + 1;

        // An unparseable id skips the row; this is how header lines and
        // stray annotations in hand-edited files are tolerated.
        let id = match coluna(&registro, linha, COLUNA_ID) {
            Ok(valor) => match valor.trim().parse::<DbId>() {
                Ok(id) => id,
                Err(_) => continue,
            },
            Err(_) => continue,
        };

        let titulo = coluna(&registro, linha, COLUNA_TITULO)?.trim().to_string();

        let lancamento = parse_bool(coluna(&registro, linha, COLUNA_LANCAMENTO)?, linha)?;

        let classificacao = coluna(&registro, linha, COLUNA_CLASSIFICACAO)?;
        let classificacao_indicativa =
            classificacao
                .trim()
                .parse::<i32>()
                .map_err(|_| ImportError::CampoInvalido {
                    linha,
                    campo: "classificacao_indicativa",
                    valor: classificacao.to_string(),
                })?;

        filmes.push(FilmeImportado {
            id,
            titulo,
            lancamento,
            classificacao_indicativa,
        });
    }

    Ok(filmes)
}

fn coluna<'r>(
    registro: &'r csv::StringRecord,
    linha: usize,
    coluna: usize,
) -> Result<&'r str, ImportError> {
    registro
        .get(coluna)
        .ok_or(ImportError::ColunaAusente { linha, coluna })
}

/// Case-insensitive boolean, matching how spreadsheet exports write
/// `True`/`FALSE` cells.
fn parse_bool(valor: &str, linha: usize) -> Result<bool, ImportError> {
    match valor.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ImportError::CampoInvalido {
            linha,
            campo: "lancamento",
            valor: valor.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_all_rows() {
        let csv = b"1,Duna,true,14\n2,Amadeus,false,12\n";
        let filmes = extrair_filmes(csv).unwrap();
        assert_eq!(filmes.len(), 2);
        assert_eq!(
            filmes[0],
            FilmeImportado {
                id: 1,
                titulo: "Duna".to_string(),
                lancamento: true,
                classificacao_indicativa: 14,
            }
        );
        assert_eq!(filmes[1].id, 2);
        assert!(!filmes[1].lancamento);
    }

    #[test]
    fn test_header_line_is_skipped_by_the_id_rule() {
        let csv = b"id,titulo,lancamento,classificacao\n5,Duna,true,14\n";
        let filmes = extrair_filmes(csv).unwrap();
        assert_eq!(filmes.len(), 1);
        assert_eq!(filmes[0].id, 5);
    }

    #[test]
    fn test_row_with_non_integer_id_is_skipped() {
        let csv = b"abc,Duna,true,14\n7,Amadeus,false,12\n";
        let filmes = extrair_filmes(csv).unwrap();
        assert_eq!(filmes.len(), 1);
        assert_eq!(filmes[0].id, 7);
    }

    #[test]
    fn test_last_row_is_included() {
        // No trailing newline; the final populated row still counts.
        let csv = b"1,Duna,true,14\n2,Amadeus,false,12";
        let filmes = extrair_filmes(csv).unwrap();
        assert_eq!(filmes.len(), 2);
        assert_eq!(filmes[1].titulo, "Amadeus");
    }

    #[test]
    fn test_title_is_trimmed() {
        let csv = b"1,  Duna  ,true,14\n";
        let filmes = extrair_filmes(csv).unwrap();
        assert_eq!(filmes[0].titulo, "Duna");
    }

    #[test]
    fn test_boolean_is_case_insensitive() {
        let csv = b"1,Duna,True,14\n2,Amadeus,FALSE,12\n";
        let filmes = extrair_filmes(csv).unwrap();
        assert!(filmes[0].lancamento);
        assert!(!filmes[1].lancamento);
    }

    #[test]
    fn test_bad_boolean_fails_the_batch() {
        let csv = b"1,Duna,sim,14\n";
        let err = extrair_filmes(csv).unwrap_err();
        assert!(matches!(
            err,
            ImportError::CampoInvalido {
                linha: 1,
                campo: "lancamento",
                ..
            }
        ));
    }

    #[test]
    fn test_bad_rating_fails_the_batch() {
        let csv = b"1,Duna,true,livre\n";
        let err = extrair_filmes(csv).unwrap_err();
        assert!(matches!(
            err,
            ImportError::CampoInvalido {
                campo: "classificacao_indicativa",
                ..
            }
        ));
    }

    #[test]
    fn test_missing_column_fails_the_batch() {
        let csv = b"1,Duna,true\n";
        let err = extrair_filmes(csv).unwrap_err();
        assert!(matches!(
            err,
            ImportError::ColunaAusente { linha: 1, coluna: 3 }
        ));
    }

    #[test]
    fn test_empty_input_yields_no_rows() {
        let filmes = extrair_filmes(b"").unwrap();
        assert!(filmes.is_empty());
    }

    #[test]
    fn test_formato_suportado() {
        assert!(formato_suportado("filmes.csv"));
        assert!(!formato_suportado("filmes.xlsx"));
        assert!(!formato_suportado("filmes.csv.xlsx"));
        assert!(!formato_suportado("filmes"));
    }
}
