//! Rental due-date rule.

use chrono::Duration;

use crate::types::Timestamp;

/// Rental window in days for new releases (lançamentos).
pub const PRAZO_LANCAMENTO_DIAS: i64 = 2;

/// Rental window in days for catalogue titles.
pub const PRAZO_CATALOGO_DIAS: i64 = 3;

/// Compute the return due date for a rental.
///
/// New releases rent for 2 days, everything else for 3. The movie flag
/// is consulted once, at rental creation; updates never recompute the
/// due date from the movie.
pub fn data_devolucao(data_locacao: Timestamp, lancamento: bool) -> Timestamp {
    let prazo = if lancamento {
        PRAZO_LANCAMENTO_DIAS
    } else {
        PRAZO_CATALOGO_DIAS
    };
    data_locacao + Duration::days(prazo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_lancamento_rents_for_two_days() {
        let rented = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let due = data_devolucao(rented, true);
        assert_eq!(due, Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap());
        assert_eq!((due - rented).num_days(), 2);
    }

    #[test]
    fn test_catalogue_title_rents_for_three_days() {
        let rented = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let due = data_devolucao(rented, false);
        assert_eq!(due, Utc.with_ymd_and_hms(2024, 1, 4, 0, 0, 0).unwrap());
        assert_eq!((due - rented).num_days(), 3);
    }

    #[test]
    fn test_time_of_day_is_preserved() {
        let rented = Utc.with_ymd_and_hms(2024, 6, 15, 18, 30, 45).unwrap();
        let due = data_devolucao(rented, true);
        assert_eq!(due, Utc.with_ymd_and_hms(2024, 6, 17, 18, 30, 45).unwrap());
    }
}
