//! Comparación de periodos académicos.
//!
//! Un periodo se codifica como `YYYYS?` (ej: "202120"): los 4 primeros
//! caracteres son el año y el 5º el semestre. El resto del token se ignora.

use crate::error::{ProgressError, Result};
use std::fmt;
use std::str::FromStr;

/// Periodo (año, semestre). El orden derivado compara año y luego semestre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    pub year: i32,
    pub semester: u8,
}

impl Period {
    pub fn new(year: i32, semester: u8) -> Self {
        Period { year, semester }
    }

    /// Parsea un token por posición fija. No valida rangos, pero un año o
    /// semestre no numérico es un error (no se coacciona a 0).
    pub fn parse(token: &str) -> Result<Period> {
        let year_part = token
            .get(0..4)
            .ok_or_else(|| invalid(token, "se esperaban al menos 5 caracteres"))?;
        let semester_part = token
            .get(4..5)
            .ok_or_else(|| invalid(token, "falta el dígito de semestre"))?;

        let year = year_part
            .parse::<i32>()
            .map_err(|e| invalid(token, format!("año '{}' no numérico: {}", year_part, e)))?;
        let semester = semester_part.parse::<u8>().map_err(|e| {
            invalid(token, format!("semestre '{}' no numérico: {}", semester_part, e))
        })?;

        Ok(Period { year, semester })
    }

    /// Límite superior exclusivo: el mismo periodo NO es anterior.
    pub fn is_before(&self, limit: &Period) -> bool {
        self.year < limit.year || (self.year == limit.year && self.semester < limit.semester)
    }
}

impl FromStr for Period {
    type Err = ProgressError;

    fn from_str(s: &str) -> Result<Self> {
        Period::parse(s)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{}", self.year, self.semester)
    }
}

fn invalid(token: &str, reason: impl Into<String>) -> ProgressError {
    ProgressError::InvalidPeriod { token: token.to_string(), reason: reason.into() }
}

/// `true` si `record_period` es estrictamente anterior a `limit_period`.
pub fn is_before(record_period: &str, limit_period: &str) -> Result<bool> {
    let record = Period::parse(record_period)?;
    let limit = Period::parse(limit_period)?;
    Ok(record.is_before(&limit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_by_position() {
        let p = Period::parse("202120").unwrap();
        assert_eq!(p, Period::new(2021, 2));
        // sólo se miran los 5 primeros caracteres
        assert_eq!(Period::parse("20221").unwrap(), Period::new(2022, 1));
    }

    #[test]
    fn earlier_year_is_before() {
        assert!(is_before("202120", "202210").unwrap());
        assert!(!is_before("202310", "202220").unwrap());
    }

    #[test]
    fn same_year_compares_semester() {
        assert!(is_before("202210", "202220").unwrap());
        assert!(!is_before("202220", "202210").unwrap());
    }

    #[test]
    fn same_period_is_not_before() {
        assert!(!is_before("202220", "202220").unwrap());
    }

    #[test]
    fn display_matches_input_token() {
        assert_eq!(Period::new(2022, 2).to_string(), "20222");
        assert_eq!(Period::parse("202120").unwrap().to_string(), "20212");
    }

    #[test]
    fn malformed_tokens_fail() {
        assert!(matches!(Period::parse("2021"), Err(ProgressError::InvalidPeriod { .. })));
        assert!(matches!(Period::parse("20X120"), Err(ProgressError::InvalidPeriod { .. })));
        assert!(matches!(Period::parse("2021S0"), Err(ProgressError::InvalidPeriod { .. })));
        assert!(is_before("202120", "").is_err());
    }
}
